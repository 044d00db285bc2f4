//! Reads Cartesian-sum test cases from stdin, heap sorts each one and prints
//! how many matched their expected answer.

mod logging;

use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use disjoint::harness::{self, HarnessError};

use logging::LogFormat;

#[derive(Debug, Parser)]
#[command(about = "Check heap-sorted Cartesian sums against expected answers read from stdin")]
struct Cli {
    /// Format of diagnostics written to stderr.
    #[arg(long, value_enum, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
    /// Only print the final summary line.
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<harness::Report, HarnessError> {
    let cases = harness::parse_cases(io::stdin().lock())?;
    tracing::info!(cases = cases.len(), "read test cases");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = harness::run_cases(&cases, &mut out, cli.quiet)?;
    out.flush()?;
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.log_format) {
        eprintln!("failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(report) => {
            tracing::info!(passed = report.passed, failed = report.failed(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "harness failed");
            ExitCode::FAILURE
        }
    }
}
