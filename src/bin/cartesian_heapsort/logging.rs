//! Structured logging for the harness.
//!
//! Diagnostics go to `stderr` so the pass/fail output on `stdout` stays
//! clean. The level comes from `RUST_LOG` and defaults to `warn`.

use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::{filter::LevelFilter, fmt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid `RUST_LOG` directive: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::FromEnvError),
    #[error("failed to install tracing subscriber: {0}")]
    InstallFailed(#[from] tracing_subscriber::util::TryInitError),
}

pub fn init_logging(format: LogFormat) -> Result<(), LoggingError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    match format {
        LogFormat::Human => builder.finish().try_init()?,
        LogFormat::Json => builder.json().finish().try_init()?,
    }

    Ok(())
}
