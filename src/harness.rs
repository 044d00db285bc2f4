//! Batch checker for the Cartesian-sum heap sort.
//!
//! Input is a whitespace separated stream of test cases. Each case is a
//! length `n` followed by three runs of `n` integers: the first array, the
//! second array, and the expected answer, which is the `n` smallest sums
//! `a[i] + b[j]` in ascending order.
//!
//! ```text
//! 5
//! 7 3 1 5 9
//! 10 6 8 2 4
//! 3 5 5 7 7
//! ```
//!
//! A case cut short by the end of input ends the stream and is not counted.

use std::{
    fmt,
    io::{self, BufRead, Read, Write},
    num::ParseIntError,
};

use thiserror::Error;

use crate::heapsort::smallest_sums;

/// Errors raised while reading or checking test cases.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read or write test data: {0}")]
    Io(#[from] io::Error),
    #[error("`{token}` is not an integer: {source}")]
    ParseInt {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("`{token}` is not a valid array length")]
    InvalidLength { token: String },
    #[error("case {case}: a Cartesian sum overflows a 64-bit integer")]
    Overflow { case: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCase {
    pub first: Vec<i64>,
    pub second: Vec<i64>,
    pub expected: Vec<i64>,
}

/// Result of checking one case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub actual: Vec<i64>,
    pub passed: bool,
}

impl TestCase {
    pub fn check(&self, case: usize) -> Result<Outcome, HarnessError> {
        let actual = smallest_sums(&self.first, &self.second, self.expected.len())
            .ok_or(HarnessError::Overflow { case })?;
        let passed = actual == self.expected;
        Ok(Outcome { actual, passed })
    }
}

/// Pass/fail tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub total: usize,
}

impl Report {
    #[inline]
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} cases passed", self.passed, self.total)
    }
}

struct Numbers<'a>(&'a [i64]);

impl fmt::Display for Numbers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

/// Parses every complete case in `input`.
pub fn parse_cases<R: BufRead>(mut input: R) -> Result<Vec<TestCase>, HarnessError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let mut tokens = text.split_whitespace();

    let mut cases = Vec::new();
    while let Some(token) = tokens.next() {
        let len = parse_int(token)
            .ok()
            .and_then(|len| usize::try_from(len).ok())
            .ok_or_else(|| HarnessError::InvalidLength {
                token: token.to_owned(),
            })?;

        let mut runs = [Vec::new(), Vec::new(), Vec::new()];
        for run in runs.iter_mut() {
            run.reserve(len.min(text.len()));
            for token in tokens.by_ref().take(len) {
                run.push(parse_int(token)?);
            }
        }

        if runs.iter().any(|run| run.len() != len) {
            tracing::warn!(len, "input ended in the middle of a test case");
            break;
        }

        let [first, second, expected] = runs;
        cases.push(TestCase {
            first,
            second,
            expected,
        });
    }

    Ok(cases)
}

fn parse_int(token: &str) -> Result<i64, HarnessError> {
    token.parse().map_err(|source| HarnessError::ParseInt {
        token: token.to_owned(),
        source,
    })
}

/// Checks every case, echoing expected answers to `out` unless `quiet`, and
/// finishes with the summary line. Mismatches are logged, not returned.
pub fn run_cases<W: Write>(
    cases: &[TestCase],
    out: &mut W,
    quiet: bool,
) -> Result<Report, HarnessError> {
    let mut report = Report::default();

    for (case, test) in cases.iter().enumerate() {
        if !quiet {
            writeln!(out, "{}", Numbers(&test.expected))?;
        }

        let outcome = test.check(case)?;
        report.total += 1;
        if outcome.passed {
            report.passed += 1;
        } else {
            tracing::error!(
                case,
                expected = %Numbers(&test.expected),
                actual = %Numbers(&outcome.actual),
                "test case failure"
            );
        }
    }

    writeln!(out, "{}", report)?;
    Ok(report)
}
