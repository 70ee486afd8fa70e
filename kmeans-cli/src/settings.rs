//! Validation of command-line values into run settings
//! Positional values arrive as raw strings so every rejection maps to its
//! own message and exit code instead of clap's generic usage error.

use std::path::PathBuf;

use kmeans::{context::DEFAULT_MAX_ITERATIONS, convergence::Convergence};

use crate::{error::CliError, Args};

/// Validated settings of one run
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub k: usize,
    pub max_iterations: usize,
    pub input: Option<PathBuf>,
    pub convergence: Convergence<f64>,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let k = match args.k.as_deref() {
            Some(raw) => parse_positive(raw).ok_or(CliError::InvalidClusterCount)?,
            None => return Err(CliError::MissingClusterCount),
        };
        let max_iterations = match args.max_iter.as_deref() {
            Some(raw) => parse_positive(raw).ok_or(CliError::InvalidMaxIterations)?,
            None => DEFAULT_MAX_ITERATIONS,
        };
        let convergence = match args.tolerance.as_deref() {
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(epsilon) if epsilon.is_finite() && epsilon >= 0.0 => Convergence::Tolerance(epsilon),
                _ => return Err(CliError::InvalidTolerance),
            },
            None => Convergence::Exact,
        };

        Ok(Self { k: k, max_iterations: max_iterations, input: args.input.clone(), convergence: convergence })
    }
}

/// Integer >= 1 in decimal digits, after optional leading whitespace and one `+`
///
/// Anything after the digits is rejected.
fn parse_positive(raw: &str) -> Option<usize> {
    let raw = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|value| *value >= 1)
}
