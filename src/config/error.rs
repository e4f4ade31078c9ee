//! Configuration error types.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// A single rule broken by a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("countdown_ticks must be at least 1")]
    NoCountdown,

    #[error("{name} must be longer than zero")]
    ZeroInterval { name: &'static str },

    #[error("fast_tick ({fast:?}) must be shorter than slow_tick ({slow:?})")]
    FastTickTooSlow { fast: Duration, slow: Duration },
}

/// Errors that can occur when building or loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every violation found, not just the first
    #[error("Invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),

    #[error("Failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
