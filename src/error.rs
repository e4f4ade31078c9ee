//! Error types shared across the crate.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised while acquiring or driving a capability source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The frame source could not be opened. Fatal at startup.
    #[error("Failed to open capture device '{device}': {reason}")]
    DeviceInit { device: String, reason: String },

    #[error("Malformed landmark record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Errors that can occur during snapshot serialization
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Top-level error for running a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
