//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The configuration file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The batch given to `exec` is not valid JSON of the expected shape.
    #[error("invalid batch: {0}")]
    InvalidBatch(#[source] serde_json::Error),

    /// The batch response could not be written.
    #[error("failed to write results: {0}")]
    Output(#[source] serde_json::Error),

    /// The gateway stopped with an error.
    #[error(transparent)]
    Gateway(#[from] gateway::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
