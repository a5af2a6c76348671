//! Executor error types.

use thiserror::Error;

/// Errors raised while running a single tool.
///
/// The `Display` text of each variant is what callers see as the failure
/// description of an action, so messages are written for humans.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument was absent or empty.
    ///
    /// The host is never touched when this is returned.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// The tool identifier does not name a known tool.
    #[error("tool {0} not implemented")]
    UnsupportedTool(String),

    /// The host operation itself failed.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors raised by the host while running an external command.
#[derive(Debug, Error)]
pub enum HostError {
    /// The process could not be started at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran but exited unsuccessfully.
    ///
    /// `detail` holds the exit status followed by whatever the process
    /// printed, so launcher messages like "Unable to find application"
    /// reach the caller unchanged.
    #[error("{program} failed with {detail}")]
    Failed { program: String, detail: String },

    /// Neither `HOME` nor `USERPROFILE` is set to a non-empty value, so the
    /// Desktop cannot be found.
    #[error("home directory not found: neither HOME nor USERPROFILE is set")]
    HomeNotFound,
}

pub type Result<T> = std::result::Result<T, ToolError>;
