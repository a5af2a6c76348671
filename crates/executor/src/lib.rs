//! Tool executor: maps a tool identifier and argument bag to one host operation.
//!
//! The executor knows nothing about HTTP or batching. It resolves a tool
//! name to a [`ToolKind`], parses the argument bag into that tool's typed
//! arguments, runs the matching [`HostCommand`] through a [`Host`], and
//! returns either the textual output or a [`ToolError`].
//!
//! # Tools
//!
//! | Identifier          | Arguments              | Mode    |
//! |---------------------|------------------------|---------|
//! | `apps.open`         | `app_name` (required)  | launch  |
//! | `filesystem.search` | `extension` (optional) | capture |
//! | `system.info`       | none                   | capture |
//!
//! # Example
//!
//! ```no_run
//! use executor::{Args, Executor};
//!
//! # async fn example() -> executor::Result<()> {
//! let executor = Executor::new();
//! let banner = executor.execute("system.info", &Args::new()).await?;
//! println!("{banner}");
//! # Ok(())
//! # }
//! ```

mod args;
mod error;
mod executor;
mod host;
mod tool;

pub use args::{Args, OpenAppArgs, SearchArgs, SystemInfoArgs, WILDCARD_EXTENSION};
pub use error::{HostError, Result, ToolError};
pub use executor::Executor;
pub use host::{Host, HostCommand, ProcessHost, desktop_dir};
pub use tool::{ArgSpec, ExecutionMode, ToolKind, ToolSpec};
