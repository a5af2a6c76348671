//! The closed set of tools the executor understands.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ToolError;

/// A known tool.
///
/// Adding a tool means adding a variant here; the compiler then points at
/// every match that needs a new arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// `apps.open`: launch an application by name.
    OpenApp,
    /// `filesystem.search`: find files on the Desktop by extension.
    FilesystemSearch,
    /// `system.info`: report the OS version banner.
    SystemInfo,
}

/// How the host runs a tool's command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Run the launcher and check only that it exited cleanly.
    ///
    /// The launched program keeps running on its own; its output is not
    /// captured.
    Launch,
    /// Wait for the process to exit and capture stdout and stderr.
    Capture,
}

impl ToolKind {
    /// Every tool, in listing order.
    pub const ALL: [ToolKind; 3] = [
        ToolKind::OpenApp,
        ToolKind::FilesystemSearch,
        ToolKind::SystemInfo,
    ];

    /// The wire identifier.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::OpenApp => "apps.open",
            ToolKind::FilesystemSearch => "filesystem.search",
            ToolKind::SystemInfo => "system.info",
        }
    }

    pub fn mode(self) -> ExecutionMode {
        match self {
            ToolKind::OpenApp => ExecutionMode::Launch,
            ToolKind::FilesystemSearch | ToolKind::SystemInfo => ExecutionMode::Capture,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolKind::OpenApp => "Open an application by name",
            ToolKind::FilesystemSearch => {
                "Search the Desktop recursively for files with the given extension"
            }
            ToolKind::SystemInfo => "Report the operating system version",
        }
    }

    /// Arguments the tool reads from the action's argument bag.
    pub fn args(self) -> &'static [ArgSpec] {
        match self {
            ToolKind::OpenApp => &[ArgSpec {
                name: "app_name",
                required: true,
            }],
            ToolKind::FilesystemSearch => &[ArgSpec {
                name: "extension",
                required: false,
            }],
            ToolKind::SystemInfo => &[],
        }
    }

    pub fn spec(self) -> ToolSpec {
        ToolSpec {
            name: self.name(),
            description: self.description(),
            mode: self.mode(),
            args: self.args(),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ToolError::UnsupportedTool(s.to_string()))
    }
}

/// One argument a tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArgSpec {
    pub name: &'static str,
    pub required: bool,
}

/// A tool definition exposed to clients for discovery.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub mode: ExecutionMode,
    pub args: &'static [ArgSpec],
}
