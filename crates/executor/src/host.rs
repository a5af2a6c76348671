//! Host boundary: the external commands behind each tool.
//!
//! The executor never spawns processes directly. It builds a [`HostCommand`]
//! and hands it to a [`Host`], so tests can swap in a recorder and the real
//! [`ProcessHost`] stays the only place that touches `tokio::process`.

use std::ffi::OsString;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;

use crate::{ExecutionMode, HostError};

/// An external command: program plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl HostCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Launch an application by name.
    pub fn open_app(app_name: &str) -> Self {
        #[cfg(target_os = "macos")]
        {
            Self::new("open", ["-a", app_name])
        }
        #[cfg(target_os = "windows")]
        {
            Self::new("cmd", ["/C", "start", "", app_name])
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Self::new("gtk-launch", [app_name])
        }
    }

    /// Recursively list files under `root` whose name matches `pattern`.
    pub fn search(root: &Path, pattern: &str) -> Self {
        let root = root.display().to_string();
        #[cfg(target_os = "windows")]
        {
            Self::new("where", ["/R".to_string(), root, pattern.to_string()])
        }
        #[cfg(not(target_os = "windows"))]
        {
            Self::new("find", [root, "-name".to_string(), pattern.to_string()])
        }
    }

    /// Print the OS version banner.
    pub fn system_info() -> Self {
        #[cfg(target_os = "macos")]
        {
            Self::new("sw_vers", Vec::<String>::new())
        }
        #[cfg(target_os = "windows")]
        {
            Self::new("cmd", ["/C", "ver"])
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Self::new("uname", ["-a"])
        }
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Something that can run host commands.
///
/// Every call blocks the caller's task until the command finishes; there
/// is no timeout.
pub trait Host: Send + Sync {
    /// Run a command in the given mode.
    ///
    /// Returns the combined output for [`ExecutionMode::Capture`] and an
    /// empty string for [`ExecutionMode::Launch`].
    fn run(
        &self,
        command: &HostCommand,
        mode: ExecutionMode,
    ) -> impl Future<Output = Result<String, HostError>> + Send;

    /// The directory `filesystem.search` is rooted at.
    fn desktop_dir(&self) -> Result<PathBuf, HostError> {
        desktop_dir()
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessHost;

impl Host for ProcessHost {
    async fn run(&self, command: &HostCommand, mode: ExecutionMode) -> Result<String, HostError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).stdin(Stdio::null());

        let spawn_error = |source: std::io::Error| HostError::Spawn {
            program: command.program.clone(),
            source,
        };

        match mode {
            ExecutionMode::Launch => {
                // Nothing is piped: a launched app that inherits a pipe would
                // otherwise hold the launcher open until the app quits.
                let status = cmd
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
                    .await
                    .map_err(spawn_error)?;
                if !status.success() {
                    return Err(failed(command, status, ""));
                }
                Ok(String::new())
            }
            ExecutionMode::Capture => {
                let output = cmd
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .await
                    .map_err(spawn_error)?;

                let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
                combined.push_str(&String::from_utf8_lossy(&output.stderr));

                if !output.status.success() {
                    return Err(failed(command, output.status, &combined));
                }
                Ok(combined)
            }
        }
    }
}

fn failed(command: &HostCommand, status: ExitStatus, output: &str) -> HostError {
    let output = output.trim();
    let detail = if output.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {output}")
    };
    HostError::Failed {
        program: command.program.clone(),
        detail,
    }
}

/// `$HOME/Desktop`, falling back to `%USERPROFILE%\Desktop`.
pub fn desktop_dir() -> Result<PathBuf, HostError> {
    desktop_dir_from(std::env::var_os("HOME"), std::env::var_os("USERPROFILE"))
}

// Empty variables count as unset; joining onto one would give a relative path.
fn desktop_dir_from(
    home: Option<OsString>,
    user_profile: Option<OsString>,
) -> Result<PathBuf, HostError> {
    home.filter(|h| !h.is_empty())
        .or_else(|| user_profile.filter(|p| !p.is_empty()))
        .map(|home| PathBuf::from(home).join("Desktop"))
        .ok_or(HostError::HomeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_command_never_passes_a_tilde() {
        let cmd = HostCommand::search(Path::new("/Users/me/Desktop"), "*.pdf");
        assert!(cmd.args.iter().any(|a| a == "/Users/me/Desktop"));
        assert!(cmd.args.iter().any(|a| a == "*.pdf"));
        assert!(!cmd.to_string().contains('~'));
    }

    #[test]
    fn open_app_passes_name_as_single_argument() {
        let cmd = HostCommand::open_app("Visual Studio Code");
        assert_eq!(cmd.args.last().map(String::as_str), Some("Visual Studio Code"));
    }

    #[test]
    fn display_joins_program_and_args() {
        let cmd = HostCommand::new("find", ["/tmp", "-name", "*.txt"]);
        assert_eq!(cmd.to_string(), "find /tmp -name *.txt");
    }

    #[test]
    fn desktop_prefers_home() {
        let dir = desktop_dir_from(Some("/Users/me".into()), Some("C:\\Users\\me".into()));
        assert_eq!(dir.unwrap(), Path::new("/Users/me").join("Desktop"));
    }

    #[test]
    fn desktop_falls_back_to_user_profile() {
        let dir = desktop_dir_from(Some("".into()), Some("/profiles/me".into()));
        assert_eq!(dir.unwrap(), Path::new("/profiles/me").join("Desktop"));
    }

    #[test]
    fn empty_home_variables_are_not_found() {
        let err = desktop_dir_from(Some("".into()), Some("".into())).unwrap_err();
        assert!(matches!(err, HostError::HomeNotFound));

        let err = desktop_dir_from(None, None).unwrap_err();
        assert!(err.to_string().contains("USERPROFILE"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_combines_stdout_and_stderr() {
        let cmd = HostCommand::new("sh", ["-c", "echo out; echo err 1>&2"]);
        let output = ProcessHost.run(&cmd, ExecutionMode::Capture).await.unwrap();
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn capture_reports_nonzero_exit_with_output() {
        let cmd = HostCommand::new("sh", ["-c", "echo boom 1>&2; exit 3"]);
        let err = ProcessHost
            .run(&cmd, ExecutionMode::Capture)
            .await
            .unwrap_err();
        match err {
            HostError::Failed { program, detail } => {
                assert_eq!(program, "sh");
                assert!(detail.contains('3'));
                assert!(detail.ends_with("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn launch_discards_output() {
        let cmd = HostCommand::new("sh", ["-c", "echo ignored"]);
        let output = ProcessHost.run(&cmd, ExecutionMode::Launch).await.unwrap();
        assert!(output.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn launch_reports_nonzero_exit() {
        let cmd = HostCommand::new("sh", ["-c", "exit 1"]);
        let err = ProcessHost
            .run(&cmd, ExecutionMode::Launch)
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::Failed { .. }));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let cmd = HostCommand::new("definitely-not-a-real-program-4821", Vec::<String>::new());
        let err = ProcessHost
            .run(&cmd, ExecutionMode::Capture)
            .await
            .unwrap_err();
        assert!(matches!(err, HostError::Spawn { .. }));
        assert!(err.to_string().starts_with("failed to run definitely-not-a-real-program-4821"));
    }
}
