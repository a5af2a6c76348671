//! Tool dispatch.

use tracing::debug;

use crate::{
    Args, Host, HostCommand, OpenAppArgs, ProcessHost, Result, SearchArgs, SystemInfoArgs,
    ToolKind,
};

/// Runs one tool invocation against a [`Host`].
#[derive(Debug, Default)]
pub struct Executor<H = ProcessHost> {
    host: H,
}

impl Executor<ProcessHost> {
    /// An executor backed by real child processes.
    pub fn new() -> Self {
        Self::with_host(ProcessHost)
    }
}

impl<H: Host> Executor<H> {
    pub fn with_host(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Resolve `tool` and run it with `args`.
    ///
    /// Unknown identifiers fail with [`ToolError::UnsupportedTool`] before
    /// anything reaches the host.
    ///
    /// [`ToolError::UnsupportedTool`]: crate::ToolError::UnsupportedTool
    pub async fn execute(&self, tool: &str, args: &Args) -> Result<String> {
        let kind: ToolKind = tool.parse()?;
        self.run(kind, args).await
    }

    /// Run an already resolved tool.
    pub async fn run(&self, kind: ToolKind, args: &Args) -> Result<String> {
        match kind {
            ToolKind::OpenApp => {
                let args = OpenAppArgs::try_from(args)?;
                let command = HostCommand::open_app(&args.app_name);
                self.invoke(kind, &command).await?;
                Ok(format!("{} opened successfully", args.app_name))
            }
            ToolKind::FilesystemSearch => {
                let args = SearchArgs::from(args);
                let root = self.host.desktop_dir()?;
                let command = HostCommand::search(&root, &args.pattern());
                self.invoke(kind, &command).await
            }
            ToolKind::SystemInfo => {
                let _args = SystemInfoArgs::from(args);
                self.invoke(kind, &HostCommand::system_info()).await
            }
        }
    }

    async fn invoke(&self, kind: ToolKind, command: &HostCommand) -> Result<String> {
        debug!(tool = %kind, mode = ?kind.mode(), %command, "running host command");
        Ok(self.host.run(command, kind.mode()).await?)
    }
}
