use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{LauncherError, Result};
use crate::models::DockerCommand;

/// Executes a docker invocation and reports its exit code.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Returns the exit code, or `None` if the process was killed by a signal.
    async fn run(&self, command: &DockerCommand) -> Result<Option<i32>>;
}

/// Runs `docker` directly as a child process with the terminal attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct DockerRunner;

#[async_trait]
impl CommandRunner for DockerRunner {
    async fn run(&self, command: &DockerCommand) -> Result<Option<i32>> {
        let status = Command::new(DockerCommand::PROGRAM)
            .args(command.args())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| LauncherError::Docker(format!("failed to start docker: {e}")))?;
        Ok(status.code())
    }
}
