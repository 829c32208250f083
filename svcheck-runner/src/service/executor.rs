//! Check executor
//!
//! Runs one service's check entry point as a child process. The working
//! directory travels with each [`CheckInvocation`] and is applied to the
//! child only; the runner's own working directory never changes.

use anyhow::{Context, Result};
use async_trait::async_trait;
use svcheck_core::domain::{CheckInvocation, Outcome};
use tokio::process::Command;
use tracing::debug;

/// Service trait for executing a service check
#[async_trait]
pub trait CheckExecutor: Send + Sync {
    /// Runs a check and waits for it to finish
    ///
    /// # Arguments
    /// * `invocation` - Program, arguments and working directory to use
    ///
    /// # Returns
    /// The check's outcome, or an error if the process could not be started
    async fn execute(&self, invocation: &CheckInvocation) -> Result<Outcome>;
}

/// Executor that spawns the check as a child process with inherited stdio
pub struct ProcessExecutor {}

impl ProcessExecutor {
    /// Creates a new process executor
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckExecutor for ProcessExecutor {
    async fn execute(&self, invocation: &CheckInvocation) -> Result<Outcome> {
        debug!("Executing check for {}: {}", invocation.service, invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .status()
            .await
            .with_context(|| {
                format!(
                    "Failed to start '{}' in {}",
                    invocation.command_line(),
                    invocation.working_dir.display()
                )
            })?;

        debug!("Check for {} exited with {}", invocation.service, status);

        Ok(Outcome::from_exit_code(status.code()))
    }
}
