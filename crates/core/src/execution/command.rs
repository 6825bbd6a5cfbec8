//! Command execution utilities
//!
//! This module turns a single command string into a process invocation using the
//! platform's [`ShellStrategy`] and hands it to a [`Spawner`]. The spawner is
//! injected so tests can observe invocations without starting processes.

use std::process::Command;

use tracing::{info, warn};

use crate::platform::{Invocation, ShellStrategy};
use crate::types::{CommandFailure, TaskalError, TaskalResult};

/// Starts a process for an invocation and waits for it to finish
pub trait Spawner {
    fn spawn(&self, invocation: &Invocation) -> Result<(), CommandFailure>;
}

/// Spawns real processes that share this process's stdin, stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, invocation: &Invocation) -> Result<(), CommandFailure> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()?;

        if !status.success() {
            return Err(CommandFailure::Exit(status.code()));
        }
        Ok(())
    }
}

/// Executes shell commands with a fixed strategy and spawner
pub struct CommandExecutor<'a> {
    strategy: ShellStrategy,
    spawner: &'a dyn Spawner,
}

impl<'a> CommandExecutor<'a> {
    pub fn new(strategy: ShellStrategy, spawner: &'a dyn Spawner) -> Self {
        Self { strategy, spawner }
    }

    pub fn strategy(&self) -> ShellStrategy {
        self.strategy
    }

    /// Execute a single shell command.
    ///
    /// In dry-run mode the invocation is logged but never spawned.
    pub fn execute(
        &self,
        dry_run: bool,
        command: &str,
        trailing_args: &[String],
    ) -> TaskalResult<()> {
        if !trailing_args.is_empty() && !self.strategy.forwards_trailing_args() {
            warn!("Trailing args are ignored on this platform: {}", trailing_args.join(" "));
        }

        let invocation = self.strategy.invocation(command, trailing_args);
        info!("{}", invocation);

        if dry_run {
            return Ok(());
        }

        self.spawner
            .spawn(&invocation)
            .map_err(|cause| TaskalError::CommandExecution {
                command: command.to_string(),
                cause,
            })
    }
}
