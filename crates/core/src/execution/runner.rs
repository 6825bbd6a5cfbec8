//! High-level task runner
//!
//! This module coordinates resolution and sequential execution of the tasks a
//! user requested. The first failing command stops the whole run.

use tracing::{debug, info};

use crate::execution::command::CommandExecutor;
use crate::execution::resolver::resolve_tasks;
use crate::tasks::{TaskDefinition, TaskRegistry};
use crate::types::{TaskalError, TaskalResult};

/// What the user asked to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub tasks: Vec<String>,
    pub dry_run: bool,
    /// Passed verbatim to every command of every task
    pub trailing_args: Vec<String>,
}

impl ExecutionRequest {
    pub fn has_specified_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }
}

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    NotStarted,
    Resolving,
    Executing,
    Succeeded,
    Failed,
}

/// Runs requested tasks from a registry through a command executor
pub struct TaskRunner<'a> {
    registry: &'a TaskRegistry,
    executor: &'a CommandExecutor<'a>,
    phase: RunPhase,
    transitions: Vec<RunPhase>,
}

impl<'a> TaskRunner<'a> {
    pub fn new(registry: &'a TaskRegistry, executor: &'a CommandExecutor<'a>) -> Self {
        Self {
            registry,
            executor,
            phase: RunPhase::NotStarted,
            transitions: Vec::new(),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Every phase entered during the last run, in order
    pub fn transitions(&self) -> &[RunPhase] {
        &self.transitions
    }

    /// Resolve and execute every requested task in order
    pub fn run(&mut self, request: &ExecutionRequest) -> TaskalResult<()> {
        self.transitions.clear();
        self.phase = RunPhase::NotStarted;

        let result = self.run_inner(request);
        self.enter(if result.is_ok() {
            RunPhase::Succeeded
        } else {
            RunPhase::Failed
        });
        result
    }

    fn enter(&mut self, phase: RunPhase) {
        debug!("Run phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.transitions.push(phase);
    }

    fn run_inner(&mut self, request: &ExecutionRequest) -> TaskalResult<()> {
        if !request.has_specified_tasks() {
            return Err(TaskalError::TaskNotSpecified);
        }

        self.enter(RunPhase::Resolving);
        let tasks = resolve_tasks(&request.tasks, self.registry)?;

        self.enter(RunPhase::Executing);
        for task in tasks {
            self.run_task(task, request)?;
        }

        Ok(())
    }

    fn run_task(&self, task: &TaskDefinition, request: &ExecutionRequest) -> TaskalResult<()> {
        info!("Execute task: {}", task.name());

        for command in task.commands() {
            self.executor
                .execute(request.dry_run, command, &request.trailing_args)?;
        }

        Ok(())
    }
}
