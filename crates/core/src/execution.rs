//! Task execution module
//!
//! This module handles resolution of requested tasks and the actual execution
//! of their commands.

pub mod command;
pub mod resolver;
pub mod runner;

pub use command::{CommandExecutor, Spawner, SystemSpawner};
pub use resolver::resolve_tasks;
pub use runner::{ExecutionRequest, RunPhase, TaskRunner};
