//! Taskal Core Library
//!
//! This is the core library for the taskal task runner. It reads a task file,
//! resolves the tasks a user asked for and runs their commands one after another.
//!
//! ## Architecture
//!
//! - [`configs`] - Task file loading and parsing
//! - [`tasks`] - Task definitions and the registry that owns them
//! - [`execution`] - Task resolution, the runner and command execution
//! - [`platform`] - Per-platform shell invocation
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskal_core::configs::parse_tasks_config;
//! use taskal_core::execution::{CommandExecutor, ExecutionRequest, SystemSpawner, TaskRunner};
//! use taskal_core::platform::ShellStrategy;
//!
//! # fn example() -> taskal_core::TaskalResult<()> {
//! let registry = parse_tasks_config("build: cargo build")?;
//! let executor = CommandExecutor::new(ShellStrategy::current(), &SystemSpawner);
//!
//! TaskRunner::new(&registry, &executor).run(&ExecutionRequest {
//!     tasks: vec!["build".to_string()],
//!     ..ExecutionRequest::default()
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod platform;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use tasks::{TaskDefinition, TaskRegistry};
pub use types::{CommandFailure, TaskalError, TaskalResult};
