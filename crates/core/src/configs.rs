//! Task file loading and parsing

pub mod tasks;

pub use tasks::{load_tasks_file, parse_tasks_config, Node, DEFAULT_TASKS_FILE};
