use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::tasks::{TaskDefinition, TaskRegistry};
use crate::types::{TaskalError, TaskalResult};

/// Default task file name
pub const DEFAULT_TASKS_FILE: &str = "taskal.yml";

/// A task body: either a single command or a (possibly nested) list of them.
///
/// Null list items (a bare `-`) are kept as `None` and contribute no commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Scalar(String),
    Sequence(Vec<Option<Node>>),
}

impl Node {
    /// Depth-first flattening into commands, preserving document order
    pub fn flatten_into(&self, task: &mut TaskDefinition) {
        match self {
            Node::Scalar(command) => task.add_command(command),
            Node::Sequence(children) => {
                for child in children.iter().flatten() {
                    child.flatten_into(task);
                }
            }
        }
    }
}

pub fn load_tasks_file(path: &Path) -> TaskalResult<String> {
    fs::read_to_string(path).map_err(|source| TaskalError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a task file into a registry.
///
/// Top-level keys starting with `_` are fragments for anchors and merge keys
/// and never become tasks.
pub fn parse_tasks_config(yaml_str: &str) -> TaskalResult<TaskRegistry> {
    if yaml_str.trim().is_empty() {
        return Ok(TaskRegistry::new());
    }

    let mut document: Value = serde_yaml::from_str(yaml_str).map_err(yaml_error)?;
    document.apply_merge().map_err(yaml_error)?;

    let mapping = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(TaskRegistry::new()),
        other => {
            return Err(TaskalError::ConfigParse(format!(
                "expected a mapping of task names at the top level, found {}",
                describe(&other)
            )))
        }
    };

    let mut registry = TaskRegistry::new();
    for (key, value) in mapping {
        let name = match key {
            Value::String(name) => name,
            // `1:` and `true:` name tasks by their text
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            other => {
                return Err(TaskalError::ConfigParse(format!(
                    "task names must be scalar values, found {}",
                    describe(&other)
                )))
            }
        };

        if name.starts_with('_') {
            continue;
        }

        let node: Option<Node> = serde_yaml::from_value(value).map_err(|e| {
            TaskalError::ConfigParse(format!(
                "task '{}' must be a command or a list of commands: {}",
                name, e
            ))
        })?;

        let mut task = TaskDefinition::new(name);
        if let Some(node) = node {
            node.flatten_into(&mut task);
        }
        registry.add(task);
    }

    Ok(registry)
}

fn yaml_error(error: serde_yaml::Error) -> TaskalError {
    TaskalError::ConfigParse(error.to_string())
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
