//! Task definitions and the registry that owns them
//!
//! A [`TaskDefinition`] is a named, ordered list of shell commands. The
//! [`TaskRegistry`] holds every task parsed from a task file, in document order.

use tracing::debug;

/// A named, ordered sequence of shell commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    name: String,
    commands: Vec<String>,
}

impl TaskDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Define Task: {}", name);
        Self {
            name,
            commands: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a command, trimming surrounding whitespace
    pub fn add_command(&mut self, command: &str) {
        debug!("  Add Command: {}", command);
        self.commands.push(command.trim().to_string());
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

/// All tasks defined in a task file
#[derive(Debug, Default, Clone)]
pub struct TaskRegistry {
    tasks: Vec<TaskDefinition>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, task: TaskDefinition) {
        self.tasks.push(task);
    }

    /// Tasks in the order they appear in the task file
    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    /// First task whose name matches exactly
    pub fn get(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.iter().find(|task| task.name == name)
    }

    /// Tasks ordered by name, for display
    pub fn sorted(&self) -> Vec<&TaskDefinition> {
        let mut tasks: Vec<_> = self.tasks.iter().collect();
        tasks.sort_by(|a, b| a.name.cmp(&b.name));
        tasks
    }

    pub fn names(&self) -> Vec<&str> {
        self.sorted().into_iter().map(TaskDefinition::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
