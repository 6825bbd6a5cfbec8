use std::path::PathBuf;

use thiserror::Error;

/// The main error type for taskal operations
#[derive(Debug, Error)]
pub enum TaskalError {
    #[error("Failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parsing error: {0}")]
    ConfigParse(String),

    #[error("Task is not specified")]
    TaskNotSpecified,

    #[error("Specified task is not defined: {0}")]
    TaskNotDefined(String),

    #[error("Command '{command}' failed")]
    CommandExecution {
        command: String,
        #[source]
        cause: CommandFailure,
    },
}

/// Why a single command did not succeed
#[derive(Debug, Error)]
pub enum CommandFailure {
    #[error("unable to start process")]
    Spawn(#[from] std::io::Error),

    #[error("exited with {}", describe_exit(.0))]
    Exit(Option<i32>),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type alias for taskal operations
pub type TaskalResult<T> = Result<T, TaskalError>;
