//! Platform-specific shell invocation

use std::env;
use std::fmt;

/// How a command string is handed to the operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStrategy {
    /// `sh -c <command> [-- <args>...]`
    Posix,
    /// `cmd /C <command>`; trailing args are not forwarded
    Windows,
}

impl ShellStrategy {
    /// Detect the strategy for the current platform
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            _ => Self::Posix,
        }
    }

    /// Whether trailing args reach the spawned command
    pub fn forwards_trailing_args(&self) -> bool {
        matches!(self, Self::Posix)
    }

    /// Build the full invocation for a command and its trailing arguments
    pub fn invocation(&self, command: &str, trailing_args: &[String]) -> Invocation {
        let mut args = Vec::with_capacity(trailing_args.len() + 3);
        let program = match self {
            Self::Posix => {
                args.push("-c".to_string());
                args.push(command.to_string());
                if !trailing_args.is_empty() {
                    // Populates $1.. in the shell; `--` itself becomes $0
                    args.push("--".to_string());
                    args.extend(trailing_args.iter().cloned());
                }
                "sh"
            }
            Self::Windows => {
                args.push("/C".to_string());
                args.push(command.to_string());
                "cmd"
            }
        };

        Invocation {
            program: program.to_string(),
            args,
        }
    }
}

/// A program and the arguments it is spawned with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    /// Renders as `sh -c "echo foo" -- bar baz`, quoting the command string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for (i, arg) in self.args.iter().enumerate() {
            // Both strategies put the command right after their flag
            if i == 1 {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
