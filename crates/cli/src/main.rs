use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use taskal_core::configs::{load_tasks_file, parse_tasks_config, DEFAULT_TASKS_FILE};
use taskal_core::execution::ExecutionRequest;
use taskal_core::TaskalError;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

mod commands;

// Process exit codes
const SUCCEEDED: u8 = 0;
const INVALID_OPTION: u8 = 1;
const INVALID_CONFIG: u8 = 2;
const UNREAD_CONFIG: u8 = 3;
const EXECUTION_ERROR: u8 = 4;

/// taskal - A simple task runner
#[derive(Parser)]
#[command(name = "taskal")]
#[command(about = "Run shell tasks defined in a YAML file")]
#[command(override_usage = "taskal [OPTIONS] [TASKS]... [-- <ARGS>...]")]
#[command(version)]
struct Cli {
    /// Show all tasks
    #[arg(short = 'T')]
    show_tasks: bool,

    /// Do a dry run without executing actions
    #[arg(short = 'n')]
    dry_run: bool,

    /// Path to the task file
    #[arg(short = 'c', value_name = "CONFIGFILE", default_value = DEFAULT_TASKS_FILE)]
    config: PathBuf,

    /// Print debug traces
    #[arg(short, long)]
    verbose: bool,

    /// Tasks to run, in order
    tasks: Vec<String>,

    /// Arguments passed to every command
    #[arg(last = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through the same path
            let code = if e.use_stderr() {
                INVALID_OPTION
            } else {
                SUCCEEDED
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::from(SUCCEEDED),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("TASKAL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("taskal_core={level},taskal={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%H:%M:%S".to_string()))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let contents = load_tasks_file(&cli.config)?;
    let registry = parse_tasks_config(&contents)
        .with_context(|| format!("Invalid task file {}", cli.config.display()))?;

    if cli.show_tasks {
        commands::list::execute(&registry);
        return Ok(());
    }

    let request = ExecutionRequest {
        tasks: cli.tasks,
        dry_run: cli.dry_run,
        trailing_args: cli.args,
    };
    commands::run::execute(&registry, &request)?;

    if request.dry_run {
        println!(
            "{} {}",
            "✓".yellow().bold(),
            "Dry run completed, no commands were executed".yellow()
        );
    } else {
        println!(
            "{} {}",
            "✓".green().bold(),
            "All tasks completed successfully!".green().bold()
        );
    }
    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<TaskalError>() {
        Some(TaskalError::ConfigRead { .. }) => UNREAD_CONFIG,
        Some(TaskalError::ConfigParse(_)) => INVALID_CONFIG,
        _ => EXECUTION_ERROR,
    }
}
