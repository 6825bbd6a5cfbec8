use anyhow::Result;
use taskal_core::execution::{CommandExecutor, ExecutionRequest, SystemSpawner, TaskRunner};
use taskal_core::platform::ShellStrategy;
use taskal_core::TaskRegistry;

pub fn execute(registry: &TaskRegistry, request: &ExecutionRequest) -> Result<()> {
    let spawner = SystemSpawner;
    let executor = CommandExecutor::new(ShellStrategy::current(), &spawner);
    let mut runner = TaskRunner::new(registry, &executor);

    if request.dry_run {
        tracing::warn!("Dry run: commands are printed but not executed");
    }

    runner.run(request)?;
    Ok(())
}
