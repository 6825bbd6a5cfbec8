use colored::*;
use taskal_core::TaskRegistry;

pub fn execute(registry: &TaskRegistry) {
    println!("{}", "All defined tasks:".bold().underline());

    if registry.is_empty() {
        println!("  {}", "No tasks found".dimmed());
        return;
    }

    for name in registry.names() {
        println!("{}", name);
    }
}
