//! Task name resolution
//!
//! Maps the task names a user asked for onto the tasks defined in the registry.

use crate::tasks::{TaskDefinition, TaskRegistry};
use crate::types::{TaskalError, TaskalResult};

/// Resolve requested names into tasks, in request order.
///
/// Fails on the first name that is not defined; nothing is returned in that
/// case. A name requested twice resolves twice.
pub fn resolve_tasks<'r>(
    requested: &[String],
    registry: &'r TaskRegistry,
) -> TaskalResult<Vec<&'r TaskDefinition>> {
    requested
        .iter()
        .map(|name| {
            registry
                .get(name)
                .ok_or_else(|| TaskalError::TaskNotDefined(name.clone()))
        })
        .collect()
}
