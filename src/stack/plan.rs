//! Dependency-aware views over a stack.

use super::stack::Stack;
use crate::registry::{Registry, RegistryItem};
use std::collections::HashSet;

impl Stack {
    /// Dependencies of stack items that exist in the registry but are not in
    /// the stack. Dangling dependency ids are skipped. Ordered by first
    /// mention, without duplicates.
    pub fn missing_dependencies<'r>(&self, registry: &'r Registry) -> Vec<&'r RegistryItem> {
        let mut seen = HashSet::new();
        let mut missing = Vec::new();

        for item in self.resolve(registry) {
            for dep_id in item.dependencies() {
                if self.contains(dep_id) || !seen.insert(dep_id.as_str()) {
                    continue;
                }
                match registry.get(dep_id) {
                    Some(dep) => missing.push(dep),
                    None => {
                        tracing::debug!(item = item.id(), dependency = %dep_id, "skipping dangling dependency");
                    }
                }
            }
        }

        missing
    }

    /// Resolved items ordered so that in-stack dependencies come before
    /// their dependents. Stack order is kept otherwise.
    ///
    /// A dependency cycle does not fail the plan: the edge closing the cycle
    /// is ignored.
    pub fn install_plan<'r>(&self, registry: &'r Registry) -> Vec<&'r RegistryItem> {
        let resolved = self.resolve(registry);
        let mut visited = HashSet::new();
        let mut visiting = HashSet::new();
        let mut sorted = Vec::with_capacity(resolved.len());

        for item in resolved.iter().copied() {
            visit(item, &resolved, &mut visited, &mut visiting, &mut sorted);
        }

        sorted
    }
}

fn visit<'r>(
    item: &'r RegistryItem,
    in_stack: &[&'r RegistryItem],
    visited: &mut HashSet<String>,
    visiting: &mut HashSet<String>,
    sorted: &mut Vec<&'r RegistryItem>,
) {
    if visited.contains(item.id()) {
        return;
    }

    if visiting.contains(item.id()) {
        tracing::warn!(item = item.id(), "dependency cycle detected, ignoring back edge");
        return;
    }

    visiting.insert(item.id().to_string());

    // Visit in-stack dependencies first
    for dep_id in item.dependencies() {
        if let Some(dep) = in_stack
            .iter()
            .copied()
            .find(|candidate| candidate.id() == dep_id.as_str())
        {
            visit(dep, in_stack, visited, visiting, sorted);
        }
    }

    visiting.remove(item.id());
    visited.insert(item.id().to_string());
    sorted.push(item);
}
