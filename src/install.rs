//! Install command generation.
//!
//! Commands follow the template `<cli> add <kind>/<id>`. Generation is purely
//! textual; nothing is fetched or executed.

use crate::error::{GicmError, Result};
use crate::registry::{ItemKind, Registry, RegistryItem};
use crate::stack::Stack;

pub const DEFAULT_CLI: &str = "npx @gicm/cli";

/// Renders install commands for a given CLI invocation prefix
#[derive(Debug, Clone)]
pub struct InstallCommands {
    cli: String,
}

impl Default for InstallCommands {
    fn default() -> Self {
        Self::new(DEFAULT_CLI)
    }
}

impl InstallCommands {
    pub fn new(cli: impl Into<String>) -> Self {
        Self { cli: cli.into() }
    }

    pub fn cli(&self) -> &str {
        &self.cli
    }

    /// Command installing a single item
    pub fn command_for(&self, item: &RegistryItem) -> String {
        format!("{} add {}", self.cli, target(item.kind, item.id()))
    }

    /// One command per stack item, dependencies first
    pub fn commands_for_stack(&self, stack: &Stack, registry: &Registry) -> Vec<String> {
        stack
            .install_plan(registry)
            .into_iter()
            .map(|item| self.command_for(item))
            .collect()
    }

    /// A single command installing the whole stack, or None when it is empty
    pub fn combined_command(&self, stack: &Stack, registry: &Registry) -> Option<String> {
        let targets: Vec<String> = stack
            .install_plan(registry)
            .into_iter()
            .map(|item| target(item.kind, item.id()))
            .collect();

        if targets.is_empty() {
            None
        } else {
            Some(format!("{} add {}", self.cli, targets.join(" ")))
        }
    }
}

fn target(kind: ItemKind, id: &str) -> String {
    format!("{}/{}", kind.as_str(), id)
}

/// Parse an install target of the form `<kind>/<id>`.
///
/// Fails with `UnsupportedKind` when the kind is outside the closed set.
pub fn parse_target(spec: &str) -> Result<(ItemKind, String)> {
    let (kind, id) = spec.split_once('/').ok_or_else(|| {
        GicmError::NotFound(format!("'{}' (expected <kind>/<id>)", spec))
    })?;
    let kind: ItemKind = kind.parse()?;
    Ok((kind, id.to_string()))
}

/// Resolve a `<kind>/<id>` target or a bare id against the registry
pub fn resolve_target<'r>(registry: &'r Registry, spec: &str) -> Result<&'r RegistryItem> {
    if !spec.contains('/') {
        return registry.by_id(spec);
    }

    let (kind, id) = parse_target(spec)?;
    let item = registry.by_id(&id)?;
    if item.kind != kind {
        return Err(GicmError::NotFound(format!(
            "{}/{} ('{}' is a {})",
            kind, id, id, item.kind
        )));
    }
    Ok(item)
}
