//! User-curated, ordered selection of registry items.

use crate::error::{GicmError, Result};
use crate::registry::{Registry, RegistryItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered set of registry ids.
///
/// Insertion order drives display order and the shareable encoding. The stack
/// holds ids only; derived values are computed against a [`Registry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    ids: Vec<String>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from raw ids without checking them against a registry.
    /// Repeated ids keep their first occurrence.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        Self { ids }
    }

    /// Append `id` if absent. Re-adding a present id is a no-op.
    ///
    /// Fails with `UnknownItem` when the id does not resolve; the stack is
    /// left unchanged in that case.
    pub fn add(&mut self, registry: &Registry, id: &str) -> Result<bool> {
        if !registry.contains(id) {
            return Err(GicmError::UnknownItem(id.to_string()));
        }
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id.to_string());
        Ok(true)
    }

    /// Remove `id` if present. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolved items in stack order. Ids that no longer resolve are skipped.
    pub fn resolve<'r>(&self, registry: &'r Registry) -> Vec<&'r RegistryItem> {
        self.ids.iter().filter_map(|id| registry.get(id)).collect()
    }

    /// Sum of token costs over resolvable items
    pub fn total_cost(&self, registry: &Registry) -> u64 {
        self.resolve(registry)
            .iter()
            .map(|item| u64::from(item.token_cost()))
            .sum()
    }

    /// Drop ids that no longer resolve. Returns the dropped ids.
    pub fn retain_resolvable(&mut self, registry: &Registry) -> Vec<String> {
        let (kept, dropped): (Vec<String>, Vec<String>) = self
            .ids
            .drain(..)
            .partition(|id| registry.contains(id));
        self.ids = kept;
        dropped
    }
}
