//! Registry of catalog items, built once and read-only afterwards.

use super::definition::{is_valid_slug, ItemDefinition, ItemKind, RegistryItem};
use crate::error::{GicmError, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// Immutable, ordered collection of catalog items.
///
/// Items are ordered by kind group (agent, skill, command, mcp, setting) and
/// by authoring order within each group.
#[derive(Debug, Clone)]
pub struct Registry {
    items: Vec<RegistryItem>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All items in registry order
    pub fn all(&self) -> &[RegistryItem] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&RegistryItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Look up an item by id, failing with `NotFound`
    pub fn by_id(&self, id: &str) -> Result<&RegistryItem> {
        self.get(id)
            .ok_or_else(|| GicmError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Items matching a predicate, in registry order
    pub fn filter<P>(&self, predicate: P) -> Vec<&RegistryItem>
    where
        P: Fn(&RegistryItem) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).collect()
    }

    pub fn by_kind(&self, kind: ItemKind) -> Vec<&RegistryItem> {
        self.filter(|item| item.kind == kind)
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&RegistryItem> {
        self.filter(|item| item.has_tag(tag))
    }

    pub fn by_category(&self, category: &str) -> Vec<&RegistryItem> {
        self.filter(|item| {
            item.definition
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        })
    }

    /// Number of items per kind, in kind-group order
    pub fn counts(&self) -> Vec<(ItemKind, usize)> {
        ItemKind::ALL
            .iter()
            .map(|&kind| (kind, self.items.iter().filter(|i| i.kind == kind).count()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collects catalog groups and checks id uniqueness before freezing them
/// into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    items: Vec<RegistryItem>,
    seen: HashMap<String, String>,
}

impl RegistryBuilder {
    /// Append one kind group. `source` names where the group came from and
    /// is used in error messages.
    pub fn add_group(
        &mut self,
        kind: ItemKind,
        source: &str,
        definitions: Vec<ItemDefinition>,
    ) -> Result<&mut Self> {
        for definition in definitions {
            self.push(RegistryItem::new(kind, definition), source)?;
        }
        Ok(self)
    }

    /// Append a single item
    pub fn push(&mut self, item: RegistryItem, source: &str) -> Result<&mut Self> {
        if !is_valid_slug(item.id()) {
            return Err(GicmError::InvalidCatalog {
                path: PathBuf::from(source),
                reason: format!(
                    "item id '{}' must be a lowercase slug (a-z, 0-9, single dashes)",
                    item.id()
                ),
            });
        }

        if let Some(first) = self.seen.get(item.id()) {
            return Err(GicmError::DuplicateId {
                id: item.id().to_string(),
                first: first.clone(),
                second: source.to_string(),
            });
        }

        self.seen.insert(item.id().to_string(), source.to_string());
        self.items.push(item);
        Ok(self)
    }

    /// Freeze the collected items. Groups are ordered by kind; authoring
    /// order is kept within each group.
    pub fn build(self) -> Registry {
        let mut items = self.items;
        items.sort_by_key(|item| item.kind);

        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id().to_string(), i))
            .collect();

        tracing::debug!(items = items.len(), "registry built");
        Registry { items, index }
    }
}
