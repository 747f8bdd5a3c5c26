//! Data structures for parsing catalog TOML files.
//!
//! These types define the schema for catalog entries. A catalog file holds
//! one kind of item; the kind is implied by the file the entry came from.

use crate::error::GicmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of item kinds the marketplace distributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Agent,
    Skill,
    Command,
    Mcp,
    Setting,
}

impl ItemKind {
    /// Kind-group order used when concatenating the registry.
    pub const ALL: [ItemKind; 5] = [
        ItemKind::Agent,
        ItemKind::Skill,
        ItemKind::Command,
        ItemKind::Mcp,
        ItemKind::Setting,
    ];

    /// Get the string representation used in install commands
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Agent => "agent",
            ItemKind::Skill => "skill",
            ItemKind::Command => "command",
            ItemKind::Mcp => "mcp",
            ItemKind::Setting => "setting",
        }
    }

    /// Plural form used for listing routes and catalog file names
    pub fn plural(&self) -> &'static str {
        match self {
            ItemKind::Agent => "agents",
            ItemKind::Skill => "skills",
            ItemKind::Command => "commands",
            ItemKind::Mcp => "mcp",
            ItemKind::Setting => "settings",
        }
    }

    /// Human readable group title
    pub fn title(&self) -> &'static str {
        match self {
            ItemKind::Agent => "Agents",
            ItemKind::Skill => "Skills",
            ItemKind::Command => "Commands",
            ItemKind::Mcp => "MCP Configs",
            ItemKind::Setting => "Settings",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = GicmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agent" | "agents" => Ok(ItemKind::Agent),
            "skill" | "skills" => Ok(ItemKind::Skill),
            "command" | "commands" => Ok(ItemKind::Command),
            "mcp" | "mcps" => Ok(ItemKind::Mcp),
            "setting" | "settings" => Ok(ItemKind::Setting),
            _ => Err(GicmError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A catalog file: an array of `[[item]]` tables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogFile {
    #[serde(default, rename = "item")]
    pub items: Vec<ItemDefinition>,
}

/// One authored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(default, alias = "token_cost")]
    pub token_cost: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, alias = "long_description", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Upstream install hint (e.g. `npx -y @modelcontextprotocol/server-github`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<String>,

    #[serde(default, alias = "env_keys", skip_serializing_if = "Vec::is_empty")]
    pub env_keys: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<String>,

    #[serde(default, alias = "docs_url", skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// Skill tier (1 = always loaded, 3 = loaded on demand)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<u8>,
}

fn default_platforms() -> Vec<String> {
    vec![
        "claude".to_string(),
        "gemini".to_string(),
        "openai".to_string(),
    ]
}

/// A catalog entry tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryItem {
    pub kind: ItemKind,

    #[serde(flatten)]
    pub definition: ItemDefinition,
}

impl RegistryItem {
    pub fn new(kind: ItemKind, definition: ItemDefinition) -> Self {
        Self { kind, definition }
    }

    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn token_cost(&self) -> u32 {
        self.definition.token_cost
    }

    pub fn tags(&self) -> &[String] {
        &self.definition.tags
    }

    pub fn dependencies(&self) -> &[String] {
        &self.definition.dependencies
    }

    /// Tags are compared case-insensitively
    pub fn has_tag(&self, tag: &str) -> bool {
        self.definition
            .tags
            .iter()
            .any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Check that an id is a slug: lowercase ascii alphanumerics separated by single dashes.
pub fn is_valid_slug(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
