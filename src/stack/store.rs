//! Client-local stack persistence for the CLI.

use super::stack::Stack;
use crate::error::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StackFile {
    #[serde(default)]
    ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

/// Reads and writes the stack file (`.gicm/stack.toml` by default)
#[derive(Debug, Clone)]
pub struct StackStore {
    path: PathBuf,
}

impl StackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved stack. A missing file is an empty stack.
    pub fn load(&self) -> Result<Stack> {
        if !self.path.exists() {
            return Ok(Stack::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let file: StackFile = toml::from_str(&contents)?;
        Ok(Stack::from_ids(file.ids))
    }

    /// Replace the saved stack
    pub fn save(&self, stack: &Stack) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = StackFile {
            ids: stack.ids().to_vec(),
            updated_at: Some(Utc::now().to_rfc3339()),
        };
        std::fs::write(&self.path, toml::to_string(&file)?)?;

        tracing::debug!(path = %self.path.display(), items = stack.len(), "saved stack");
        Ok(())
    }

    /// Timestamp of the last save, if recorded
    pub fn updated_at(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let file: StackFile = toml::from_str(&contents)?;
        Ok(file.updated_at)
    }
}
