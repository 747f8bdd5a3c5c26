use crate::error::{GicmError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// The project whose stack and config the CLI operates on
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    /// Detect the current project root
    pub fn detect() -> Result<Self> {
        Ok(Self {
            root: Self::get_project_root()?,
        })
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Priority: git repo root (via --show-toplevel), then current directory
    fn get_project_root() -> Result<PathBuf> {
        if let Ok(output) = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .output()
        {
            if output.status.success() {
                let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if let Ok(canonical) = PathBuf::from(root).canonicalize() {
                    return Ok(canonical);
                }
            }
        }

        std::env::current_dir().map_err(|e| {
            GicmError::InvalidConfig(format!("Failed to get current directory: {}", e))
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
