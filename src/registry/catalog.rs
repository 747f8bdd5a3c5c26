//! Loading catalog groups from the embedded catalog or a catalog directory.

use super::definition::{CatalogFile, ItemKind};
use super::registry::Registry;
use crate::error::{GicmError, Result};
use std::path::{Path, PathBuf};

// Embed all catalog TOML files at compile time.
// To add a new kind: add ONE line here and create the catalog file.
const EMBEDDED_CATALOG: &[(ItemKind, &str)] = &[
    (ItemKind::Agent, include_str!("../../catalog/agents.toml")),
    (ItemKind::Skill, include_str!("../../catalog/skills.toml")),
    (ItemKind::Command, include_str!("../../catalog/commands.toml")),
    (ItemKind::Mcp, include_str!("../../catalog/mcp.toml")),
    (ItemKind::Setting, include_str!("../../catalog/settings.toml")),
];

/// Catalog file name for a kind group
pub fn file_name(kind: ItemKind) -> String {
    format!("{}.toml", kind.plural())
}

/// Build the registry from the catalog compiled into the binary
pub fn load_embedded() -> Result<Registry> {
    let mut builder = Registry::builder();

    for (kind, content) in EMBEDDED_CATALOG {
        let source = format!("<embedded>/{}", file_name(*kind));
        let file = parse(content, Path::new(&source))?;
        builder.add_group(*kind, &source, file.items)?;
    }

    Ok(builder.build())
}

/// Build the registry from a directory holding one TOML file per kind.
///
/// A missing file is an empty group; an unreadable or unparsable file is an error.
pub fn load_dir(dir: &Path) -> Result<Registry> {
    if !dir.is_dir() {
        return Err(GicmError::InvalidCatalog {
            path: dir.to_path_buf(),
            reason: "catalog directory does not exist".to_string(),
        });
    }

    let mut builder = Registry::builder();

    for kind in ItemKind::ALL {
        let path = dir.join(file_name(kind));
        if !path.exists() {
            tracing::debug!(path = %path.display(), "catalog file missing, treating as empty");
            continue;
        }

        let content = std::fs::read_to_string(&path)?;
        let file = parse(&content, &path)?;
        tracing::debug!(path = %path.display(), items = file.items.len(), "loaded catalog file");
        builder.add_group(kind, &path.to_string_lossy(), file.items)?;
    }

    Ok(builder.build())
}

/// Load from `dir` when given, the embedded catalog otherwise
pub fn load(dir: Option<&Path>) -> Result<Registry> {
    match dir {
        Some(dir) => load_dir(dir),
        None => load_embedded(),
    }
}

fn parse(content: &str, path: &Path) -> Result<CatalogFile> {
    toml::from_str(content).map_err(|e| GicmError::InvalidCatalog {
        path: PathBuf::from(path),
        reason: e.to_string(),
    })
}
