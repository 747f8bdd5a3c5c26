use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GicmError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Unknown item '{0}'. Run 'gicm search' to find available items.")]
    UnknownItem(String),

    #[error("Malformed stack: {0}")]
    MalformedStack(String),

    #[error("Stack is too large to share: {size} bytes of ids (limit {max})")]
    StackTooLarge { size: usize, max: usize },

    #[error("Unsupported kind '{0}'. Expected one of: agent, skill, command, mcp, setting")]
    UnsupportedKind(String),

    #[error("Duplicate item id '{id}' ({first} and {second})")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    #[error("Invalid catalog {path}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Stack file write error: {0}")]
    StackWrite(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GicmError>;
