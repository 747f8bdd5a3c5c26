//! Marketplace registry of installable items.
//!
//! The registry is built once from TOML catalog files, one file per kind,
//! and is read-only afterwards. Consumers receive it by reference.
//!
//! # Architecture
//!
//! Items define:
//! - **Identity**: slug id and kind (agent, skill, command, mcp, setting)
//! - **Display**: name, description, category, tags
//! - **Cost**: estimated token cost when loaded
//! - **Dependencies**: other item ids, resolved softly
//!
//! # Example
//!
//! ```toml
//! [[item]]
//! id = "icm-anchor-architect"
//! name = "ICM Anchor Architect"
//! description = "Designs Anchor programs for Solana"
//! tokenCost = 1200
//! tags = ["solana", "anchor"]
//! dependencies = ["solana-mastery"]
//! ```

pub mod catalog;
pub mod definition;
#[allow(clippy::module_inception)]
pub mod registry;
pub mod search;

pub use definition::{ItemDefinition, ItemKind, RegistryItem};
pub use registry::{Registry, RegistryBuilder};
pub use search::SearchHit;
