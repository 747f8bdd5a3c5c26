use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::registry::ItemKind;

#[derive(Parser, Debug)]
#[command(name = "gicm")]
#[command(about = "Browse the gICM marketplace and build installable stacks", long_about = None)]
#[command(version = env!("GICM_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog directory to load instead of the embedded catalog
    #[arg(long, global = true, env = "GICM_REGISTRY_PATH")]
    pub registry: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registry items
    List {
        /// Only items of this kind (agent, skill, command, mcp, setting)
        #[arg(long, value_parser = parse_kind)]
        kind: Option<ItemKind>,

        /// Only items carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only items in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one item in detail
    Show {
        /// Item id or <kind>/<id>
        item: String,
    },

    /// Search items by keyword
    Search {
        /// Search terms; every term must match
        #[arg(required = true)]
        terms: Vec<String>,

        /// Maximum number of results
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Print the install command for an item
    Install {
        /// Item id or <kind>/<id>
        item: String,
    },

    /// Manage the local stack
    Stack {
        #[command(subcommand)]
        command: StackCommands,
    },

    /// Print the static site page manifest as JSON
    Pages,

    /// Export the full registry as JSON
    Export {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Check the catalog for drift
    Check {
        /// Exit non-zero when any finding is reported
        #[arg(long)]
        strict: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and catalog summary
    Version,
}

#[derive(Subcommand, Debug)]
pub enum StackCommands {
    /// Add items to the stack
    Add {
        #[arg(required = true)]
        items: Vec<String>,

        /// Also add missing dependencies
        #[arg(long)]
        with_deps: bool,
    },

    /// Remove items from the stack
    Remove {
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Show the stack with token costs
    Show,

    /// Empty the stack
    Clear,

    /// Print the shareable token and URL
    Share,

    /// Replace the stack with a shared token
    Import { token: String },

    /// Print install commands for the stack, dependencies first
    Install {
        /// Print one combined command instead of one per item
        #[arg(long)]
        combined: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate,

    /// Show effective configuration after merging all sources
    Show,
}

fn parse_kind(s: &str) -> Result<ItemKind, String> {
    s.parse().map_err(|e: crate::error::GicmError| e.to_string())
}
