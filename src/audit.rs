//! Catalog consistency checks.
//!
//! The catalog is hand-maintained, so drift is reported rather than treated
//! as fatal: dangling dependencies, MCP install hints naming unpublished
//! packages, placeholder install hints and undeclared API keys.

use crate::registry::{ItemKind, Registry, RegistryItem};
use std::fmt;

const MCP_SCOPE: &str = "@modelcontextprotocol/server-";

/// `@modelcontextprotocol/server-*` packages known to be published on npm
const PUBLISHED_MCP_SERVERS: &[&str] = &[
    "aws-kb-retrieval",
    "brave-search",
    "everything",
    "filesystem",
    "github",
    "gitlab",
    "google-maps",
    "memory",
    "postgres",
    "puppeteer",
    "redis",
    "sequential-thinking",
    "slack",
];

/// Suggested replacements for MCP servers that were never published
const ALTERNATIVES: &[(&str, &str)] = &[
    ("aws", "@modelcontextprotocol/server-aws-kb-retrieval"),
    ("aws-bedrock", "@modelcontextprotocol/server-aws-kb-retrieval"),
    ("discord", "discord.js"),
    ("docker", "dockerode"),
    ("kubernetes", "@kubernetes/client-node"),
    ("linear", "@linear/sdk"),
    ("mongodb", "mongodb"),
    ("notion", "@notionhq/client"),
    ("planetscale", "@planetscale/database"),
    ("postgresql", "@modelcontextprotocol/server-postgres"),
    ("prisma", "@prisma/client"),
    ("sendgrid", "@sendgrid/mail"),
    ("solana-agent-kit", "@solana/web3.js"),
    ("sqlite", "better-sqlite3"),
    ("supabase", "@supabase/supabase-js"),
    ("vercel", "@vercel/client"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    DanglingDependency { item: String, dependency: String },
    UnpublishedPackage {
        item: String,
        package: String,
        alternative: Option<String>,
    },
    PlaceholderInstall { item: String, hint: String },
    UndeclaredEnvKey { item: String },
}

impl Finding {
    pub fn item(&self) -> &str {
        match self {
            Finding::DanglingDependency { item, .. }
            | Finding::UnpublishedPackage { item, .. }
            | Finding::PlaceholderInstall { item, .. }
            | Finding::UndeclaredEnvKey { item } => item,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DanglingDependency { item, dependency } => {
                write!(f, "{}: depends on unknown item '{}'", item, dependency)
            }
            Finding::UnpublishedPackage {
                item,
                package,
                alternative,
            } => {
                write!(f, "{}: install hint uses unpublished package {}", item, package)?;
                match alternative {
                    Some(alt) => write!(f, " (use {} instead)", alt),
                    None => Ok(()),
                }
            }
            Finding::PlaceholderInstall { item, hint } => {
                write!(f, "{}: install hint is a placeholder ({})", item, hint)
            }
            Finding::UndeclaredEnvKey { item } => {
                write!(f, "{}: setup mentions an API key but envKeys is empty", item)
            }
        }
    }
}

/// Run every check over the registry, in registry order
pub fn audit(registry: &Registry) -> Vec<Finding> {
    let mut findings = Vec::new();

    for item in registry.all() {
        check_dependencies(registry, item, &mut findings);
        check_install_hint(item, &mut findings);
        check_env_keys(item, &mut findings);
    }

    findings
}

fn check_dependencies(registry: &Registry, item: &RegistryItem, findings: &mut Vec<Finding>) {
    for dep in item.dependencies() {
        if !registry.contains(dep) {
            findings.push(Finding::DanglingDependency {
                item: item.id().to_string(),
                dependency: dep.clone(),
            });
        }
    }
}

fn check_install_hint(item: &RegistryItem, findings: &mut Vec<Finding>) {
    let Some(hint) = item.definition.install.as_deref() else {
        return;
    };
    let hint = hint.trim();

    if hint.starts_with('#') {
        findings.push(Finding::PlaceholderInstall {
            item: item.id().to_string(),
            hint: hint.to_string(),
        });
        return;
    }

    if item.kind != ItemKind::Mcp {
        return;
    }

    for word in hint.split_whitespace() {
        if let Some(server) = word.strip_prefix(MCP_SCOPE) {
            // Drop a trailing @version
            let server = server.split('@').next().unwrap_or(server);
            if !PUBLISHED_MCP_SERVERS.contains(&server) {
                findings.push(Finding::UnpublishedPackage {
                    item: item.id().to_string(),
                    package: word.to_string(),
                    alternative: alternative_for(server).map(str::to_string),
                });
            }
        }
    }
}

fn alternative_for(server: &str) -> Option<&'static str> {
    ALTERNATIVES
        .iter()
        .find(|(name, _)| *name == server)
        .map(|(_, alt)| *alt)
}

fn check_env_keys(item: &RegistryItem, findings: &mut Vec<Finding>) {
    if item.kind != ItemKind::Mcp || !item.definition.env_keys.is_empty() {
        return;
    }

    let mentions_key = item.definition.setup.as_deref().is_some_and(|setup| {
        let setup = setup.to_lowercase();
        setup.contains("api key") || setup.contains("api_key")
    });

    if mentions_key {
        findings.push(Finding::UndeclaredEnvKey {
            item: item.id().to_string(),
        });
    }
}
