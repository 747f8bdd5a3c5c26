use crate::error::Result;
use crate::install::DEFAULT_CLI;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".gicm.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub share: ShareConfig,

    #[serde(default)]
    pub stack: StackConfig,

    /// Verbose mode - debug logging on stderr (not stored in config file)
    #[serde(skip)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// CLI invocation prefix used in generated install commands
    #[serde(default = "default_cli")]
    pub cli: String,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self { cli: default_cli() }
    }
}

fn default_cli() -> String {
    DEFAULT_CLI.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Catalog directory; empty means the embedded catalog
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default = "default_share_url")]
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_share_url(),
        }
    }
}

fn default_share_url() -> String {
    "https://gicm.dev/stack".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackConfig {
    /// Stack file, relative to the project root
    #[serde(default = "default_stack_file")]
    pub file: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            file: default_stack_file(),
        }
    }
}

fn default_stack_file() -> String {
    ".gicm/stack.toml".to_string()
}

/// One config file as written. Keys it leaves out keep the lower layer's
/// value; keys it sets win even when they equal the built-in default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    install: InstallLayer,
    registry: RegistryLayer,
    share: ShareLayer,
    stack: StackLayer,
}

#[derive(Debug, Default, Deserialize)]
struct InstallLayer {
    cli: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RegistryLayer {
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ShareLayer {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StackLayer {
    file: Option<String>,
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_cli_overrides)
    /// 2. Environment variables
    /// 3. Project config (.gicm.toml in project root)
    /// 4. Global config (~/.gicm.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load global config
        if let Some(path) = global_config_path() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading global config");
                config = config.merge(Self::from_file(&path)?);
            }
        }

        // 2. Load project config
        let project_config = project_root.join(CONFIG_FILE);
        if project_config.exists() {
            tracing::debug!(path = %project_config.display(), "loading project config");
            config = config.merge(Self::from_file(&project_config)?);
        }

        // 3. Apply environment variables
        config = config.merge_env();

        Ok(config)
    }

    /// Load one config layer from a TOML file
    fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = std::fs::read_to_string(path)?;
        let layer: ConfigLayer = toml::from_str(&contents)?;
        Ok(layer)
    }

    /// Merge a layer into this config (keys the layer sets take precedence)
    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(cli) = layer.install.cli {
            self.install.cli = cli;
        }

        // An empty path switches back to the embedded catalog
        if let Some(path) = layer.registry.path {
            self.registry.path = path;
        }

        if let Some(base_url) = layer.share.base_url {
            self.share.base_url = base_url;
        }

        if let Some(file) = layer.stack.file {
            self.stack.file = file;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(cli) = std::env::var("GICM_CLI") {
            if !cli.trim().is_empty() {
                self.install.cli = cli;
            }
        }

        if let Ok(path) = std::env::var("GICM_REGISTRY_PATH") {
            if !path.is_empty() {
                self.registry.path = path;
            }
        }

        if let Ok(url) = std::env::var("GICM_SHARE_URL") {
            if !url.is_empty() {
                self.share.base_url = url;
            }
        }

        self
    }

    /// Apply CLI overrides (highest precedence)
    pub fn with_cli_overrides(mut self, registry: Option<&Path>, verbose: bool) -> Self {
        self.verbose = verbose;

        if let Some(path) = registry {
            self.registry.path = path.to_string_lossy().to_string();
        }

        self
    }

    /// Catalog directory to load, with `~/` expanded. None means embedded.
    pub fn registry_dir(&self) -> Option<PathBuf> {
        if self.registry.path.is_empty() {
            None
        } else {
            Some(expand_tilde(&self.registry.path))
        }
    }

    /// Stack file location for a project
    pub fn stack_path(&self, project_root: &Path) -> PathBuf {
        let file = expand_tilde(&self.stack.file);
        if file.is_absolute() {
            file
        } else {
            project_root.join(file)
        }
    }

    /// Shareable URL for an encoded stack
    pub fn share_url(&self, token: &str) -> String {
        let separator = if self.share.base_url.contains('?') {
            '&'
        } else {
            '?'
        };
        format!("{}{}stack={}", self.share.base_url, separator, token)
    }
}

/// Global config location (~/.gicm.toml)
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILE))
}

/// Expand a leading `~` or `~/` to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

/// Get the home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.install.cli, "npx @gicm/cli");
        assert!(config.registry.path.is_empty());
        assert_eq!(config.share.base_url, "https://gicm.dev/stack");
        assert_eq!(config.stack.file, ".gicm/stack.toml");
    }

    #[test]
    fn test_merge_config() {
        let mut base = Config::default();
        base.registry.path = "/catalog".to_string();

        let layer: ConfigLayer = toml::from_str("[install]\ncli = \"gicm\"\n").unwrap();

        let merged = base.merge(layer);
        assert_eq!(merged.registry.path, "/catalog"); // Kept from base
        assert_eq!(merged.install.cli, "gicm"); // From layer
    }

    #[test]
    fn test_merge_layer_can_restore_default_value() {
        let mut base = Config::default();
        base.install.cli = "gicm".to_string();

        let layer: ConfigLayer =
            toml::from_str("[install]\ncli = \"npx @gicm/cli\"\n").unwrap();
        assert_eq!(base.merge(layer).install.cli, "npx @gicm/cli");
    }

    #[test]
    #[serial]
    fn test_project_config_overrides_global_with_default_value() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(home.path().join(CONFIG_FILE), "[install]\ncli = \"gicm\"\n").unwrap();
        std::fs::write(
            project.path().join(CONFIG_FILE),
            "[install]\ncli = \"npx @gicm/cli\"\n",
        )
        .unwrap();

        let old_home = std::env::var("HOME").ok();
        std::env::set_var("HOME", home.path());
        std::env::remove_var("GICM_CLI");
        let config = Config::load(project.path());
        match old_home {
            Some(h) => std::env::set_var("HOME", h),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(config.unwrap().install.cli, "npx @gicm/cli");
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str(
            r#"
[install]
cli = "bunx gicm"
"#,
        )
        .unwrap();
        assert_eq!(config.install.cli, "bunx gicm");
        assert_eq!(config.stack.file, ".gicm/stack.toml");
    }

    #[test]
    #[serial]
    fn test_load_project_config_and_env_precedence() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[install]
cli = "project-cli"

[share]
base_url = "https://example.com/s"
"#,
        )
        .unwrap();

        std::env::remove_var("GICM_CLI");
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.install.cli, "project-cli");
        assert_eq!(config.share.base_url, "https://example.com/s");

        std::env::set_var("GICM_CLI", "env-cli");
        let config = Config::load(dir.path()).unwrap();
        std::env::remove_var("GICM_CLI");
        assert_eq!(config.install.cli, "env-cli");
    }

    #[test]
    #[serial]
    fn test_invalid_project_config_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[install\ncli = ").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_cli_registry_override() {
        let config = Config::default().with_cli_overrides(Some(Path::new("/tmp/catalog")), true);
        assert!(config.verbose);
        assert_eq!(config.registry_dir(), Some(PathBuf::from("/tmp/catalog")));
    }

    #[test]
    fn test_stack_path_relative_and_absolute() {
        let mut config = Config::default();
        assert_eq!(
            config.stack_path(Path::new("/project")),
            PathBuf::from("/project/.gicm/stack.toml")
        );

        config.stack.file = "/var/stacks/mine.toml".to_string();
        assert_eq!(
            config.stack_path(Path::new("/project")),
            PathBuf::from("/var/stacks/mine.toml")
        );
    }

    #[test]
    fn test_share_url() {
        let mut config = Config::default();
        assert_eq!(config.share_url("v1.ab.cd"), "https://gicm.dev/stack?stack=v1.ab.cd");

        config.share.base_url = "https://gicm.dev/build?ref=x".to_string();
        assert_eq!(
            config.share_url("v1.ab.cd"),
            "https://gicm.dev/build?ref=x&stack=v1.ab.cd"
        );
    }

    #[test]
    #[serial]
    fn test_tilde_expansion() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_tilde("~/catalog"), PathBuf::from(home).join("catalog"));
        }
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }
}
