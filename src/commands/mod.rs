pub mod check;
pub mod config;
pub mod export;
pub mod install;
pub mod list;
pub mod pages;
pub mod search;
pub mod show;
pub mod stack;
pub mod version;

use crate::config::Config;
use crate::error::Result;
use crate::install::InstallCommands;
use crate::project::Project;
use crate::registry::{catalog, Registry};
use crate::stack::StackStore;

/// Everything a command needs: the project, its effective config and the
/// registry built from it. The registry is built once per invocation.
pub struct Context {
    pub project: Project,
    pub config: Config,
    pub registry: Registry,
}

impl Context {
    pub fn new(project: Project, config: Config) -> Result<Self> {
        let registry = catalog::load(config.registry_dir().as_deref())?;
        Ok(Self {
            project,
            config,
            registry,
        })
    }

    pub fn install_commands(&self) -> InstallCommands {
        InstallCommands::new(self.config.install.cli.clone())
    }

    pub fn stack_store(&self) -> StackStore {
        StackStore::new(self.config.stack_path(self.project.root()))
    }
}
