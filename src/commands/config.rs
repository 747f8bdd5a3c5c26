use crate::cli::ConfigCommands;
use crate::config::{global_config_path, Config, CONFIG_FILE};
use crate::error::Result;
use crate::project::Project;
use crate::registry::catalog;
use std::path::Path;

/// Runs before any registry is built so a broken catalog can still be diagnosed
pub fn execute(
    project: &Project,
    command: &ConfigCommands,
    registry_override: Option<&Path>,
) -> Result<()> {
    match command {
        ConfigCommands::Validate => validate(project, registry_override),
        ConfigCommands::Show => {
            let config =
                Config::load(project.root())?.with_cli_overrides(registry_override, false);
            show(project, &config)
        }
    }
}

fn validate(project: &Project, registry_override: Option<&Path>) -> Result<()> {
    let project_config = project.root().join(CONFIG_FILE);

    println!("Validating configuration files...\n");

    match global_config_path() {
        Some(path) if path.exists() => println!("  Global config: {}", path.display()),
        Some(path) => println!("  Global config: {} - not found (optional)", path.display()),
        None => println!("  Global config: HOME not set - skipped"),
    }

    if project_config.exists() {
        println!("  Project config: {}", project_config.display());
    } else {
        println!(
            "  Project config: {} - not found (optional)",
            project_config.display()
        );
    }

    // Try to load merged config and its catalog - this validates all files
    println!("\nLoading and validating configuration...");
    let result = Config::load(project.root()).and_then(|cfg| {
        let cfg = cfg.with_cli_overrides(registry_override, false);
        catalog::load(cfg.registry_dir().as_deref())
    });
    match result {
        Ok(registry) => {
            println!("✓ Configuration is valid! ({} catalog items)", registry.len());
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show(project: &Project, config: &Config) -> Result<()> {
    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("Install:");
    println!("  cli: {}", config.install.cli);

    println!("\nRegistry:");
    match config.registry_dir() {
        Some(dir) => println!("  path: {}", dir.display()),
        None => println!("  path: (embedded catalog)"),
    }

    println!("\nShare:");
    println!("  base_url: {}", config.share.base_url);

    println!("\nStack:");
    println!("  file: {}", config.stack_path(project.root()).display());

    Ok(())
}
