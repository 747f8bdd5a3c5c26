use super::Context;
use crate::error::Result;
use crate::install::resolve_target;

pub fn execute(ctx: &Context, spec: &str) -> Result<()> {
    let item = resolve_target(&ctx.registry, spec)?;
    let def = &item.definition;

    println!("{} ({})", def.name, item.kind);
    println!("  ID: {}", def.id);
    println!("  Description: {}", def.description);
    if let Some(category) = &def.category {
        println!("  Category: {}", category);
    }
    println!("  Token cost: {}", def.token_cost);
    if let Some(tier) = def.tier {
        println!("  Tier: {}", tier);
    }
    if !def.tags.is_empty() {
        println!("  Tags: {}", def.tags.join(", "));
    }
    if !def.platforms.is_empty() {
        println!("  Platforms: {}", def.platforms.join(", "));
    }

    if !def.dependencies.is_empty() {
        println!("\nDependencies:");
        for dep in &def.dependencies {
            match ctx.registry.get(dep) {
                Some(resolved) => println!("  - {} ({})", dep, resolved.kind),
                None => println!("  - {} (not in registry)", dep),
            }
        }
    }

    if !def.env_keys.is_empty() {
        println!("\nEnvironment Variables:");
        for key in &def.env_keys {
            println!("  - {}", key);
        }
    }

    if let Some(setup) = &def.setup {
        println!("\nSetup:\n  {}", setup);
    }

    if let Some(long) = &def.long_description {
        println!("\n{}", long);
    }

    if let Some(docs) = &def.docs_url {
        println!("\nDocs: {}", docs);
    }

    println!("\nInstall:");
    println!("  {}", ctx.install_commands().command_for(item));
    if let Some(hint) = &def.install {
        println!("  upstream: {}", hint);
    }

    Ok(())
}
