use super::Context;
use crate::error::Result;
use crate::version;

pub fn execute(ctx: &Context) -> Result<()> {
    println!("{} {}", version::PKG_NAME, version::VERSION);

    let source = match ctx.config.registry_dir() {
        Some(dir) => dir.display().to_string(),
        None => "embedded".to_string(),
    };
    println!("Catalog: {} ({} items)", source, ctx.registry.len());

    Ok(())
}
