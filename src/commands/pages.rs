use super::Context;
use crate::error::Result;
use crate::site::PageManifest;

pub fn execute(ctx: &Context) -> Result<()> {
    let manifest = PageManifest::build(&ctx.registry);
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
