use super::Context;
use crate::error::Result;

/// Print the registry in the shape served at `/api/registry`
pub fn execute(ctx: &Context, pretty: bool) -> Result<()> {
    let items = ctx.registry.all();
    let json = if pretty {
        serde_json::to_string_pretty(items)?
    } else {
        serde_json::to_string(items)?
    };
    println!("{}", json);
    Ok(())
}
