use super::Context;
use crate::error::Result;
use crate::install::resolve_target;

pub fn execute(ctx: &Context, spec: &str) -> Result<()> {
    let item = resolve_target(&ctx.registry, spec)?;
    println!("{}", ctx.install_commands().command_for(item));
    Ok(())
}
