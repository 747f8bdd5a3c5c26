use super::Context;
use crate::audit::audit;
use crate::error::{GicmError, Result};

pub fn execute(ctx: &Context, strict: bool) -> Result<()> {
    let findings = audit(&ctx.registry);

    println!("Checked {} items.", ctx.registry.len());
    for (kind, count) in ctx.registry.counts() {
        println!("  {:<12} {}", kind.title(), count);
    }

    if findings.is_empty() {
        println!("\n✓ No issues found.");
        return Ok(());
    }

    println!("\n{} issue(s):", findings.len());
    for finding in &findings {
        println!("  - {}", finding);
    }

    if strict {
        return Err(GicmError::InvalidCatalog {
            path: ctx
                .config
                .registry_dir()
                .unwrap_or_else(|| "<embedded>".into()),
            reason: format!("{} issue(s) found", findings.len()),
        });
    }

    Ok(())
}
