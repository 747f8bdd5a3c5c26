use super::Context;
use crate::error::Result;

pub fn execute(ctx: &Context, terms: &[String], limit: usize) -> Result<()> {
    let query = terms.join(" ");
    let hits = ctx.registry.search(&query);

    if hits.is_empty() {
        println!("No items match '{}'.", query);
        return Ok(());
    }

    for hit in hits.iter().take(limit) {
        println!(
            "{:<8} {:<32} {}",
            hit.item.kind,
            hit.item.id(),
            hit.item.description()
        );
    }

    if hits.len() > limit {
        println!("\n... {} more (use --limit to show more)", hits.len() - limit);
    }

    Ok(())
}
