use super::Context;
use crate::error::Result;
use crate::registry::{ItemKind, RegistryItem};

pub fn execute(
    ctx: &Context,
    kind: Option<ItemKind>,
    tag: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let items = ctx.registry.filter(|item| {
        kind.is_none_or(|k| item.kind == k)
            && tag.is_none_or(|t| item.has_tag(t))
            && category.is_none_or(|c| {
                item.definition
                    .category
                    .as_deref()
                    .is_some_and(|ic| ic.eq_ignore_ascii_case(c))
            })
    });

    if items.is_empty() {
        println!("No items match.");
        return Ok(());
    }

    print_table(&items);
    println!("\n{} item(s)", items.len());
    Ok(())
}

pub(crate) fn print_table(items: &[&RegistryItem]) {
    println!("{:<8} {:<32} {:>8}  NAME", "KIND", "ID", "TOKENS");
    println!("{}", "-".repeat(72));
    for item in items {
        println!(
            "{:<8} {:<32} {:>8}  {}",
            item.kind,
            item.id(),
            item.token_cost(),
            item.name()
        );
    }
}
