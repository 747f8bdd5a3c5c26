use super::Context;
use crate::cli::StackCommands;
use crate::error::{GicmError, Result};
use crate::install::resolve_target;
use crate::stack::{self, Stack};

pub fn execute(ctx: &Context, command: &StackCommands) -> Result<()> {
    match command {
        StackCommands::Add { items, with_deps } => add(ctx, items, *with_deps),
        StackCommands::Remove { items } => remove(ctx, items),
        StackCommands::Show => show(ctx),
        StackCommands::Clear => clear(ctx),
        StackCommands::Share => share(ctx),
        StackCommands::Import { token } => import(ctx, token),
        StackCommands::Install { combined } => install(ctx, *combined),
    }
}

fn add(ctx: &Context, specs: &[String], with_deps: bool) -> Result<()> {
    let store = ctx.stack_store();
    let mut stack = store.load()?;

    // Resolve everything first so a bad id leaves the saved stack untouched
    let mut ids = Vec::with_capacity(specs.len());
    for spec in specs {
        let item = resolve_target(&ctx.registry, spec).map_err(|e| match e {
            GicmError::NotFound(_) => GicmError::UnknownItem(spec.clone()),
            other => other,
        })?;
        ids.push(item.id().to_string());
    }

    for id in &ids {
        if stack.add(&ctx.registry, id)? {
            println!("+ {}", id);
        } else {
            println!("  {} (already in stack)", id);
        }
    }

    if with_deps {
        // Dependencies of newly added dependencies are pulled in too
        loop {
            let missing: Vec<String> = stack
                .missing_dependencies(&ctx.registry)
                .iter()
                .map(|item| item.id().to_string())
                .collect();
            if missing.is_empty() {
                break;
            }
            for id in missing {
                stack.add(&ctx.registry, &id)?;
                println!("+ {} (dependency)", id);
            }
        }
    }

    store.save(&stack)?;
    print_summary(ctx, &stack);
    Ok(())
}

fn remove(ctx: &Context, ids: &[String]) -> Result<()> {
    let store = ctx.stack_store();
    let mut stack = store.load()?;

    for id in ids {
        if stack.remove(id) {
            println!("- {}", id);
        } else {
            println!("  {} (not in stack)", id);
        }
    }

    store.save(&stack)?;
    print_summary(ctx, &stack);
    Ok(())
}

fn show(ctx: &Context) -> Result<()> {
    let store = ctx.stack_store();
    let stack = store.load()?;

    if stack.is_empty() {
        println!("Stack is empty. Add items with 'gicm stack add <id>'.");
        return Ok(());
    }

    println!("{:<8} {:<32} {:>8}", "KIND", "ID", "TOKENS");
    println!("{}", "-".repeat(50));
    for id in stack.ids() {
        match ctx.registry.get(id) {
            Some(item) => println!("{:<8} {:<32} {:>8}", item.kind, id, item.token_cost()),
            None => println!("{:<8} {:<32} {:>8}", "?", id, "-"),
        }
    }
    print_summary(ctx, &stack);

    let missing = stack.missing_dependencies(&ctx.registry);
    if !missing.is_empty() {
        println!("\nMissing dependencies:");
        for item in missing {
            println!("  - {} ({})", item.id(), item.kind);
        }
        println!("Run 'gicm stack add --with-deps <id>' to include them.");
    }

    if let Some(updated) = store.updated_at()? {
        println!("\nLast updated: {}", updated);
    }

    Ok(())
}

fn clear(ctx: &Context) -> Result<()> {
    let store = ctx.stack_store();
    store.save(&Stack::new())?;
    println!("Stack cleared.");
    Ok(())
}

fn share(ctx: &Context) -> Result<()> {
    let stack = ctx.stack_store().load()?;
    let token = stack::encode(&stack)?;

    println!("Token: {}", token);
    println!("URL:   {}", ctx.config.share_url(&token));
    Ok(())
}

fn import(ctx: &Context, token: &str) -> Result<()> {
    let raw_len = match stack::codec::decode_ids(token) {
        Ok(ids) => Stack::from_ids(ids).len(),
        Err(e) => {
            eprintln!("Could not import stack: the shared token is not valid.");
            eprintln!("Your current stack was left unchanged.");
            return Err(e);
        }
    };

    let stack = stack::decode(token, &ctx.registry)?;
    let dropped = raw_len - stack.len();

    ctx.stack_store().save(&stack)?;
    println!("Imported {} item(s).", stack.len());
    if dropped > 0 {
        println!(
            "{} item(s) are no longer in the registry and were skipped.",
            dropped
        );
    }
    print_summary(ctx, &stack);
    Ok(())
}

fn install(ctx: &Context, combined: bool) -> Result<()> {
    let stack = ctx.stack_store().load()?;
    let commands = ctx.install_commands();

    if combined {
        match commands.combined_command(&stack, &ctx.registry) {
            Some(command) => println!("{}", command),
            None => println!("Stack is empty."),
        }
        return Ok(());
    }

    let lines = commands.commands_for_stack(&stack, &ctx.registry);
    if lines.is_empty() {
        println!("Stack is empty.");
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn print_summary(ctx: &Context, stack: &Stack) {
    println!(
        "\n{} item(s), {} tokens",
        stack.len(),
        stack.total_cost(&ctx.registry)
    );
}
