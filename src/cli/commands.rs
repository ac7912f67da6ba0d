//! Command handlers for the expense shell.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::table;
use crate::ledger::Category;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry {
        name: "add",
        description: "Record a new expense",
        usage: "add [<description> <amount> [date] [category]]",
        handler: cmd_add,
    });
    registry.register(CommandEntry {
        name: "remove",
        description: "Delete a recorded expense",
        usage: "remove [index]",
        handler: cmd_remove,
    });
    registry.register(CommandEntry {
        name: "list",
        description: "Show all expenses with the running total",
        usage: "list",
        handler: cmd_list,
    });
    registry.register(CommandEntry {
        name: "group",
        description: "Show totals grouped by category",
        usage: "group",
        handler: cmd_group,
    });
    registry.register(CommandEntry {
        name: "total",
        description: "Show the running total",
        usage: "total",
        handler: cmd_total,
    });
    registry.register(CommandEntry {
        name: "help",
        description: "Show command help",
        usage: "help [command]",
        handler: cmd_help,
    });
    registry.register(CommandEntry {
        name: "exit",
        description: "Leave the shell",
        usage: "exit",
        handler: cmd_exit,
    });
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return context.run_add_wizard();
    }
    if args.len() < 2 || args.len() > 4 {
        return Err(CommandError::InvalidArguments(
            "usage: add <description> <amount> [date] [category]".into(),
        ));
    }

    let description = args[0];
    let amount = args[1];
    let date = match args.get(2) {
        Some(raw) => (*raw).to_string(),
        None => context.today(),
    };
    let category = match args.get(3) {
        Some(raw) => raw.parse::<Category>()?,
        None => Category::Other,
    };

    context.add_expense(description, amount, &date, category)
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = match args.first() {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments("index must be numeric".into())
        })?,
        None => match context.select_record_index()? {
            Some(index) => index,
            None => return Ok(()),
        },
    };
    context.remove_record_at(index)
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let rendered = table::render_expenses(context.ledger.records(), context.ledger.total());
    println!("{rendered}");
    Ok(())
}

fn cmd_group(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.ledger.totals_by_category();
    if totals.is_empty() {
        context.print_warning("No expenses recorded.");
        return Ok(());
    }
    println!("{}", table::render_category_totals(&totals));
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    cli_io::print_info(format!("Total: {}", context.ledger.total()));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        },
        None => context.print_help_overview(),
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
