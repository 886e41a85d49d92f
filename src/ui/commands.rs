use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{added_message, App, Focus};
use crate::ledger::Ledger;
use crate::models::Category;
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add transaction (e.g. :add 12.50 Food)",
        cmd_add,
        r
    );
    register_command!("a", "Add transaction (e.g. :a 12.50 Food)", cmd_add, r);
    register_command!("budget", "Set budget (e.g. :budget 2500)", cmd_budget, r);
    register_command!("b", "Set budget (e.g. :b 2500)", cmd_budget, r);
    register_command!("history", "Focus transaction history", cmd_history, r);
    register_command!("form", "Focus the Add Transaction form", cmd_form, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    ledger: &mut Ledger,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_history(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.focus = Focus::History;
    Ok(())
}

fn cmd_form(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.focus = Focus::Amount;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    // First token is the amount, the rest names the category
    let mut parts = args.splitn(2, ' ');
    let amount = parts.next().unwrap_or("").trim();
    let category_name = parts.next().unwrap_or("").trim();
    if amount.is_empty() || category_name.is_empty() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        app.set_status(format!(
            "Usage: :add <amount> <category>. Categories: {}",
            names.join(", ")
        ));
        return Ok(());
    }

    let Some(category) = Category::parse(category_name) else {
        app.set_status(format!("Unknown category: '{category_name}'"));
        return Ok(());
    };

    let added = ledger
        .add_transaction(amount, category.as_str())
        .map(|txn| (txn.amount, txn.category.clone()));
    match added {
        Ok((amount, category)) => {
            app.set_status(added_message(ledger, amount, &category));
            app.follow_newest(ledger.transactions().len());
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!(
            "Usage: :budget <amount>. Current budget: {}",
            format_amount(ledger.budget().limit)
        ));
        return Ok(());
    }

    match ledger.set_budget(args) {
        Ok(()) => app.set_status(format!(
            "Budget set to {}",
            format_amount(ledger.budget().limit)
        )),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
