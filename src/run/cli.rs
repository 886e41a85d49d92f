use anyhow::Result;
use std::io::{self, Write};

use crate::ledger::{Ledger, ALERT_THRESHOLD};
use crate::models::Category;
use crate::ui::util::{format_amount, format_share, truncate};

pub(crate) fn as_cli(args: &[String], ledger: &mut Ledger) -> Result<()> {
    match args[0].as_str() {
        "summary" | "s" => cli_summary(&args[1..], ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetledger {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Budget Ledger — track spending against a single budget");
    println!();
    println!("Usage: budgetledger [--budget <amount>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive board");
    println!("  summary                       Print totals, breakdown and history");
    println!("    --add <amount>:<category>   Record a transaction (repeatable, in order)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --budget <amount>             Starting budget (default: 2000)");
    println!();
    let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    println!("Categories: {}", names.join(", "));
}

fn cli_summary(args: &[String], ledger: &mut Ledger) -> Result<()> {
    for spec in parse_add_flags(args)? {
        let (amount, category) = parse_add_spec(&spec)?;
        ledger.add_transaction(amount, category.as_str())?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, ledger)?;
    out.flush()?;
    Ok(())
}

/// Collect every `--add` value, in order. Anything else is an error.
fn parse_add_flags(args: &[String]) -> Result<Vec<String>> {
    let mut specs = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--add" {
            match iter.next() {
                Some(v) => specs.push(v.clone()),
                None => anyhow::bail!("--add requires <amount>:<category>"),
            }
        } else if let Some(v) = arg.strip_prefix("--add=") {
            specs.push(v.to_string());
        } else {
            anyhow::bail!("Unexpected argument: {arg}");
        }
    }
    Ok(specs)
}

/// Split `AMOUNT:CATEGORY`. The category must be one of the form's choices;
/// the amount is left raw for the ledger to judge.
fn parse_add_spec(spec: &str) -> Result<(&str, Category)> {
    let Some((amount, name)) = spec.rsplit_once(':') else {
        anyhow::bail!("Expected <amount>:<category>, got '{spec}'");
    };
    let category = Category::parse(name)
        .ok_or_else(|| anyhow::anyhow!("Unknown category: '{name}'"))?;
    Ok((amount, category))
}

pub(crate) fn write_summary(out: &mut impl Write, ledger: &Ledger) -> io::Result<()> {
    let transactions = ledger.transactions();
    let state = ledger.derived();

    writeln!(out, "Budget Ledger")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Budget:     {}", format_amount(ledger.budget().limit))?;
    writeln!(out, "  Spent:      {}", format_amount(state.spent))?;
    writeln!(out, "  Remaining:  {}", format_amount(state.remaining))?;
    writeln!(out, "  Total Txns: {}", transactions.len())?;

    if let Some(message) = ledger.alert_message() {
        writeln!(out)?;
        writeln!(out, "! {message}")?;
    } else {
        writeln!(
            out,
            "  Alert at:   {}",
            format_amount(ledger.budget().limit * ALERT_THRESHOLD)
        )?;
    }

    let breakdown = &state.breakdown;
    if !breakdown.is_empty() {
        let shares = breakdown.shares();
        writeln!(out)?;
        writeln!(out, "Spending Breakdown:")?;
        for (i, (name, amount)) in breakdown.iter().enumerate() {
            let share = shares
                .get(i)
                .map(|(_, pct)| format_share(*pct))
                .unwrap_or_default();
            writeln!(
                out,
                "  {:<20} {:>14} {:>5}",
                truncate(name, 20),
                format_amount(amount),
                share
            )?;
        }
        writeln!(
            out,
            "  {:<20} {:>14}",
            "Total",
            format_amount(breakdown.total())
        )?;
    }

    if !transactions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Transaction History:")?;
        writeln!(out, "  {:<12} {:<20} {:>14}", "Date", "Category", "Amount")?;
        writeln!(out, "  {}", "─".repeat(48))?;
        for txn in transactions {
            writeln!(
                out,
                "  {:<12} {:<20} {:>14}",
                txn.display_date(),
                truncate(&txn.category, 20),
                format_amount(txn.amount)
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
