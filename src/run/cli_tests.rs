#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn render(ledger: &Ledger) -> String {
    let mut buf = Vec::new();
    write_summary(&mut buf, ledger).unwrap();
    String::from_utf8(buf).unwrap()
}

// ── Argument parsing ──────────────────────────────────────────

#[test]
fn test_parse_add_flags_in_order() {
    let specs = parse_add_flags(&args(&["--add", "5:Food", "--add=7:Other"])).unwrap();
    assert_eq!(specs, vec!["5:Food".to_string(), "7:Other".to_string()]);
}

#[test]
fn test_parse_add_flags_rejects_stray_args() {
    assert!(parse_add_flags(&args(&["--add"])).is_err());
    let err = parse_add_flags(&args(&["food"])).unwrap_err();
    assert_eq!(err.to_string(), "Unexpected argument: food");
}

#[test]
fn test_parse_add_spec() {
    let (amount, category) = parse_add_spec("-12.5:transport").unwrap();
    assert_eq!(amount, "-12.5");
    assert_eq!(category, Category::Transport);

    assert!(parse_add_spec("12.5").is_err());
    let err = parse_add_spec("3:Pets").unwrap_err();
    assert_eq!(err.to_string(), "Unknown category: 'Pets'");
}

// ── summary ───────────────────────────────────────────────────

#[test]
fn test_summary_applies_adds() {
    let mut ledger = Ledger::new().with_clock(fixed_day);
    cli_summary(
        &args(&["--add", "1000:Food", "--add", "900:Transport"]),
        &mut ledger,
    )
    .unwrap();
    assert_eq!(ledger.spent(), dec!(1900));
    assert!(ledger.alert_active());
}

#[test]
fn test_summary_stops_on_invalid_amount() {
    let mut ledger = Ledger::new().with_clock(fixed_day);
    let err = cli_summary(&args(&["--add", "5:Food", "--add", "abc:Food"]), &mut ledger)
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid amount: 'abc'");
    assert_eq!(ledger.spent(), dec!(5));
}

#[test]
fn test_unknown_command_errors() {
    let mut ledger = Ledger::new();
    assert!(as_cli(&args(&["frobnicate"]), &mut ledger).is_err());
}

#[test]
fn test_write_summary_quiet() {
    let mut ledger = Ledger::new().with_clock(fixed_day);
    ledger.add_transaction(500, "Food").unwrap();
    let text = render(&ledger);

    assert!(text.contains("  Budget:     $2,000.00"));
    assert!(text.contains("  Spent:      $500.00"));
    assert!(text.contains("  Remaining:  $1,500.00"));
    assert!(text.contains("  Alert at:   $1,800.00"));
    assert!(!text.contains("Warning"));
    assert!(text.contains("03/14/2025"));
}

#[test]
fn test_write_summary_alert_and_breakdown() {
    let mut ledger = Ledger::new().with_clock(fixed_day);
    ledger.add_transaction(100, "Food").unwrap();
    ledger.add_transaction(50, "Food").unwrap();
    ledger.add_transaction(1750, "Transport").unwrap();
    let text = render(&ledger);

    assert!(text.contains("! Warning: You've spent over 90% of your budget!"));
    let food = text.find("  Food ").unwrap();
    let transport = text.find("  Transport ").unwrap();
    assert!(food < transport);
    assert!(text.contains("$150.00"));
    assert!(text.contains("92%"));
    assert!(text.contains(&format!("  {:<20} {:>14}", "Total", "$1,900.00")));
}

#[test]
fn test_write_summary_empty_ledger() {
    let text = render(&Ledger::new());
    assert!(text.contains("  Total Txns: 0"));
    assert!(!text.contains("Spending Breakdown"));
    assert!(!text.contains("Transaction History"));
}
