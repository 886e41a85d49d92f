#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

fn ledger() -> Ledger {
    Ledger::new().with_clock(fixed_day)
}

fn ledger_with(limit: Decimal) -> Ledger {
    Ledger::with_budget(limit).unwrap().with_clock(fixed_day)
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_new_ledger_is_empty() {
    let l = ledger();
    assert!(l.transactions().is_empty());
    assert_eq!(l.budget().limit, dec!(2000));
    assert_eq!(l.spent(), Decimal::ZERO);
    assert_eq!(l.remaining(), dec!(2000));
    assert!(!l.alert_active());
    assert!(l.alert_message().is_none());
    assert!(l.breakdown().is_empty());
}

#[test]
fn test_with_budget_overrides_default() {
    let l = ledger_with(dec!(350));
    assert_eq!(l.budget().limit, dec!(350));
    assert_eq!(l.remaining(), dec!(350));
}

#[test]
fn test_with_budget_rejects_non_positive() {
    assert_eq!(
        Ledger::with_budget(dec!(0)).err(),
        Some(LedgerError::InvalidBudget("0".into()))
    );
    assert!(Ledger::with_budget(-5).is_err());
    assert!(Ledger::with_budget("lots").is_err());
}

// ── Scenarios ─────────────────────────────────────────────────

#[test]
fn test_single_expense_under_threshold() {
    let mut l = ledger();
    l.add_transaction(500, "Food").unwrap();
    assert_eq!(l.spent(), dec!(500));
    assert_eq!(l.remaining(), dec!(1500));
    assert!(!l.alert_active());
}

#[test]
fn test_crossing_threshold_raises_alert() {
    let mut l = ledger();
    l.add_transaction(1000, "Food").unwrap();
    l.add_transaction(900, "Transport").unwrap();
    assert_eq!(l.spent(), dec!(1900));
    assert_eq!(l.remaining(), dec!(100));
    assert!(l.alert_active());
    assert_eq!(l.alert_message(), Some(ALERT_MESSAGE));
}

#[test]
fn test_exactly_ninety_percent_is_not_an_alert() {
    let mut l = ledger_with(dec!(1000));
    l.add_transaction(900, "Food").unwrap();
    assert_eq!(l.spent(), dec!(900));
    assert_eq!(l.remaining(), dec!(100));
    assert!(!l.alert_active());

    l.add_transaction("0.01", "Food").unwrap();
    assert!(l.alert_active());
}

#[test]
fn test_non_numeric_amount_rejected() {
    let mut l = ledger();
    l.add_transaction(200, "Food").unwrap();
    let before = l.derived().clone();

    let err = l.add_transaction("abc", "Food").unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount("abc".into()));
    assert_eq!(l.spent(), dec!(200));
    assert_eq!(l.transactions().len(), 1);
    assert_eq!(l.derived(), &before);
}

#[test]
fn test_breakdown_groups_in_first_seen_order() {
    let mut l = ledger();
    l.add_transaction(100, "Food").unwrap();
    l.add_transaction(50, "Food").unwrap();
    l.add_transaction(30, "Transport").unwrap();

    let b = l.breakdown();
    assert_eq!(b.labels(), vec!["Food", "Transport"]);
    assert_eq!(b.values(), vec![dec!(150), dec!(30)]);
    assert_eq!(b.get("Food"), Some(dec!(150)));
    assert_eq!(b.get("Utilities"), None);
}

// ── add_transaction ───────────────────────────────────────────

#[test]
fn test_ids_are_unique_and_increasing() {
    let mut l = ledger();
    let a = l.add_transaction(1, "Food").unwrap().id;
    let _ = l.add_transaction("nope", "Food");
    let b = l.add_transaction(2, "Food").unwrap().id;
    let c = l.add_transaction(3, "Other").unwrap().id;
    assert!(a < b && b < c);
    assert_eq!((a, b, c), (1, 2, 3));
}

#[test]
fn test_transaction_fields_recorded() {
    let mut l = ledger();
    let txn = l.add_transaction("42.50", "Entertainment").unwrap().clone();
    assert_eq!(txn.amount, dec!(42.50));
    assert_eq!(txn.category, "Entertainment");
    assert_eq!(txn.date, fixed_day());
    assert_eq!(l.transactions(), &[txn]);
}

#[test]
fn test_insertion_order_preserved() {
    let mut l = ledger();
    for (amt, cat) in [(5, "Other"), (1, "Food"), (3, "Utilities")] {
        l.add_transaction(amt, cat).unwrap();
    }
    let cats: Vec<&str> = l.transactions().iter().map(|t| t.category.as_str()).collect();
    assert_eq!(cats, vec!["Other", "Food", "Utilities"]);
}

#[test]
fn test_category_is_not_validated() {
    let mut l = ledger();
    l.add_transaction(12, "Pets").unwrap();
    assert_eq!(l.breakdown().labels(), vec!["Pets"]);
}

#[test]
fn test_amount_input_forms() {
    let mut l = ledger();
    l.add_transaction(10, "Food").unwrap();
    l.add_transaction(10_i64, "Food").unwrap();
    l.add_transaction(2.5_f64, "Food").unwrap();
    l.add_transaction(" 7.25 ", "Food").unwrap();
    l.add_transaction(String::from("-3"), "Food").unwrap();
    l.add_transaction(dec!(0.25), "Food").unwrap();
    l.add_transaction("1e2", "Food").unwrap();
    assert_eq!(l.spent(), dec!(127));
}

#[test]
fn test_invalid_amount_inputs() {
    let mut l = ledger();
    for raw in ["", "   ", "12abc", "1,000", "NaN", "inf", "$5"] {
        assert!(
            matches!(l.add_transaction(raw, "Food"), Err(LedgerError::InvalidAmount(_))),
            "expected rejection for {raw:?}"
        );
    }
    assert!(l.add_transaction(f64::NAN, "Food").is_err());
    assert!(l.add_transaction(f64::INFINITY, "Food").is_err());
    assert!(l.add_transaction(f64::NEG_INFINITY, "Food").is_err());
    assert!(l.transactions().is_empty());
    assert_eq!(l.spent(), Decimal::ZERO);
}

#[test]
fn test_overflowing_amount_rejected() {
    let mut l = ledger();
    l.add_transaction(Decimal::MAX - dec!(5000), "Food").unwrap();
    let err = l.add_transaction(Decimal::MAX, "Food").unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
    assert_eq!(l.transactions().len(), 1);
}

// ── set_budget ────────────────────────────────────────────────

#[test]
fn test_set_budget_recomputes() {
    let mut l = ledger();
    l.add_transaction(950, "Food").unwrap();
    assert!(!l.alert_active());

    l.set_budget(1000).unwrap();
    assert_eq!(l.budget().limit, dec!(1000));
    assert_eq!(l.remaining(), dec!(50));
    assert!(l.alert_active());

    l.set_budget("5000").unwrap();
    assert!(!l.alert_active());
    assert_eq!(l.remaining(), dec!(4050));
}

#[test]
fn test_set_budget_rejects_and_keeps_state() {
    let mut l = ledger();
    l.add_transaction(100, "Food").unwrap();
    let before = l.derived().clone();

    assert_eq!(
        l.set_budget(0),
        Err(LedgerError::InvalidBudget("0".into()))
    );
    assert_eq!(
        l.set_budget("-20"),
        Err(LedgerError::InvalidBudget("-20".into()))
    );
    assert_eq!(
        l.set_budget("xyz"),
        Err(LedgerError::InvalidBudget("xyz".into()))
    );
    assert!(l.set_budget(f64::NAN).is_err());

    assert_eq!(l.budget().limit, dec!(2000));
    assert_eq!(l.derived(), &before);
}

#[test]
fn test_set_budget_rejects_limit_above_cap() {
    let mut l = ledger();
    assert_eq!(
        l.set_budget(Decimal::MAX),
        Err(LedgerError::InvalidBudget(Decimal::MAX.to_string()))
    );
    assert_eq!(l.budget().limit, dec!(2000));
    assert!(Ledger::with_budget(Decimal::MAX).is_err());
}

#[test]
fn test_largest_budget_still_accepts_small_amounts() {
    let mut l = ledger();
    l.set_budget(MAX_BUDGET_LIMIT).unwrap();
    l.add_transaction(1, "Food").unwrap();
    l.add_transaction("-0.50", "Food").unwrap();
    assert_eq!(l.spent(), dec!(0.50));
    assert_eq!(l.remaining(), MAX_BUDGET_LIMIT - dec!(0.50));
    assert!(!l.alert_active());
}

// ── Derived state ─────────────────────────────────────────────

#[test]
fn test_sum_ignores_sign_and_order() {
    let amounts = [dec!(120.10), dec!(-40), dec!(0), dec!(75.55), dec!(-0.65)];
    let expected: Decimal = amounts.iter().sum();

    let mut forward = ledger();
    let mut reverse = ledger();
    for a in amounts {
        forward.add_transaction(a, "Food").unwrap();
    }
    for a in amounts.iter().rev() {
        reverse.add_transaction(*a, "Other").unwrap();
    }
    assert_eq!(forward.spent(), expected);
    assert_eq!(reverse.spent(), expected);
}

#[test]
fn test_remaining_goes_negative() {
    let mut l = ledger_with(dec!(100));
    l.add_transaction(250, "Utilities").unwrap();
    assert_eq!(l.remaining(), dec!(-150));
    assert!(l.over_budget());
    assert!(l.alert_active());
}

#[test]
fn test_alert_clears_when_spending_drops() {
    let mut l = ledger_with(dec!(100));
    l.add_transaction(95, "Food").unwrap();
    assert!(l.alert_active());

    l.add_transaction(-20, "Food").unwrap();
    assert!(!l.alert_active());
    assert!(l.alert_message().is_none());
}

#[test]
fn test_over_budget_is_strict() {
    let mut l = ledger_with(dec!(100));
    l.add_transaction(100, "Food").unwrap();
    assert!(!l.over_budget());
    l.add_transaction("0.01", "Food").unwrap();
    assert!(l.over_budget());
}

#[test]
fn test_breakdown_total_matches_spent() {
    let mut l = ledger();
    for (amt, cat) in [
        (dec!(12.5), "Food"),
        (dec!(-4), "Transport"),
        (dec!(60), "Entertainment"),
        (dec!(7.5), "Food"),
        (dec!(30), "Transport"),
    ] {
        l.add_transaction(amt, cat).unwrap();
    }
    assert_eq!(l.breakdown().total(), l.spent());
    assert_eq!(l.breakdown().len(), 3);
    assert_eq!(l.breakdown().get("Transport"), Some(dec!(26)));
}

#[test]
fn test_category_summing_to_zero_stays_present() {
    let mut l = ledger();
    l.add_transaction(10, "Food").unwrap();
    l.add_transaction(-10, "Food").unwrap();
    assert_eq!(l.breakdown().labels(), vec!["Food"]);
    assert_eq!(l.breakdown().get("Food"), Some(Decimal::ZERO));
}

#[test]
fn test_breakdown_shares() {
    let mut l = ledger();
    l.add_transaction(75, "Food").unwrap();
    l.add_transaction(25, "Transport").unwrap();
    let shares = l.breakdown().shares();
    assert_eq!(shares, vec![("Food", dec!(75)), ("Transport", dec!(25))]);
}

#[test]
fn test_breakdown_shares_use_magnitudes() {
    let mut l = ledger();
    l.add_transaction(30, "Food").unwrap();
    l.add_transaction(-10, "Other").unwrap();
    let shares = l.breakdown().shares();
    assert_eq!(shares, vec![("Food", dec!(75)), ("Other", dec!(25))]);
}

#[test]
fn test_breakdown_shares_empty_when_zero() {
    let mut l = ledger();
    assert!(l.breakdown().shares().is_empty());
    l.add_transaction(0, "Food").unwrap();
    assert!(l.breakdown().shares().is_empty());
}

#[test]
fn test_reads_are_idempotent() {
    let mut l = ledger();
    l.add_transaction(1234, "Food").unwrap();
    l.add_transaction(600, "Utilities").unwrap();
    assert_eq!(l.spent(), l.spent());
    assert_eq!(l.remaining(), l.remaining());
    assert_eq!(l.alert_active(), l.alert_active());
    assert_eq!(l.breakdown(), l.breakdown());
    assert_eq!(l.transactions(), l.transactions());
}

#[test]
fn test_cached_state_matches_fresh_derivation() {
    let mut l = ledger();
    l.add_transaction(400, "Food").unwrap();
    l.set_budget(450).unwrap();
    l.add_transaction(20, "Other").unwrap();
    assert_eq!(l.derived(), &derive_state(l.transactions(), &l.budget()));
}

#[test]
fn test_derive_state_empty() {
    let state = derive_state(&[], &Budget::new(dec!(10)));
    assert_eq!(state.spent, Decimal::ZERO);
    assert_eq!(state.remaining, dec!(10));
    assert!(!state.alert_active);
    assert!(state.breakdown.is_empty());
}

#[test]
fn test_alert_threshold_value() {
    assert_eq!(ALERT_THRESHOLD, dec!(0.9));
}
