use anyhow::Result;
use rust_decimal::Decimal;

use crate::ledger::{AmountInput, Ledger, LedgerError};
use crate::models::DEFAULT_BUDGET_LIMIT;

/// Start-up options. Nothing is read from disk or the environment; the
/// command line is the only source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) initial_budget: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_budget: DEFAULT_BUDGET_LIMIT,
        }
    }
}

impl Settings {
    /// Pull `--budget <amount>` out of `args`, returning the settings and the
    /// remaining arguments in their original order.
    pub(crate) fn from_args(args: &[String]) -> Result<(Self, Vec<String>)> {
        let mut settings = Self::default();
        let mut rest = Vec::with_capacity(args.len());
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let value = if arg == "--budget" {
                match iter.next() {
                    Some(v) => v.as_str(),
                    None => anyhow::bail!("--budget requires an amount"),
                }
            } else if let Some(v) = arg.strip_prefix("--budget=") {
                v
            } else {
                rest.push(arg.clone());
                continue;
            };
            settings.initial_budget = parse_limit(value)?;
        }

        Ok((settings, rest))
    }

    /// Build the ledger the application will own for its whole run.
    pub(crate) fn build_ledger(&self) -> Result<Ledger, LedgerError> {
        Ledger::with_budget(self.initial_budget)
    }
}

fn parse_limit(raw: &str) -> Result<Decimal, LedgerError> {
    match raw.parse_amount() {
        Some(v) if v > Decimal::ZERO => Ok(v),
        _ => Err(LedgerError::InvalidBudget(raw.to_string())),
    }
}
