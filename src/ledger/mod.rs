//! The budget ledger: an append-only list of transactions plus one spending
//! limit, with totals re-derived after every successful mutation.

mod amount;
mod derive;
mod error;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::{Budget, Transaction, MAX_BUDGET_LIMIT};

pub(crate) use amount::AmountInput;
pub(crate) use derive::{derive_state, Breakdown, DerivedState, ALERT_MESSAGE, ALERT_THRESHOLD};
pub(crate) use error::LedgerError;

pub(crate) struct Ledger {
    transactions: Vec<Transaction>,
    budget: Budget,
    next_id: u64,
    clock: fn() -> NaiveDate,
    derived: DerivedState,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::from_budget(Budget::default())
    }

    /// Start with a caller-chosen limit instead of the default.
    pub(crate) fn with_budget(limit: impl AmountInput) -> Result<Self, LedgerError> {
        let limit = validate_limit(&limit)?;
        Ok(Self::from_budget(Budget::new(limit)))
    }

    /// Replace the source of transaction dates.
    #[cfg(test)]
    pub(crate) fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }

    fn from_budget(budget: Budget) -> Self {
        Self {
            transactions: Vec::new(),
            budget,
            next_id: 1,
            clock: today,
            derived: derive_state(&[], &budget),
        }
    }

    pub(crate) fn add_transaction(
        &mut self,
        amount: impl AmountInput,
        category: &str,
    ) -> Result<&Transaction, LedgerError> {
        let Some(value) = amount.parse_amount() else {
            warn!(input = %amount.describe(), "rejected non-numeric amount");
            return Err(LedgerError::InvalidAmount(amount.describe()));
        };
        if !self.fits(value.abs(), self.budget.limit) {
            warn!(input = %amount.describe(), "rejected amount outside representable range");
            return Err(LedgerError::InvalidAmount(amount.describe()));
        }

        let txn = Transaction {
            id: self.next_id,
            amount: value,
            category: category.to_string(),
            date: (self.clock)(),
        };
        self.next_id += 1;
        debug!(id = txn.id, amount = %txn.amount, category = %txn.category, "transaction added");
        self.transactions.push(txn);
        self.recompute();

        let idx = self.transactions.len() - 1;
        Ok(&self.transactions[idx])
    }

    pub(crate) fn set_budget(&mut self, limit: impl AmountInput) -> Result<(), LedgerError> {
        let value = validate_limit(&limit)?;
        if !self.fits(Decimal::ZERO, value) {
            warn!(input = %limit.describe(), "rejected budget outside representable range");
            return Err(LedgerError::InvalidBudget(limit.describe()));
        }
        debug!(old = %self.budget.limit, new = %value, "budget changed");
        self.budget = Budget::new(value);
        self.recompute();
        Ok(())
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn budget(&self) -> Budget {
        self.budget
    }

    pub(crate) fn spent(&self) -> Decimal {
        self.derived.spent
    }

    pub(crate) fn remaining(&self) -> Decimal {
        self.derived.remaining
    }

    pub(crate) fn alert_active(&self) -> bool {
        self.derived.alert_active
    }

    pub(crate) fn alert_message(&self) -> Option<&'static str> {
        self.derived.alert_active.then_some(ALERT_MESSAGE)
    }

    pub(crate) fn over_budget(&self) -> bool {
        self.derived.over_budget
    }

    pub(crate) fn breakdown(&self) -> &Breakdown {
        &self.derived.breakdown
    }

    pub(crate) fn derived(&self) -> &DerivedState {
        &self.derived
    }

    fn recompute(&mut self) {
        let was_alerting = self.derived.alert_active;
        self.derived = derive_state(&self.transactions, &self.budget);
        if self.derived.alert_active != was_alerting {
            info!(
                alert = self.derived.alert_active,
                spent = %self.derived.spent,
                limit = %self.budget.limit,
                "budget alert level changed"
            );
        }
    }

    /// Whether every total stays representable once `extra` more magnitude is
    /// recorded against a budget of `limit`. Bounds spent, remaining and each
    /// category sum by the sum of magnitudes plus the limit.
    fn fits(&self, extra: Decimal, limit: Decimal) -> bool {
        self.transactions
            .iter()
            .try_fold(extra, |acc, t| acc.checked_add(t.abs_amount()))
            .and_then(|magnitude| magnitude.checked_add(limit))
            .is_some()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_limit(limit: &impl AmountInput) -> Result<Decimal, LedgerError> {
    match limit.parse_amount() {
        Some(value) if value > Decimal::ZERO && value <= MAX_BUDGET_LIMIT => Ok(value),
        _ => {
            warn!(input = %limit.describe(), "rejected budget limit");
            Err(LedgerError::InvalidBudget(limit.describe()))
        }
    }
}

#[cfg(test)]
mod tests;
