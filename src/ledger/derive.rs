use rust_decimal::Decimal;

use crate::models::{Budget, Transaction};

/// Fraction of the budget that spending must exceed before the alert shows.
pub(crate) const ALERT_THRESHOLD: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

pub(crate) const ALERT_MESSAGE: &str = "Warning: You've spent over 90% of your budget!";

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Per-category totals in the order each category first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Breakdown {
    entries: Vec<(String, Decimal)>,
}

impl Breakdown {
    pub(crate) fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut entries: Vec<(String, Decimal)> = Vec::new();
        for txn in transactions {
            match entries.iter_mut().find(|(name, _)| *name == txn.category) {
                Some((_, total)) => *total += txn.amount,
                None => entries.push((txn.category.clone(), txn.amount)),
            }
        }
        Self { entries }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.entries.iter().map(|(name, amt)| (name.as_str(), *amt))
    }

    /// Category labels, parallel to [`Breakdown::values`].
    pub(crate) fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub(crate) fn values(&self) -> Vec<Decimal> {
        self.entries.iter().map(|(_, amt)| *amt).collect()
    }

    pub(crate) fn get(&self, category: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amt)| *amt)
    }

    pub(crate) fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, amt)| *amt).sum()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Each category's percentage of the summed magnitudes, so refunds in one
    /// category never produce negative slices. Empty when nothing has size.
    pub(crate) fn shares(&self) -> Vec<(&str, Decimal)> {
        let magnitude: Decimal = self.entries.iter().map(|(_, amt)| amt.abs()).sum();
        if magnitude.is_zero() {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|(name, amt)| (name.as_str(), amt.abs() / magnitude * HUNDRED))
            .collect()
    }
}

/// Everything the page shows that is computed rather than entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DerivedState {
    pub(crate) spent: Decimal,
    pub(crate) remaining: Decimal,
    pub(crate) alert_active: bool,
    pub(crate) over_budget: bool,
    pub(crate) breakdown: Breakdown,
}

/// Recompute totals from scratch. Never patches a previous result.
pub(crate) fn derive_state(transactions: &[Transaction], budget: &Budget) -> DerivedState {
    let spent: Decimal = transactions.iter().map(|t| t.amount).sum();
    DerivedState {
        spent,
        remaining: budget.limit - spent,
        alert_active: spent > budget.limit * ALERT_THRESHOLD,
        over_budget: spent > budget.limit,
        breakdown: Breakdown::from_transactions(transactions),
    }
}
