use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transaction {
    pub(crate) id: u64,
    pub(crate) amount: Decimal,
    pub(crate) category: String,
    pub(crate) date: NaiveDate,
}

impl Transaction {
    pub(crate) fn is_income(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub(crate) fn is_expense(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub(crate) fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }

    /// Date as shown in the history table, e.g. `03/14/2025`.
    pub(crate) fn display_date(&self) -> String {
        self.date.format("%m/%d/%Y").to_string()
    }
}
