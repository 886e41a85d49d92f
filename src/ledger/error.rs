use thiserror::Error;

/// Rejections raised by ledger mutations. Both leave the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum LedgerError {
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),
    #[error("Invalid budget: '{0}' (must be greater than zero)")]
    InvalidBudget(String),
}
