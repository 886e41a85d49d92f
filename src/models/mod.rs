mod budget;
mod category;
mod transaction;

pub(crate) use budget::{Budget, DEFAULT_BUDGET_LIMIT, MAX_BUDGET_LIMIT};
pub(crate) use category::Category;
pub(crate) use transaction::Transaction;
