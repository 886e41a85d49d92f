use rust_decimal::Decimal;

pub(crate) const DEFAULT_BUDGET_LIMIT: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Largest accepted limit: half of `Decimal::MAX`, leaving the other half as
/// headroom for recorded amounts.
pub(crate) const MAX_BUDGET_LIMIT: Decimal =
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX >> 1, false, 0);

/// The single active spending limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    pub(crate) limit: Decimal,
}

impl Budget {
    pub(crate) fn new(limit: Decimal) -> Self {
        Self { limit }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new(DEFAULT_BUDGET_LIMIT)
    }
}
