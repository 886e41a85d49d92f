use rust_decimal::Decimal;
use std::str::FromStr;

/// Raw input that may or may not hold a usable currency amount.
///
/// `parse_amount` returns `None` when the value has no finite decimal reading;
/// `describe` renders the raw value for error messages.
pub(crate) trait AmountInput {
    fn parse_amount(&self) -> Option<Decimal>;
    fn describe(&self) -> String;
}

impl AmountInput for Decimal {
    fn parse_amount(&self) -> Option<Decimal> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for &str {
    fn parse_amount(&self) -> Option<Decimal> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
    }

    fn describe(&self) -> String {
        (*self).to_string()
    }
}

impl AmountInput for String {
    fn parse_amount(&self) -> Option<Decimal> {
        self.as_str().parse_amount()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl AmountInput for f64 {
    fn parse_amount(&self) -> Option<Decimal> {
        if !self.is_finite() {
            return None;
        }
        Decimal::try_from(*self).ok()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for i64 {
    fn parse_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl AmountInput for i32 {
    fn parse_amount(&self) -> Option<Decimal> {
        Some(Decimal::from(*self))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
