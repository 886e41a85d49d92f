use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::models::Category;
use crate::ui::util::{format_amount, ListCursor};

/// Which part of the page receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Amount,
    Category,
    History,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[Self::Amount, Self::Category, Self::History]
    }

    pub(crate) fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub(crate) fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
            Self::History => write!(f, "History"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// View state only. Transactions and totals live in the [`Ledger`], which the
/// caller owns and lends to each handler.
pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Add Transaction form
    pub(crate) amount_input: String,
    pub(crate) category_index: usize,

    // History table
    pub(crate) history: ListCursor,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            focus: Focus::Amount,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            amount_input: String::new(),
            category_index: 0,

            history: ListCursor::default(),

            visible_rows: 10,
        }
    }

    pub(crate) fn selected_category(&self) -> Category {
        Category::all()
            .get(self.category_index)
            .copied()
            .unwrap_or(Category::Other)
    }

    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = Category::all().len() as i32;
        let next = (self.category_index as i32 + delta).rem_euclid(len);
        self.category_index = next as usize;
    }

    /// Jump to the first category starting with `c`, if any.
    pub(crate) fn pick_category_by_letter(&mut self, c: char) {
        let lower = c.to_ascii_lowercase();
        if let Some(idx) = Category::all().iter().position(|cat| {
            cat.as_str()
                .starts_with(|ch: char| ch.to_ascii_lowercase() == lower)
        }) {
            self.category_index = idx;
        }
    }

    /// Hand the form to the ledger. On success the amount field is cleared,
    /// like a submitted form; on failure the input stays for correction.
    pub(crate) fn submit_form(&mut self, ledger: &mut Ledger) {
        let category = self.selected_category();
        let added = ledger
            .add_transaction(self.amount_input.as_str(), category.as_str())
            .map(|txn| (txn.amount, txn.category.clone()));
        match added {
            Ok((amount, category)) => {
                self.amount_input.clear();
                self.set_status(added_message(ledger, amount, &category));
                self.follow_newest(ledger.transactions().len());
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Keep the newest row in view after an append.
    pub(crate) fn follow_newest(&mut self, len: usize) {
        let page = self.history_page();
        self.history.bottom(len, page);
    }

    pub(crate) fn history_page(&self) -> usize {
        self.visible_rows.max(1)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

/// Status line after an add, with the category's running total.
pub(crate) fn added_message(ledger: &Ledger, amount: Decimal, category: &str) -> String {
    let total = ledger.breakdown().get(category).unwrap_or(amount);
    format!(
        "Added {} to {category} ({category} total {})",
        format_amount(amount),
        format_amount(total)
    )
}
