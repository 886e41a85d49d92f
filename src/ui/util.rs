use rust_decimal::Decimal;

/// Dollar amount with thousands separators and cents, e.g. `-1234.5` → `"-$1,234.50"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let cents = format!("{:.2}", val.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{frac}")
}

/// Whole-number percentage, e.g. `33.3333` → `"33%"`.
pub(crate) fn format_share(pct: Decimal) -> String {
    format!("{}%", pct.round())
}

/// Clip to `max` characters, ending in "…" when anything was cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    match max {
        0 => String::new(),
        _ => {
            let kept: String = s.chars().take(max - 1).collect();
            format!("{kept}…")
        }
    }
}

/// Selected row plus the first visible row of a scrolling list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListCursor {
    pub(crate) index: usize,
    pub(crate) scroll: usize,
}

impl ListCursor {
    pub(crate) fn down(&mut self, len: usize, page: usize) {
        if self.index + 1 >= len {
            return;
        }
        self.index += 1;
        let page = page.max(1);
        if self.index >= self.scroll + page {
            self.scroll = self.index + 1 - page;
        }
    }

    pub(crate) fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.scroll = self.scroll.min(self.index);
    }

    pub(crate) fn top(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn bottom(&mut self, len: usize, page: usize) {
        if len == 0 {
            return;
        }
        self.index = len - 1;
        self.scroll = len.saturating_sub(page.max(1));
    }

    /// Move by half a page, the way Ctrl-d / Ctrl-u do.
    pub(crate) fn half_page(&mut self, down: bool, len: usize, page: usize) {
        for _ in 0..page / 2 {
            if down {
                self.down(len, page);
            } else {
                self.up();
            }
        }
    }
}
