use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::ui::theme;
use crate::ui::util::{format_share, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Spending Breakdown ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let breakdown = ledger.breakdown();
    let shares = breakdown.shares();
    if shares.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No spending yet. Add a transaction to see the breakdown",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let labels = breakdown.labels();
    let values = breakdown.values();
    let bars: Vec<Bar> = labels
        .iter()
        .zip(values)
        .zip(shares.iter())
        .enumerate()
        .map(|(i, ((name, amount), (_, pct)))| {
            let color = theme::palette(i);
            Bar::default()
                .value(bar_height(amount))
                .text_value(format_share(*pct))
                .label(Line::from(truncate(name, 10)))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let slots = breakdown.len().max(1);
    let bar_width = (inner_width / slots).saturating_sub(1).clamp(3, 10) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);

    f.render_widget(chart, area);
}

/// Bar height in cents of magnitude, so sub-dollar totals still show.
fn bar_height(amount: Decimal) -> u64 {
    amount
        .abs()
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.to_u64())
        .unwrap_or(u64::MAX)
}
