use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ledger::Ledger;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_share};

pub(crate) fn render_cards(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let limit = ledger.budget().limit;
    let spent = ledger.spent();
    let remaining = ledger.remaining();
    let count = ledger.transactions().len();

    render_card(
        f,
        cards[0],
        "Budget",
        limit,
        theme::ACCENT,
        "alert above 90%".to_string(),
    );
    render_card(
        f,
        cards[1],
        "Spent",
        spent,
        if ledger.over_budget() {
            theme::RED
        } else {
            theme::GREEN
        },
        format!("{count} txn{}", if count == 1 { "" } else { "s" }),
    );
    render_card(
        f,
        cards[2],
        "Remaining",
        remaining,
        if remaining >= Decimal::ZERO {
            theme::TEXT
        } else {
            theme::RED
        },
        used_label(spent, limit),
    );
}

fn used_label(spent: Decimal, limit: Decimal) -> String {
    spent
        .checked_div(limit)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| format!("{} used", format_share(pct)))
        .unwrap_or_default()
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    amount: Decimal,
    color: Color,
    subtitle: String,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

/// The threshold banner. Callers only give it room while the alert is active.
pub(crate) fn render_alert(f: &mut Frame, area: Rect, ledger: &Ledger) {
    let Some(message) = ledger.alert_message() else {
        return;
    };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" \u{26a0} ", theme::alert_style()),
        Span::styled(message, theme::alert_style()),
    ]))
    .style(theme::alert_style())
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme::YELLOW).bg(theme::ALERT_BG)),
    );
    f.render_widget(banner, area);
}
