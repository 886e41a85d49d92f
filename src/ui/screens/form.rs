use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus, InputMode};
use crate::ui::theme;

const AMOUNT_PROMPT: &str = "> ";

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let form_focused = matches!(app.focus, Focus::Amount | Focus::Category);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::pane_border(form_focused))
        .title(Span::styled(" Add Transaction ", theme::pane_title(form_focused)));
    let inner = block.inner(area);

    let field_style = |focused: bool| {
        if focused {
            theme::selected_style()
        } else {
            theme::normal_style()
        }
    };
    let label_style = Style::default()
        .fg(theme::TEXT_DIM)
        .add_modifier(Modifier::BOLD);

    let amount_focused = app.focus == Focus::Amount;
    let category_focused = app.focus == Focus::Category;

    let lines = vec![
        Line::from(Span::styled("Amount", label_style)),
        Line::from(vec![
            Span::styled(AMOUNT_PROMPT, Style::default().fg(theme::ACCENT)),
            Span::styled(app.amount_input.as_str(), field_style(amount_focused)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Category", label_style)),
        Line::from(vec![
            Span::styled("\u{25c0} ", theme::dim_style()),
            Span::styled(
                format!("{:<13}", app.selected_category().as_str()),
                field_style(category_focused),
            ),
            Span::styled(" \u{25b6}", theme::dim_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter add  \u{00b7}  Tab next field  \u{00b7}  +/- category",
            theme::dim_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);

    if amount_focused && app.input_mode == InputMode::Normal && inner.height > 1 {
        let offset = (AMOUNT_PROMPT.len() + app.amount_input.chars().count()) as u16;
        let x = (inner.x + offset).min(inner.right().saturating_sub(1));
        f.set_cursor_position((x, inner.y + 1));
    }
}
