use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, Focus, InputMode};
use super::commands;
use super::screens::{breakdown, form, history, summary};
use super::theme;
use crate::ledger::Ledger;
use crate::ui::util::format_amount;

/// Where each part of the page goes for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageLayout {
    pub(crate) header: Rect,
    pub(crate) cards: Rect,
    pub(crate) alert: Rect,
    pub(crate) form: Rect,
    pub(crate) chart: Rect,
    pub(crate) history: Rect,
    pub(crate) status: Rect,
    pub(crate) command: Rect,
}

impl PageLayout {
    pub(crate) fn new(area: Rect, alert_active: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                                 // Header
                Constraint::Length(4),                                 // Summary cards
                Constraint::Length(if alert_active { 1 } else { 0 }), // Alert banner
                Constraint::Length(9),                                 // Form + chart
                Constraint::Min(4),                                    // History
                Constraint::Length(1),                                 // Status bar
                Constraint::Length(1),                                 // Command bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[3]);

        Self {
            header: rows[0],
            cards: rows[1],
            alert: rows[2],
            form: middle[0],
            chart: middle[1],
            history: rows[4],
            status: rows[5],
            command: rows[6],
        }
    }

    /// Table rows that fit in the history pane (borders and header excluded).
    pub(crate) fn history_rows(&self) -> usize {
        self.history.height.saturating_sub(3) as usize
    }
}

pub(crate) fn render(f: &mut Frame, app: &App, ledger: &Ledger) {
    let layout = PageLayout::new(f.area(), ledger.alert_active());

    render_header(f, layout.header, app);
    summary::render_cards(f, layout.cards, ledger);
    summary::render_alert(f, layout.alert, ledger);
    form::render(f, layout.form, app);
    breakdown::render(f, layout.chart, ledger);
    history::render(f, layout.history, app, ledger);
    render_status_bar(f, layout.status, app, ledger);
    render_command_bar(f, layout.command, app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Focus::all()
        .iter()
        .map(|focus| {
            if *focus == app.focus {
                Line::from(Span::styled(
                    format!("{focus}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{focus}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(17), Constraint::Min(10)])
        .split(area);

    let title = Paragraph::new(Span::styled(
        " Budget Ledger ",
        Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(theme::HEADER_BG));

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(title, columns[0]);
    f.render_widget(tabs, columns[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, ledger: &Ledger) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(
        " {} | budget {} | {} txns",
        app.focus,
        format_amount(ledger.budget().limit),
        ledger.transactions().len()
    );

    let right = match app.focus {
        Focus::Amount => " type amount | Enter add | Tab next | ? help ",
        Focus::Category => " +/- or letter pick | Enter add | ? help ",
        Focus::History => " j/k scroll | g/G top/bottom | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " Budget Ledger Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        row("  Tab/Shift-Tab    Next/Prev field       Enter      Add transaction"),
        row("  0-9 . -          Edit amount           Backspace  Delete character"),
        row("  +/- or Left/Right Cycle category       letter     Jump to category"),
        Line::from(""),
        section(" History"),
        row("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        row("  Ctrl-d/u         Page Down/Up"),
        Line::from(""),
        section(" General"),
        row("  :               Command mode           Esc        Clear message"),
        row("  ?               This help              Ctrl-q     Quit"),
        Line::from(""),
        section(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
