use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::ledger::Ledger;
use crate::ui::app::{App, Focus, InputMode};
use crate::ui::commands;
use crate::ui::render::PageLayout;

pub(crate) fn as_tui(ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new();
    tracing::info!(budget = %ledger.budget().limit, "starting interactive session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "interactive session failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let layout = PageLayout::new(f.area(), ledger.alert_active());
            app.visible_rows = layout.history_rows().max(1);
            crate::ui::render::render(f, app, ledger);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, ledger),
                InputMode::Command => handle_command_input(key, app, ledger)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.running = false;
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Esc => app.status_message.clear(),
        _ => match app.focus {
            Focus::Amount => handle_amount_input(key, app, ledger),
            Focus::Category => handle_category_input(key, app, ledger),
            Focus::History => handle_history_input(key, app, ledger),
        },
    }
}

fn handle_amount_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => app.submit_form(ledger),
        KeyCode::Backspace => {
            app.amount_input.pop();
        }
        KeyCode::Down => app.focus = Focus::Category,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.amount_input.push(c);
        }
        _ => {}
    }
}

fn handle_category_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) {
    match key.code {
        KeyCode::Enter => app.submit_form(ledger),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.cycle_category(1),
        KeyCode::Char('-') | KeyCode::Left => app.cycle_category(-1),
        KeyCode::Up => app.focus = Focus::Amount,
        KeyCode::Down => app.focus = Focus::History,
        KeyCode::Char(c) if c.is_ascii_alphabetic() => app.pick_category_by_letter(c),
        _ => {}
    }
}

fn handle_history_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) {
    let len = ledger.transactions().len();
    let page = app.history_page();
    match key.code {
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history.half_page(true, len, page);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.history.half_page(false, len, page);
        }
        KeyCode::Char('j') | KeyCode::Down => app.history.down(len, page),
        KeyCode::Char('k') | KeyCode::Up => app.history.up(),
        KeyCode::Char('g') => app.history.top(),
        KeyCode::Char('G') => app.history.bottom(len, page),
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}
