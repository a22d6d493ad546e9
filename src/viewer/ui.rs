//! TUI event loop for the viewer.

use super::app::App;
use super::external::TerminalGuard;
use super::{EVENT_POLL_MS, PAGE_STEP};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

pub(super) fn run_tui(mut app: App) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        ratatui::Terminal::new(backend).context("init terminal")?
    };

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal
            .draw(|frame| app.draw(frame, now))
            .context("draw viewer ui")?;

        if !event::poll(Duration::from_millis(EVENT_POLL_MS)).context("poll event")? {
            continue;
        }
        let Event::Key(key) = event::read().context("read event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = action_from_key(key) else {
            continue;
        };
        match action {
            Action::Quit => {
                if app.is_help_open() {
                    app.toggle_help();
                } else {
                    break;
                }
            }
            Action::SwitchView => app.next_route(),
            Action::Up => app.move_selection(-1),
            Action::Down => app.move_selection(1),
            Action::PageUp => app.move_selection(-PAGE_STEP),
            Action::PageDown => app.move_selection(PAGE_STEP),
            Action::Activate => {
                if let Err(err) = app.activate(Instant::now()) {
                    debug!(route = app.route().path(), error = %err, "activate failed");
                    app.set_message(err.to_string());
                }
            }
            Action::Toggle => {
                if let Err(err) = app.toggle_selected() {
                    app.set_message(err.to_string());
                }
            }
            Action::Copy => {
                if let Err(err) = app.copy_selected(Instant::now()) {
                    app.set_message(err.to_string());
                }
            }
            Action::OpenLink => {
                if let Err(err) = app.open_selected_link() {
                    debug!(error = %err, "open link failed");
                    app.set_message(format!("open link failed: {err}"));
                }
            }
            Action::ToggleHelp => app.toggle_help(),
        }
    }

    drop(guard);
    terminal.show_cursor().ok();
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Quit,
    SwitchView,
    Up,
    Down,
    PageUp,
    PageDown,
    Activate,
    Toggle,
    Copy,
    OpenLink,
    ToggleHelp,
}

fn action_from_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Char(' ') => Some(Action::Toggle),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('o') => Some(Action::OpenLink),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> Option<Action> {
        action_from_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn key_mapping() {
        assert_eq!(press(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(press(KeyCode::Tab), Some(Action::SwitchView));
        assert_eq!(press(KeyCode::BackTab), Some(Action::SwitchView));
        assert_eq!(press(KeyCode::Char('j')), Some(Action::Down));
        assert_eq!(press(KeyCode::Up), Some(Action::Up));
        assert_eq!(press(KeyCode::Enter), Some(Action::Activate));
        assert_eq!(press(KeyCode::Char(' ')), Some(Action::Toggle));
        assert_eq!(press(KeyCode::Char('c')), Some(Action::Copy));
        assert_eq!(press(KeyCode::Char('o')), Some(Action::OpenLink));
        assert_eq!(press(KeyCode::Char('?')), Some(Action::ToggleHelp));
        assert_eq!(press(KeyCode::Char('x')), None);
    }
}
