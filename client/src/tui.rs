use crate::screen::StatusScreen;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Raw mode plus alternate screen, undone when dropped (including on panic)
struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Armed before entering the alternate screen so a failure there still restores
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Restore explicitly, reporting the first failure
    fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = restore_terminal() {
            tracing::warn!("Failed to restore terminal: {}", e);
        }
    }
}

/// Attempts every step even if an earlier one fails
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// Show the screen until the user quits
pub async fn run(screen: &mut StatusScreen) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    screen.activate();
    let result = event_loop(&mut terminal, screen).await;

    drop(terminal);
    let restored = guard.restore();

    result.and(restored.map_err(Into::into))
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    screen: &mut StatusScreen,
) -> Result<()> {
    loop {
        if screen.poll() {
            tracing::debug!("Status resolved to {}", screen.status().kind());
        }

        terminal.draw(|f| screen.render(f))?;

        // Zero-timeout poll so the probe task keeps running on this thread
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    return Ok(());
                }
            }
        }

        tokio::time::sleep(TICK).await;
    }
}

/// `q`, `Esc`, or `Ctrl+C` (raw mode swallows the signal)
fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_other_keys_do_not_quit() {
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_key_release_does_not_quit() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);
        assert!(!is_quit(&release));
    }
}
