//! Terminal setup and the event loop.

use crate::app::App;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event as TermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, on early returns and while unwinding.
struct RestoreGuard {
    restore: fn() -> io::Result<()>,
}

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Restores the terminal before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Runs the TUI until the user quits.
///
/// The terminal is restored however the loop ends: error, panic or quit.
#[instrument(skip(app))]
pub fn run_tui(app: App) -> Result<()> {
    info!("Starting TUI");
    install_panic_hook();

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = RestoreGuard {
        restore: restore_terminal,
    };
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let res = event_loop(&mut terminal, app);
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, block on one terminal event, reduce it, repeat.
fn event_loop(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Anything but a key (resize, focus) just redraws.
        if let TermEvent::Key(key) = event::read().context("Failed to read terminal event")? {
            app.handle_key(key)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
