//! TUI dashboard
//!
//! A read-only dashboard for the logged-in user's budget: summary figures and
//! a per-category bar chart. Handles terminal setup and teardown, including a
//! panic hook that restores the terminal state.

pub mod app;
pub mod event;
pub mod ui;

use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::services::{AuthService, BudgetService};
use crate::storage::Storage;

use app::App;
use event::{Event, EventHandler};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard for the logged-in user
pub fn run_dashboard(storage: &Storage) -> Result<()> {
    let user = AuthService::new(storage).current_user()?;
    let budget = BudgetService::new(storage).load(&user.email)?;

    let mut terminal = init_terminal()?;
    let mut app = App::new(user.email, budget);
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        match events.next()? {
            Event::Key(key_event) => app.on_key(key_event),
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
