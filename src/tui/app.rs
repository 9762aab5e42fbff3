//! TUI application state

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Budget;

/// State for the dashboard view
pub struct App {
    /// Email of the logged-in user, shown in the header
    pub email: String,
    /// The budget being displayed
    pub budget: Budget,
    /// Set when the user asks to exit
    pub should_quit: bool,
}

impl App {
    /// Create dashboard state for a user's budget
    pub fn new(email: String, budget: Budget) -> Self {
        Self {
            email,
            budget,
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}
