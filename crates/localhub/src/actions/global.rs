//! Global actions - not tied to any specific flow

use ratatui::crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Periodic tick for animations
    Tick,
    /// Quit the application
    Quit,
}
