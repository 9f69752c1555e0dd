use ratatui::crossterm::event::KeyEvent;

use crate::engine::Budget;

/// All possible events in the finder
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    /// The spin delay elapsed for a search started at this budget
    SearchReady { budget: Budget },

    // UI events
    Tick, // spinner frames and staggered reveal
}
