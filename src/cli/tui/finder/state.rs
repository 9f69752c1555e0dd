use std::collections::HashSet;
use std::time::{Duration, Instant};
use tui_input::Input;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::engine::{select, Budget, Selection, Summary};

/// Everything the finder screen shows. Only the action methods below mutate
/// it; rendering reads it.
#[derive(Debug)]
pub struct FinderState {
    pub budget: Budget,
    /// Amount added or removed per +/- press
    pub step: u32,

    // Results
    pub selections: Vec<Selection>,
    pub spinning: bool,
    /// Number of selections currently visible
    pub revealed: usize,
    pub reveal_started: Option<Instant>,
    pub reveal_interval: Duration,

    // UI state
    pub focused: usize,
    pub show_locations: HashSet<usize>,
    pub spinner_frame: usize,
    pub notice: Option<Notice>,

    // Budget entry modal
    pub show_budget_prompt: bool,
    pub budget_input: Input,
}

/// Modal message shown over the finder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Outcome of pressing "Find Meals"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStart {
    /// Spinning began; results are computed for this budget
    Started(Budget),
    /// Budget under the floor, notice raised
    Rejected,
    /// A search is already in flight
    Busy,
}

impl Default for FinderState {
    fn default() -> Self {
        Self::new(Budget::default(), Budget::STEP, Duration::from_millis(100))
    }
}

impl FinderState {
    pub fn new(budget: Budget, step: u32, reveal_interval: Duration) -> Self {
        Self {
            budget,
            step,
            selections: Vec::new(),
            spinning: false,
            revealed: 0,
            reveal_started: None,
            reveal_interval,
            focused: 0,
            show_locations: HashSet::new(),
            spinner_frame: 0,
            notice: None,
            show_budget_prompt: false,
            budget_input: Input::default(),
        }
    }

    /// +/- press: move by one step in `direction`, never below the floor
    pub fn adjust_budget(&mut self, direction: i64) {
        self.budget = self.budget.adjust(direction * i64::from(self.step));
    }

    /// Set the budget directly, floored
    pub fn set_budget(&mut self, budget: Budget) {
        self.budget = budget.floored();
    }

    pub fn open_budget_prompt(&mut self) {
        self.budget_input = Input::new(self.budget.to_string());
        self.show_budget_prompt = true;
    }

    pub fn cancel_budget_prompt(&mut self) {
        self.budget_input.reset();
        self.show_budget_prompt = false;
    }

    /// Parse the modal's text into the budget. Invalid text leaves the budget
    /// alone and raises a notice.
    pub fn apply_budget_prompt(&mut self) {
        match self.budget_input.value().parse::<Budget>() {
            Ok(budget) => self.set_budget(budget),
            Err(e) => self.notice = Some(Notice::new("Invalid budget", e.to_string())),
        }
        self.cancel_budget_prompt();
    }

    /// "Find Meals" pressed
    pub fn begin_search(&mut self) -> SearchStart {
        if self.spinning {
            return SearchStart::Busy;
        }

        if let Err(e) = self.budget.ensure_minimum() {
            warn!(budget = self.budget.amount(), "Search rejected");
            self.notice = Some(Notice::new("Budget too low", e.to_string()));
            return SearchStart::Rejected;
        }

        self.spinning = true;
        self.selections.clear();
        self.show_locations.clear();
        self.revealed = 0;
        self.reveal_started = None;
        self.focused = 0;
        SearchStart::Started(self.budget)
    }

    /// Spin finished: compute selections for the budget captured at start
    pub fn complete_search(&mut self, catalog: &Catalog, budget: Budget, now: Instant) {
        if !self.spinning {
            return;
        }
        self.spinning = false;

        match select(catalog, budget.amount()) {
            Ok(selections) => {
                debug!(budget = budget.amount(), picks = selections.len(), "Search complete");
                self.selections = selections;
                self.reveal_started = Some(now);
                self.revealed = self.selections.len().min(1);
            }
            Err(e) => {
                self.notice = Some(Notice::new("Budget too low", e.to_string()));
            }
        }
    }

    /// Animation step: advance the spinner and reveal results one interval
    /// apart
    pub fn tick(&mut self, now: Instant) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);

        if let Some(started) = self.reveal_started {
            let elapsed = now.saturating_duration_since(started);
            let steps = if self.reveal_interval.is_zero() {
                self.selections.len()
            } else {
                (elapsed.as_millis() / self.reveal_interval.as_millis()) as usize + 1
            };
            self.revealed = steps.min(self.selections.len());
            if self.revealed == self.selections.len() {
                self.reveal_started = None;
            }
        }
    }

    /// Reveal or hide the location of the selection at `index`
    pub fn toggle_location(&mut self, index: usize) {
        if index >= self.selections.len() {
            return;
        }
        if !self.show_locations.remove(&index) {
            self.show_locations.insert(index);
        }
    }

    pub fn toggle_focused_location(&mut self) {
        self.toggle_location(self.focused);
    }

    pub fn location_visible(&self, index: usize) -> bool {
        self.show_locations.contains(&index)
    }

    pub fn focus_next(&mut self) {
        if self.focused + 1 < self.revealed {
            self.focused += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn visible_selections(&self) -> &[Selection] {
        &self.selections[..self.revealed.min(self.selections.len())]
    }

    /// Totals against the current budget, once there is something to total
    pub fn summary(&self) -> Option<Summary> {
        if self.selections.is_empty() {
            None
        } else {
            Some(Summary::of(self.budget.amount(), &self.selections))
        }
    }

    /// Idle hint is shown when nothing is spinning and nothing was found
    pub fn show_idle_hint(&self) -> bool {
        !self.spinning && self.selections.is_empty()
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.spinning {
            "Finding meals..."
        } else {
            "Find Meals"
        }
    }

    /// Whether a key press should go to a modal instead of the main screen
    pub fn modal_open(&self) -> bool {
        self.notice.is_some() || self.show_budget_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_progression() {
        let mut state = FinderState::default();
        let SearchStart::Started(budget) = state.begin_search() else {
            panic!("search should start");
        };

        let start = Instant::now();
        state.complete_search(&Catalog::builtin(), budget, start);
        assert_eq!(state.selections.len(), 4);
        assert_eq!(state.revealed, 1);

        state.tick(start + Duration::from_millis(150));
        assert_eq!(state.revealed, 2);

        state.tick(start + Duration::from_millis(1000));
        assert_eq!(state.revealed, 4);
        assert!(state.reveal_started.is_none());
    }

    #[test]
    fn test_focus_stays_within_revealed() {
        let mut state = FinderState::new(Budget::default(), 10, Duration::ZERO);
        state.begin_search();
        let now = Instant::now();
        state.complete_search(&Catalog::builtin(), Budget::default(), now);
        state.tick(now);
        assert_eq!(state.revealed, 4);

        for _ in 0..10 {
            state.focus_next();
        }
        assert_eq!(state.focused, 3);
        state.focus_prev();
        assert_eq!(state.focused, 2);
    }
}
