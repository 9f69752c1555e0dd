use std::time::{Duration, Instant};
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info};
use tui_input::backend::crossterm::EventHandler;

use crate::catalog::Catalog;
use crate::config::FinderConfig;
use crate::engine::Budget;
use crate::Result;
use super::events::AppEvent;
use super::state::{FinderState, SearchStart};
use super::theme::Theme;

/// Interval between animation ticks when no input arrives
const TICK_RATE: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    /// Session state
    state: FinderState,
    /// Stores to pick from
    catalog: Catalog,
    /// Cosmetic delay before results appear
    spin_delay: Duration,
    currency: String,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(catalog: Catalog, config: &FinderConfig) -> Self {
        Self {
            state: FinderState::new(
                config.initial_budget(),
                config.budget_step,
                config.reveal_interval(),
            ),
            catalog,
            spin_delay: config.spin_delay(),
            currency: config.currency.clone(),
            should_quit: false,
            theme: Theme::default(),
            event_tx: None,
            last_ctrl_c: None,
        }
    }

    pub fn state(&self) -> &FinderState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        // Create event channel
        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Input reader stops once the receiver is dropped
        let input_tx = event_tx;
        tokio::task::spawn_blocking(move || {
            while !input_tx.is_closed() {
                match event::poll(TICK_RATE) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        let _ = input_tx.send(AppEvent::Key(key));
                    }
                    Ok(Event::Resize(width, height)) => {
                        let _ = input_tx.send(AppEvent::Resize(width, height));
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });

        info!(budget = self.state.budget.amount(), stores = self.catalog.stores().len(), "Finder started");

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        ratatui::restore();
        info!("Finder closed");
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            // Handle events with timeout for animations
            match time::timeout(TICK_RATE, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event, Instant::now()),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick, Instant::now()),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        super::screens::finder::render(frame, &self.state, &self.theme, &self.currency);
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(key) => {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    // Double Ctrl+C within 1 second exits
                    if self.last_ctrl_c.is_some_and(|last| now.duration_since(last) < Duration::from_secs(1)) {
                        self.should_quit = true;
                    }
                    self.last_ctrl_c = Some(now);
                    return;
                }

                if self.state.notice.is_some() {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                        self.state.dismiss_notice();
                    }
                    return;
                }

                if self.state.show_budget_prompt {
                    match key.code {
                        KeyCode::Enter => self.state.apply_budget_prompt(),
                        KeyCode::Esc => self.state.cancel_budget_prompt(),
                        _ => {
                            self.state.budget_input.handle_event(&Event::Key(key));
                        }
                    }
                    return;
                }

                self.handle_finder_key(key.code);
            }
            AppEvent::SearchReady { budget } => {
                self.state.complete_search(&self.catalog, budget, now);
            }
            AppEvent::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            AppEvent::Tick => self.state.tick(now),
        }
    }

    fn handle_finder_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.state.adjust_budget(1);
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                self.state.adjust_budget(-1);
            }
            KeyCode::Char('b') => self.state.open_budget_prompt(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') => self.start_search(),
            KeyCode::Up | KeyCode::Char('k') => self.state.focus_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.state.focus_next(),
            KeyCode::Char('l') => self.state.toggle_focused_location(),
            _ => {}
        }
    }

    fn start_search(&mut self) {
        if let SearchStart::Started(budget) = self.state.begin_search() {
            debug!(budget = budget.amount(), delay_ms = self.spin_delay.as_millis() as u64, "Spinning");
            match &self.event_tx {
                Some(tx) => Self::spawn_spin(tx.clone(), budget, self.spin_delay),
                // No loop running: resolve immediately
                None => self.state.complete_search(&self.catalog, budget, Instant::now()),
            }
        }
    }

    /// Post `SearchReady` after the spin delay
    fn spawn_spin(event_tx: UnboundedSender<AppEvent>, budget: Budget, delay: Duration) {
        tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = event_tx.send(AppEvent::SearchReady { budget });
        });
    }
}
