//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod helpers;
mod layout;
mod queue_table;
mod search_input;
mod stats;
mod styles;

pub use help::render_help_overlay;
pub use helpers::{empty_line, key_value_line};
pub use layout::{calculate_areas, render_layout, table_page_rows, ScreenAreas};
pub use queue_table::render_queue_table;
pub use search_input::SearchInput;
pub use stats::{format_minutes, StatsPanel};
pub use styles::ColorConfig;

use crate::config::KeyBindings;
use crate::model::{AppError, ClockTime, KeyAction, QueueStatus};
use crate::source::QueueBackend;
use crate::state::{search_input_handler, AppState, PendingChange, SearchState, TransitionError};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Source of the current wall-clock time, injectable for tests.
pub type Clock = fn() -> ClockTime;

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    backend: Box<dyn QueueBackend>,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    clock: Clock,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. The queue must
    /// already be loaded into `app_state`.
    pub fn new(
        app_state: AppState,
        backend: Box<dyn QueueBackend>,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            backend,
            key_bindings: KeyBindings::default(),
            colors,
            clock: ClockTime::now,
        })
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }

    /// Handle one key. Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a search
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Esc closes help before anything else sees it
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        if matches!(self.app_state.search(), SearchState::Typing { .. })
            && self.handle_search_typing(key)
        {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        // While help is up only help, quit and selection keys get through
        if self.app_state.help_visible {
            match action {
                KeyAction::Help
                | KeyAction::Quit
                | KeyAction::SelectPrev
                | KeyAction::SelectNext
                | KeyAction::PageUp
                | KeyAction::PageDown => {}
                _ => return false,
            }
        }

        match action {
            KeyAction::SelectNext => self.app_state.select_down(1),
            KeyAction::SelectPrev => self.app_state.select_up(1),
            KeyAction::PageDown => {
                let rows = self.page_rows();
                self.app_state.select_down(rows);
            }
            KeyAction::PageUp => {
                let rows = self.page_rows();
                self.app_state.select_up(rows);
            }
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::SetStatus(status) => self.set_status(status),
            KeyAction::Advance => {
                let now = (self.clock)();
                let prepared = self.app_state.prepare_advance(now);
                self.submit(prepared);
            }
            KeyAction::StartSearch => {
                let search = search_input_handler::activate_search_input(
                    self.app_state.search().clone(),
                );
                self.app_state.set_search(search);
            }
            KeyAction::CancelSearch => {
                let search = search_input_handler::cancel_search(self.app_state.search().clone());
                self.app_state.set_search(search);
            }
            KeyAction::ToggleStats => {
                self.app_state.stats_visible = !self.app_state.stats_visible;
            }
            KeyAction::Help => {
                self.app_state.help_visible = !self.app_state.help_visible;
            }
            KeyAction::Reload => self.reload(),
            KeyAction::Quit => return true,
        }

        false
    }

    /// Keys consumed by the search field while typing. Returns true if
    /// the key was consumed.
    fn handle_search_typing(&mut self, key: KeyEvent) -> bool {
        let search = self.app_state.search().clone();
        let next = match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(search, ch)
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(search),
            KeyCode::Left => search_input_handler::handle_cursor_left(search),
            KeyCode::Right => search_input_handler::handle_cursor_right(search),
            KeyCode::Enter => search_input_handler::submit_search(search),
            _ => return false,
        };
        self.app_state.set_search(next);
        true
    }

    fn set_status(&mut self, status: QueueStatus) {
        let now = (self.clock)();
        let prepared = self.app_state.prepare_status_change(status, now);
        self.submit(prepared);
    }

    /// Send a prepared change to the backend, then commit or reject it.
    fn submit(&mut self, prepared: Result<Option<PendingChange>, TransitionError>) {
        let change = match prepared {
            Ok(Some(change)) => change,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "Status change refused by policy");
                self.app_state.refuse(&err);
                return;
            }
        };

        match self.backend.update_status(&change.update) {
            Ok(()) => {
                info!(
                    id = %change.update.id,
                    from = %change.from,
                    to = %change.update.status,
                    "Status updated"
                );
                self.app_state.commit(change);
            }
            Err(err) => {
                warn!(id = %change.update.id, error = %err, "Status update failed");
                self.app_state.reject(&change, &err);
            }
        }
    }

    /// Re-load the queue from the backend, keeping the selection.
    fn reload(&mut self) {
        match self.backend.load(&self.app_state.filter) {
            Ok(queue) => {
                let count = queue.len();
                self.app_state.replace_queue(queue);
                self.app_state.notice = Some(crate::state::Notice::info(format!(
                    "Reloaded {count} appointments"
                )));
            }
            Err(err) => {
                warn!(error = %err, "Reload failed");
                self.app_state.notice =
                    Some(crate::state::Notice::error(format!("Reload failed: {err}")));
            }
        }
    }

    fn page_rows(&self) -> usize {
        let size = self.terminal.size().unwrap_or_default();
        let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        table_page_rows(&calculate_areas(area, &self.app_state))
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let source = self.backend.describe();
        let colors = self.colors;
        let state = &self.app_state;
        self.terminal.draw(|frame| {
            render_layout(frame, state, &source, colors);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// Crate-internal accessors for the acceptance harness and unit tests.

#[cfg(test)]
#[allow(dead_code)] // Not every helper is used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        backend: Box<dyn QueueBackend>,
        clock: Clock,
    ) -> Self {
        Self {
            terminal,
            app_state,
            backend,
            key_bindings: KeyBindings::default(),
            colors: ColorConfig::enabled(),
            clock,
        }
    }

    /// Get reference to app state.
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render the current state to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal for buffer inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Startup options resolved from config and command line.
///
/// Maps to `--stats`, `--search` and `--no-color`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Show the statistics panel on startup.
    pub stats: bool,
    /// Initial search term. Blank means no search.
    pub search: Option<String>,
    /// Disable colors.
    pub no_color: bool,
}

/// Apply startup options to freshly loaded state.
pub fn apply_startup_options(state: &mut AppState, args: &CliArgs) {
    state.stats_visible = args.stats;
    if let Some(query) = args
        .search
        .as_deref()
        .and_then(crate::state::SearchQuery::new)
    {
        state.set_search(SearchState::Active { query });
    }
}

/// Load the queue, then run the TUI until the user quits.
///
/// Handles terminal setup and restores the terminal on exit, including
/// when the loop fails. Logging must be initialized by the caller.
pub fn run_with_backend(
    mut backend: Box<dyn QueueBackend>,
    filter: crate::model::QueueFilter,
    policy: crate::state::TransitionPolicy,
    args: CliArgs,
) -> Result<(), TuiError> {
    let queue = backend.load(&filter).map_err(AppError::from)?;
    info!(entries = queue.len(), %policy, "Starting desk");

    let mut app_state = AppState::new(queue, filter, policy);
    apply_startup_options(&mut app_state, &args);

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let mut app = TuiApp::new(app_state, backend, colors)?;

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
