//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` over an in-memory queue backend with
//! convenient methods for simulating front-desk interactions.

use crate::model::{ClockTime, QueueFilter, QueueRecord};
use crate::source::{MemoryBackend, QueueBackend};
use crate::state::{AppState, TransitionPolicy};
use crate::view::{apply_startup_options, CliArgs, Clock, TuiApp, TuiError};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Day every fixture record is booked on.
pub const FIXTURE_DAY: (i32, u32, u32) = (2026, 10, 18);

/// Clock used by the harness: always 09:07.
pub fn harness_clock() -> ClockTime {
    ClockTime::new(9, 7).unwrap()
}

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep assertions simple.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Builder-style options for a harness session.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
    /// Transition policy for the session.
    pub policy: TransitionPolicy,
    /// Department restriction.
    pub department: Option<String>,
    /// Startup options as given on the command line.
    pub args: CliArgs,
    /// Reason for a failure armed on the backend's next update.
    pub fail_next_update: Option<String>,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            width: 120,
            height: 30,
            policy: TransitionPolicy::Permissive,
            department: None,
            args: CliArgs::default(),
            fail_next_update: None,
        }
    }
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a JSON fixture (array of queue records) with default options.
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with(path, HarnessOptions::default())
    }

    /// Load a JSON fixture with custom options.
    pub fn from_fixture_with(path: &str, options: HarnessOptions) -> Result<Self, TuiError> {
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<QueueRecord> = serde_json::from_str(&contents)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Self::from_records(records, options)
    }

    /// Start a session over the given records.
    pub fn from_records(
        records: Vec<QueueRecord>,
        options: HarnessOptions,
    ) -> Result<Self, TuiError> {
        let mut backend = MemoryBackend::new(records);
        if let Some(reason) = options.fail_next_update {
            backend.fail_next_update(reason);
        }
        Self::from_backend(
            Box::new(backend),
            options.department,
            options.policy,
            options.args,
            (options.width, options.height),
            harness_clock,
        )
    }

    /// Start a session over any backend.
    pub fn from_backend(
        mut backend: Box<dyn QueueBackend>,
        department: Option<String>,
        policy: TransitionPolicy,
        args: CliArgs,
        (width, height): (u16, u16),
        clock: Clock,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let (y, m, d) = FIXTURE_DAY;
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let mut filter = QueueFilter::for_date(date);
        if let Some(department) = department {
            filter = filter.with_department(department);
        }

        let queue = backend.load(&filter).map_err(crate::model::AppError::from)?;
        let mut app_state = AppState::new(queue, filter, policy);
        apply_startup_options(&mut app_state, &args);

        Ok(Self {
            app: TuiApp::new_for_test(terminal, app_state, backend, clock),
            running: true,
        })
    }

    /// Send a single key. Uppercase letters carry SHIFT like a terminal.
    ///
    /// Returns true if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        let mods = match key {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        self.send_key_with_mods(key, mods)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Whether the app is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return it as text.
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
