//! Colors for queue statuses, priorities and chrome.

use crate::model::{Priority, QueueStatus};
use crate::state::NoticeLevel;
use ratatui::style::{Color, Modifier, Style};

/// Category headers in overlays and panels.
pub const SECTION_HEADER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// De-emphasized text such as hints.
pub const MUTED_TEXT: Style = Style::new().fg(Color::Gray);

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }

    /// Style for a status badge.
    pub fn status(self, status: QueueStatus) -> Style {
        if !self.enabled {
            return Style::default();
        }
        let color = match status {
            QueueStatus::Scheduled => Color::Gray,
            QueueStatus::Waiting => Color::Yellow,
            QueueStatus::Ready => Color::Cyan,
            QueueStatus::InConsultation => Color::Blue,
            QueueStatus::Completed => Color::Green,
            QueueStatus::NoShow => Color::Red,
        };
        Style::default().fg(color)
    }

    /// Style for a priority label. Routine stays plain.
    pub fn priority(self, priority: Priority) -> Style {
        if !self.enabled {
            return match priority {
                Priority::Routine => Style::default(),
                _ => Style::default().add_modifier(Modifier::BOLD),
            };
        }
        match priority {
            Priority::Routine => Style::default(),
            Priority::Urgent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            Priority::Emergency => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for a status bar notice.
    pub fn notice(self, level: NoticeLevel) -> Style {
        match (self.enabled, level) {
            (false, _) => Style::default(),
            (true, NoticeLevel::Info) => Style::default().fg(Color::Green),
            (true, NoticeLevel::Error) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Whole-row style for an entry. Finished visits are dimmed.
    pub fn row(self, status: QueueStatus) -> Style {
        if status.is_terminal() {
            Style::default().add_modifier(Modifier::DIM)
        } else {
            Style::default()
        }
    }

    /// Highlight for the selected table row.
    pub fn selected_row(self) -> Style {
        if self.enabled {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::from_env_and_args(false)
    }
}
