//! Domain-level keyboard actions independent of key bindings.

use crate::model::QueueStatus;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Selection
    /// Select the previous row. Default: k/↑
    SelectPrev,
    /// Select the next row. Default: j/↓
    SelectNext,
    /// Move selection up by one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Move selection down by one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Select the first row. Default: g/Home
    SelectFirst,
    /// Select the last row. Default: G/End
    SelectLast,

    // Status changes on the selected entry
    /// Set the selected entry to a specific status.
    /// Defaults: c=waiting, r=ready, b=in-consultation, d=completed,
    /// x=no-show, u=scheduled
    SetStatus(QueueStatus),
    /// Advance the selected entry one step along the workflow. Default: Enter
    Advance,

    // Search
    /// Activate search input. Default: //Ctrl+f
    StartSearch,
    /// Clear the search filter. Default: Esc
    CancelSearch,

    // Panels
    /// Toggle visibility of the statistics panel. Default: s
    ToggleStats,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,

    // Application
    /// Reload the queue from the backend. Default: R
    Reload,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
