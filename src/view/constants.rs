//! Layout dimension constants for TUI rendering.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the stats panel in lines.
///
/// Two rows of counters plus the average wait, inside a border.
pub const STATS_PANEL_HEIGHT: u16 = 6;

/// Rows taken by the queue table's border and column header.
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
