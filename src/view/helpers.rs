//! Small line builders shared by panels.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label value` with the label padded to `width` columns.
pub fn key_value_line(
    label: &str,
    value: impl Into<String>,
    width: usize,
    label_style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}"), label_style),
        Span::raw(value.into()),
    ])
}
