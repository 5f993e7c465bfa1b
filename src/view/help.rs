//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::empty_line;
use super::styles::{MUTED_TEXT, SECTION_HEADER};
use crate::state::TransitionPolicy;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
///
/// The policy line tells the operator whether out-of-order status changes
/// will be refused.
pub fn render_help_overlay(frame: &mut Frame, policy: TransitionPolicy) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(policy))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn shortcut(keys: &'static str, description: &'static str) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled(format!("  {keys:<18}"), key_style),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

fn header(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(title, SECTION_HEADER)])
}

/// Build the help content lines grouped by category.
fn build_help_content(policy: TransitionPolicy) -> Vec<Line<'static>> {
    let policy_note = match policy {
        TransitionPolicy::Permissive => "Any status change is accepted",
        TransitionPolicy::Strict => "Only forward workflow steps are accepted",
    };

    vec![
        header("Navigation"),
        shortcut("j/↓", "Next appointment"),
        shortcut("k/↑", "Previous appointment"),
        shortcut("Ctrl+d/Page Down", "Page down"),
        shortcut("Ctrl+u/Page Up", "Page up"),
        shortcut("g/Home", "First appointment"),
        shortcut("G/End", "Last appointment"),
        empty_line(),
        header("Status"),
        shortcut("c", "Check in (waiting)"),
        shortcut("r", "Ready"),
        shortcut("b", "Begin consultation"),
        shortcut("d", "Done (completed)"),
        shortcut("x", "No show"),
        shortcut("u", "Back to scheduled"),
        shortcut("Enter", "Advance one step"),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("Policy: {policy} - {policy_note}"), MUTED_TEXT),
        ]),
        empty_line(),
        header("Search"),
        shortcut("//Ctrl+f", "Search patient, ID or doctor"),
        shortcut("Enter", "Apply search"),
        shortcut("Esc", "Clear search"),
        empty_line(),
        header("Panels"),
        shortcut("s", "Toggle statistics"),
        shortcut("?", "Toggle this help"),
        empty_line(),
        header("Application"),
        shortcut("R", "Reload queue"),
        shortcut("q/Ctrl+c", "Quit"),
    ]
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
