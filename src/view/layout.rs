//! Screen layout: header, search bar, queue table, stats panel, status bar.
//!
//! Pure layout logic. Area calculation is split from rendering so the shell
//! can size page jumps to the table without drawing.

use crate::state::{AppState, SearchState};
use crate::view::constants::{
    HEADER_HEIGHT, SEARCH_INPUT_HEIGHT, STATS_PANEL_HEIGHT, STATUS_BAR_HEIGHT,
    TABLE_CHROME_HEIGHT,
};
use crate::view::help::render_help_overlay;
use crate::view::queue_table::render_queue_table;
use crate::view::search_input::SearchInput;
use crate::view::stats::StatsPanel;
use crate::view::styles::{ColorConfig, MUTED_TEXT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Top line: date, department, source, policy.
    pub header: Rect,
    /// Search bar, when search is visible.
    pub search: Option<Rect>,
    /// Queue table.
    pub table: Rect,
    /// Stats panel, when toggled on.
    pub stats: Option<Rect>,
    /// Bottom line: notice or key hints.
    pub status: Rect,
}

/// Split `area` into the regions for the current state.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let search_visible = state.search().is_visible();

    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    if search_visible {
        constraints.push(Constraint::Length(SEARCH_INPUT_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    if state.stats_visible {
        constraints.push(Constraint::Length(STATS_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(STATUS_BAR_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = chunks.iter().copied();
    // Chunk count always matches the constraints pushed above.
    let mut take = || next.next().unwrap_or_default();

    let header = take();
    let search = search_visible.then(&mut take);
    let table = take();
    let stats = state.stats_visible.then(&mut take);
    let status = take();

    ScreenAreas {
        header,
        search,
        table,
        stats,
        status,
    }
}

/// Number of queue rows that fit in the table area.
pub fn table_page_rows(areas: &ScreenAreas) -> usize {
    usize::from(areas.table.height.saturating_sub(TABLE_CHROME_HEIGHT)).max(1)
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, source: &str, colors: ColorConfig) {
    let areas = calculate_areas(frame.area(), state);

    render_header(frame, areas.header, state, source);

    if let Some(search_area) = areas.search {
        let matches = state.visible_entries().len();
        frame.render_widget(SearchInput::new(state.search(), matches), search_area);
    }

    render_queue_table(frame, areas.table, state, colors);

    if let Some(stats_area) = areas.stats {
        let stats = state.stats();
        frame.render_widget(StatsPanel::new(&stats, colors), stats_area);
    }

    render_status_bar(frame, areas.status, state, colors);

    if state.help_visible {
        render_help_overlay(frame, state.policy);
    }
}

/// Render the header bar.
///
/// Format: `qdesk | 2026-10-18 | Cardiology | queue.json | strict`
fn render_header(frame: &mut Frame, area: Rect, state: &AppState, source: &str) {
    let department = state
        .filter
        .department
        .as_deref()
        .unwrap_or("All departments");

    let header_text = format!(
        "qdesk | {} | {} | {} | {}",
        state.filter.date.format("%Y-%m-%d"),
        department,
        source,
        state.policy
    );

    let paragraph = Paragraph::new(Line::from(header_text)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(paragraph, area);
}

/// Hints for the status bar when there is no notice.
fn build_keyboard_hints(search: &SearchState) -> &'static str {
    match search {
        SearchState::Typing { .. } => "Enter: apply | Esc: cancel | ←/→: move cursor",
        _ => "c: check in | Enter: advance | /: search | s: stats | R: reload | ?: help | q: quit",
    }
}

/// Render the status bar: the latest notice, or key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, colors: ColorConfig) {
    let line = match &state.notice {
        Some(notice) => Line::from(Span::styled(
            notice.message.clone(),
            colors.notice(notice.level),
        )),
        None => Line::from(Span::styled(build_keyboard_hints(state.search()), MUTED_TEXT)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
