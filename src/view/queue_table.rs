//! Queue table: one row per appointment matching the current search.

use crate::model::QueueEntry;
use crate::state::AppState;
use crate::view::styles::ColorConfig;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

const COLUMN_HEADERS: [&str; 8] = [
    "Time", "Patient", "ID", "Doctor", "Department", "Check-in", "Status", "Wait",
];

fn column_widths() -> [Constraint; 8] {
    [
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Length(8),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(15),
        Constraint::Length(6),
    ]
}

fn entry_row(entry: &QueueEntry, colors: ColorConfig) -> Row<'static> {
    let checkin = entry
        .checkin_time()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut patient = vec![Span::raw(entry.patient_name().to_string())];
    if entry.priority() != crate::model::Priority::Routine {
        patient.push(Span::raw(" "));
        patient.push(Span::styled(
            format!("[{}]", entry.priority().label()),
            colors.priority(entry.priority()),
        ));
    }

    Row::new(vec![
        Cell::from(entry.appointment_time().to_string()),
        Cell::from(Line::from(patient)),
        Cell::from(entry.patient_id().to_string()),
        Cell::from(entry.doctor_name().to_string()),
        Cell::from(entry.department().to_string()),
        Cell::from(checkin),
        Cell::from(entry.status().label()).style(colors.status(entry.status())),
        Cell::from(format!("{}m", entry.estimated_wait())),
    ])
    .style(colors.row(entry.status()))
}

/// Render the queue table with the selected row highlighted.
pub fn render_queue_table(frame: &mut Frame, area: Rect, state: &AppState, colors: ColorConfig) {
    let visible = state.visible_entries();
    let title = if visible.len() == state.queue().len() {
        format!(" Queue ({}) ", visible.len())
    } else {
        format!(" Queue ({} of {}) ", visible.len(), state.queue().len())
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if visible.is_empty() {
        let message = if state.queue().is_empty() {
            "No appointments for this day"
        } else {
            "No appointments match the search"
        };
        frame.render_widget(
            ratatui::widgets::Paragraph::new(message).block(block),
            area,
        );
        return;
    }

    let header = Row::new(COLUMN_HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));
    let rows: Vec<Row> = visible.iter().map(|e| entry_row(e, colors)).collect();

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .row_highlight_style(colors.selected_row())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(state.selected_index());
    frame.render_stateful_widget(table, area, &mut table_state);
}
