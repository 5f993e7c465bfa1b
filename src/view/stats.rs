//! Statistics panel widget for the day's queue.

use crate::model::{QueueStats, QueueStatus};
use crate::view::helpers::key_value_line;
use crate::view::styles::{ColorConfig, SECTION_HEADER};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

const LABEL_WIDTH: usize = 17;

/// Statistics panel widget.
///
/// Displays the count per status and the average estimated wait. Counts
/// always cover the whole loaded queue, not just the rows matching a search.
pub struct StatsPanel<'a> {
    stats: &'a QueueStats,
    colors: ColorConfig,
}

impl<'a> StatsPanel<'a> {
    /// Create a new StatsPanel widget.
    pub fn new(stats: &'a QueueStats, colors: ColorConfig) -> Self {
        Self { stats, colors }
    }

    fn status_line(&self, status: QueueStatus) -> Line<'static> {
        key_value_line(
            &format!("{}:", status.label()),
            self.stats.count(status).to_string(),
            LABEL_WIDTH,
            self.colors.status(status),
        )
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" Statistics ({} appointments) ", self.stats.total))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(inner);

        let left = vec![
            self.status_line(QueueStatus::Scheduled),
            self.status_line(QueueStatus::Waiting),
        ];
        let middle = vec![
            self.status_line(QueueStatus::Ready),
            self.status_line(QueueStatus::InConsultation),
        ];
        let right = vec![
            self.status_line(QueueStatus::Completed),
            self.status_line(QueueStatus::NoShow),
        ];

        Paragraph::new(left).render(columns[0], buf);
        Paragraph::new(middle).render(columns[1], buf);
        Paragraph::new(right).render(columns[2], buf);

        // Average wait sits on the last inner row, below the counters.
        if inner.height > 2 {
            let avg_area = Rect {
                y: inner.y + 3.min(inner.height - 1),
                height: 1,
                ..inner
            };
            Paragraph::new(key_value_line(
                "Average wait:",
                format_minutes(self.stats.avg_wait_time),
                LABEL_WIDTH,
                SECTION_HEADER,
            ))
            .style(Style::default())
            .render(avg_area, buf);
        }
    }
}

/// Format a wait in minutes.
///
/// Examples:
/// - `format_minutes(0)` → "0 min"
/// - `format_minutes(95)` → "1 h 35 min"
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {:02} min", minutes / 60, minutes % 60)
    }
}
