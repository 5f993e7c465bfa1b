//! Search bar widget.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input widget.
///
/// Shows an editable field while typing and the applied term with the number
/// of matching rows once submitted. Renders nothing when search is inactive.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    matches: usize,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, matches: usize) -> Self {
        Self {
            search_state,
            matches,
        }
    }

    fn match_label(&self) -> String {
        match self.matches {
            1 => " 1 match ".to_string(),
            n => format!(" {n} matches "),
        }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { query, cursor } => {
                let before: String = query.chars().take(*cursor).collect();
                let mut after = query.chars().skip(*cursor);
                let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ]);

                Paragraph::new(line)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Search patient, ID or doctor ")
                            .title_bottom(Line::from(self.match_label()).right_aligned()),
                    )
                    .render(area, buf);
            }
            SearchState::Active { query } => {
                Paragraph::new(Line::from(query.as_str()))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Search (Esc to clear) ")
                            .title_bottom(Line::from(self.match_label()).right_aligned())
                            .style(Style::default().fg(Color::Cyan)),
                    )
                    .render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}
