//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar.
///
/// Shows the draft with a block cursor while typing, otherwise the
/// committed search text or a placeholder.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
    committed: &'a str,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState, committed: &'a str, palette: &'a Palette) -> Self {
        Self {
            search_state,
            committed,
            palette,
        }
    }
}

/// Split a draft around a character cursor: text before, the cursor cell, text after.
fn split_at_cursor(query: &str, cursor: usize) -> (String, String, String) {
    let before: String = query.chars().take(cursor).collect();
    let mut rest = query.chars().skip(cursor);
    let under = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = rest.collect();
    (before, under, after)
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, title, border) = match self.search_state {
            SearchState::Typing { query, cursor } => {
                let (before, under, after) = split_at_cursor(query, *cursor);
                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        under,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after),
                ]);
                (line, " Search (Enter: apply, Esc: cancel) ", self.palette.focused_border)
            }
            SearchState::Inactive if self.committed.trim().is_empty() => (
                Line::from(Span::styled("Press / to search titles", self.palette.muted)),
                " Search ",
                self.palette.border,
            ),
            SearchState::Inactive => (
                Line::from(self.committed.to_string()),
                " Search ",
                self.palette.border,
            ),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .render(area, buf);
    }
}
