//! Detail pane: every field of the highlighted material plus its tag chips.

use crate::model::{Column, Record};
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Detail pane widget.
pub struct RecordDetail<'a> {
    record: Option<&'a Record>,
    tag_cursor: Option<usize>,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> RecordDetail<'a> {
    /// Detail pane for `record`. `None` renders an empty pane.
    pub fn new(record: Option<&'a Record>, palette: &'a Palette) -> Self {
        Self {
            record,
            tag_cursor: None,
            focused: false,
            palette,
        }
    }

    /// Highlight the chip at `tag_cursor` and draw the focused border.
    pub fn focused(mut self, tag_cursor: usize) -> Self {
        self.tag_cursor = Some(tag_cursor);
        self.focused = true;
        self
    }
}

/// Field value shown in the detail pane, or `None` when blank.
fn field_value(record: &Record, column: Column) -> Option<&str> {
    let value = record.field(column).trim();
    (!value.is_empty()).then_some(value)
}

/// Chips for every tag, the one under `cursor` highlighted.
pub(crate) fn tag_chips<'a>(tags: &[&'a str], cursor: Option<usize>, palette: &Palette) -> Line<'a> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if cursor == Some(index) {
            palette.selected_tag
        } else {
            palette.tag
        };
        spans.push(Span::styled(format!("[{tag}]"), style));
    }
    Line::from(spans)
}

fn build_lines<'a>(record: &'a Record, tag_cursor: Option<usize>, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(
            record.title(),
            palette.header.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let tags = record.tags();
    if tags.is_empty() {
        lines.push(Line::from(Span::styled("No tags", palette.muted)));
    } else {
        lines.push(tag_chips(&tags, tag_cursor, palette));
    }
    lines.push(Line::default());

    for column in Column::ALL.into_iter().filter(|c| *c != Column::Title) {
        let value = match field_value(record, column) {
            Some(value) => Span::raw(value),
            None => Span::styled("-", palette.muted),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", column.label()), palette.label),
            value,
        ]));
    }

    lines
}

impl Widget for RecordDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.palette.focused_border
        } else {
            self.palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Details ")
            .border_style(border);

        let lines = match self.record {
            Some(record) => build_lines(record, self.tag_cursor, self.palette),
            None => vec![Line::from(Span::styled(
                "Nothing selected",
                self.palette.muted,
            ))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
