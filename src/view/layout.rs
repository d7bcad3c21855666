//! Screen layout rendering.
//!
//! Header, search bar, list pane, detail pane and status bar, plus the
//! help overlay on top. Pure function of `AppState`.

use crate::state::{AppState, FocusPane, StatusMessage};
use crate::view::constants::{
    ELLIPSIS, HEADER_HEIGHT, LIST_PANE_WIDTH_PERCENT, NO_RESULTS_TEXT, SEARCH_INPUT_HEIGHT,
    STATUS_BAR_HEIGHT,
};
use crate::view::detail::RecordDetail;
use crate::view::help::render_help_overlay;
use crate::view::search_input::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker drawn in front of the highlighted list row.
const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the full screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, rows[0], state, palette);

    frame.render_widget(
        SearchInput::new(&state.search, state.navigation().search_text(), palette),
        rows[1],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_PANE_WIDTH_PERCENT),
            Constraint::Percentage(100 - LIST_PANE_WIDTH_PERCENT),
        ])
        .split(rows[2]);

    render_list(frame, columns[0], state, palette);

    let detail = RecordDetail::new(state.highlighted_record(), palette);
    let detail = if state.focus == FocusPane::Tags {
        detail.focused(state.tag_cursor())
    } else {
        detail
    };
    frame.render_widget(detail, columns[1]);

    render_status_bar(frame, rows[3], state, palette);

    if state.search.is_typing() {
        render_suggestions(frame, rows[1], rows[2], state, palette);
    }

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// Cut `text` to at most `max_width` terminal columns, ending with '…'
/// when shortened. Wide (e.g. Hangul) characters count as two columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - ELLIPSIS.width().unwrap_or(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let text = format!(
        " edubrowse │ {} │ {} materials",
        state.navigation().breadcrumb(),
        state.store().len()
    );
    let line = Line::from(Span::styled(
        truncate_to_width(&text, area.width as usize),
        palette.header,
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let items = state.list_items();
    let border = if state.focus == FocusPane::Results {
        palette.focused_border
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", items.len()))
        .border_style(border);

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(NO_RESULTS_TEXT, palette.muted)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let text_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.width());
    let rows: Vec<ListItem> = items
        .iter()
        .map(|title| ListItem::new(truncate_to_width(title, text_width)))
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(palette.highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default().with_selected(Some(state.list_cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Autocomplete dropdown hanging below the search bar, drawn over the body.
fn render_suggestions(
    frame: &mut Frame,
    search_area: Rect,
    body: Rect,
    state: &AppState,
    palette: &Palette,
) {
    let titles = state.suggestions();
    if titles.is_empty() || body.height < 3 {
        return;
    }

    let height = (titles.len() as u16 + 2).min(body.height);
    let area = Rect::new(search_area.x, body.y, search_area.width, height);
    let text_width = (area.width as usize)
        .saturating_sub(2)
        .saturating_sub(HIGHLIGHT_SYMBOL.width());
    let rows: Vec<ListItem> = titles
        .iter()
        .map(|title| ListItem::new(truncate_to_width(title, text_width)))
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Suggestions ({}) ", titles.len()))
                .border_style(palette.focused_border),
        )
        .highlight_style(palette.highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    let mut list_state = ListState::default().with_selected(state.suggestion_cursor());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Keyboard hints for the current focus.
fn build_keyboard_hints(focus: FocusPane) -> &'static str {
    match focus {
        FocusPane::Search => "Enter: apply │ ↑/↓: suggestions │ Esc: cancel",
        FocusPane::Results => "/: search │ Enter: open │ Tab: tags │ b/f: back/fwd │ ?: help",
        FocusPane::Tags => "h/l: pick tag │ Enter: filter by tag │ Tab: list │ ?: help",
    }
}

/// Right-hand part of the status bar: history depth and load time.
fn history_indicator(state: &AppState) -> String {
    let navigation = state.navigation();
    format!(
        " ◀{} ▶{} │ loaded {} ",
        navigation.history().len(),
        navigation.forward().len(),
        state.store().loaded_at().format("%H:%M:%S")
    )
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let right = history_indicator(state);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right.width() as u16)])
        .split(area);

    let left = match state.status() {
        Some(StatusMessage::Error(text)) => Span::styled(text.as_str(), palette.error),
        Some(StatusMessage::Info(text)) => Span::styled(text.as_str(), palette.info),
        None => Span::styled(build_keyboard_hints(state.focus), palette.muted),
    };
    let left = Span::styled(
        truncate_to_width(&left.content, columns[0].width as usize),
        left.style,
    );

    frame.render_widget(Paragraph::new(Line::from(left)), columns[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(right, palette.muted))),
        columns[1],
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
