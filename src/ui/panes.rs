//! Variables pane rendering
//!
//! Bridges engine output onto the terminal: decorated [`Row`]s become ratatui
//! [`Line`]s (margins become literal spaces, style tags resolve through the
//! theme) and are laid into a bordered, scrollable pane. The engine already
//! bounded every row's width, so nothing here re-measures or wraps.

use crate::render::Row;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the variables pane
pub struct VariablesScrollState {
    pub offset: usize,
}

/// Convert one engine row into a ratatui line, expanding margins to spaces
pub fn row_to_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.spans.len());
    for span in &row.spans {
        let style = DEFAULT_THEME.style_for(span.style);
        if span.margin_left > 0 {
            spans.push(Span::raw(" ".repeat(span.margin_left)));
        }
        spans.push(Span::styled(span.content.clone(), style));
        if span.margin_right > 0 {
            spans.push(Span::raw(" ".repeat(span.margin_right)));
        }
    }
    Line::from(spans)
}

/// Render the variables pane from pre-decorated rows
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[Row],
    is_focused: bool,
    scroll_state: &mut VariablesScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut all_items: Vec<ListItem> = Vec::with_capacity(rows.len());
    if rows.is_empty() {
        all_items.push(
            ListItem::new("(no value selected)")
                .style(Style::default().fg(DEFAULT_THEME.dim)),
        );
    } else {
        for row in rows {
            all_items.push(ListItem::new(row_to_line(row)));
        }
    }

    // Clamp scroll to the visible window (borders take two rows)
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
