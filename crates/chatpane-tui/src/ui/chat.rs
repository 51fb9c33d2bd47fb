//! Message list
//!
//! Renders the reverse-ordered message list bottom-anchored: display row 0
//! (the newest message) sits nearest the composer, and scrolling up walks
//! into history. This is the terminal rendition of the flipped-table trick:
//! the widget's natural order is top-down, so rows are emitted oldest-first
//! with the window pinned to the newest end.

use chatpane_app::{App, CellSpec};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BORDER_SIZE: u16 = 2;

/// Render the message list.
///
/// `scroll_offset` is measured in display rows from the latest message; 0
/// keeps the newest message visible at the bottom edge.
pub fn render(frame: &mut Frame, app: &App, scroll_offset: usize, area: Rect) {
    let count = app.message_count();
    let block = Block::default().borders(Borders::ALL).title(" Chat ");

    if count == 0 {
        let hint = ListItem::new(Line::from(Span::styled(
            "No messages yet. Type below and press Enter.",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(List::new(vec![hint]).block(block), area);
        return;
    }

    let visible = area.height.saturating_sub(BORDER_SIZE) as usize;
    let bottom_row = scroll_offset.min(count.saturating_sub(1));
    let top_row = (bottom_row + visible).min(count);

    // Oldest of the window first, so display row `bottom_row` renders last.
    // Blank rows pad a short window so it stays pinned to the bottom edge.
    let window = bottom_row..top_row;
    let padding = visible.saturating_sub(window.len());
    let items: Vec<ListItem> = std::iter::repeat_with(|| ListItem::new(Line::raw("")))
        .take(padding)
        .chain(window.rev().map(|row| list_item(app, row)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// One display row as a list item.
fn list_item(app: &App, row: usize) -> ListItem<'static> {
    let line = match app.cell_for_row(row) {
        Ok(CellSpec::Text(text)) => Line::from(Span::raw(text)),
        Ok(CellSpec::SingleImage(handle)) => Line::from(Span::styled(
            format!("[image {}]", handle.as_str()),
            Style::default().fg(Color::Cyan),
        )),
        Ok(CellSpec::Images(handles)) => Line::from(Span::styled(
            format!("[album: {} images]", handles.len()),
            Style::default().fg(Color::Cyan),
        )),
        // Rows come from the same count we just read; a miss here means the
        // store changed under us and the next arrangement event will redraw.
        Err(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )),
    };

    let item = ListItem::new(line);
    if app.selected_row() == Some(row) {
        item.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        item
    }
}
