//! Status bar
//!
//! Message count, the selection hint, and transient status notes.

use chatpane_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let count = Span::styled(
        format!("Messages: {}", app.message_count()),
        Style::default().add_modifier(Modifier::BOLD),
    );

    let hint = match app.selected_row() {
        Some(row) => format!(" | Row {row} selected: Delete removes, Esc cancels"),
        None => " | /image <path>  /more  /quit".to_string(),
    };

    let note = app
        .status_message()
        .map_or_else(String::new, |message| format!(" | {message}"));

    let line = Line::from(vec![
        Span::raw(" "),
        count,
        Span::styled(hint, Style::default().fg(Color::Gray)),
        Span::styled(note, Style::default().fg(Color::Yellow)),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
