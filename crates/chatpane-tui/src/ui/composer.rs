//! Composer line
//!
//! Displays the input buffer with cursor, or the placeholder while the
//! buffer is empty. The placeholder is purely visual: it never enters the
//! buffer and can never be sent.

use chatpane_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

const PROMPT_WIDTH: u16 = 3; // "> "
const INPUT_LINE_OFFSET_Y: u16 = 1; // inside top border
const RIGHT_PADDING: u16 = 1; // inside right border

/// Render the composer line.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    let (text, style) = if input.buffer().is_empty() {
        (
            format!("> {}", app.composer_placeholder()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (format!("> {}", input.buffer()), Style::default().fg(Color::White))
    };

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);

    let available_width = area.width.saturating_sub(PROMPT_WIDTH + RIGHT_PADDING);
    let cursor_offset = u16::try_from(input.cursor_column())
        .unwrap_or(u16::MAX)
        .min(available_width);

    let cursor_x = area.x.saturating_add(PROMPT_WIDTH).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(INPUT_LINE_OFFSET_Y);
    let max_x = area.x.saturating_add(area.width).saturating_sub(RIGHT_PADDING);

    frame.set_cursor_position((cursor_x.min(max_x), cursor_y));
}
