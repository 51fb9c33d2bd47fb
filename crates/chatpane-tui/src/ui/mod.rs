//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod chat;
mod composer;
mod status;

use chatpane_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::InputState;

/// Render the entire screen.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, scroll_offset: usize) {
    const CHAT_MIN_HEIGHT: u16 = 3;
    const COMPOSER_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CHAT_MIN_HEIGHT),
            Constraint::Length(COMPOSER_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [chat_area, composer_area, status_area] = chunks.as_ref() else {
        return;
    };

    chat::render(frame, app, scroll_offset, *chat_area);
    composer::render(frame, app, input, *composer_area);
    status::render(frame, app, *status_area);
}

#[cfg(test)]
mod tests {
    use chatpane_core::{ImageHandle, MessageStore};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(app: &App, input: &InputState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app, input, 0)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in buffer.area.top()..buffer.area.bottom() {
            for x in buffer.area.left()..buffer.area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn empty_screen_shows_composer_placeholder() {
        let app = App::new(MessageStore::new());
        let screen = draw(&app, &InputState::new());

        assert!(screen.contains("Message"));
        assert!(screen.contains("No messages yet"));
    }

    #[test]
    fn typed_text_replaces_the_placeholder() {
        let mut app = App::new(MessageStore::new());
        let mut input = InputState::new();
        for c in "typing".chars() {
            input.handle_key(chatpane_app::KeyInput::Char(c), &mut app);
        }

        let screen = draw(&app, &input);

        assert!(screen.contains("typing"));
        assert!(!screen.contains("> Message"));
    }

    #[test]
    fn newest_message_renders_nearest_the_composer() {
        let mut app = App::new(MessageStore::new());
        app.send_message("older line");
        app.send_message("newer line");

        let screen = draw(&app, &InputState::new());
        let older = screen.find("older line").unwrap();
        let newer = screen.find("newer line").unwrap();

        assert!(older < newer, "older message must render above the newer one");
    }

    #[test]
    fn short_window_pins_to_the_bottom_edge() {
        let mut app = App::new(MessageStore::new());
        app.send_message("pinned line");

        let screen = draw(&app, &InputState::new());
        let lines: Vec<&str> = screen.lines().collect();

        // Chat pane spans rows 0..8; the lone message sits on the last
        // inner row, next to the composer, not under the top border.
        assert!(lines[6].contains("pinned line"));
        assert!(!lines[1].contains("pinned line"));
    }

    #[test]
    fn image_cells_render_as_badges() {
        let mut app = App::new(MessageStore::new());
        app.send_images(vec![ImageHandle::new("solo.png")]);
        app.send_images(vec![ImageHandle::new("a.png"), ImageHandle::new("b.png")]);

        let screen = draw(&app, &InputState::new());

        assert!(screen.contains("[image solo.png]"));
        assert!(screen.contains("[album: 2 images]"));
    }

    #[test]
    fn status_line_reports_message_count() {
        let mut app = App::new(MessageStore::new());
        app.send_message("one");

        let screen = draw(&app, &InputState::new());
        assert!(screen.contains("Messages: 1"));
    }
}
