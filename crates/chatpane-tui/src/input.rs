//! Input state and key handling.
//!
//! Owns the composer buffer and cursor and routes keys: character-level
//! edits stay here, Up/Down/Esc/Delete drive the message selection (the
//! context-menu analog), and Enter parses the buffer as a command or a
//! message.

use chatpane_app::{App, AppAction, KeyInput};

use crate::{
    commands::{self, Command},
    picker,
};

/// Composer state for the TUI.
///
/// The buffer holds only what the user typed; the placeholder is a
/// rendering concern and never enters the buffer.
#[derive(Debug, Default)]
pub struct InputState {
    /// Text buffer for user input.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
}

impl InputState {
    /// Create a new empty input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text in the composer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Current cursor position as a byte offset into the buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position as a column: the number of chars before it.
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }

    /// Handle a key input event.
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor = self.cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                // The cursor is a byte offset; step back a whole char so
                // the removal stays on a boundary.
                if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                    self.buffer.remove(self.cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                // With a message selected, Delete acts on the list
                if app.selected_row().is_some() {
                    return app.delete_selected();
                }
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.cursor = self.buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Up => app.select_older(),
            KeyInput::Down => app.select_newer(),
            KeyInput::Esc => {
                if app.selected_row().is_some() {
                    app.clear_selection()
                } else {
                    app.quit()
                }
            },
            KeyInput::Enter => self.handle_enter(app),
            // Scrolling is runtime state, not input state
            KeyInput::PageUp | KeyInput::PageDown => vec![],
        }
    }

    /// Handle Enter: parse the buffer and call the App API.
    fn handle_enter(&mut self, app: &mut App) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;

        if text.is_empty() {
            return vec![];
        }

        match commands::parse(&text) {
            Command::Message { content } => app.send_message(content),
            Command::Attach { paths } => match picker::pick(paths) {
                Ok(handles) => app.send_images(handles),
                Err(err) => {
                    app.set_status(format!("/image: {err}"));
                    vec![AppAction::Render]
                },
            },
            Command::More => app.send_more_messages(),
            Command::Quit => app.quit(),
            Command::Unknown { input } => {
                app.set_status(format!("Unknown command: {input}"));
                vec![AppAction::Render]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chatpane_core::MessageStore;

    use super::*;

    fn fresh_app() -> App {
        App::new(MessageStore::new())
    }

    #[test]
    fn char_input_adds_to_buffer() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        input.handle_key(KeyInput::Char('h'), &mut app);
        input.handle_key(KeyInput::Char('i'), &mut app);

        assert_eq!(input.buffer(), "hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_char() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        input.handle_key(KeyInput::Char('a'), &mut app);
        input.handle_key(KeyInput::Char('b'), &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn backspace_removes_multibyte_char() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        input.handle_key(KeyInput::Char('c'), &mut app);
        input.handle_key(KeyInput::Char('é'), &mut app);
        input.handle_key(KeyInput::Backspace, &mut app);

        assert_eq!(input.buffer(), "c");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn cursor_steps_over_multibyte_chars() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        for c in "aé".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }

        input.handle_key(KeyInput::Left, &mut app);
        assert_eq!(input.cursor(), 1);
        assert_eq!(input.cursor_column(), 1);

        input.handle_key(KeyInput::Char('x'), &mut app);
        assert_eq!(input.buffer(), "axé");

        input.handle_key(KeyInput::Right, &mut app);
        assert_eq!(input.cursor(), input.buffer().len());
        assert_eq!(input.cursor_column(), 3);

        input.handle_key(KeyInput::Home, &mut app);
        input.handle_key(KeyInput::Right, &mut app);
        input.handle_key(KeyInput::Right, &mut app);
        input.handle_key(KeyInput::Delete, &mut app);
        assert_eq!(input.buffer(), "ax");
    }

    #[test]
    fn enter_sends_and_clears_buffer() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        for c in "test".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }
        input.handle_key(KeyInput::Enter, &mut app);

        assert!(input.buffer().is_empty());
        assert_eq!(input.cursor(), 0);
        assert_eq!(app.message_count(), 1);
    }

    #[test]
    fn enter_on_empty_buffer_sends_nothing() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        let actions = input.handle_key(KeyInput::Enter, &mut app);

        assert!(actions.is_empty());
        assert_eq!(app.message_count(), 0);
    }

    #[test]
    fn cursor_movement() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        for c in "abc".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }

        input.handle_key(KeyInput::Home, &mut app);
        assert_eq!(input.cursor(), 0);

        input.handle_key(KeyInput::End, &mut app);
        assert_eq!(input.cursor(), 3);

        input.handle_key(KeyInput::Left, &mut app);
        assert_eq!(input.cursor(), 2);

        input.handle_key(KeyInput::Right, &mut app);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn image_command_sends_image_message() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        for c in "/image photo.png".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }
        input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.message_count(), 1);
    }

    #[test]
    fn image_command_without_paths_reports_on_status() {
        let mut input = InputState::new();
        let mut app = fresh_app();

        for c in "/image".chars() {
            input.handle_key(KeyInput::Char(c), &mut app);
        }
        input.handle_key(KeyInput::Enter, &mut app);

        assert_eq!(app.message_count(), 0);
        assert_eq!(app.status_message(), Some("/image: no images were picked"));
    }

    #[test]
    fn up_then_delete_removes_newest_message() {
        let mut input = InputState::new();
        let mut app = fresh_app();
        app.send_message("first");
        app.send_message("second");

        input.handle_key(KeyInput::Up, &mut app);
        assert_eq!(app.selected_row(), Some(0));

        input.handle_key(KeyInput::Delete, &mut app);
        assert_eq!(app.message_count(), 1);
        assert_eq!(app.selected_row(), None);
    }

    #[test]
    fn delete_without_selection_edits_the_buffer() {
        let mut input = InputState::new();
        let mut app = fresh_app();
        app.send_message("keep me");

        input.handle_key(KeyInput::Char('x'), &mut app);
        input.handle_key(KeyInput::Home, &mut app);
        input.handle_key(KeyInput::Delete, &mut app);

        assert!(input.buffer().is_empty());
        assert_eq!(app.message_count(), 1);
    }

    #[test]
    fn esc_clears_selection_before_quitting() {
        let mut input = InputState::new();
        let mut app = fresh_app();
        app.send_message("msg");

        input.handle_key(KeyInput::Up, &mut app);
        let actions = input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.selected_row(), None);

        let actions = input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(actions, vec![AppAction::Quit]);
    }
}
