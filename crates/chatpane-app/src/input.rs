//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the application layer from terminal libraries (crossterm,
/// termion, etc.) so input handling stays testable without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Escape key (clear selection, or quit from the composer).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (select older message).
    Up,
    /// Down arrow key (select newer message).
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
    /// Page up (scroll the message list toward older messages).
    PageUp,
    /// Page down (scroll the message list toward newer messages).
    PageDown,
}
