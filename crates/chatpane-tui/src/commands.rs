//! Composer command parsing.
//!
//! Anything starting with `/` is a command; everything else is a message.
//! Parsing is intentionally forgiving: unknown commands surface on the
//! status line instead of being sent as text.

/// A parsed composer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain chat message.
    Message {
        /// Message text as typed.
        content: String,
    },

    /// Attach the images at the given paths as one message.
    ///
    /// May be empty as parsed; the picker adapter rejects empty selections.
    Attach {
        /// Paths the user listed after `/image`.
        paths: Vec<String>,
    },

    /// Append a randomly generated filler batch.
    More,

    /// Quit the application.
    Quit,

    /// Unrecognized command.
    Unknown {
        /// The raw input, for the status line.
        input: String,
    },
}

/// Parse one composer submission.
pub fn parse(input: &str) -> Command {
    let Some(rest) = input.strip_prefix('/') else {
        return Command::Message { content: input.to_string() };
    };

    let mut parts = rest.split_whitespace();
    match parts.next() {
        Some("image") => Command::Attach { paths: parts.map(str::to_string).collect() },
        Some("more") => Command::More,
        Some("quit" | "q") => Command::Quit,
        _ => Command::Unknown { input: input.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(
            parse("hello there"),
            Command::Message { content: "hello there".into() }
        );
    }

    #[test]
    fn image_command_collects_paths() {
        assert_eq!(
            parse("/image a.png b.png"),
            Command::Attach { paths: vec!["a.png".into(), "b.png".into()] }
        );
    }

    #[test]
    fn image_command_without_paths_parses_empty() {
        assert_eq!(parse("/image"), Command::Attach { paths: vec![] });
    }

    #[test]
    fn more_and_quit() {
        assert_eq!(parse("/more"), Command::More);
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/q"), Command::Quit);
    }

    #[test]
    fn unknown_command_is_reported_not_sent() {
        assert_eq!(parse("/frobnicate"), Command::Unknown { input: "/frobnicate".into() });
    }
}
