//! Application side-effects and intents.
//!
//! Instructions produced by the [`crate::App`] state machine for the runtime
//! to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the screen from current state.
    Render,

    /// Scroll the message list to the latest display row, if any.
    ScrollToLatest,

    /// Quit the application.
    Quit,
}
