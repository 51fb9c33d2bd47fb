//! Application input events.
//!
//! Events fed into the [`crate::App`] state machine. They come from two
//! sources: terminal input (resize, tick) and the message store's
//! arrangement-changed notification stream.

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The message store applied a mutation. The screen must fully re-read
    /// the store and scroll to the latest message.
    ArrangementChanged,
}
