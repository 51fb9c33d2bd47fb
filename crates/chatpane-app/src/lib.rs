//! Presentation state machine for chatpane
//!
//! The view-model layer between the message store and a concrete front end.
//! Pure of terminal I/O: it consumes [`AppEvent`] inputs and produces
//! [`AppAction`] instructions for a runtime to execute, the same shape
//! whether driven by a real terminal or by tests.
//!
//! # Components
//!
//! - [`App`]: state machine (message intents, selection, status line)
//! - [`CellSpec`]: render-ready classification of a stored message
//! - [`KeyInput`]: terminal-agnostic key events
//! - [`filler`]: synthetic message batches for the "send more" affordance

mod action;
mod app;
mod cell;
mod event;
pub mod filler;
mod input;

pub use action::AppAction;
pub use app::App;
pub use cell::CellSpec;
pub use event::AppEvent;
pub use input::KeyInput;
