//! Terminal front end for chatpane
//!
//! The presentation adapter over [`chatpane_app::App`]: a bottom-anchored
//! message list, a composer line with placeholder semantics, and a
//! selection gesture for per-message deletion. All chat state lives in the
//! app and store crates; this crate only renders and translates terminal
//! input.
//!
//! # Interaction
//!
//! - Type and press Enter to send a message
//! - `/image <path>...` attaches images, `/more` appends a filler batch,
//!   `/quit` exits
//! - Up/Down select a message, Delete removes it, Esc leaves selection mode

pub mod commands;
pub mod input;
pub mod picker;
pub mod runtime;
pub mod ui;

pub use chatpane_app::{App, AppAction, AppEvent, CellSpec, KeyInput};
pub use input::InputState;
pub use runtime::{Runtime, RuntimeError};
