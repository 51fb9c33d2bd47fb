//! Core message state for chatpane
//!
//! The authoritative, ordered collection of chat messages behind a single
//! serialization point, plus the content model the rest of the workspace
//! renders from.
//!
//! # Components
//!
//! - [`ChatMessage`]: content model (text or a non-empty set of images)
//! - [`MessageStore`]: ordered store with reverse display-row addressing
//! - [`ArrangementChanges`]: per-observer notification stream
//!
//! The store addresses messages by *display row*: row 0 is always the most
//! recently appended message, the reverse of chronological storage order.
//! See [`MessageStore`] for the mapping contract.

mod error;
mod message;
mod store;

pub use error::StoreError;
pub use message::{ChatMessage, EmptyImageSet, ImageHandle, ImageSet};
pub use store::{ArrangementChanges, MessageStore};
