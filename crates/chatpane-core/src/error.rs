//! Error types for the message store.
//!
//! The taxonomy is deliberately narrow: the store is in-memory and I/O-free,
//! so the only failure is a caller addressing a display row that does not
//! exist. That is a programming defect in the presentation layer, reported
//! as an explicit error kind rather than papered over with placeholder data.

use thiserror::Error;

/// Errors surfaced by [`MessageStore`](crate::MessageStore) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A display row outside `[0, count)` was read or deleted.
    ///
    /// The operation was a no-op; store state is unchanged.
    #[error("display row {row} out of range ({len} message(s) stored)")]
    RowOutOfRange {
        /// Display row the caller asked for.
        row: usize,
        /// Number of messages in the store at the time of the call.
        len: usize,
    },
}
