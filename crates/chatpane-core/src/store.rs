//! Ordered message store with reverse display-row addressing.
//!
//! The store keeps messages in chronological order internally (oldest first)
//! while the presentation layer addresses them by *display row*, the reverse:
//! row 0 is always the newest message. The screen renders the list visually
//! flipped so that native "scroll to top" becomes "scroll to newest"; the
//! store owns the index arithmetic that makes the trick safe.
//!
//! # Serialization
//!
//! One mutex guards the sequence and the observer list. Every operation is a
//! single short critical section, so writes apply in lock-acquisition order
//! (FIFO) and a read never observes a partially applied write. Arrangement
//! notifications are sent while the lock is held, which keeps notification
//! order identical to mutation order: one `()` per mutation, with a batch
//! append counting as one mutation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

use crate::{ChatMessage, StoreError};

/// Stream of arrangement-changed notifications from a [`MessageStore`].
///
/// Each received `()` means one mutation was fully applied; on receipt the
/// observer should re-read the store for every display row it shows (full
/// refresh, not an incremental diff) and then scroll to
/// [`MessageStore::latest_display_row`] if it is addressable.
#[derive(Debug)]
pub struct ArrangementChanges {
    rx: mpsc::UnboundedReceiver<()>,
}

impl ArrangementChanges {
    /// Wait for the next arrangement change.
    ///
    /// Returns `false` once the store has been dropped and no notifications
    /// remain.
    pub async fn changed(&mut self) -> bool {
        self.rx.recv().await.is_some()
    }

    /// Non-blocking variant of [`changed`](Self::changed) for synchronous
    /// callers and tests.
    pub fn try_changed(&mut self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

/// State behind the lock: the chronological sequence plus its observers.
#[derive(Debug, Default)]
struct Inner {
    /// Messages in chronological send order, oldest first.
    messages: Vec<ChatMessage>,
    /// Arrangement-changed subscribers. Closed channels are pruned on send.
    observers: Vec<mpsc::UnboundedSender<()>>,
}

impl Inner {
    /// Notify every observer that one mutation was applied.
    ///
    /// Called with the lock held so notification order matches mutation
    /// order exactly.
    fn notify(&mut self) {
        self.observers.retain(|tx| tx.send(()).is_ok());
    }
}

/// The authoritative, ordered set of chat messages.
///
/// Cloning the store clones a handle to the same shared state; a chat
/// session creates one store, wires it into its presentation layer, and
/// drops it with the screen. Nothing is persisted.
///
/// # Display rows
///
/// Reads and deletes address messages by display row `r`, mapped to the
/// chronological index `count - 1 - r`. Row 0 is always the most recently
/// appended message. Out-of-range rows are a caller defect and come back as
/// [`StoreError::RowOutOfRange`] with state unchanged.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    inner: Arc<Mutex<Inner>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        tracing::debug!("message store created");
        Self::default()
    }

    /// Current number of messages.
    pub fn count(&self) -> usize {
        self.lock().messages.len()
    }

    /// The message at the given display row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowOutOfRange`] if `display_row` is not in
    /// `[0, count)`.
    pub fn message_at(&self, display_row: usize) -> Result<ChatMessage, StoreError> {
        let inner = self.lock();
        let index = chronological_index(display_row, inner.messages.len())?;
        Ok(inner.messages[index].clone())
    }

    /// Append one message at the chronological end.
    ///
    /// The message becomes display row 0. Observers are notified once.
    pub fn append(&self, message: ChatMessage) {
        let mut inner = self.lock();
        inner.messages.push(message);
        inner.notify();
    }

    /// Append a batch of messages, preserving their relative order.
    ///
    /// The whole batch is one mutation: observers receive exactly one
    /// notification after every message is in place. An empty batch is a
    /// no-op and notifies nobody.
    pub fn append_batch(&self, messages: Vec<ChatMessage>) {
        if messages.is_empty() {
            tracing::debug!("ignoring empty message batch");
            return;
        }
        let mut inner = self.lock();
        inner.messages.extend(messages);
        inner.notify();
    }

    /// Remove the message at the given display row.
    ///
    /// Later messages shift down one chronological slot. Observers are
    /// notified once on success.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowOutOfRange`] if `display_row` is not in
    /// `[0, count)`; the store is left unchanged and nobody is notified.
    pub fn remove_at(&self, display_row: usize) -> Result<(), StoreError> {
        let mut inner = self.lock();
        let index = chronological_index(display_row, inner.messages.len())?;
        inner.messages.remove(index);
        inner.notify();
        Ok(())
    }

    /// Display row of the most recent message.
    ///
    /// `Some(0)` whenever the store is non-empty; `None` otherwise. Lets the
    /// presentation layer decide whether "scroll to latest" is meaningful.
    pub fn latest_display_row(&self) -> Option<usize> {
        if self.lock().messages.is_empty() { None } else { Some(0) }
    }

    /// Subscribe to arrangement-changed notifications.
    ///
    /// The returned stream sees every mutation applied after this call, in
    /// application order, with no coalescing across distinct mutations.
    pub fn subscribe(&self) -> ArrangementChanges {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock().observers.push(tx);
        ArrangementChanges { rx }
    }

    /// Take the lock, recovering from poisoning.
    ///
    /// Every critical section leaves the sequence valid, so a panic on
    /// another thread never invalidates the state we would read.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Map a display row onto the chronological index `len - 1 - row`.
fn chronological_index(display_row: usize, len: usize) -> Result<usize, StoreError> {
    if display_row < len {
        Ok(len - 1 - display_row)
    } else {
        tracing::debug!(display_row, len, "display row out of range");
        Err(StoreError::RowOutOfRange { row: display_row, len })
    }
}
