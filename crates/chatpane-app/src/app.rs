//! Application state machine.
//!
//! [`App`] is the chat screen's view-model: it owns a handle to the message
//! store, turns user intents (send text, send images, request a filler
//! batch, delete a row) into store mutations, and exposes read accessors a
//! renderer can address by display row.
//!
//! It is a pure state machine over the store handle: no terminal, no
//! channels, no async. The runtime feeds it [`AppEvent`]s and executes the
//! [`AppAction`]s it returns, so the same code drives the real TUI and the
//! tests.

use chatpane_core::{ChatMessage, ImageHandle, ImageSet, MessageStore, StoreError};

use crate::{AppAction, AppEvent, CellSpec, filler};

/// Placeholder shown in the composer while it is empty.
const COMPOSER_PLACEHOLDER: &str = "Message";

/// Chat screen state machine.
#[derive(Debug)]
pub struct App {
    /// Handle to the shared message store.
    store: MessageStore,
    /// Highlighted display row, if the user is selecting a message.
    selected: Option<usize>,
    /// Transient status line. `None` when there is nothing to report.
    status_message: Option<String>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create an App over the given store handle.
    ///
    /// The caller keeps its own clone of the store for subscribing to
    /// arrangement changes; wiring is explicit, there is no hidden registry.
    pub fn new(store: MessageStore) -> Self {
        tracing::debug!("app state machine created");
        Self { store, selected: None, status_message: None, terminal_size: (80, 24) }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::ArrangementChanged => {
                self.clamp_selection();
                vec![AppAction::Render, AppAction::ScrollToLatest]
            },
        }
    }

    // --- User intents ---

    /// Send a text message. Blank input is ignored.
    pub fn send_message(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        let text = text.into();
        if text.trim().is_empty() {
            return vec![];
        }
        self.store.append(ChatMessage::Text(text));
        vec![AppAction::Render]
    }

    /// Send the picked images as one message.
    ///
    /// The picker boundary filters out empty selections already; an empty
    /// set here is a caller defect and is dropped with a status note.
    pub fn send_images(&mut self, handles: Vec<ImageHandle>) -> Vec<AppAction> {
        match ImageSet::new(handles) {
            Ok(set) => {
                self.store.append(ChatMessage::Images(set));
            },
            Err(err) => {
                tracing::warn!(%err, "dropping empty image selection");
                self.status_message = Some(err.to_string());
            },
        }
        vec![AppAction::Render]
    }

    /// Append a randomly generated filler batch.
    pub fn send_more_messages(&mut self) -> Vec<AppAction> {
        let batch = filler::generate(&mut rand::rng());
        self.store.append_batch(batch);
        vec![AppAction::Render]
    }

    /// Delete the message at the given display row.
    pub fn delete_message(&mut self, display_row: usize) -> Vec<AppAction> {
        match self.store.remove_at(display_row) {
            Ok(()) => {
                self.selected = None;
            },
            Err(err) => {
                tracing::warn!(%err, "delete failed");
                self.status_message = Some(err.to_string());
            },
        }
        vec![AppAction::Render]
    }

    /// Delete the currently selected message, if there is one.
    pub fn delete_selected(&mut self) -> Vec<AppAction> {
        match self.selected {
            Some(row) => self.delete_message(row),
            None => {
                self.status_message = Some("No message selected".into());
                vec![AppAction::Render]
            },
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    // --- Selection ---

    /// Move the selection one message older (visually upward).
    ///
    /// With no selection, starts at display row 0 (the newest message).
    pub fn select_older(&mut self) -> Vec<AppAction> {
        let count = self.store.count();
        if count == 0 {
            return vec![];
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(row) => (row + 1).min(count - 1),
        });
        vec![AppAction::Render]
    }

    /// Move the selection one message newer (visually downward).
    ///
    /// Stepping past the newest message clears the selection.
    pub fn select_newer(&mut self) -> Vec<AppAction> {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(row) => Some(row - 1),
        };
        vec![AppAction::Render]
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) -> Vec<AppAction> {
        self.selected = None;
        vec![AppAction::Render]
    }

    /// Keep the selection inside `[0, count)` after the arrangement changed.
    fn clamp_selection(&mut self) {
        let count = self.store.count();
        self.selected = match (self.selected, count) {
            (Some(_), 0) | (None, _) => None,
            (Some(row), _) => Some(row.min(count - 1)),
        };
    }

    // --- Read accessors for renderers ---

    /// Current number of messages.
    pub fn message_count(&self) -> usize {
        self.store.count()
    }

    /// The render-ready cell for a display row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RowOutOfRange`] for rows outside `[0, count)`.
    pub fn cell_for_row(&self, display_row: usize) -> Result<CellSpec, StoreError> {
        self.store.message_at(display_row).map(CellSpec::from)
    }

    /// Display row of the latest message, if any.
    pub fn latest_display_row(&self) -> Option<usize> {
        self.store.latest_display_row()
    }

    /// Currently highlighted display row.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected
    }

    /// Composer placeholder text.
    pub fn composer_placeholder(&self) -> &'static str {
        COMPOSER_PLACEHOLDER
    }

    /// Transient status message. `None` if there is nothing to report.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set the status line.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
