//! Render-ready message classification.
//!
//! The store holds image messages uniformly; the split between "one image"
//! and "an album" is purely presentational, so it happens here, at the edge
//! where stored messages become cells.

use chatpane_core::{ChatMessage, ImageHandle};

/// What a display row should render as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSpec {
    /// A plain text cell.
    Text(String),
    /// A cell showing exactly one image.
    SingleImage(ImageHandle),
    /// A cell showing two or more images.
    Images(Vec<ImageHandle>),
}

impl From<ChatMessage> for CellSpec {
    fn from(message: ChatMessage) -> Self {
        match message {
            ChatMessage::Text(text) => Self::Text(text),
            ChatMessage::Images(set) => {
                let mut handles = set.into_handles();
                if handles.len() == 1 {
                    // Non-empty by ImageSet's invariant
                    Self::SingleImage(handles.remove(0))
                } else {
                    Self::Images(handles)
                }
            },
        }
    }
}
