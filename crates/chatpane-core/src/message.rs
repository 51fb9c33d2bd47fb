//! Message content model.
//!
//! Messages are either plain text or a non-empty set of image handles. The
//! non-empty invariant lives in [`ImageSet`]'s constructor so a zero-image
//! message cannot be represented at all, rather than being a convention the
//! store would have to re-check on every append.

use thiserror::Error;

/// Opaque reference to an image.
///
/// The store never decodes or inspects image bytes; loading and rendering
/// belong entirely to the presentation layer. The handle carries only an
/// identifier (for the terminal front end, a file path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Create a handle from an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier this handle was created from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error returned when constructing an [`ImageSet`] from no images.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("an image message requires at least one image")]
pub struct EmptyImageSet;

/// A non-empty, ordered set of image handles.
///
/// Invariant: always holds at least one handle. The presentation layer
/// distinguishes single-image from multi-image purely by [`count`], but the
/// variant itself never holds zero.
///
/// [`count`]: ImageSet::count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet(Vec<ImageHandle>);

impl ImageSet {
    /// Create a set from the given handles, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyImageSet`] if `handles` is empty.
    pub fn new(handles: Vec<ImageHandle>) -> Result<Self, EmptyImageSet> {
        if handles.is_empty() {
            return Err(EmptyImageSet);
        }
        Ok(Self(handles))
    }

    /// Create a set holding exactly one handle.
    pub fn single(handle: ImageHandle) -> Self {
        Self(vec![handle])
    }

    /// Handles in this set, in the order they were picked.
    pub fn handles(&self) -> &[ImageHandle] {
        &self.0
    }

    /// Number of handles. Always at least 1.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Consume the set, yielding its handles. The result is never empty.
    pub fn into_handles(self) -> Vec<ImageHandle> {
        self.0
    }
}

/// A chat message as the store holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMessage {
    /// A plain text message.
    Text(String),
    /// One or more attached images, stored uniformly regardless of count.
    Images(ImageSet),
}

impl ChatMessage {
    /// Convenience constructor for a text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}
