//! Image picker adapter.
//!
//! Stands in for a platform photo picker: the user names paths, the adapter
//! turns them into opaque [`ImageHandle`]s. The store's non-empty invariant
//! is enforced here, at the boundary that gathers picker results — an empty
//! selection never reaches the app layer.

use chatpane_core::ImageHandle;
use thiserror::Error;

/// Errors from the picker boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The user picked nothing.
    #[error("no images were picked")]
    EmptySelection,
}

/// Turn picked paths into image handles.
///
/// # Errors
///
/// Returns [`PickerError::EmptySelection`] if `paths` is empty.
pub fn pick(paths: Vec<String>) -> Result<Vec<ImageHandle>, PickerError> {
    if paths.is_empty() {
        return Err(PickerError::EmptySelection);
    }
    Ok(paths.into_iter().map(ImageHandle::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_become_handles_in_order() {
        let handles = pick(vec!["a.png".into(), "b.png".into()]).unwrap();
        assert_eq!(handles, vec![ImageHandle::new("a.png"), ImageHandle::new("b.png")]);
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert_eq!(pick(Vec::new()), Err(PickerError::EmptySelection));
    }
}
