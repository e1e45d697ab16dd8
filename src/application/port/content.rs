// SPDX-License-Identifier: MPL-2.0
//! Content data source port.
//!
//! A [`ContentSource`] supplies the section copy, the shared call-to-action
//! target and the ordered tab records. It is read exactly once, before the
//! showcase is constructed; the result is read-only afterwards.

use crate::domain::showcase::ShowcaseContent;

// =============================================================================
// ContentError
// =============================================================================

/// Errors that can occur while reading a content document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// The document could not be read.
    #[error("content unreadable: {0}")]
    Unreadable(String),

    /// The document was read but does not describe a showcase.
    #[error("content malformed: {0}")]
    Malformed(String),
}

// =============================================================================
// ContentSource Trait
// =============================================================================

/// Port for the fixed, ordered record set.
///
/// Validation of the records themselves (non-empty, unique ids) belongs to
/// [`Showcase::new`](crate::domain::showcase::Showcase::new), not to the
/// source.
pub trait ContentSource {
    /// Reads the content document.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the document is missing or malformed.
    fn load(&self) -> Result<ShowcaseContent, ContentError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
