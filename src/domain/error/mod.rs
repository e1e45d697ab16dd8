// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use crate::domain::showcase::{MediaKind, TabId};
use std::fmt;

/// Errors raised by the showcase domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// `select` was called with an id outside the fixed record set.
    /// The selection state is left untouched.
    InvalidSelection(TabId),

    /// The content source yielded no records. Fatal at construction.
    EmptyContentSet,

    /// Two records share the same id. Fatal at construction.
    DuplicateTabId(TabId),

    /// A record lacks a media locator. Non-fatal: the slot is omitted.
    MissingMediaReference { id: TabId, kind: MediaKind },
}

impl fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowcaseError::InvalidSelection(id) => {
                write!(f, "Invalid selection: no tab with id '{}'", id)
            }
            ShowcaseError::EmptyContentSet => {
                write!(f, "Content set is empty: at least one tab is required")
            }
            ShowcaseError::DuplicateTabId(id) => write!(f, "Duplicate tab id '{}'", id),
            ShowcaseError::MissingMediaReference { id, kind } => {
                write!(f, "Tab '{}' has no {} reference", id, kind)
            }
        }
    }
}

impl std::error::Error for ShowcaseError {}
