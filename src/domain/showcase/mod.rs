// SPDX-License-Identifier: MPL-2.0
//! Showcase domain: tab records and the single-selection state machine.
//!
//! The [`Showcase`] aggregate owns a fixed [`Catalog`] of records and the
//! only mutable state of the widget, a [`SelectionState`] pair of
//! `(active, previous)` ids. Transition direction is always derived from
//! that pair and never stored on its own.

mod catalog;
mod machine;
mod record;
mod selection;

pub use catalog::Catalog;
pub use machine::Showcase;
pub use record::{MediaKind, MediaRef, SectionCopy, ShowcaseContent, TabId, TabRecord};
pub use selection::{Direction, SelectionState, Transition};
