// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The showcase consumes exactly two external contracts:
//!
//! - [`content`]: the fixed, ordered record set supplied at construction
//! - [`navigation`]: the sink fired when a call-to-action is activated
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no TOML types)
//! - No `async fn`; content is read once before the UI starts

pub mod content;
pub mod navigation;

pub use content::{ContentError, ContentSource};
pub use navigation::NavigationSink;
