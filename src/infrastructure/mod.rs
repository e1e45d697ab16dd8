// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`content`]: TOML content documents, embedded or read from disk
//!   (implements [`ContentSource`])
//! - [`navigation`]: Logging navigation sink (implements [`NavigationSink`])
//! - [`poster`]: HTTP download of remote poster images
//!
//! [`ContentSource`]: crate::application::port::ContentSource
//! [`NavigationSink`]: crate::application::port::NavigationSink

pub mod content;
pub mod navigation;
pub mod poster;

pub use content::{EmbeddedContent, FileContent};
pub use navigation::LogNavigator;
pub use poster::{fetch_poster, PosterError};
