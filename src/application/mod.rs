// SPDX-License-Identifier: MPL-2.0
//! Application layer - Contracts with the hosting environment.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes ports through trait objects
//!
//! # Example
//!
//! ```ignore
//! use outcome_showcase::application::port::{ContentSource, NavigationSink};
//!
//! struct BrowserNavigator;
//! impl NavigationSink for BrowserNavigator {
//!     fn navigate(&mut self, target: &str) { /* ... */ }
//! }
//! ```

pub mod port;
