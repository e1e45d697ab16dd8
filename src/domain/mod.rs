// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core showcase rules with ZERO external dependencies.
//!
//! This module contains the pure domain types and the selection state
//! machine. It depends on nothing outside `std`, so every rule here can be
//! unit-tested without a rendering environment.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`ShowcaseError`](error::ShowcaseError))
//! - [`showcase`]: Records, the validated [`Catalog`](showcase::Catalog),
//!   and the [`Showcase`](showcase::Showcase) selection machine

pub mod error;
pub mod showcase;
