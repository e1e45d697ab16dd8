// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`showcase`] - The tabbed outcome showcase: render model and iced view
//! - [`motion`] - Declarative animation descriptors and the transition clock
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod motion;
pub mod showcase;
pub mod styles;
