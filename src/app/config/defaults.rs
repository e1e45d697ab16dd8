// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Viewport breakpoint that switches to the side media panel
//! - **Animation**: Frame tick interval while a transition is in flight

use crate::ui::design_tokens::breakpoint;
use std::time::Duration;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default width (logical px) at and above which media moves to the side panel.
pub const DEFAULT_WIDE_BREAKPOINT: f32 = breakpoint::XL;

/// Smallest accepted breakpoint. Below this the tab column and side panel
/// get too narrow to share a row.
pub const MIN_WIDE_BREAKPOINT: f32 = breakpoint::LG;

/// Largest accepted breakpoint.
pub const MAX_WIDE_BREAKPOINT: f32 = 3840.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval between animation ticks (about 60 frames per second).
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_bounds_are_ordered() {
        assert!(MIN_WIDE_BREAKPOINT < DEFAULT_WIDE_BREAKPOINT);
        assert!(DEFAULT_WIDE_BREAKPOINT < MAX_WIDE_BREAKPOINT);
        assert!(MIN_WIDE_BREAKPOINT > breakpoint::MD);
    }
}
