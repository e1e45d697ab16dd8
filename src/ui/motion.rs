// SPDX-License-Identifier: MPL-2.0
//! Declarative motion descriptors.
//!
//! A [`Motion`] describes one animated scalar as `{initial, target, duration,
//! delay, easing}`. Nothing here owns a timer: the presentation layer samples
//! descriptors against the elapsed time reported by a [`MotionClock`], and
//! an absent clock reading means "settled" (sample at the target).
//!
//! # Example
//!
//! ```
//! use outcome_showcase::ui::motion::{Easing, Motion};
//! use std::time::Duration;
//!
//! let fade = Motion::tween(0.0, 1.0, Duration::from_millis(800)).eased(Easing::EaseInOut);
//! assert_eq!(fade.sample(Some(Duration::ZERO)), 0.0);
//! assert_eq!(fade.sample(Some(Duration::from_secs(1))), 1.0);
//! assert_eq!(fade.sample(None), 1.0);
//! ```

use std::time::{Duration, Instant};

// =============================================================================
// Easing
// =============================================================================

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluates a CSS-style cubic bezier timing function at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let curve = |a1: f32, a2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    };
    let slope = |a1: f32, a2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    };

    // Newton first, bisection when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let error = curve(x1, x2, t) - x;
        if error.abs() < 1e-6 {
            return curve(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - error / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = curve(x1, x2, t);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    curve(y1, y2, t)
}

// =============================================================================
// Motion
// =============================================================================

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: f32,
    pub target: f32,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Motion {
    /// A motion that is already at rest on `value`.
    #[must_use]
    pub const fn settled(value: f32) -> Self {
        Self {
            initial: value,
            target: value,
            duration: Duration::ZERO,
            delay: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Linear tween from `initial` to `target`.
    #[must_use]
    pub const fn tween(initial: f32, target: f32, duration: Duration) -> Self {
        Self {
            initial,
            target,
            duration,
            delay: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub const fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time at which the motion reaches its target.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Whether the motion changes anything at all.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.initial == self.target
    }

    /// Value at `elapsed` since the transition started. `None` means no
    /// transition is in flight, so the target is returned.
    #[must_use]
    pub fn sample(&self, elapsed: Option<Duration>) -> f32 {
        let Some(elapsed) = elapsed else {
            return self.target;
        };
        if elapsed < self.delay {
            return self.initial;
        }
        if self.duration.is_zero() {
            return self.target;
        }

        let progress = (elapsed - self.delay).as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(progress);
        self.initial + (self.target - self.initial) * eased
    }
}

// =============================================================================
// MotionClock
// =============================================================================

/// Start instant of the transition currently being presented.
///
/// The clock is keyed on the selection generation: restarting it for a new
/// generation drops the previous start, which abandons whatever was in
/// flight instead of waiting for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionClock {
    started_at: Option<Instant>,
    generation: u64,
}

impl MotionClock {
    pub fn restart(&mut self, generation: u64, now: Instant) {
        self.started_at = Some(now);
        self.generation = generation;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    /// Elapsed time for `generation`, or `None` when nothing is in flight
    /// for it.
    #[must_use]
    pub fn elapsed(&self, generation: u64, now: Instant) -> Option<Duration> {
        if self.generation != generation {
            return None;
        }
        self.started_at
            .map(|started| now.saturating_duration_since(started))
    }
}
