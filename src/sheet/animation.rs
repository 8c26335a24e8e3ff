//! Fixed-duration animations driven by the event loop tick.
//!
//! An [`Animation`]'s value is a pure function of the current `Instant`, so
//! the render pass samples it, the tick handler checks it for completion, and
//! tests drive it with synthetic instants instead of sleeping.

use std::time::{Duration, Instant};

/// Duration of the sheet's show/hide animation.
pub const SHEET_ANIMATION: Duration = Duration::from_millis(200);

/// Duration of a row's settle-back animation after a gesture ends.
pub const SETTLE_ANIMATION: Duration = Duration::from_millis(300);

/// A fixed-duration animation with linear base progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    started: Instant,
    duration: Duration,
}

impl Animation {
    /// Start an animation at `now`.
    pub fn new(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Accelerating curve (slow start, fast finish), used by the sheet card.
pub fn ease_accelerate(t: f32) -> f32 {
    t * t
}

/// Decelerating curve (fast start, slow finish), used by the row settle.
pub fn ease_decelerate(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
