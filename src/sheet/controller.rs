//! Sheet presentation state machine.
//!
//! Owns the show/hide animation of the sheet card and its background scrim.
//! Exactly one animation may be in flight; `present` and `dismiss` requests
//! arriving while one is running are ignored, not queued. The controller
//! never performs side effects itself: completions surface as
//! [`SheetSignal`]s that the host consumes on its tick.

use std::rc::Weak;
use std::time::Instant;

use crate::session::Session;

use super::animation::{ease_accelerate, Animation, SHEET_ANIMATION};

/// Presentation phase of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetPhase {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

/// What the host owes once the hide animation completes.
///
/// The two dismiss flavors differ in their post-completion obligation:
/// an explicit close already emitted its telemetry at the dismiss call and
/// only needs teardown, while a row selection defers the store mutation and
/// its telemetry to completion.
#[derive(Debug, Clone)]
pub enum AfterHide {
    /// Tear the sheet down, nothing else
    Detach,
    /// Select the session if it still exists, emit telemetry, then tear down
    Select(Weak<Session>),
}

/// Completion signal yielded by [`SheetController::advance`].
#[derive(Debug, Clone)]
pub enum SheetSignal {
    /// The show animation finished; the sheet is fully interactive
    Shown,
    /// The hide animation finished; the host settles `after` and detaches
    Hidden(AfterHide),
}

/// Show/hide coordinator for the single sheet instance.
#[derive(Debug)]
pub struct SheetController {
    phase: SheetPhase,
    animation: Option<Animation>,
    pending: Option<AfterHide>,
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new()
    }
}

impl SheetController {
    /// Create a controller with the sheet hidden.
    pub fn new() -> Self {
        Self {
            phase: SheetPhase::Hidden,
            animation: None,
            pending: None,
        }
    }

    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Whether a show or hide animation is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, SheetPhase::Showing | SheetPhase::Hiding)
    }

    /// Whether the sheet participates in rendering and hit-testing at all.
    pub fn is_visible(&self) -> bool {
        self.phase != SheetPhase::Hidden
    }

    /// Whether pointer interaction reaches the sheet's contents.
    pub fn is_interactive(&self) -> bool {
        self.phase == SheetPhase::Shown
    }

    /// Animate the sheet in. Rejected unless the sheet is hidden.
    pub fn present(&mut self, now: Instant) -> bool {
        if self.phase != SheetPhase::Hidden {
            return false;
        }
        self.phase = SheetPhase::Showing;
        self.animation = Some(Animation::new(now, SHEET_ANIMATION));
        true
    }

    /// Animate the sheet out, owing `after` on completion.
    ///
    /// Rejected while any animation is in flight or the sheet is already
    /// hidden; exactly one completion signal fires per accepted dismiss.
    pub fn dismiss(&mut self, now: Instant, after: AfterHide) -> bool {
        if self.phase != SheetPhase::Shown {
            return false;
        }
        self.phase = SheetPhase::Hiding;
        self.animation = Some(Animation::new(now, SHEET_ANIMATION));
        self.pending = Some(after);
        true
    }

    /// Check the in-flight animation for completion. No-op when none is
    /// running, so a stray extra tick can never double-fire a signal.
    pub fn advance(&mut self, now: Instant) -> Option<SheetSignal> {
        let animation = self.animation?;
        if !animation.is_finished(now) {
            return None;
        }
        self.animation = None;

        match self.phase {
            SheetPhase::Showing => {
                self.phase = SheetPhase::Shown;
                Some(SheetSignal::Shown)
            }
            SheetPhase::Hiding => {
                self.phase = SheetPhase::Hidden;
                Some(SheetSignal::Hidden(
                    self.pending.take().unwrap_or(AfterHide::Detach),
                ))
            }
            // Animation with a settled phase should not happen; swallow it
            // rather than wedge the guard.
            SheetPhase::Hidden | SheetPhase::Shown => None,
        }
    }

    /// Combined scale/opacity value of the card in `[0, 1]`, accelerating.
    pub fn card_progress(&self, now: Instant) -> f32 {
        match (self.phase, self.animation) {
            (SheetPhase::Hidden, _) => 0.0,
            (SheetPhase::Shown, _) => 1.0,
            (SheetPhase::Showing, Some(anim)) => ease_accelerate(anim.progress(now)),
            (SheetPhase::Hiding, Some(anim)) => 1.0 - ease_accelerate(anim.progress(now)),
            (SheetPhase::Showing, None) => 1.0,
            (SheetPhase::Hiding, None) => 0.0,
        }
    }

    /// Scrim opacity in `[0, 1]`, linear, in lockstep with the card.
    pub fn scrim_progress(&self, now: Instant) -> f32 {
        match (self.phase, self.animation) {
            (SheetPhase::Hidden, _) => 0.0,
            (SheetPhase::Shown, _) => 1.0,
            (SheetPhase::Showing, Some(anim)) => anim.progress(now),
            (SheetPhase::Hiding, Some(anim)) => 1.0 - anim.progress(now),
            (SheetPhase::Showing, None) => 1.0,
            (SheetPhase::Hiding, None) => 0.0,
        }
    }
}
