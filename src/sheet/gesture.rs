//! Per-row drag gesture state machine.
//!
//! Each visible row owns one [`RowGesture`]. A gesture tracks a single
//! pointer sequence (mouse press, drags, release) and decides between a tap
//! (select) and a rightward swipe (remove), then settles the row's visual
//! offset back to zero.
//!
//! The remove decision is eager and irreversible: it fires at the first move
//! event whose rightward displacement exceeds half the row width, and
//! dragging back left afterwards does not cancel it.

use std::time::Instant;

use super::animation::{ease_decelerate, Animation, SETTLE_ANIMATION};

/// Outcome emitted by a gesture terminator or threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Tap with zero net displacement: switch to this row's session
    Select,
    /// Swipe crossed the removal threshold: close this row's session
    Remove,
}

#[derive(Debug, Clone, Copy)]
enum GestureState {
    Idle,
    Tracking {
        origin_x: i32,
        origin_y: i32,
        offset: u16,
        removed: bool,
    },
    Settling {
        from_offset: u16,
        animation: Animation,
    },
}

/// Gesture tracker for one row slot.
#[derive(Debug, Default)]
pub struct RowGesture {
    state: GestureState,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl RowGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer-truncated euclidean distance from the drag origin.
    fn distance(origin_x: i32, origin_y: i32, x: u16, y: u16) -> i32 {
        let dx = i32::from(x) - origin_x;
        let dy = i32::from(y) - origin_y;
        f64::from(dx * dx + dy * dy).sqrt() as i32
    }

    /// Begin tracking a pointer sequence. Returns whether the event was
    /// consumed; a press while a settle is still in flight is not.
    pub fn on_pointer_down(&mut self, x: u16, y: u16) -> bool {
        match self.state {
            GestureState::Idle => {
                self.state = GestureState::Tracking {
                    origin_x: i32::from(x),
                    origin_y: i32::from(y),
                    offset: 0,
                    removed: false,
                };
                true
            }
            _ => false,
        }
    }

    /// Process a drag event. Rightward motion shifts the row by the
    /// travelled distance; crossing half the row width emits [`GestureOutcome::Remove`]
    /// exactly once per sequence.
    pub fn on_pointer_move(&mut self, x: u16, y: u16, row_width: u16) -> Option<GestureOutcome> {
        let GestureState::Tracking {
            origin_x,
            origin_y,
            ref mut offset,
            ref mut removed,
        } = self.state
        else {
            return None;
        };

        let dx = i32::from(x) - origin_x;
        let distance = Self::distance(origin_x, origin_y, x, y);
        if distance > 0 && dx > 0 {
            *offset = distance as u16;
            if dx > i32::from(row_width / 2) && !*removed {
                *removed = true;
                return Some(GestureOutcome::Remove);
            }
        }
        None
    }

    /// End the sequence. A release with zero total distance emits
    /// [`GestureOutcome::Select`]; either way the row settles back to rest.
    pub fn on_pointer_up(&mut self, x: u16, y: u16, now: Instant) -> Option<GestureOutcome> {
        let GestureState::Tracking {
            origin_x,
            origin_y,
            offset,
            ..
        } = self.state
        else {
            return None;
        };

        let distance = Self::distance(origin_x, origin_y, x, y);
        self.settle(offset, now);
        (distance == 0).then_some(GestureOutcome::Select)
    }

    /// Unwind the sequence with no outcome. Always reports the event as
    /// handled so a cancel never propagates further.
    pub fn on_pointer_cancel(&mut self, now: Instant) -> bool {
        if let GestureState::Tracking { offset, .. } = self.state {
            self.settle(offset, now);
        }
        true
    }

    fn settle(&mut self, from_offset: u16, now: Instant) {
        self.state = GestureState::Settling {
            from_offset,
            animation: Animation::new(now, SETTLE_ANIMATION),
        };
    }

    /// Advance a settle animation. Returns true when it just completed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if let GestureState::Settling { animation, .. } = self.state {
            if animation.is_finished(now) {
                self.state = GestureState::Idle;
                return true;
            }
        }
        false
    }

    /// Current horizontal visual offset in cells.
    pub fn offset(&self, now: Instant) -> u16 {
        match self.state {
            GestureState::Idle => 0,
            GestureState::Tracking { offset, .. } => offset,
            GestureState::Settling {
                from_offset,
                animation,
            } => {
                let t = ease_decelerate(animation.progress(now));
                (f32::from(from_offset) * (1.0 - t)).round() as u16
            }
        }
    }

    /// Whether a pointer sequence is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }

    /// Whether a settle animation is in flight.
    pub fn is_settling(&self) -> bool {
        matches!(self.state, GestureState::Settling { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const ROW_WIDTH: u16 = 40;

    #[test]
    fn test_tap_emits_exactly_one_select() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        assert!(gesture.on_pointer_down(10, 5));
        assert_eq!(gesture.on_pointer_up(10, 5, now), Some(GestureOutcome::Select));
        assert!(gesture.is_settling());

        // The terminated sequence cannot produce further outcomes
        assert_eq!(gesture.on_pointer_up(10, 5, now), None);
    }

    #[test]
    fn test_moved_release_does_not_select() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(10, 5);
        assert_eq!(gesture.on_pointer_move(12, 5, ROW_WIDTH), None);
        assert_eq!(gesture.on_pointer_up(12, 5, now), None);
    }

    #[test]
    fn test_rightward_drag_offsets_by_distance() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(10, 5);
        gesture.on_pointer_move(13, 9, ROW_WIDTH); // dx=3, dy=4 -> distance 5
        assert_eq!(gesture.offset(now), 5);
    }

    #[test]
    fn test_leftward_and_vertical_motion_produce_no_offset() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(10, 5);
        assert_eq!(gesture.on_pointer_move(4, 5, ROW_WIDTH), None);
        assert_eq!(gesture.offset(now), 0);

        assert_eq!(gesture.on_pointer_move(10, 9, ROW_WIDTH), None);
        assert_eq!(gesture.offset(now), 0);
    }

    #[test]
    fn test_remove_fires_at_threshold_crossing_not_at_release() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(0, 5);
        assert_eq!(gesture.on_pointer_move(ROW_WIDTH / 2, 5, ROW_WIDTH), None);
        assert_eq!(
            gesture.on_pointer_move(ROW_WIDTH / 2 + 1, 5, ROW_WIDTH),
            Some(GestureOutcome::Remove)
        );
        assert_eq!(gesture.on_pointer_up(ROW_WIDTH / 2 + 1, 5, now), None);
    }

    #[test]
    fn test_remove_is_latched_once_per_sequence() {
        let mut gesture = RowGesture::new();

        gesture.on_pointer_down(0, 5);
        assert_eq!(
            gesture.on_pointer_move(30, 5, ROW_WIDTH),
            Some(GestureOutcome::Remove)
        );
        assert_eq!(gesture.on_pointer_move(32, 5, ROW_WIDTH), None);
        assert_eq!(gesture.on_pointer_move(35, 5, ROW_WIDTH), None);
    }

    #[test]
    fn test_dragging_back_left_does_not_cancel_remove() {
        let mut gesture = RowGesture::new();

        gesture.on_pointer_down(0, 5);
        assert_eq!(
            gesture.on_pointer_move(30, 5, ROW_WIDTH),
            Some(GestureOutcome::Remove)
        );
        // Back under the threshold: the decision is not re-evaluated
        assert_eq!(gesture.on_pointer_move(5, 5, ROW_WIDTH), None);
    }

    #[test]
    fn test_cancel_is_handled_and_emits_nothing() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(10, 5);
        gesture.on_pointer_move(20, 5, ROW_WIDTH);
        assert!(gesture.on_pointer_cancel(now));
        assert!(gesture.is_settling());

        // Cancel from Idle is still reported as handled
        let mut idle = RowGesture::new();
        assert!(idle.on_pointer_cancel(now));
        assert!(idle.is_idle());
    }

    #[test]
    fn test_settle_decays_offset_to_zero() {
        let mut gesture = RowGesture::new();
        let start = Instant::now();

        gesture.on_pointer_down(0, 5);
        gesture.on_pointer_move(10, 5, ROW_WIDTH);
        gesture.on_pointer_up(10, 5, start);

        let at_start = gesture.offset(start);
        let mid = gesture.offset(start + Duration::from_millis(150));
        assert!(at_start >= mid);

        let end = start + SETTLE_ANIMATION;
        assert_eq!(gesture.offset(end), 0);
        assert!(gesture.advance(end));
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_press_during_settle_is_not_consumed() {
        let mut gesture = RowGesture::new();
        let now = Instant::now();

        gesture.on_pointer_down(0, 5);
        gesture.on_pointer_move(10, 5, ROW_WIDTH);
        gesture.on_pointer_up(10, 5, now);

        assert!(!gesture.on_pointer_down(0, 5));
        assert!(gesture.is_settling());

        gesture.advance(now + SETTLE_ANIMATION);
        assert!(gesture.on_pointer_down(0, 5));
    }
}
