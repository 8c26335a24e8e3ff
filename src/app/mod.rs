//! Application state and event routing for the sessions sheet.
//!
//! [`App`] owns the session store, the sheet controller, the row binder and
//! the hit registry, and routes pointer events between them. The event loop
//! in `main` drives it with mouse events, key events and a fixed tick.

use std::rc::Weak;
use std::time::Instant;

use crate::session::{Session, SessionId, SessionStore};
use crate::sheet::{AfterHide, GestureOutcome, SessionListBinder, SheetController, SheetSignal};
use crate::telemetry::Telemetry;
use crate::ui::interaction::HitRegistry;

pub struct App {
    pub store: SessionStore,
    pub sheet: SheetController,
    pub binder: SessionListBinder,
    pub hit_registry: HitRegistry,
    pub telemetry: Box<dyn Telemetry>,
    /// Session id of the row owning the active pointer sequence
    active_row: Option<SessionId>,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: SessionStore, telemetry: Box<dyn Telemetry>) -> Self {
        let binder = SessionListBinder::new(&store);
        Self {
            store,
            sheet: SheetController::new(),
            binder,
            hit_registry: HitRegistry::new(),
            telemetry,
            active_row: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether any sheet or row animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.sheet.is_animating()
            || self
                .binder
                .rows()
                .iter()
                .any(|row| row.gesture.is_settling())
    }

    /// Animate the sheet in. Called once, on the first layout pass.
    pub fn present_sheet(&mut self, now: Instant) {
        if self.sheet.present(now) {
            self.mark_dirty();
        }
    }

    /// Explicit close (scrim press or back key). The `sheet_closed`
    /// telemetry event fires synchronously with the accepted dismiss, not
    /// on completion; a dismiss rejected by the re-entrancy guard emits
    /// nothing.
    pub fn close_sheet(&mut self, now: Instant) {
        if self.sheet.dismiss(now, AfterHide::Detach) {
            self.telemetry.sheet_closed();
            self.mark_dirty();
        }
    }

    /// A row was tapped: play the dismiss animation first, and leave the
    /// store mutation and its telemetry to the hide completion.
    fn select_session(&mut self, session: Weak<Session>, now: Instant) {
        if self.sheet.dismiss(now, AfterHide::Select(session)) {
            self.mark_dirty();
        }
    }

    /// Route a mouse press. Presses during an in-flight sheet animation are
    /// swallowed entirely.
    pub fn on_mouse_down(&mut self, x: u16, y: u16, now: Instant) {
        if self.sheet.is_animating() {
            return;
        }
        if let Some(action) = self.hit_registry.hit_test(x, y) {
            crate::ui::handle_sheet_action(self, action, x, y, now);
            self.mark_dirty();
        }
    }

    /// Start tracking a pointer sequence on row `index`.
    pub fn begin_row_gesture(&mut self, index: usize, x: u16, y: u16) {
        let slot = &mut self.binder.rows_mut()[index];
        // A slot mid-rebind has no session; the press is a no-op
        if slot.session().is_none() {
            return;
        }
        if slot.gesture.on_pointer_down(x, y) {
            self.active_row = Some(slot.id());
        }
    }

    /// Route a drag to the row owning the pointer sequence. A remove
    /// outcome mutates the store immediately, with no animation gating.
    pub fn on_mouse_drag(&mut self, x: u16, y: u16) {
        let Some(id) = self.active_row else {
            return;
        };
        let Some(slot) = self.binder.rows_mut().iter_mut().find(|r| r.id() == id) else {
            self.active_row = None;
            return;
        };

        let outcome = slot.gesture.on_pointer_move(x, y, slot.area.width);
        let target = slot.session().map(|s| s.id);

        if matches!(outcome, Some(GestureOutcome::Remove)) {
            // Silently dropped when the session is already gone
            if let Some(session_id) = target {
                self.store.remove(session_id);
                tracing::info!(%session_id, "session closed by swipe");
            }
        }
        self.mark_dirty();
    }

    /// Route a mouse release: terminate the active gesture.
    pub fn on_mouse_up(&mut self, x: u16, y: u16, now: Instant) {
        let Some(id) = self.active_row.take() else {
            return;
        };
        let Some(slot) = self.binder.rows_mut().iter_mut().find(|r| r.id() == id) else {
            return;
        };

        let outcome = slot.gesture.on_pointer_up(x, y, now);
        let handle = slot.session_handle();

        if matches!(outcome, Some(GestureOutcome::Select)) {
            self.select_session(handle, now);
        }
        self.mark_dirty();
    }

    /// Unwind the active gesture with no outcome (terminal focus loss).
    pub fn on_pointer_cancel(&mut self, now: Instant) {
        if let Some(id) = self.active_row.take() {
            if let Some(slot) = self.binder.rows_mut().iter_mut().find(|r| r.id() == id) {
                slot.gesture.on_pointer_cancel(now);
                self.mark_dirty();
            }
        }
    }

    /// Advance animations and drain the store feed. Called on every tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some(signal) = self.sheet.advance(now) {
            match signal {
                SheetSignal::Shown => {}
                SheetSignal::Hidden(after) => {
                    if let AfterHide::Select(handle) = after {
                        // Store mutation strictly before its telemetry,
                        // both strictly after the animation
                        if let Some(session) = handle.upgrade() {
                            self.store.select(session.id);
                            self.telemetry.session_selected();
                        }
                    }
                    // The host detaches the sheet once it is hidden
                    self.should_quit = true;
                }
            }
            self.mark_dirty();
        }

        let mut settled = false;
        for slot in self.binder.rows_mut() {
            settled |= slot.gesture.advance(now);
        }
        if settled {
            self.mark_dirty();
        }

        if self.binder.sync(&self.store) {
            self.mark_dirty();
        }

        if self.is_animating() {
            self.mark_dirty();
        }
    }
}
