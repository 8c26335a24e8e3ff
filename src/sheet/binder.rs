//! Binding between the session store and the sheet's row slots.
//!
//! The binder is the only sheet component that reads the store. Each row
//! slot holds a non-owning `Weak` handle to its session plus the visual
//! state derived at bind time; `is_current` is re-derived on every bind and
//! never cached across store mutations.

use std::rc::{Rc, Weak};

use ratatui::layout::Rect;

use crate::session::display::beautify_url;
use crate::session::{Session, SessionEvent, SessionFeed, SessionId, SessionStore};

use super::gesture::RowGesture;

/// Visual state derived for a row at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowVisual {
    /// Title if the page reported one, else the beautified URL
    pub text: String,
    /// Picks one of the two mutually-exclusive row treatments
    pub is_current: bool,
}

/// One visual row slot, bound to at most one session at a time.
#[derive(Debug)]
pub struct RowSlot {
    id: SessionId,
    session: Weak<Session>,
    pub visual: RowVisual,
    pub gesture: RowGesture,
    /// Last rendered area; `Rect::ZERO` until the first layout pass
    pub area: Rect,
}

impl RowSlot {
    fn bind(session: &Rc<Session>, is_current: bool) -> Self {
        Self {
            id: session.id,
            session: Rc::downgrade(session),
            visual: derive_visual(session, is_current),
            gesture: RowGesture::new(),
            area: Rect::ZERO,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Resolve the bound session. `None` once the store dropped it.
    pub fn session(&self) -> Option<Rc<Session>> {
        self.session.upgrade()
    }

    /// Non-owning handle for deferred outcomes (select-after-dismiss).
    pub fn session_handle(&self) -> Weak<Session> {
        Weak::clone(&self.session)
    }
}

fn derive_visual(session: &Session, is_current: bool) -> RowVisual {
    let text = if session.title.is_empty() {
        beautify_url(&session.url)
    } else {
        session.title.clone()
    };
    RowVisual { text, is_current }
}

/// Keeps row slots in step with the store's live session list.
#[derive(Debug)]
pub struct SessionListBinder {
    rows: Vec<RowSlot>,
    feed: SessionFeed,
    /// Removals held back while the affected row's gesture is mid-sequence
    deferred_removals: Vec<SessionId>,
}

impl SessionListBinder {
    /// Populate rows from the store and subscribe to its change feed.
    /// Dropping the binder drops the subscription with it.
    pub fn new(store: &SessionStore) -> Self {
        let feed = store.subscribe();
        let rows = store
            .sessions()
            .iter()
            .map(|s| RowSlot::bind(s, store.is_current(s.id)))
            .collect();
        Self {
            rows,
            feed,
            deferred_removals: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[RowSlot] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [RowSlot] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drain pending store events and update row slots incrementally.
    /// Returns true when anything visible changed.
    pub fn sync(&mut self, store: &SessionStore) -> bool {
        let mut changed = false;

        while let Some(event) = self.feed.next() {
            match event {
                SessionEvent::Inserted { id, index } => {
                    // The session may already be gone again by drain time
                    if let Some(session) = store.sessions().iter().find(|s| s.id == id) {
                        let slot = RowSlot::bind(session, store.is_current(id));
                        self.rows.insert(index.min(self.rows.len()), slot);
                        changed = true;
                    }
                }
                SessionEvent::Removed { id } => {
                    changed |= self.unbind(id);
                }
                SessionEvent::SelectionChanged => {
                    changed |= self.rebind_visuals(store);
                }
            }
        }

        // Retry removals that were held back for an active gesture
        if !self.deferred_removals.is_empty() {
            let deferred = std::mem::take(&mut self.deferred_removals);
            for id in deferred {
                changed |= self.unbind(id);
            }
        }

        changed
    }

    /// Remove the slot bound to `id`, unless its gesture is still tracking a
    /// pointer sequence; a committed swipe keeps updating its row's offset
    /// until the pointer lifts, so the slot outlives the session until then.
    fn unbind(&mut self, id: SessionId) -> bool {
        let Some(pos) = self.rows.iter().position(|r| r.id == id) else {
            return false;
        };
        if self.rows[pos].gesture.is_tracking() {
            if !self.deferred_removals.contains(&id) {
                self.deferred_removals.push(id);
            }
            return false;
        }
        self.rows.remove(pos);
        true
    }

    /// Re-derive every live row's visual state from the store.
    fn rebind_visuals(&mut self, store: &SessionStore) -> bool {
        let mut changed = false;
        for row in &mut self.rows {
            if let Some(session) = row.session.upgrade() {
                let visual = derive_visual(&session, store.is_current(row.id));
                if visual != row.visual {
                    row.visual = visual;
                    changed = true;
                }
            }
        }
        changed
    }
}
