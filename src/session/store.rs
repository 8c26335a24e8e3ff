//! In-process session store with a live change feed.
//!
//! The store is the single source of truth for open sessions. Subscribers
//! receive incremental [`SessionEvent`]s through a [`SessionFeed`]; the store
//! only holds a `Weak` to each feed's queue, so dropping the feed is all it
//! takes to unsubscribe.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::{Session, SessionId};

/// Incremental change to the session list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A session was inserted at `index`
    Inserted { id: SessionId, index: usize },
    /// A session was removed from the list
    Removed { id: SessionId },
    /// The current-session marker moved (or cleared)
    SelectionChanged,
}

/// Receiving end of a store subscription.
///
/// Events are queued until drained with [`SessionFeed::next`]. Dropping the
/// feed unsubscribes it; the store prunes the dead entry on its next publish.
#[derive(Debug)]
pub struct SessionFeed {
    queue: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl SessionFeed {
    /// Pop the oldest undelivered event, if any.
    pub fn next(&self) -> Option<SessionEvent> {
        self.queue.borrow_mut().pop_front()
    }

    /// Whether any events are pending.
    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

/// Ordered list of open sessions plus the current-session marker.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<Rc<Session>>,
    current: Option<SessionId>,
    feeds: RefCell<Vec<Weak<RefCell<VecDeque<SessionEvent>>>>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered session list.
    pub fn sessions(&self) -> &[Rc<Session>] {
        &self.sessions
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// The currently selected session, if any.
    pub fn current_session(&self) -> Option<Rc<Session>> {
        let id = self.current?;
        self.sessions.iter().find(|s| s.id == id).map(Rc::clone)
    }

    /// Whether `id` is the currently selected session.
    pub fn is_current(&self, id: SessionId) -> bool {
        self.current == Some(id)
    }

    /// Append a session to the list. The first session added becomes current.
    pub fn add(&mut self, session: Session) -> SessionId {
        let id = session.id;
        let index = self.sessions.len();
        self.sessions.push(Rc::new(session));
        self.publish(SessionEvent::Inserted { id, index });

        if self.current.is_none() {
            self.current = Some(id);
            self.publish(SessionEvent::SelectionChanged);
        }
        id
    }

    /// Make `id` the current session. Returns false for unknown ids.
    pub fn select(&mut self, id: SessionId) -> bool {
        if !self.sessions.iter().any(|s| s.id == id) {
            return false;
        }
        if self.current != Some(id) {
            self.current = Some(id);
            self.publish(SessionEvent::SelectionChanged);
        }
        true
    }

    /// Close a session. Returns false for unknown ids.
    ///
    /// Removing the current session moves the marker to the nearest
    /// remaining session (same index, else the new last one).
    pub fn remove(&mut self, id: SessionId) -> bool {
        let Some(index) = self.sessions.iter().position(|s| s.id == id) else {
            return false;
        };
        self.sessions.remove(index);
        self.publish(SessionEvent::Removed { id });

        if self.current == Some(id) {
            self.current = if self.sessions.is_empty() {
                None
            } else {
                Some(self.sessions[index.min(self.sessions.len() - 1)].id)
            };
            self.publish(SessionEvent::SelectionChanged);
        }
        true
    }

    /// Subscribe to the live change feed.
    pub fn subscribe(&self) -> SessionFeed {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        self.feeds.borrow_mut().push(Rc::downgrade(&queue));
        SessionFeed { queue }
    }

    /// Deliver an event to every live feed, pruning dropped ones.
    fn publish(&self, event: SessionEvent) {
        let mut feeds = self.feeds.borrow_mut();
        feeds.retain(|weak| match weak.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push_back(event.clone());
                true
            }
            None => false,
        });
    }
}
