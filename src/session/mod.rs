//! Browsing session model and the in-process session store.
//!
//! A [`Session`] is an open page the user can switch back to. The store owns
//! the ordered session list and the "current session" marker; everything else
//! in the crate holds non-owning [`std::rc::Weak`] handles into it.

pub mod display;
pub mod store;

pub use store::{SessionEvent, SessionFeed, SessionStore};

use std::fmt;

use serde::Deserialize;
use uuid::Uuid;

/// Stable identity of a browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh session id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One open browsing session as seen by this component.
///
/// The sheet only reads three facts: identity, title (possibly empty) and
/// URL. Whether a session is the current one is derived from the store,
/// never cached here.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Stable identity, generated when the fixture omits it
    #[serde(default)]
    pub id: SessionId,
    /// Page title; empty when the page never reported one
    #[serde(default)]
    pub title: String,
    /// Page URL
    pub url: String,
}

impl Session {
    /// Create a session with a fresh id.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            title: title.into(),
            url: url.into(),
        }
    }
}
