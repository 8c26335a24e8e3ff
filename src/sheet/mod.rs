//! The sessions sheet: presentation, per-row gestures, and row binding.
//!
//! Two cooperating state machines make up this module:
//!
//! - [`SheetController`] owns the sheet's show/hide animation and the scrim
//!   kept in lockstep with it, and guards against re-entrant animation
//!   requests.
//! - [`RowGesture`] (one per visible row) tracks a single pointer sequence
//!   and decides between a tap (select) and a rightward swipe (remove).
//!
//! [`SessionListBinder`] glues the two to the session store: it binds rows
//! to sessions through non-owning handles and keeps them in step with the
//! store's live change feed.

pub mod animation;
pub mod binder;
pub mod controller;
pub mod gesture;

pub use animation::{SETTLE_ANIMATION, SHEET_ANIMATION};
pub use binder::{RowSlot, RowVisual, SessionListBinder};
pub use controller::{AfterHide, SheetController, SheetPhase, SheetSignal};
pub use gesture::{GestureOutcome, RowGesture};
