//! Pointer interaction plumbing: hit areas and press dispatch.

mod click_handler;
mod hit_area;

pub use click_handler::handle_sheet_action;
pub use hit_area::{HitArea, HitRegistry, SheetAction};
