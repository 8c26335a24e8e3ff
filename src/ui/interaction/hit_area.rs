//! Hit area registry for pointer interactions.
//!
//! Interactive regions register themselves during rendering; the event loop
//! hit-tests the registry on mouse press to decide where the pointer
//! sequence should be routed. The registry is cleared at the start of each
//! render pass, so a hidden sheet registers nothing and receives nothing.

use ratatui::layout::Rect;

/// The sheet's fixed set of interactive regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    /// Press on the background scrim: close the sheet
    DismissSheet,
    /// Press inside the row slot at this index: start a row gesture
    Row(usize),
}

/// A rectangular region with an associated action.
#[derive(Debug, Clone, Copy)]
pub struct HitArea {
    pub rect: Rect,
    pub action: SheetAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: SheetAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
///
/// Later registrations win for overlapping regions (z-order: later = on
/// top), so the scrim registers first and rows on top of it.
#[derive(Debug, Default)]
pub struct HitRegistry {
    areas: Vec<HitArea>,
}

impl HitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all registered areas. Call at the start of each render pass.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a region for this frame.
    pub fn register(&mut self, rect: Rect, action: SheetAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Find the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<SheetAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), SheetAction::DismissSheet);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_zero_size_area_contains_nothing() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), SheetAction::DismissSheet);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), SheetAction::Row(0));
        registry.register(make_rect(0, 10, 10, 10), SheetAction::Row(1));

        assert_eq!(registry.hit_test(5, 5), Some(SheetAction::Row(0)));
        assert_eq!(registry.hit_test(5, 15), Some(SheetAction::Row(1)));
        assert_eq!(registry.hit_test(50, 50), None);
    }

    #[test]
    fn test_later_registration_wins_overlap() {
        let mut registry = HitRegistry::new();
        registry.register(make_rect(0, 0, 40, 40), SheetAction::DismissSheet);
        registry.register(make_rect(10, 10, 10, 1), SheetAction::Row(0));

        assert_eq!(registry.hit_test(15, 10), Some(SheetAction::Row(0)));
        assert_eq!(registry.hit_test(2, 2), Some(SheetAction::DismissSheet));
    }

    #[test]
    fn test_clear_empties_registry() {
        let mut registry = HitRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), SheetAction::DismissSheet);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(5, 5), None);
    }
}
