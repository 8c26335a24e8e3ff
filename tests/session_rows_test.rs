//! Integration tests for row content and the current-session treatment,
//! including re-derivation after external store changes.

mod common;

use std::time::{Duration, Instant};

use common::Harness;
use tabsheet::session::Session;
use tabsheet::ui::theme::{COLOR_ROW_BG, COLOR_ROW_CURRENT_BG};

#[test]
fn test_untitled_row_falls_back_to_beautified_url() {
    let mut harness = Harness::new(&[
        ("Alpha", "https://a.test/"),
        ("", "https://www.example.com/"),
    ]);
    let _ = harness.show(Instant::now());

    let screen = harness.screen_text();
    assert!(screen.contains("example.com"));
    assert!(!screen.contains("https://"));
    assert!(!screen.contains("www."));
}

#[test]
fn test_current_row_gets_the_highlight_treatment() {
    let mut harness = Harness::new(&[
        ("Alpha", "https://a.test/"),
        ("Beta", "https://b.test/"),
    ]);
    let _ = harness.show(Instant::now());

    // First added session is current; fully shown rows blend at full alpha
    let row0 = harness.app.binder.rows()[0].area;
    let row1 = harness.app.binder.rows()[1].area;
    assert_eq!(harness.bg_at(row0.x + 2, row0.y), COLOR_ROW_CURRENT_BG);
    assert_eq!(harness.bg_at(row1.x + 2, row1.y), COLOR_ROW_BG);
}

#[test]
fn test_highlight_follows_external_selection_change() {
    let mut harness = Harness::new(&[
        ("Alpha", "https://a.test/"),
        ("Beta", "https://b.test/"),
    ]);
    let now = harness.show(Instant::now());

    harness.app.store.select(harness.ids[1]);
    let later = now + Duration::from_millis(16);
    harness.app.tick(later);
    harness.draw(later);

    let row0 = harness.app.binder.rows()[0].area;
    let row1 = harness.app.binder.rows()[1].area;
    assert_eq!(harness.bg_at(row0.x + 2, row0.y), COLOR_ROW_BG);
    assert_eq!(harness.bg_at(row1.x + 2, row1.y), COLOR_ROW_CURRENT_BG);
}

#[test]
fn test_externally_removed_session_drops_its_row() {
    let mut harness = Harness::new(&[
        ("Alpha", "https://a.test/"),
        ("Beta", "https://b.test/"),
    ]);
    let now = harness.show(Instant::now());

    harness.app.store.remove(harness.ids[0]);
    let later = now + Duration::from_millis(16);
    harness.app.tick(later);
    harness.draw(later);

    assert_eq!(harness.app.binder.len(), 1);
    let screen = harness.screen_text();
    assert!(!screen.contains("Alpha"));
    assert!(screen.contains("Beta"));
    // Current moved to the survivor, and its row shows it
    let row = harness.app.binder.rows()[0].area;
    assert_eq!(harness.bg_at(row.x + 2, row.y), COLOR_ROW_CURRENT_BG);
}

#[test]
fn test_externally_added_session_grows_the_list() {
    let mut harness = Harness::new(&[("Alpha", "https://a.test/")]);
    let now = harness.show(Instant::now());

    harness
        .app
        .store
        .add(Session::new("Gamma", "https://g.test/"));
    let later = now + Duration::from_millis(16);
    harness.app.tick(later);
    harness.draw(later);

    assert_eq!(harness.app.binder.len(), 2);
    assert!(harness.screen_text().contains("Gamma"));
}

#[test]
fn test_long_title_is_truncated_with_ellipsis() {
    let long = "A very long page title that cannot possibly fit on one card row of any width";
    let mut harness = Harness::new(&[(long, "https://long.test/")]);
    let _ = harness.show(Instant::now());

    let screen = harness.screen_text();
    assert!(screen.contains('…'));
    assert!(!screen.contains("any width"));
}
