//! Dispatcher for pointer presses landing on registered hit areas.

use std::time::Instant;

use super::hit_area::SheetAction;
use crate::app::App;

/// Route a press that hit a registered area.
///
/// The set of interactive regions is fixed, so an action referencing a row
/// slot that does not exist means the registry and the binder disagree about
/// the frame that was just rendered. That is a programmer error and fails
/// loudly instead of being swallowed.
pub fn handle_sheet_action(app: &mut App, action: SheetAction, x: u16, y: u16, now: Instant) {
    match action {
        SheetAction::DismissSheet => {
            tracing::debug!("press: scrim - closing sheet");
            app.close_sheet(now);
        }
        SheetAction::Row(index) => {
            assert!(
                index < app.binder.len(),
                "unhandled interaction target: row {index} of {}",
                app.binder.len()
            );
            tracing::debug!(row = index, "press: row - starting gesture");
            app.begin_row_gesture(index, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::session::{Session, SessionStore};
    use crate::telemetry::TracingTelemetry;

    fn test_app() -> App {
        let mut store = SessionStore::new();
        store.add(Session::new("a", "https://a.test/"));
        App::new(store, Box::new(TracingTelemetry))
    }

    #[test]
    fn test_row_action_routes_without_panic() {
        let mut app = test_app();
        handle_sheet_action(&mut app, SheetAction::Row(0), 3, 1, Instant::now());
    }

    #[test]
    #[should_panic(expected = "unhandled interaction target")]
    fn test_out_of_range_row_fails_loudly() {
        let mut app = test_app();
        handle_sheet_action(&mut app, SheetAction::Row(7), 3, 1, Instant::now());
    }
}
