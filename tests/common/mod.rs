//! Shared test harness: a rendered sheet driven with synthetic instants.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::Terminal;

use tabsheet::app::App;
use tabsheet::session::{Session, SessionId, SessionStore};
use tabsheet::sheet::SHEET_ANIMATION;
use tabsheet::telemetry::Telemetry;
use tabsheet::ui;

/// Telemetry sink recording event names in emission order.
#[derive(Default)]
pub struct RecordingTelemetry {
    pub events: Rc<RefCell<Vec<&'static str>>>,
}

impl Telemetry for RecordingTelemetry {
    fn session_selected(&self) {
        self.events.borrow_mut().push("session_selected");
    }

    fn sheet_closed(&self) {
        self.events.borrow_mut().push("sheet_closed");
    }
}

pub struct Harness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
    pub events: Rc<RefCell<Vec<&'static str>>>,
    pub ids: Vec<SessionId>,
}

impl Harness {
    /// Build a store from `(title, url)` pairs; the first session is current.
    pub fn new(sessions: &[(&str, &str)]) -> Self {
        let mut store = SessionStore::new();
        let ids = sessions
            .iter()
            .map(|(title, url)| store.add(Session::new(*title, *url)))
            .collect();

        let recorder = RecordingTelemetry::default();
        let events = Rc::clone(&recorder.events);
        let app = App::new(store, Box::new(recorder));
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        Self {
            app,
            terminal,
            events,
            ids,
        }
    }

    /// Present the sheet, run the show animation to completion and render.
    /// Returns a "now" at which the sheet is fully shown.
    pub fn show(&mut self, start: Instant) -> Instant {
        self.app.present_sheet(start);
        let shown = start + SHEET_ANIMATION;
        self.app.tick(shown);
        self.draw(shown);
        shown
    }

    pub fn draw(&mut self, now: Instant) {
        self.terminal
            .draw(|f| ui::render(f, &mut self.app, now))
            .unwrap();
        self.app.needs_redraw = false;
    }

    /// Center point of row `index` as rendered.
    pub fn row_center(&self, index: usize) -> (u16, u16) {
        let area = self.app.binder.rows()[index].area;
        assert!(area.width > 0, "row {index} was not laid out");
        (area.x + area.width / 2, area.y)
    }

    /// The whole backend buffer as one newline-joined string.
    pub fn screen_text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buffer.cell(Position::new(x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Background color of the cell at `(x, y)`.
    pub fn bg_at(&self, x: u16, y: u16) -> ratatui::style::Color {
        let buffer = self.terminal.backend().buffer();
        buffer
            .cell(Position::new(x, y))
            .expect("cell out of bounds")
            .style()
            .bg
            .unwrap_or(ratatui::style::Color::Reset)
    }
}
