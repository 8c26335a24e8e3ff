//! Fire-and-forget usage telemetry.
//!
//! The sheet emits two events: switching to a session and explicitly closing
//! the sheet. Emission never fails and never blocks; the production sink
//! just logs through `tracing`.

/// Sink for the sheet's usage events.
pub trait Telemetry {
    /// A row was tapped and the session switch completed.
    fn session_selected(&self);
    /// The sheet was explicitly closed (scrim tap or back key).
    fn sheet_closed(&self);
}

/// Production sink logging events through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn session_selected(&self) {
        tracing::info!(event = "session_selected", "telemetry");
    }

    fn sheet_closed(&self) {
        tracing::info!(event = "session_sheet_closed", "telemetry");
    }
}
