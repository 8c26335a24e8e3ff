//! Tabsheet - a terminal sessions sheet for switching and closing browsing sessions
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod session;
pub mod sheet;
pub mod startup;
pub mod telemetry;
pub mod ui;
