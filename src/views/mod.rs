//! Presentation of a [`TodayReport`].
//!
//! Each view is a pure function from the report to a string; `main` is the
//! only place that writes the result to stdout.

pub mod condensed;
pub mod full;
pub mod json;

use anyhow::Result;

use crate::report::{DisplayMode, TodayReport};

/// Render `report` in the requested mode.
pub fn render(report: &TodayReport, mode: DisplayMode) -> Result<String> {
    log_debug!("Rendering {} view", mode.as_str());
    match mode {
        DisplayMode::Full => Ok(full::render(report, full::use_pretty_mode())),
        DisplayMode::Condensed => Ok(condensed::render(report)),
        DisplayMode::Json => json::render(report),
    }
}
