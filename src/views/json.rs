//! JSON rendering for scripts and status bars.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::geo::DayReport;
use crate::report::TodayReport;

#[derive(Debug, Serialize)]
struct JsonView<'a> {
    /// `YYYY-MM-DD`
    date: String,
    rises: &'a str,
    noon: &'a str,
    sets: &'a str,
    length: &'a str,
    change: &'a str,
    polar_day: bool,
    polar_night: bool,
    latitude: String,
    longitude: String,
    timezone: &'static str,
    ip: &'a str,
    day_start_ratio: f64,
    day_end_ratio: f64,
    next_10_days: &'a [DayReport],
}

/// Pretty-printed JSON object describing the report.
pub fn render(report: &TodayReport) -> Result<String> {
    let view = JsonView {
        date: report.date.format("%Y-%m-%d").to_string(),
        rises: &report.rises,
        noon: &report.noon,
        sets: &report.sets,
        length: &report.length,
        change: &report.diff,
        polar_day: report.polar_day,
        polar_night: report.polar_night,
        latitude: format!("{:.6}", report.coordinate.latitude()),
        longitude: format!("{:.6}", report.coordinate.longitude()),
        timezone: report.timezone.name(),
        ip: report.source.label(),
        day_start_ratio: report.day_start_ratio,
        day_end_ratio: report.day_end_ratio,
        next_10_days: &report.next_days,
    };

    serde_json::to_string_pretty(&view).context("Failed to serialize report to JSON")
}
