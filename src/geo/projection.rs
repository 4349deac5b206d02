//! Forward projection of daylight over the coming days.

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;

use super::coordinates::Coordinate;
use super::format::{format_date, format_day_length, format_noon, format_rise, format_set};
use super::solar::{SolarEphemeris, SolarEvents, SunriseEphemeris, compute_solar_events_with};

/// Display-ready daylight figures for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    #[serde(skip)]
    pub date: NaiveDate,
    /// Short label, e.g. `"Mon Jan 02"`
    pub day: String,
    pub rises: String,
    pub sets: String,
    #[serde(skip)]
    pub noon: String,
    pub length: String,
}

impl DayReport {
    pub fn new(date: NaiveDate, events: &SolarEvents, tz: Tz) -> Self {
        Self {
            date,
            day: format_date(date),
            rises: format_rise(events, tz),
            sets: format_set(events, tz),
            noon: format_noon(events, tz),
            length: format_day_length(events),
        }
    }
}

/// Build one [`DayReport`] for each of the `horizon_days` dates after
/// `reference_date`, in increasing date order.
///
/// Every day is computed from its own solar events; nothing is cached or
/// carried between days.
pub fn project(
    coordinate: Coordinate,
    reference_date: NaiveDate,
    tz: Tz,
    horizon_days: usize,
) -> Vec<DayReport> {
    project_with(&SunriseEphemeris, coordinate, reference_date, tz, horizon_days)
}

pub fn project_with<E: SolarEphemeris + ?Sized>(
    ephemeris: &E,
    coordinate: Coordinate,
    reference_date: NaiveDate,
    tz: Tz,
    horizon_days: usize,
) -> Vec<DayReport> {
    reference_date
        .iter_days()
        .skip(1)
        .take(horizon_days)
        .map(|date| {
            let events = compute_solar_events_with(ephemeris, coordinate, date);
            DayReport::new(date, &events, tz)
        })
        .collect()
}
