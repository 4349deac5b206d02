//! Sunrise/sunset calculation with polar day and polar night classification.
//!
//! The rise and set instants themselves come from the `sunrise` crate. When
//! the sun never crosses the horizon on a date, that routine has no real
//! solution and reports both events at the Unix epoch. Those instants are
//! never used: the date is classified as polar day or polar night by a fixed
//! seasonal rule instead.
//!
//! ## Seasonal rule
//!
//! | Hemisphere            | April - September | October - March |
//! |-----------------------|-------------------|-----------------|
//! | North (`lat >= 0`)    | polar day         | polar night     |
//! | South (`lat < 0`)     | polar night       | polar day       |
//!
//! This is an approximation keyed on the calendar month only, not on the
//! actual solar elevation.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use super::coordinates::Coordinate;

/// Source of raw sunrise/sunset instants in UTC.
///
/// Implementations signal "no distinct rise/set on this date" by returning
/// the same instant for both events, set to the Unix epoch.
#[cfg_attr(test, mockall::automock)]
pub trait SolarEphemeris {
    fn rise_and_set(&self, coordinate: Coordinate, date: NaiveDate)
    -> (DateTime<Utc>, DateTime<Utc>);
}

/// Ephemeris backed by the `sunrise` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunriseEphemeris;

impl SolarEphemeris for SunriseEphemeris {
    fn rise_and_set(
        &self,
        coordinate: Coordinate,
        date: NaiveDate,
    ) -> (DateTime<Utc>, DateTime<Utc>) {
        // Coordinate has already been range checked, so this only fails if the
        // crate's own bounds ever diverge from ours. Treat that as "no event".
        let Some(coord) = Coordinates::new(coordinate.latitude(), coordinate.longitude()) else {
            return (DateTime::UNIX_EPOCH, DateTime::UNIX_EPOCH);
        };

        let solar_day = SolarDay::new(coord, date);
        (
            solar_day.event_time(SolarEvent::Sunrise),
            solar_day.event_time(SolarEvent::Sunset),
        )
    }
}

/// Continuous light or continuous darkness for a whole calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarCondition {
    Day,
    Night,
}

impl PolarCondition {
    /// Apply the seasonal rule for a date with no sunrise or sunset.
    pub fn classify(coordinate: Coordinate, date: NaiveDate) -> Self {
        let northern_summer = (4..=9).contains(&date.month());
        match (coordinate.is_northern(), northern_summer) {
            (true, true) | (false, false) => PolarCondition::Day,
            (true, false) | (false, true) => PolarCondition::Night,
        }
    }
}

/// One calendar date's solar state at one coordinate, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarEvents {
    /// Absent during polar conditions
    pub rises: Option<DateTime<Utc>>,
    /// Absent during polar conditions
    pub sets: Option<DateTime<Utc>>,
    /// 24h for polar day, zero for polar night, otherwise `sets - rises`
    pub length: Duration,
    pub polar: Option<PolarCondition>,
}

impl SolarEvents {
    /// A normal day with both events present.
    pub fn regular(rises: DateTime<Utc>, sets: DateTime<Utc>) -> Self {
        Self {
            rises: Some(rises),
            sets: Some(sets),
            length: sets - rises,
            polar: None,
        }
    }

    /// A day without sunrise or sunset, with the fixed length for its condition.
    pub fn polar(condition: PolarCondition) -> Self {
        let length = match condition {
            PolarCondition::Day => Duration::hours(24),
            PolarCondition::Night => Duration::zero(),
        };
        Self {
            rises: None,
            sets: None,
            length,
            polar: Some(condition),
        }
    }

    pub fn is_polar_day(&self) -> bool {
        self.polar == Some(PolarCondition::Day)
    }

    pub fn is_polar_night(&self) -> bool {
        self.polar == Some(PolarCondition::Night)
    }
}

/// Check for the "no event" result of the ephemeris.
fn is_no_event(rises: DateTime<Utc>, sets: DateTime<Utc>) -> bool {
    rises == sets && rises == DateTime::UNIX_EPOCH
}

/// Compute the solar events for `date` at `coordinate` using the `sunrise` crate.
pub fn compute_solar_events(coordinate: Coordinate, date: NaiveDate) -> SolarEvents {
    compute_solar_events_with(&SunriseEphemeris, coordinate, date)
}

/// Compute the solar events for `date` at `coordinate` using any ephemeris.
pub fn compute_solar_events_with<E: SolarEphemeris + ?Sized>(
    ephemeris: &E,
    coordinate: Coordinate,
    date: NaiveDate,
) -> SolarEvents {
    let (rises, sets) = ephemeris.rise_and_set(coordinate, date);

    if is_no_event(rises, sets) {
        return SolarEvents::polar(PolarCondition::classify(coordinate, date));
    }

    SolarEvents::regular(rises, sets)
}
