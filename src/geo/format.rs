//! Human-readable strings for solar events in a given timezone.
//!
//! Every function here is total: polar conditions produce the fixed
//! placeholder strings from [`crate::constants`] rather than errors.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::metrics::{approximate_noon, rounded_seconds};
use super::solar::{PolarCondition, SolarEvents};
use crate::constants::{NOT_AVAILABLE, POLAR_DAY_LENGTH, POLAR_NIGHT_LENGTH};

/// 24-hour local clock time, `HH:MM`.
pub fn localize(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

fn localize_or_na(instant: Option<DateTime<Utc>>, tz: Tz) -> String {
    instant.map_or_else(|| NOT_AVAILABLE.to_string(), |t| localize(t, tz))
}

pub fn format_rise(events: &SolarEvents, tz: Tz) -> String {
    localize_or_na(events.rises, tz)
}

pub fn format_set(events: &SolarEvents, tz: Tz) -> String {
    localize_or_na(events.sets, tz)
}

pub fn format_noon(events: &SolarEvents, tz: Tz) -> String {
    localize_or_na(approximate_noon(events), tz)
}

/// `"<H> hrs, <M> mins"`, dropping leftover seconds.
pub fn format_day_length(events: &SolarEvents) -> String {
    match events.polar {
        Some(PolarCondition::Day) => POLAR_DAY_LENGTH.to_string(),
        Some(PolarCondition::Night) => POLAR_NIGHT_LENGTH.to_string(),
        None => {
            let seconds = rounded_seconds(events.length);
            format!("{} hrs, {} mins", seconds / 3600, (seconds % 3600) / 60)
        }
    }
}

/// Short ASCII label such as `"Mon Jan 02"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a %b %d").to_string()
}

/// Format a float to 4 significant digits in the shortest form, switching
/// to exponent notation for very large or small magnitudes (`%g` style).
pub fn format_significant(value: f64) -> String {
    const PRECISION: i32 = 4;

    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    // Round first, then read the exponent of the rounded value
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.abs()
        );
    }

    let decimals = (PRECISION - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
