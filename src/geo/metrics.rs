//! Values derived from a day's solar events: approximate noon, the change in
//! day length since yesterday, and the day/night split used for the day bar.

use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;

use super::solar::{PolarCondition, SolarEvents};
use crate::constants::NO_CHANGE;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// Midpoint between sunrise and sunset.
///
/// This is not the true solar transit. Returns `None` under polar conditions.
pub fn approximate_noon(events: &SolarEvents) -> Option<DateTime<Utc>> {
    if events.polar.is_some() {
        return None;
    }
    events.rises.map(|rises| rises + events.length / 2)
}

/// Round a duration to whole seconds, half away from zero.
pub(crate) fn rounded_seconds(duration: Duration) -> i64 {
    let millis = duration.num_milliseconds();
    let seconds = millis / 1000;
    let remainder = millis % 1000;
    if remainder >= 500 {
        seconds + 1
    } else if remainder <= -500 {
        seconds - 1
    } else {
        seconds
    }
}

/// Describe how much longer or shorter today is than yesterday.
///
/// Gives `"the same"` for equal lengths, otherwise `"+<m>m <s>s"` or
/// `"-<m>m <s>s"`. Minutes are not folded into hours, so a swing from polar
/// day to polar night reads `-1440m 0s`.
pub fn format_length_difference(today: &SolarEvents, yesterday: &SolarEvents) -> String {
    let sign = match today.length.cmp(&yesterday.length) {
        std::cmp::Ordering::Equal => return NO_CHANGE.to_string(),
        std::cmp::Ordering::Greater => '+',
        std::cmp::Ordering::Less => '-',
    };

    let seconds = rounded_seconds((today.length - yesterday.length).abs());
    format!("{sign}{}m {}s", seconds / 60, seconds % 60)
}

/// Local-clock position of sunrise and sunset as fractions of a 24h day.
///
/// Polar day covers the whole bar `(0, 1)`; polar night none of it `(0, 0)`.
pub fn day_night_ratio(events: &SolarEvents, tz: Tz) -> (f64, f64) {
    match (events.polar, events.rises, events.sets) {
        (Some(PolarCondition::Day), _, _) => (0.0, 1.0),
        (Some(PolarCondition::Night), _, _) => (0.0, 0.0),
        (None, Some(rises), Some(sets)) => (day_fraction(rises, tz), day_fraction(sets, tz)),
        // Unreachable for values built by the calculator
        (None, _, _) => (0.0, 0.0),
    }
}

fn day_fraction(instant: DateTime<Utc>, tz: Tz) -> f64 {
    let local = instant.with_timezone(&tz);
    let minutes = local.hour() * 60 + local.minute();
    f64::from(minutes) / MINUTES_PER_DAY
}
