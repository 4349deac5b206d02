//! Assembly of the "today" report from a fully resolved query.
//!
//! A [`Query`] is built once by the resolution layer (see [`crate::resolve`])
//! with every field populated. [`build_today_report`] turns it into an
//! immutable [`TodayReport`] for the presentation layer.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::constants::{DEFAULT_HORIZON_DAYS, NO_IP_LABEL};
use crate::geo::format::{
    format_day_length, format_noon, format_rise, format_set, format_significant,
};
use crate::geo::metrics::{day_night_ratio, format_length_difference};
use crate::geo::projection::{DayReport, project_with};
use crate::geo::solar::{SolarEphemeris, SunriseEphemeris, compute_solar_events_with};
use crate::geo::Coordinate;

/// How the report should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Sectioned view with the day bar and projection table
    #[default]
    Full,
    /// Four-line summary
    Condensed,
    /// Machine-readable JSON
    Json,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Full => "full",
            DisplayMode::Condensed => "short",
            DisplayMode::Json => "json",
        }
    }
}

/// Where the location and timezone came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationSource {
    /// Command line or config file, no network involved
    Provided,
    /// Looked up from the public IP address
    IpLookup { ip: String },
}

impl LocationSource {
    /// The IP address, or `"n/a"` when none was used.
    pub fn label(&self) -> &str {
        match self {
            LocationSource::Provided => NO_IP_LABEL,
            LocationSource::IpLookup { ip } if !ip.is_empty() => ip,
            LocationSource::IpLookup { .. } => NO_IP_LABEL,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, LocationSource::Provided)
    }
}

/// The fully resolved input to one report.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub coordinate: Coordinate,
    pub timezone: Tz,
    /// Calendar date in `timezone` that counts as "today"
    pub date: NaiveDate,
    pub source: LocationSource,
    pub mode: DisplayMode,
}

/// Everything the presentation layer needs to show today's daylight.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayReport {
    pub date: NaiveDate,
    pub timezone: Tz,
    pub coordinate: Coordinate,
    /// Latitude to 4 significant digits
    pub latitude: String,
    /// Longitude to 4 significant digits
    pub longitude: String,
    pub rises: String,
    pub sets: String,
    pub noon: String,
    pub length: String,
    /// Change in day length since yesterday
    pub diff: String,
    pub polar_day: bool,
    pub polar_night: bool,
    /// Sunrise as a fraction of the local 24h day
    pub day_start_ratio: f64,
    /// Sunset as a fraction of the local 24h day
    pub day_end_ratio: f64,
    pub source: LocationSource,
    pub next_days: Vec<DayReport>,
}

/// Build the report for `query` using the `sunrise` crate ephemeris.
pub fn build_today_report(query: &Query) -> TodayReport {
    build_today_report_with(&SunriseEphemeris, query)
}

pub fn build_today_report_with<E: SolarEphemeris + ?Sized>(
    ephemeris: &E,
    query: &Query,
) -> TodayReport {
    let tz = query.timezone;
    let coordinate = query.coordinate;

    let today = compute_solar_events_with(ephemeris, coordinate, query.date);
    let yesterday_date = query.date.pred_opt().unwrap_or(query.date);
    let yesterday = compute_solar_events_with(ephemeris, coordinate, yesterday_date);

    let (day_start_ratio, day_end_ratio) = day_night_ratio(&today, tz);

    TodayReport {
        date: query.date,
        timezone: tz,
        coordinate,
        latitude: format_significant(coordinate.latitude()),
        longitude: format_significant(coordinate.longitude()),
        rises: format_rise(&today, tz),
        sets: format_set(&today, tz),
        noon: format_noon(&today, tz),
        length: format_day_length(&today),
        diff: format_length_difference(&today, &yesterday),
        polar_day: today.is_polar_day(),
        polar_night: today.is_polar_night(),
        day_start_ratio,
        day_end_ratio,
        source: query.source.clone(),
        next_days: project_with(ephemeris, coordinate, query.date, tz, DEFAULT_HORIZON_DAYS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::solar::MockSolarEphemeris;
    use chrono::{DateTime, Duration};

    fn london_query(date: NaiveDate) -> Query {
        Query {
            coordinate: Coordinate::new(51.5072, 0.1276).unwrap(),
            timezone: chrono_tz::Europe::London,
            date,
            source: LocationSource::Provided,
            mode: DisplayMode::Full,
        }
    }

    #[test]
    fn test_london_winter_report() {
        let query = london_query(NaiveDate::from_ymd_opt(2025, 2, 4).unwrap());
        let report = build_today_report(&query);

        assert_eq!(report.latitude, "51.51");
        assert_eq!(report.longitude, "0.1276");
        assert!(report.rises.starts_with("07:3"), "rises {}", report.rises);
        assert!(report.sets.starts_with("16:5"), "sets {}", report.sets);
        assert!(report.length.starts_with("9 hrs, "), "length {}", report.length);
        // Days are lengthening in February
        assert!(report.diff.starts_with('+'), "diff {}", report.diff);
        assert!(report.day_start_ratio > 0.3 && report.day_start_ratio < 0.33);
        assert!(report.day_end_ratio > 0.7 && report.day_end_ratio < 0.71);
        assert_eq!(report.next_days.len(), 10);
        assert_eq!(report.source.label(), "n/a");
    }

    #[test]
    fn test_yesterday_is_previous_date() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();

        let mut mock = MockSolarEphemeris::new();
        mock.expect_rise_and_set().returning(move |_, d| {
            let rises = d.and_hms_opt(6, 0, 0).unwrap().and_utc();
            let length = if d == yesterday {
                Duration::hours(10)
            } else if d == today {
                Duration::hours(10) + Duration::minutes(3) + Duration::seconds(3)
            } else {
                Duration::hours(11)
            };
            (rises, rises + length)
        });

        let report = build_today_report_with(&mock, &london_query(today));
        assert_eq!(report.diff, "+3m 3s");
        assert_eq!(report.length, "10 hrs, 3 mins");
        assert_eq!(report.rises, "06:00");
        assert!(!report.polar_day && !report.polar_night);
        assert!(report.next_days.iter().all(|d| d.length == "11 hrs, 0 mins"));
    }

    #[test]
    fn test_polar_night_report() {
        let mut mock = MockSolarEphemeris::new();
        mock.expect_rise_and_set()
            .returning(|_, _| (DateTime::UNIX_EPOCH, DateTime::UNIX_EPOCH));

        let query = Query {
            coordinate: Coordinate::new(77.875, 20.9752).unwrap(),
            timezone: chrono_tz::Arctic::Longyearbyen,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            source: LocationSource::IpLookup {
                ip: "203.0.113.7".to_string(),
            },
            mode: DisplayMode::Json,
        };
        let report = build_today_report_with(&mock, &query);

        assert_eq!(report.rises, "n/a");
        assert_eq!(report.sets, "n/a");
        assert_eq!(report.noon, "n/a");
        assert_eq!(report.length, "no time (polar night)");
        assert_eq!(report.diff, "the same");
        assert!(report.polar_night);
        assert!(!report.polar_day);
        assert_eq!((report.day_start_ratio, report.day_end_ratio), (0.0, 0.0));
        assert_eq!(report.source.label(), "203.0.113.7");
    }

    #[test]
    fn test_location_source_label() {
        assert_eq!(LocationSource::Provided.label(), "n/a");
        assert!(LocationSource::Provided.is_offline());

        let empty = LocationSource::IpLookup { ip: String::new() };
        assert_eq!(empty.label(), "n/a");
        assert!(!empty.is_offline());
    }
}
