use chrono::{Datelike, NaiveDate};
use daylight::geo::format::format_significant;
use daylight::geo::metrics::day_night_ratio;
use daylight::geo::{
    Coordinate, CoordinateError, PolarCondition, compute_solar_events, parse_coordinate, project,
};
use proptest::prelude::*;

/// Generate valid latitude values
fn latitude_strategy() -> impl Strategy<Value = f64> {
    -90.0..=90.0
}

/// Generate valid longitude values
fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Dates within the range the ephemeris is comfortable with
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Property tests for the "lat,lng" parser
#[cfg(test)]
mod coordinate_parsing_tests {
    use super::*;

    proptest! {
        /// Any in-range pair printed as "lat,lng" parses back to the same values
        #[test]
        fn test_valid_pairs_round_trip(
            lat in latitude_strategy(),
            lon in longitude_strategy()
        ) {
            let coord = parse_coordinate(&format!("{lat},{lon}")).unwrap();
            prop_assert_eq!(coord.latitude(), lat);
            prop_assert_eq!(coord.longitude(), lon);
        }

        /// Latitudes beyond the poles are rejected, whatever the longitude
        #[test]
        fn test_out_of_range_latitude_rejected(
            lat in prop_oneof![90.0001..1000.0f64, -1000.0..-90.0001f64],
            lon in longitude_strategy()
        ) {
            let result = parse_coordinate(&format!("{lat},{lon}"));
            prop_assert!(
                matches!(result, Err(CoordinateError::OutOfRange { .. })),
                "accepted {},{}", lat, lon
            );
        }

        /// Longitudes beyond the antimeridian are rejected
        #[test]
        fn test_out_of_range_longitude_rejected(
            lat in latitude_strategy(),
            lon in prop_oneof![180.0001..1000.0f64, -1000.0..-180.0001f64]
        ) {
            let text = format!("{},{}", lat, lon);
            prop_assert!(parse_coordinate(&text).is_err(), "accepted {}", text);
        }

        /// Text without exactly one comma is a format error, never a panic
        #[test]
        fn test_garbage_is_format_error(text in "[^,]{0,20}") {
            prop_assert!(
                matches!(parse_coordinate(&text), Err(CoordinateError::InvalidFormat(_))),
                "accepted {:?}", text
            );
        }

        /// Four significant digits never produce more than four digits
        #[test]
        fn test_significant_digits_bounded(
            value in prop_oneof![0.001..180.0f64, -180.0..-0.001f64]
        ) {
            let text = format_significant(value);
            let digits = text
                .trim_start_matches('-')
                .trim_start_matches('0')
                .trim_start_matches('.')
                .trim_start_matches('0')
                .chars()
                .filter(|c| c.is_ascii_digit())
                .count();
            prop_assert!(digits <= 4, "{} formatted as {}", value, text);
        }
    }
}

/// Property tests for solar events and the projection engine
#[cfg(test)]
mod projection_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The projection has exactly `horizon` days, strictly increasing,
        /// all after the reference date
        #[test]
        fn test_projection_length_and_order(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            date in date_strategy(),
            horizon in 0usize..15
        ) {
            let coord = Coordinate::new(lat, lon).unwrap();
            let days = project(coord, date, chrono_tz::UTC, horizon);

            prop_assert_eq!(days.len(), horizon);
            prop_assert!(days.iter().all(|d| d.date > date));
            prop_assert!(days.windows(2).all(|w| w[1].date == w[0].date.succ_opt().unwrap()));
        }

        /// Day length is always within a single day, and the ratios stay in [0, 1]
        #[test]
        fn test_length_and_ratio_bounds(
            lat in latitude_strategy(),
            lon in longitude_strategy(),
            date in date_strategy()
        ) {
            let coord = Coordinate::new(lat, lon).unwrap();
            let events = compute_solar_events(coord, date);

            prop_assert!(events.length >= chrono::Duration::zero());
            prop_assert!(events.length <= chrono::Duration::hours(24));

            let (start, end) = day_night_ratio(&events, chrono_tz::UTC);
            prop_assert!((0.0..=1.0).contains(&start));
            prop_assert!((0.0..=1.0).contains(&end));

            // Either both events exist or neither does
            prop_assert_eq!(events.rises.is_some(), events.sets.is_some());
            prop_assert_eq!(events.polar.is_some(), events.rises.is_none());
        }

        /// Close to the poles around the solstices the seasonal rule decides
        #[test]
        fn test_polar_classification_near_poles(
            north in any::<bool>(),
            month in prop_oneof![Just(1u32), Just(6u32), Just(7u32), Just(12u32)],
            day in 1u32..=28,
            lon in longitude_strategy()
        ) {
            let lat = if north { 89.5 } else { -89.5 };
            let date = NaiveDate::from_ymd_opt(2025, month, day).unwrap();
            let coord = Coordinate::new(lat, lon).unwrap();
            let events = compute_solar_events(coord, date);

            let summer_north = (4..=9).contains(&date.month());
            let expected = if summer_north == north {
                PolarCondition::Day
            } else {
                PolarCondition::Night
            };
            prop_assert_eq!(events.polar, Some(expected));
        }
    }
}
