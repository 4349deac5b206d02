use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use daylight::args::RunOptions;
use daylight::config::{self, Config};
use daylight::geo::{Coordinate, SolarEphemeris};
use daylight::ipinfo::{Geolocator, IpLocation};
use daylight::report::{DisplayMode, LocationSource, Query, build_today_report_with};
use daylight::{build_today_report, resolve_query, views};
use std::fs;
use tempfile::tempdir;

/// Geolocator that must not be reached
struct Offline;

impl Geolocator for Offline {
    fn locate(&self) -> Result<IpLocation> {
        anyhow::bail!("network lookup attempted")
    }
}

/// Ephemeris with a fixed 06:00-18:00 UTC day, lengthening by a minute each day
struct Equinox;

impl SolarEphemeris for Equinox {
    fn rise_and_set(&self, _: Coordinate, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        let rises = date.and_hms_opt(6, 0, 0).unwrap().and_utc();
        let extra = chrono::Duration::minutes(i64::from(chrono::Datelike::day(&date)));
        (rises, rises + chrono::Duration::hours(12) + extra)
    }
}

fn query(lat: f64, lon: f64, tz: chrono_tz::Tz, date: (i32, u32, u32)) -> Query {
    Query {
        coordinate: Coordinate::new(lat, lon).unwrap(),
        timezone: tz,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        source: LocationSource::Provided,
        mode: DisplayMode::Full,
    }
}

#[test]
fn test_london_february() {
    let report = build_today_report(&query(
        51.5072, -0.1276, chrono_tz::Europe::London, (2025, 2, 4),
    ));

    assert!(report.rises.starts_with("07:3"), "rises {}", report.rises);
    assert!(report.sets.starts_with("16:5"), "sets {}", report.sets);
    assert!(report.noon.starts_with("12:1"), "noon {}", report.noon);
    assert!(report.length.starts_with("9 hrs, 2"), "length {}", report.length);
    assert!(report.diff.starts_with("+3m "), "diff {}", report.diff);
    assert_eq!(report.latitude, "51.51");
    assert_eq!(report.longitude, "-0.1276");
    assert_eq!(report.next_days.len(), 10);
    assert_eq!(report.next_days[0].day, "Wed Feb 05");
    assert_eq!(report.next_days[9].day, "Fri Feb 14");
}

#[test]
fn test_svalbard_polar_night() {
    let report = build_today_report(&query(
        77.8750, 20.9752, chrono_tz::Arctic::Longyearbyen, (2025, 1, 10),
    ));

    assert_eq!(report.rises, "n/a");
    assert_eq!(report.sets, "n/a");
    assert_eq!(report.noon, "n/a");
    assert_eq!(report.length, "no time (polar night)");
    assert_eq!(report.diff, "the same");
    assert_eq!((report.day_start_ratio, report.day_end_ratio), (0.0, 0.0));
    assert!(report.next_days.iter().all(|d| d.length == "no time (polar night)"));

    let json: serde_json::Value =
        serde_json::from_str(&views::render(&report, DisplayMode::Json).unwrap()).unwrap();
    assert_eq!(json["date"], "2025-01-10");
    assert_eq!(json["polar_night"], true);
    assert_eq!(json["polar_day"], false);
}

#[test]
fn test_svalbard_midsummer() {
    let report = build_today_report(&query(
        78.2232, 15.6267, chrono_tz::Arctic::Longyearbyen, (2025, 6, 21),
    ));

    assert_eq!(report.length, "all day (polar sun)");
    assert_eq!(report.rises, "n/a");
    assert_eq!((report.day_start_ratio, report.day_end_ratio), (0.0, 1.0));
}

#[test]
fn test_southern_polar_day_in_december() {
    let report = build_today_report(&query(
        -89.0, 0.0, chrono_tz::Antarctica::McMurdo, (2024, 12, 21),
    ));
    assert_eq!(report.length, "all day (polar sun)");
}

#[test]
fn test_custom_ephemeris_through_every_view() {
    let report = build_today_report_with(
        &Equinox,
        &query(0.0, 0.0, chrono_tz::UTC, (2025, 3, 10)),
    );

    assert_eq!(report.rises, "06:00");
    assert_eq!(report.sets, "18:10");
    assert_eq!(report.noon, "12:05");
    assert_eq!(report.length, "12 hrs, 10 mins");
    assert_eq!(report.diff, "+1m 0s");
    assert_eq!(report.latitude, "0");

    let short = views::render(&report, DisplayMode::Condensed).unwrap();
    assert_eq!(
        short,
        "Rises:  06:00\nSets:   18:10\nLength: 12 hrs, 10 mins\nChange: +1m 0s\n"
    );

    let json: serde_json::Value =
        serde_json::from_str(&views::render(&report, DisplayMode::Json).unwrap()).unwrap();
    assert_eq!(json["latitude"], "0.000000");
    assert_eq!(json["timezone"], "UTC");
    assert_eq!(json["next_10_days"].as_array().unwrap().len(), 10);
    assert_eq!(json["next_10_days"][0]["length"], "12 hrs, 11 mins");

    let full = views::full::render(&report, false);
    assert!(full.contains("Offline mode"));
    assert!(full.contains("Next 10 days"));
}

#[test]
fn test_config_file_resolves_offline() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("daylight.toml"),
        "latitude = -33.9258\nlongitude = 18.4232\ntimezone = \"Africa/Johannesburg\"\nformat = \"json\"\n",
    )
    .unwrap();

    let config = config::load(Some(dir.path())).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
    let query = resolve_query(&RunOptions::default(), &config, &Offline, now).unwrap();

    assert_eq!(query.timezone, chrono_tz::Africa::Johannesburg);
    assert_eq!(query.mode, DisplayMode::Json);
    // Already New Year's Day in Johannesburg
    assert_eq!(query.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    assert!(query.source.is_offline());

    let report = build_today_report(&query);
    assert!(report.length.starts_with("14 hrs, "), "length {}", report.length);
}

#[test]
fn test_incomplete_location_needs_network() {
    let options = RunOptions {
        timezone: Some("Europe/Berlin".to_string()),
        ..RunOptions::default()
    };
    let err = resolve_query(&options, &Config::default(), &Offline, Utc::now()).unwrap_err();
    assert!(format!("{err:#}").contains("network lookup attempted"));
}
