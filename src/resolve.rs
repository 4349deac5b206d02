//! Resolution of a complete [`Query`] from every input source.
//!
//! Precedence is command line, then config file, then IP geolocation. The
//! coordinate is taken as a whole from the first source that has one, and so
//! is the timezone. The network is only touched when one of them is still
//! missing after the local sources.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::args::RunOptions;
use crate::config::Config;
use crate::geo::Coordinate;
use crate::ipinfo::Geolocator;
use crate::report::{DisplayMode, LocationSource, Query};

/// Validated command-line inputs.
#[derive(Debug, Clone, Default, PartialEq)]
struct CliInputs {
    coordinate: Option<Coordinate>,
    timezone: Option<Tz>,
    date: Option<NaiveDate>,
}

fn validate_cli(options: &RunOptions) -> Result<CliInputs> {
    let coordinate = match (options.latitude, options.longitude) {
        (None, None) => None,
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                anyhow::bail!("--latitude must be between -90 and 90");
            }
            if !(-180.0..=180.0).contains(&lon) {
                anyhow::bail!("--longitude must be between -180 and 180");
            }
            Some(Coordinate::new(lat, lon)?)
        }
        _ => anyhow::bail!("--latitude and --longitude must both be set, if used"),
    };

    let timezone = options
        .timezone
        .as_deref()
        .map(|name| {
            name.parse::<Tz>()
                .map_err(|_| anyhow::anyhow!("--timezone was not found"))
        })
        .transpose()?;

    let date = options
        .date
        .as_deref()
        .map(|text| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("--date was not a valid date"))
        })
        .transpose()?;

    Ok(CliInputs {
        coordinate,
        timezone,
        date,
    })
}

fn display_mode(options: &RunOptions, config: &Config) -> DisplayMode {
    if options.json {
        DisplayMode::Json
    } else if options.short {
        DisplayMode::Condensed
    } else {
        config.format.map(DisplayMode::from).unwrap_or_default()
    }
}

/// Build the query for one run.
///
/// `now` decides "today" when no `--date` is given: it is the current
/// calendar date in the resolved timezone.
pub fn resolve_query(
    options: &RunOptions,
    config: &Config,
    geolocator: &dyn Geolocator,
    now: DateTime<Utc>,
) -> Result<Query> {
    let cli = validate_cli(options)?;

    let coordinate = match cli.coordinate {
        Some(coordinate) => Some(coordinate),
        None => config.coordinate()?,
    };
    let timezone = match cli.timezone {
        Some(tz) => Some(tz),
        None => config.timezone()?,
    };

    let (coordinate, timezone, source) = match (coordinate, timezone) {
        (Some(coordinate), Some(timezone)) => {
            log_debug!("Location provided locally, running offline");
            (coordinate, timezone, LocationSource::Provided)
        }
        (coordinate, timezone) => {
            log_debug!("Location incomplete, looking up IP geolocation");
            let located = geolocator
                .locate()
                .context("Could not determine location; pass --latitude, --longitude and --timezone")?;
            log_debug!(
                "IP {} resolved to {} ({})",
                located.ip,
                located.coordinate,
                located.timezone
            );
            (
                coordinate.unwrap_or(located.coordinate),
                timezone.unwrap_or(located.timezone),
                LocationSource::IpLookup { ip: located.ip },
            )
        }
    };

    let date = cli
        .date
        .unwrap_or_else(|| now.with_timezone(&timezone).date_naive());

    Ok(Query {
        coordinate,
        timezone,
        date,
        source,
        mode: display_mode(options, config),
    })
}
