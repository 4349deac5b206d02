//! Optional configuration file for daylight.
//!
//! The file lives at `$XDG_CONFIG_HOME/daylight/daylight.toml`, or in the
//! directory passed with `--config <dir>`. Every key is optional; whatever
//! the file provides is used when the command line does not say otherwise,
//! and anything still missing is looked up from the IP address.
//!
//! ```toml
//! latitude = 51.5072          # Geographic latitude (-90 to 90)
//! longitude = -0.1276         # Geographic longitude (-180 to 180), set together with latitude
//! timezone = "Europe/London"  # IANA timezone name
//! format = "full"             # Output: "full", "short" or "json"
//! ```

pub mod loading;
pub mod validation;

use anyhow::Result;
use chrono_tz::Tz;
use serde::Deserialize;

use crate::geo::Coordinate;
use crate::report::DisplayMode;

// Re-export public API
pub use loading::{default_config_path, load, load_from_path};
pub use validation::validate_config;

/// Output format selectable from the config file.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Full,
    Short,
    Json,
}

impl From<OutputFormat> for DisplayMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DisplayMode::Full,
            OutputFormat::Short => DisplayMode::Condensed,
            OutputFormat::Json => DisplayMode::Json,
        }
    }
}

/// Contents of `daylight.toml`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Geographic latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Geographic longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// IANA timezone name, e.g. "Europe/London"
    pub timezone: Option<String>,
    /// Default output format when no `--short` or `--json` flag is given
    pub format: Option<OutputFormat>,
}

impl Config {
    /// The configured coordinate, if both axes are set.
    ///
    /// Only meaningful after [`validate_config`], which rejects a lone axis.
    pub fn coordinate(&self) -> Result<Option<Coordinate>> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Ok(Some(Coordinate::new(lat, lng)?)),
            _ => Ok(None),
        }
    }

    /// The configured timezone, if set.
    pub fn timezone(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| anyhow::anyhow!("timezone '{name}' was not found"))
            })
            .transpose()
    }
}
