//! Best-guess location lookup from the public IP address.
//!
//! Used only when neither the command line nor the config file supplies a
//! complete location. The response is validated here so the rest of the
//! program only ever sees a parsed [`Coordinate`] and a known [`Tz`].

use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{IPINFO_TIMEOUT_SECS, IPINFO_URL};
use crate::geo::{Coordinate, parse_coordinate};

/// Raw response from the ipinfo.io API.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct IpInfo {
    #[serde(default)]
    pub ip: String,
    /// `"lat,lng"`
    #[serde(default)]
    pub loc: String,
    /// IANA timezone name
    #[serde(default)]
    pub timezone: String,
}

/// A validated geolocation result.
#[derive(Debug, Clone, PartialEq)]
pub struct IpLocation {
    pub ip: String,
    pub coordinate: Coordinate,
    pub timezone: Tz,
}

impl IpInfo {
    /// Validate the response into an [`IpLocation`].
    pub fn into_location(self) -> Result<IpLocation> {
        if self.loc.is_empty() {
            anyhow::bail!("IPInfo did not return location data");
        }
        let coordinate =
            parse_coordinate(&self.loc).context("IPInfo returned invalid lat/long")?;

        if self.timezone.is_empty() {
            anyhow::bail!("IPInfo did not return timezone data");
        }
        let timezone: Tz = self
            .timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("IPInfo returned invalid timezone: {}", self.timezone))?;

        Ok(IpLocation {
            ip: self.ip,
            coordinate,
            timezone,
        })
    }
}

/// Anything that can guess the user's location.
#[cfg_attr(test, mockall::automock)]
pub trait Geolocator {
    fn locate(&self) -> Result<IpLocation>;
}

/// Geolocator backed by the ipinfo.io HTTP API.
#[derive(Debug, Clone)]
pub struct IpInfoClient {
    url: String,
    timeout: Duration,
}

impl Default for IpInfoClient {
    fn default() -> Self {
        Self {
            url: IPINFO_URL.to_string(),
            timeout: Duration::from_secs(IPINFO_TIMEOUT_SECS),
        }
    }
}

impl IpInfoClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the raw response.
    pub fn fetch(&self) -> Result<IpInfo> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("error fetching IP info from {}", self.url))?
            .json::<IpInfo>()
            .context("Failed to decode IP info response")
    }
}

impl Geolocator for IpInfoClient {
    fn locate(&self) -> Result<IpLocation> {
        self.fetch()?.into_location()
    }
}
