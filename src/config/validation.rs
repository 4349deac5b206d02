//! Configuration validation functionality.

use anyhow::Result;

use super::Config;

/// Reject configurations that could never produce a usable location.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.latitude.is_some() != config.longitude.is_some() {
        anyhow::bail!("latitude and longitude must both be set, if used");
    }

    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    config.timezone()?;

    Ok(())
}
