//! Parsing of `"lat,lng"` strings into validated coordinates.

use std::fmt;
use std::str::FromStr;

/// Which axis of a coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn limit(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Error type for coordinate parsing failures
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// The text is not two comma-separated decimal numbers
    InvalidFormat(String),
    /// A value parsed but lies outside its valid range
    OutOfRange { axis: Axis, value: f64 },
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::InvalidFormat(text) => {
                write!(f, "cannot parse format of location data {text:?}")
            }
            CoordinateError::OutOfRange { axis, value } => {
                let limit = axis.limit();
                write!(f, "{axis} must be between -{limit} and {limit}, was {value}")
            }
        }
    }
}

impl std::error::Error for CoordinateError {}

/// A validated geographic coordinate in decimal degrees.
///
/// Both axes are always present and in range; the only ways to build one are
/// [`Coordinate::new`] and [`parse_coordinate`], which enforce that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, checking latitude against [-90, 90] and longitude
    /// against [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        check_range(Axis::Latitude, latitude)?;
        check_range(Axis::Longitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Equator counts as northern.
    pub fn is_northern(&self) -> bool {
        self.latitude >= 0.0
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_coordinate(s)
    }
}

fn check_range(axis: Axis, value: f64) -> Result<(), CoordinateError> {
    let limit = axis.limit();
    // NaN fails `contains`, so it is reported here as well.
    if !(-limit..=limit).contains(&value) {
        return Err(CoordinateError::OutOfRange { axis, value });
    }
    Ok(())
}

/// Parse `"<lat>,<lng>"` into a [`Coordinate`].
///
/// Exactly two comma-separated fields are required, each a finite decimal
/// number. No whitespace trimming is done, matching the compact `loc` format
/// returned by geolocation services.
pub fn parse_coordinate(text: &str) -> Result<Coordinate, CoordinateError> {
    let invalid = || CoordinateError::InvalidFormat(text.to_string());

    let mut parts = text.split(',');
    let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let latitude = parse_decimal(lat).ok_or_else(invalid)?;
    let longitude = parse_decimal(lng).ok_or_else(invalid)?;

    Coordinate::new(latitude, longitude)
}

fn parse_decimal(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|value| value.is_finite())
}
