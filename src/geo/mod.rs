//! Daylight calculations for a coordinate and calendar date.
//!
//! Data flows one way through the submodules:
//!
//! - [`coordinates`]: `"lat,lng"` text into a validated [`Coordinate`]
//! - [`solar`]: sunrise/sunset instants in UTC, with polar day and polar
//!   night classification
//! - [`metrics`]: approximate noon, day-over-day length change, day/night ratio
//! - [`format`]: timezone-local, human-readable strings
//! - [`projection`]: the same pipeline run over the following days
//!
//! Everything here is pure: no I/O, no logging, no global state.

pub mod coordinates;
pub mod format;
pub mod metrics;
pub mod projection;
pub mod solar;

// Re-exports for public API
pub use coordinates::{Axis, Coordinate, CoordinateError, parse_coordinate};
pub use projection::{DayReport, project};
pub use solar::{PolarCondition, SolarEphemeris, SolarEvents, SunriseEphemeris, compute_solar_events};
