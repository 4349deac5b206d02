//! Application-wide constants.
//!
//! Fixed display strings live here because the presentation layer and the
//! tests both depend on their exact wording.

// # Display strings

/// Shown in place of a time that does not exist (polar day or polar night).
pub const NOT_AVAILABLE: &str = "n/a";

/// Day length difference when today is exactly as long as yesterday.
pub const NO_CHANGE: &str = "the same";

/// Day length during polar day.
pub const POLAR_DAY_LENGTH: &str = "all day (polar sun)";

/// Day length during polar night.
pub const POLAR_NIGHT_LENGTH: &str = "no time (polar night)";

/// Source label used when the location did not come from an IP lookup.
pub const NO_IP_LABEL: &str = "n/a";

// # Projection

/// Number of forward days included in a report.
pub const DEFAULT_HORIZON_DAYS: usize = 10;

// # Geolocation

pub const IPINFO_URL: &str = "https://ipinfo.io/json?inc=ip,loc,timezone";
pub const IPINFO_TIMEOUT_SECS: u64 = 10;

// # Configuration

pub const CONFIG_DIR_NAME: &str = "daylight";
pub const CONFIG_FILE_NAME: &str = "daylight.toml";

// # Presentation

/// Minimum terminal width for colored output.
pub const PRETTY_MIN_WIDTH: u16 = 80;

/// Number of cells in the day/night bar of the full view.
pub const DAY_BAR_CELLS: usize = 48;

// # Exit codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
