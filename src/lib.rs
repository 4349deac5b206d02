//! # Daylight Library
//!
//! Internal library for the daylight binary application
//!
//! This library exists to enable testing of the report pipeline and provide clean
//! separation between CLI dispatch (main.rs) and application logic.
//!
//! ## Architecture
//!
//! The library is organized into several layers:
//!
//! - **Core**: `geo` module with coordinate parsing, solar events, daylight metrics,
//!   localized formatting and the forward projection. Pure, no I/O.
//! - **Assembly**: `report` turns a fully resolved `Query` into a `TodayReport`
//! - **Inputs**: `args` for the command line, `config` for the optional TOML file,
//!   `ipinfo` for IP geolocation, and `resolve` to merge them into one `Query`
//! - **Presentation**: `views` with the full, condensed and JSON renderings
//! - **Infrastructure**: logging and shared constants

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod args;
pub mod config;
pub mod constants;
pub mod geo;
pub mod ipinfo;
pub mod report;
pub mod resolve;
pub mod views;

// Re-exports for the binary
pub use report::{DisplayMode, Query, TodayReport, build_today_report};
pub use resolve::resolve_query;
