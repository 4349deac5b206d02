//! Main application entry point and high-level flow coordination.
//!
//! The flow for a normal run is:
//! 1. Argument parsing and early exit for help/version
//! 2. Configuration loading (optional `daylight.toml`)
//! 3. Query resolution: command line, then config, then IP geolocation
//! 4. Report assembly and rendering to stdout
//!
//! Diagnostics and errors go to stderr through the logger; stdout only ever
//! carries the rendered report.

use anyhow::Result;
use chrono::Utc;
use std::path::Path;

use daylight::args::{self, CliAction, ParsedArgs, RunOptions};
use daylight::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use daylight::ipinfo::IpInfoClient;
use daylight::logger::Log;
use daylight::{build_today_report, config, resolve_query, views};
use daylight::{log_block_start, log_debug, log_end, log_error_exit, log_version};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    let code = match parsed_args.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            EXIT_FAILURE
        }
        CliAction::Run(options) => match run(&options) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                log_error_exit!("{e:#}");
                EXIT_FAILURE
            }
        },
    };

    std::process::exit(code);
}

fn run(options: &RunOptions) -> Result<()> {
    Log::set_debug(options.debug_enabled);
    if options.debug_enabled {
        log_version!();
        log_block_start!("Debug mode enabled");
    }

    let config = config::load(options.config_dir.as_deref().map(Path::new))?;
    let query = resolve_query(options, &config, &IpInfoClient::new(), Utc::now())?;
    log_debug!(
        "Reporting {} at {} ({})",
        query.date,
        query.coordinate,
        query.timezone
    );

    let report = build_today_report(&query);
    let output = views::render(&report, query.mode)?;
    print!("{output}");

    if options.debug_enabled {
        log_end!();
    }
    Ok(())
}
