//! Command-line argument parsing and processing.
//!
//! This module turns the raw argument list into a [`CliAction`]. It only
//! checks that flags are known and that numeric values parse; whether the
//! values make a usable location (both axes present, valid timezone, valid
//! date) is decided later in [`crate::resolve`].

use crate::logger::Log;

/// Options for a normal report run, exactly as given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// Date in YYYY-MM-DD
    pub date: Option<String>,
    pub short: bool,
    pub json: bool,
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Print the daylight report
    Run(RunOptions),
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or malformed arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args()),
    ///   including the program name
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = RunOptions::default();
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;

        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = args_vec[i].as_str();
            match arg_str {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--short" | "-s" => options.short = true,
                "--json" | "-j" => options.json = true,
                "--latitude" | "--longitude" | "--timezone" | "--date" | "--config" | "-c" => {
                    // Every one of these consumes the next argument, even if it
                    // starts with '-' (negative coordinates)
                    let Some(value) = args_vec.get(i + 1) else {
                        log_warning!("Missing value for {arg_str}");
                        unknown_arg_found = true;
                        i += 1;
                        continue;
                    };

                    match arg_str {
                        "--latitude" => match value.parse::<f64>() {
                            Ok(lat) => options.latitude = Some(lat),
                            Err(_) => {
                                log_warning!("Invalid value for --latitude: {value}");
                                unknown_arg_found = true;
                            }
                        },
                        "--longitude" => match value.parse::<f64>() {
                            Ok(lon) => options.longitude = Some(lon),
                            Err(_) => {
                                log_warning!("Invalid value for --longitude: {value}");
                                unknown_arg_found = true;
                            }
                        },
                        "--timezone" => options.timezone = Some(value.clone()),
                        "--date" => options.date = Some(value.clone()),
                        _ => options.config_dir = Some(value.clone()),
                    }
                    i += 1;
                }
                _ => {
                    if arg_str.starts_with('-') {
                        log_warning!("Unknown option: {arg_str}");
                    } else {
                        log_warning!("Unexpected argument: {arg_str}");
                    }
                    unknown_arg_found = true;
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Run(options)
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information on stdout using custom logging style.
pub fn display_version_info() {
    Log::set_stdout(true);
    log_version!();
    log_pipe!();
    log_decorated!(env!("CARGO_PKG_DESCRIPTION"));
    log_end!();
}

/// Displays custom help message on stdout using logger methods.
pub fn display_help() {
    Log::set_stdout(true);
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("daylight [OPTIONS]");
    log_block_start!("Options:");
    log_indented!("    --latitude <deg>    Set latitude (requires --longitude)");
    log_indented!("    --longitude <deg>   Set longitude (requires --latitude)");
    log_indented!("    --timezone <name>   Timezone in IANA format e.g. 'Europe/London'");
    log_indented!("    --date <date>       Date in YYYY-MM-DD");
    log_indented!("-s, --short             Show in condensed format");
    log_indented!("-j, --json              Show as JSON");
    log_indented!("-c, --config <dir>      Use custom configuration directory");
    log_indented!("-d, --debug             Enable detailed debug output");
    log_indented!("-h, --help              Print help information");
    log_indented!("-V, --version           Print version information");
    log_pipe!();
    log_info!("Without --latitude/--longitude and --timezone, the location is");
    log_indented!("looked up from your IP address (or read from daylight.toml).");
    log_end!();
}
