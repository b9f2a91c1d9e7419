//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a
//! clean interface for the binary dispatch in `main.rs`. It supports the
//! standard help, version, and debug flags while gracefully handling
//! unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the interactive map screen with these settings.
    Run {
        debug_enabled: bool,
        config_dir: Option<String>,
    },
    /// One-shot query for a coordinate (and optional date) without the UI.
    QueryCommand {
        debug_enabled: bool,
        latitude: f64,
        longitude: f64,
        date: Option<String>,
        config_dir: Option<String>,
    },
    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to unknown arguments and exit with an error code.
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
    /// * `args` - Iterator over command-line arguments (typically from
    ///   `std::env::args()`; the first element is skipped as the binary name)
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut subcommand: Option<String> = None;

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = &args_vec[idx];
            match arg.as_str() {
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => {
                    idx += 1;
                    match args_vec.get(idx) {
                        Some(dir) => config_dir = Some(dir.clone()),
                        None => {
                            log_warning!("--config requires a directory argument");
                            return ParsedArgs {
                                action: CliAction::ShowHelpDueToError,
                            };
                        }
                    }
                }
                "--help" | "-h" | "help" if subcommand.is_none() => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                "query" if subcommand.is_none() && positional.is_empty() => {
                    subcommand = Some(arg.clone());
                }
                // Negative coordinates ("-90") also start with a dash; only
                // non-numeric dash arguments are unknown options.
                other if other.starts_with('-') && other.parse::<f64>().is_err() => {
                    log_warning!("Unknown option: {other}");
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
                _ => positional.push(arg.clone()),
            }
            idx += 1;
        }

        match subcommand.as_deref() {
            Some("query") => Self::parse_query(debug_enabled, &positional, config_dir),
            Some(_) | None if !positional.is_empty() => ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            },
            _ => ParsedArgs {
                action: CliAction::Run {
                    debug_enabled,
                    config_dir,
                },
            },
        }
    }

    fn parse_query(
        debug_enabled: bool,
        positional: &[String],
        config_dir: Option<String>,
    ) -> ParsedArgs {
        if positional.len() < 2 || positional.len() > 3 {
            log_warning!("query expects: query <latitude> <longitude> [date]");
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }
        let (Ok(latitude), Ok(longitude)) =
            (positional[0].parse::<f64>(), positional[1].parse::<f64>())
        else {
            log_warning!(
                "query could not parse \"{}\" / \"{}\" as coordinates",
                positional[0],
                positional[1]
            );
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        };
        ParsedArgs {
            action: CliAction::QueryCommand {
                debug_enabled,
                latitude,
                longitude,
                date: positional.get(2).cloned(),
                config_dir,
            },
        }
    }
}

/// Display the full help message.
pub fn display_help_message() {
    log_version!();
    log_block_start!("Usage: sunmap [OPTIONS] [COMMAND]");
    log_block_start!("Commands:");
    log_indented!("query <latitude> <longitude> [date]  Print sun times for a point and exit");
    log_block_start!("Options:");
    log_indented!("-d, --debug          Enable detailed debug output");
    log_indented!("-c, --config <DIR>   Use configuration from DIR");
    log_indented!("-h, --help           Display this help message");
    log_indented!("-V, --version        Display version information");
    log_block_start!("Interactive keys:");
    log_indented!("arrow keys / mouse   Pick a point on the map");
    log_indented!("d                    Edit the date field (YYYY-MM-DD)");
    log_indented!("t                    Toggle 12/24-hour display");
    log_indented!("q / Esc              Quit");
    log_end!();
}

/// Display version information.
pub fn display_version_info() {
    log_version!();
    log_block_start!("Interactive terminal world map for sunrise and sunset times");
    log_decorated!("License: MIT");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let full: Vec<&str> = std::iter::once("sunmap").chain(args.iter().copied()).collect();
        ParsedArgs::parse(full).action
    }

    #[test]
    fn no_arguments_runs_interactive() {
        assert_eq!(
            parse(&[]),
            CliAction::Run {
                debug_enabled: false,
                config_dir: None
            }
        );
    }

    #[test]
    fn debug_and_config_flags() {
        assert_eq!(
            parse(&["--debug", "--config", "/tmp/conf"]),
            CliAction::Run {
                debug_enabled: true,
                config_dir: Some("/tmp/conf".to_string())
            }
        );
    }

    #[test]
    fn config_without_value_is_an_error() {
        assert_eq!(parse(&["--config"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn query_subcommand_with_coordinates() {
        assert_eq!(
            parse(&["query", "59.9139", "10.7522"]),
            CliAction::QueryCommand {
                debug_enabled: false,
                latitude: 59.9139,
                longitude: 10.7522,
                date: None,
                config_dir: None
            }
        );
    }

    #[test]
    fn query_subcommand_with_date() {
        assert_eq!(
            parse(&["query", "-90", "180", "2024-06-21"]),
            CliAction::QueryCommand {
                debug_enabled: false,
                latitude: -90.0,
                longitude: 180.0,
                date: Some("2024-06-21".to_string()),
                config_dir: None
            }
        );
    }

    #[test]
    fn query_with_bad_coordinates_shows_help() {
        assert_eq!(
            parse(&["query", "north", "west"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(parse(&["query", "1.0"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn unknown_flag_shows_help_with_error() {
        assert_eq!(parse(&["--frobnicate"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["--version"]), CliAction::ShowVersion);
    }
}
