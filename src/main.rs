//! Main application entry point and high-level flow coordination.
//!
//! This binary stays intentionally small: parse the command line, resolve
//! configuration, and hand off to either the interactive map screen or a
//! subcommand. All application logic lives in the library crate.

use std::sync::Arc;

use anyhow::Result;

use sunmap::api::HttpSunApi;
use sunmap::args::{self, CliAction, ParsedArgs};
use sunmap::logger::Log;
use sunmap::{App, commands, config, time_source};
use sunmap::{
    log_block_start, log_end, log_error, log_error_exit, log_indented, log_pipe, log_version,
};

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    let result = match parsed.action {
        CliAction::Run {
            debug_enabled,
            config_dir,
        } => run_interactive(debug_enabled, config_dir),
        CliAction::QueryCommand {
            debug_enabled,
            latitude,
            longitude,
            date,
            config_dir,
        } => {
            if let Some(dir) = config_dir {
                if let Err(error) = config::set_config_dir(&dir) {
                    log_error_exit!("{error:#}");
                    std::process::exit(1);
                }
            }
            commands::query::handle_query_command(latitude, longitude, date, debug_enabled)
        }
        CliAction::ShowHelp => {
            args::display_help_message();
            Ok(())
        }
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help_message();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        log_pipe!();
        log_error!("{error:#}");
        log_end!();
        std::process::exit(1);
    }
}

fn run_interactive(debug_enabled: bool, config_dir: Option<String>) -> Result<()> {
    if let Some(dir) = config_dir {
        config::set_config_dir(&dir)?;
    }

    log_version!();
    let settings = config::load()?;
    let start = settings.start_coordinate()?;
    let time_format = settings.time_format()?;

    log_block_start!("Loaded configuration");
    log_indented!("Sun API: {}", settings.base_url());
    log_indented!("Start position: {start}");
    log_indented!("Time format: {}", time_format.label());

    let api = Arc::new(HttpSunApi::new(settings.base_url()));
    let mut app = App::new(
        api,
        start,
        time_source::today(),
        time_format,
        debug_enabled,
    );

    // The screen owns the terminal; keep log lines off it while it runs.
    Log::set_enabled(false);
    let outcome = app.run();
    Log::set_enabled(true);
    outcome?;

    log_end!();
    Ok(())
}
