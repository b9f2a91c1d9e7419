//! Implementation of the `query` command: one-shot sun times for a point.
//!
//! Runs the same remote calls as the interactive screen, but synchronously
//! and without the map, then prints the formatted result. Useful for
//! scripting and for checking backend connectivity.

use anyhow::{Context, Result};

use crate::api::{HttpSunApi, SunApi};
use crate::config;
use crate::coordinates::Coordinate;
use crate::display::{date_to_field_string, display_zone_label, format_event_time, parse_date_field};

/// Handle `sunmap query <latitude> <longitude> [date]`.
pub fn handle_query_command(
    latitude: f64,
    longitude: f64,
    date_text: Option<String>,
    debug_enabled: bool,
) -> Result<()> {
    log_version!();

    let coordinate = match Coordinate::new(latitude, longitude) {
        Ok(coordinate) => coordinate,
        Err(error) => {
            log_error_exit!("{error}");
            std::process::exit(1);
        }
    };

    let date = match date_text {
        None => crate::time_source::today(),
        Some(text) => match parse_date_field(&text) {
            Some(date) => date,
            None => {
                log_error_exit!("Could not parse date \"{text}\" (expected YYYY-MM-DD)");
                std::process::exit(1);
            }
        },
    };

    let settings = config::load()?;
    let format = settings.time_format()?;
    let api = HttpSunApi::new(settings.base_url());

    if debug_enabled {
        log_pipe!();
        log_debug!("Using sun API at {}", settings.base_url());
    }

    log_block_start!(
        "Sun times for {} on {}",
        coordinate,
        date_to_field_string(date)
    );

    let zone_identifier = api
        .fetch_timezone(coordinate)
        .context("time-zone lookup failed")?;
    let zone = zone_identifier.parse().unwrap_or(chrono_tz::Tz::UTC);
    log_indented!("Time Zone: {}", display_zone_label(&zone_identifier));

    let pair = api
        .fetch_event_times(coordinate, date)
        .context("event-times lookup failed")?;
    log_indented!("Sunrise: {}", format_event_time(pair.sunrise, format, zone));
    log_indented!("Sunset: {}", format_event_time(pair.sunset, format, zone));
    log_end!();

    Ok(())
}
