//! Formatting of event times, zone labels, and the date field.
//!
//! Event times arrive from the remote service as absolute instants; only
//! their rendering depends on the display zone and the 12/24-hour
//! preference, so a format or zone change never needs a new fetch.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::{DATE_FIELD_FORMAT, NOT_APPLICABLE_LABEL, UNKNOWN_TIMEZONE_LABEL};

/// Zone regions so common that repeating them adds no information.
///
/// Australia is an exception as both a continent and a country; Madagascar
/// carries the Indian prefix.
const OMITTED_REGIONS: [&str; 6] = ["America", "Asia", "Europe", "Africa", "Pacific", "Indian"];

/// 12-hour/24-hour rendering preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Hour12,
    Hour24,
}

impl TimeFormat {
    /// Parse the config-file value (`"12h"` / `"24h"`).
    pub fn from_config_value(value: &str) -> Option<Self> {
        match value {
            "12h" => Some(Self::Hour12),
            "24h" => Some(Self::Hour24),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hour12 => "12h",
            Self::Hour24 => "24h",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Hour12 => Self::Hour24,
            Self::Hour24 => Self::Hour12,
        }
    }
}

/// Render one event time in the display zone, or the fixed absent marker.
pub fn format_event_time(
    instant: Option<DateTime<Utc>>,
    format: TimeFormat,
    zone: Tz,
) -> String {
    let Some(instant) = instant else {
        return NOT_APPLICABLE_LABEL.to_string();
    };
    let local = zone.from_utc_datetime(&instant.naive_utc());
    match format {
        TimeFormat::Hour12 => local.format("%-I:%M %p").to_string().to_uppercase(),
        TimeFormat::Hour24 => local.format("%H:%M").to_string(),
    }
}

/// Friendly label for an IANA zone identifier.
///
/// Keeps the city name, appends the region only when it carries information
/// (`"Sydney, Australia"` but plain `"New York"`), and swaps the
/// underscore stand-ins back to spaces.
pub fn display_zone_label(identifier: &str) -> String {
    if identifier.is_empty() {
        return UNKNOWN_TIMEZONE_LABEL.to_string();
    }

    let mut parts: Vec<&str> = identifier.split('/').collect();
    let zone_name = parts.pop().unwrap_or(identifier);
    let mut label = zone_name.to_string();

    if !zone_name.starts_with("GMT")
        && let Some(region) = parts.pop()
        && !OMITTED_REGIONS.contains(&region)
    {
        label.push_str(", ");
        label.push_str(region);
    }

    label.replace('_', " ")
}

/// Format a date the way the date field displays and parses it.
pub fn date_to_field_string(date: NaiveDate) -> String {
    date.format(DATE_FIELD_FORMAT).to_string()
}

/// Parse date-field text. `None` is a user-input error, never fatal.
pub fn parse_date_field(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FIELD_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    fn instant(rfc3339: &str) -> Option<DateTime<Utc>> {
        Some(DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc))
    }

    #[test]
    fn absent_event_renders_fixed_marker() {
        assert_eq!(
            format_event_time(None, TimeFormat::Hour12, Tz::UTC),
            "N/A"
        );
        assert_eq!(
            format_event_time(None, TimeFormat::Hour24, Tz::UTC),
            "N/A"
        );
    }

    #[test]
    fn twelve_hour_format_is_uppercased() {
        let sunset = instant("2024-06-21T18:00:00Z");
        assert_eq!(
            format_event_time(sunset, TimeFormat::Hour12, Tz::UTC),
            "6:00 PM"
        );
        let sunrise = instant("2024-06-21T04:05:00Z");
        assert_eq!(
            format_event_time(sunrise, TimeFormat::Hour12, Tz::UTC),
            "4:05 AM"
        );
    }

    #[test]
    fn twenty_four_hour_format() {
        let sunset = instant("2024-06-21T18:00:00Z");
        assert_eq!(
            format_event_time(sunset, TimeFormat::Hour24, Tz::UTC),
            "18:00"
        );
    }

    #[test]
    fn display_zone_changes_rendering_only() {
        // 18:00 UTC in June is 14:00 in New York (EDT)
        let sunset = instant("2024-06-21T18:00:00Z");
        assert_eq!(
            format_event_time(sunset, TimeFormat::Hour24, chrono_tz::America::New_York),
            "14:00"
        );
        assert_eq!(
            format_event_time(sunset, TimeFormat::Hour12, chrono_tz::America::New_York),
            "2:00 PM"
        );
    }

    #[test]
    fn zone_labels_trim_well_known_regions() {
        assert_eq!(display_zone_label("America/New_York"), "New York");
        assert_eq!(display_zone_label("Europe/London"), "London");
        assert_eq!(display_zone_label("Australia/Sydney"), "Sydney, Australia");
        assert_eq!(
            display_zone_label("America/Argentina/Buenos_Aires"),
            "Buenos Aires, Argentina"
        );
        assert_eq!(display_zone_label("Etc/GMT+5"), "GMT+5");
        assert_eq!(display_zone_label("UTC"), "UTC");
        assert_eq!(display_zone_label(""), "Unknown Timezone");
    }

    #[test]
    fn time_format_round_trips_config_values() {
        assert_eq!(TimeFormat::from_config_value("12h"), Some(TimeFormat::Hour12));
        assert_eq!(TimeFormat::from_config_value("24h"), Some(TimeFormat::Hour24));
        assert_eq!(TimeFormat::from_config_value("am/pm"), None);
        assert_eq!(TimeFormat::Hour12.toggled(), TimeFormat::Hour24);
    }

    #[test]
    fn date_field_text_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_to_field_string(date), "2024-06-01");
        assert_eq!(parse_date_field("2024-06-01"), Some(date));
        assert_eq!(parse_date_field("garbage"), None);
        assert_eq!(parse_date_field("2024-13-01"), None);
    }
}
