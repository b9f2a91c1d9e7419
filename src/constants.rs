//! Application-wide constants for sunmap.

// Coordinate domains (regular degrees)
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

// Normalized coordinate domain
pub const MIN_NORMALIZED: f64 = 0.0;
pub const MAX_NORMALIZED: f64 = 1.0;

// Remote sun API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
pub const TIMEZONE_ENDPOINT: &[&str] = &["location", "timezone"];
pub const EVENT_TIMES_ENDPOINT: &[&str] = &["location", "date"];
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

// Display formatting
/// Rendered for an event that does not occur on the selected date
/// (polar day/night). Distinct from a pending or failed fetch.
pub const NOT_APPLICABLE_LABEL: &str = "N/A";
pub const UNKNOWN_TIMEZONE_LABEL: &str = "Unknown Timezone";
pub const DATE_FIELD_FORMAT: &str = "%Y-%m-%d";

// Interactive screen
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;
