//! # Sunmap Library
//!
//! Internal library for the sunmap binary application.
//!
//! This library exists to enable testing of the application internals and
//! to provide clean separation between CLI dispatch (main.rs) and
//! application logic.
//!
//! ## Architecture
//!
//! - **Coordinates**: `coordinates` module with the validated dual-form
//!   (regular degrees / normalized) geographic value type
//! - **Map**: `map` module translating pointer positions on the rendered
//!   world map to coordinates, and coordinates to a marker position
//! - **Remote API**: `api` module with the `SunApi` trait seam and the
//!   blocking HTTP client for the sun computation service
//! - **Orchestration**: `app` module with the event-driven state machine
//!   tying map, date field, time zone and fetched event times together
//! - **Configuration**: `config` module for TOML-based settings
//! - **Display**: `display` module for time/zone/date formatting
//! - **Infrastructure**: argument parsing, logging, time source, commands

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

// Public API modules
pub mod api;
pub mod app;
pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod display;
pub mod map;
pub mod time_source;

// Re-exports for the binary and tests
pub use app::{App, AppEvent};
pub use coordinates::{Coordinate, CoordinateError};
