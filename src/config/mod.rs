//! TOML configuration for sunmap.
//!
//! The configuration file `sunmap.toml` lives under the XDG config directory
//! (`~/.config/sunmap/sunmap.toml`), or under the directory passed with
//! `--config`. A default file is generated on first run. All fields are
//! optional; accessors supply defaults.
//!
//! Validation happens at load time: the startup coordinate must lie inside
//! the coordinate domains and the time format must be one of the two known
//! values. An invalid file is rejected as a whole, leaving no partially
//! applied settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::constants::DEFAULT_BASE_URL;
use crate::coordinates::Coordinate;
use crate::display::TimeFormat;

/// Custom config directory from `--config`, set once at startup.
static CUSTOM_CONFIG_DIR: OnceCell<PathBuf> = OnceCell::new();

const CONFIG_FILE_NAME: &str = "sunmap.toml";

const DEFAULT_CONFIG_CONTENT: &str = r#"#[Sun API]
base_url = "http://127.0.0.1:8000/api"

#[Startup position]
latitude = 0.0      # Geographic latitude (-90 to +90)
longitude = 0.0     # Geographic longitude (-180 to +180)

#[Display]
time_format = "12h" # Select: "12h" or "24h"
"#;

/// Application configuration, deserialized from `sunmap.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub base_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub time_format: Option<String>,
}

impl Config {
    /// Base URL of the sun API, without a trailing slash.
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Startup coordinate; defaults to (0°, 0°).
    pub fn start_coordinate(&self) -> Result<Coordinate> {
        let latitude = self.latitude.unwrap_or(0.0);
        let longitude = self.longitude.unwrap_or(0.0);
        Coordinate::new(latitude, longitude)
            .map_err(|e| anyhow!("invalid startup position in config: {e}"))
    }

    /// Initial 12/24-hour preference; defaults to 12-hour.
    pub fn time_format(&self) -> Result<TimeFormat> {
        match self.time_format.as_deref() {
            None => Ok(TimeFormat::Hour12),
            Some(value) => TimeFormat::from_config_value(value).ok_or_else(|| {
                anyhow!("invalid time_format \"{value}\" in config (expected \"12h\" or \"24h\")")
            }),
        }
    }

    fn validate(&self) -> Result<()> {
        self.start_coordinate()?;
        self.time_format()?;
        if let Some(url) = self.base_url.as_deref()
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(anyhow!("base_url must start with http:// or https://"));
        }
        Ok(())
    }
}

/// Record the `--config <dir>` override. First call wins.
pub fn set_config_dir(dir: &str) -> Result<()> {
    let path = PathBuf::from(dir);
    if !path.is_dir() {
        return Err(anyhow!("config directory does not exist: {dir}"));
    }
    let _ = CUSTOM_CONFIG_DIR.set(path);
    Ok(())
}

/// Resolve the config file path (custom dir, then XDG default).
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(dir) = CUSTOM_CONFIG_DIR.get() {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }
    let base = dirs::config_dir().context("could not determine config directory")?;
    Ok(base.join("sunmap").join(CONFIG_FILE_NAME))
}

/// Load the configuration, generating a default file on first run.
pub fn load() -> Result<Config> {
    let path = get_config_path()?;
    if !path.exists() {
        create_default_config(&path)?;
        log_block_start!("Created default configuration at {}", path.display());
    }
    load_from_path(&path)
}

/// Load and validate a configuration file at an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .with_context(|| format!("failed to write default config {}", path.display()))
}
