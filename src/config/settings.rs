//! Report settings loading from config.toml
//!
//! Every setting has a default, so the file is optional and may list only the values that
//! differ. Settings are validated once after parsing.

use crate::errors::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Longest accepted window, about a century. Keeps window arithmetic inside chrono's range.
pub const MAX_WINDOW_DAYS: i64 = 36_525;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the species, plant and log files
    pub data_dir: PathBuf,
    /// chrono format string used when printing dates in the report
    pub display_date_format: String,
    /// Days ahead the care schedule looks
    pub schedule_horizon_days: i64,
    /// Days back the recent-activity feed looks
    pub feed_window_days: i64,
    /// Days back the recently-died list looks
    pub graveyard_window_days: i64,
    /// Number of plants listed per hall-of-fame ranking
    pub hall_of_fame_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            display_date_format: "%d.%m.%Y".to_string(),
            schedule_horizon_days: 7,
            feed_window_days: 30,
            graveyard_window_days: 365,
            hall_of_fame_size: 3,
        }
    }
}

impl AppConfig {
    /// Rejects settings no report can be built from.
    ///
    /// # Errors
    /// Returns `Error::Config` for a window outside `0..=MAX_WINDOW_DAYS`, an empty ranking
    /// size or an invalid display date format.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("schedule_horizon_days", self.schedule_horizon_days),
            ("feed_window_days", self.feed_window_days),
            ("graveyard_window_days", self.graveyard_window_days),
        ];
        if let Some((name, days)) = windows.iter().find(|(_, days)| *days < 0) {
            return Err(Error::Config {
                message: format!("{name} must not be negative, got {days}"),
            });
        }
        if let Some((name, days)) = windows.iter().find(|(_, days)| *days > MAX_WINDOW_DAYS) {
            return Err(Error::Config {
                message: format!("{name} must be at most {MAX_WINDOW_DAYS}, got {days}"),
            });
        }
        if self.hall_of_fame_size == 0 {
            return Err(Error::Config {
                message: "hall_of_fame_size must be at least 1".to_string(),
            });
        }
        if StrftimeItems::new(&self.display_date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config {
                message: format!(
                    "display_date_format {:?} is not a valid date format",
                    self.display_date_format
                ),
            });
        }
        Ok(())
    }
}

/// Loads report settings from a TOML file.
///
/// A missing file yields the defaults.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid or a value has the wrong type
/// - A setting fails validation
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No config file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    debug!("Loading configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;

    let config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path:?}: {e}"),
    })?;
    config.validate()?;
    Ok(config)
}
