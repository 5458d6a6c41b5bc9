//! Environment variable overrides for a single run.
//!
//! `PLANT_BUDDY_CONFIG` points at an alternative settings file, `PLANT_BUDDY_DATA_DIR`
//! replaces the data directory and `PLANT_BUDDY_REFERENCE_DATE` (`dd.mm.yyyy`) pins "today"
//! for reproducible reports. Lookups go through a closure so the logic can be exercised
//! without touching the process environment.

use super::settings::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::{errors::Result, models::date_format};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use tracing::info;

/// Settings file location variable
pub const CONFIG_PATH_VAR: &str = "PLANT_BUDDY_CONFIG";
/// Data directory variable
pub const DATA_DIR_VAR: &str = "PLANT_BUDDY_DATA_DIR";
/// Reference date variable
pub const REFERENCE_DATE_VAR: &str = "PLANT_BUDDY_REFERENCE_DATE";

/// Reads a variable from the process environment, treating unset and non-unicode alike.
#[must_use]
pub fn from_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// The settings file to load.
#[must_use]
pub fn config_path(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup(CONFIG_PATH_VAR).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Applies the data directory override to loaded settings.
#[must_use]
pub fn apply(mut config: AppConfig, lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(data_dir) = lookup(DATA_DIR_VAR) {
        info!("Data directory overridden by {}: {}", DATA_DIR_VAR, data_dir);
        config.data_dir = PathBuf::from(data_dir);
    }
    config
}

/// The day the report is computed for: the pinned date if set, otherwise today.
///
/// # Errors
/// Returns `Error::DateParse` if the pinned date is not `dd.mm.yyyy`.
pub fn reference_date(lookup: impl Fn(&str) -> Option<String>) -> Result<NaiveDate> {
    match lookup(REFERENCE_DATE_VAR) {
        Some(pinned) => {
            let date = date_format::parse(&pinned)?;
            info!("Reference date pinned to {}", date);
            Ok(date)
        }
        None => Ok(Local::now().date_naive()),
    }
}
