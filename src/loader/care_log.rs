//! Append-only care logs: activities, growth measurements and photo references.
//!
//! One activity row may name several plants that received the same care on the same day; it
//! is fanned out into one [`LogEntry`] per plant. All logs come back keyed by plant name,
//! unmatched names are left for collection assembly to report.

use super::{invalid, read_optional_toml};
use crate::{
    errors::Result,
    models::{GrowthEntry, LogEntry, PlantImage},
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

#[derive(Debug, Deserialize)]
struct ActivityRow {
    #[serde(with = "crate::models::date_format")]
    date: NaiveDate,
    activity: String,
    plants: Vec<String>,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
struct GrowthRow {
    #[serde(with = "crate::models::date_format")]
    date: NaiveDate,
    plant: String,
    height_cm: f64,
    width_cm: f64,
    #[serde(default)]
    note: String,
}

#[derive(Debug, Deserialize)]
struct ImageRow {
    #[serde(with = "crate::models::date_format")]
    date: NaiveDate,
    plant: String,
    file: String,
}

#[derive(Debug, Default, Deserialize)]
struct ActivitiesFile {
    #[serde(default)]
    activities: Vec<ActivityRow>,
}

#[derive(Debug, Default, Deserialize)]
struct GrowthFile {
    #[serde(default)]
    growth: Vec<GrowthRow>,
}

#[derive(Debug, Default, Deserialize)]
struct ImagesFile {
    #[serde(default)]
    images: Vec<ImageRow>,
}

/// Loads `[[activities]]` rows, one entry per named plant. A missing file is an empty log.
///
/// # Errors
/// Fails on unreadable files, rows with an empty activity or no plants.
pub fn load_activities<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Vec<LogEntry>>> {
    let path = path.as_ref();
    let file: ActivitiesFile = read_optional_toml(path)?;

    let mut by_plant: HashMap<String, Vec<LogEntry>> = HashMap::new();
    for row in file.activities {
        if row.activity.trim().is_empty() {
            return Err(invalid(path, format!("activity on {} has no label", row.date)));
        }
        if row.plants.is_empty() {
            return Err(invalid(
                path,
                format!("{} on {} names no plants", row.activity, row.date),
            ));
        }
        for plant in &row.plants {
            by_plant
                .entry(plant.trim().to_string())
                .or_default()
                .push(LogEntry::new(row.date, &row.activity, &row.note));
        }
    }
    Ok(by_plant)
}

/// Loads `[[growth]]` rows. A missing file is an empty log.
///
/// # Errors
/// Fails on unreadable files or negative or non-finite measurements.
pub fn load_growth<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Vec<GrowthEntry>>> {
    let path = path.as_ref();
    let file: GrowthFile = read_optional_toml(path)?;

    let mut by_plant: HashMap<String, Vec<GrowthEntry>> = HashMap::new();
    for row in file.growth {
        for (field, value) in [("height_cm", row.height_cm), ("width_cm", row.width_cm)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    path,
                    format!("{} on {}: {field} {value} is not a size", row.plant, row.date),
                ));
            }
        }
        by_plant
            .entry(row.plant.trim().to_string())
            .or_default()
            .push(GrowthEntry::new(
                row.date,
                row.height_cm,
                row.width_cm,
                &row.note,
            ));
    }
    Ok(by_plant)
}

/// Loads `[[images]]` rows. A missing file means no photos.
///
/// # Errors
/// Fails on unreadable files.
pub fn load_images<P: AsRef<Path>>(path: P) -> Result<HashMap<String, Vec<PlantImage>>> {
    let file: ImagesFile = read_optional_toml(path.as_ref())?;

    let mut by_plant: HashMap<String, Vec<PlantImage>> = HashMap::new();
    for row in file.images {
        by_plant
            .entry(row.plant.trim().to_string())
            .or_default()
            .push(PlantImage {
                date: row.date,
                file_name: row.file,
            });
    }
    Ok(by_plant)
}
