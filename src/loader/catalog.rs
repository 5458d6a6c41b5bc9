//! Species and plant catalog files.

use super::{invalid, read_toml};
use crate::{
    errors::Result,
    models::{MAX_HEALTH, PlantRecord, SpeciesProfile},
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SpeciesFile {
    #[serde(default)]
    species: Vec<SpeciesProfile>,
}

#[derive(Debug, Deserialize)]
struct PlantsFile {
    #[serde(default)]
    plants: Vec<PlantRecord>,
}

/// Loads `[[species]]` tables.
///
/// # Errors
/// Fails if the file is missing or unreadable, or a care interval is below `-1`.
pub fn load_species<P: AsRef<Path>>(path: P) -> Result<Vec<SpeciesProfile>> {
    let path = path.as_ref();
    let file: SpeciesFile = read_toml(path)?;

    for species in &file.species {
        let intervals = [
            ("avg_watering_days", species.avg_watering_days),
            ("avg_fertilizing_days", species.avg_fertilizing_days),
        ];
        for (field, days) in intervals {
            if days < SpeciesProfile::UNTRACKED {
                return Err(invalid(
                    path,
                    format!("species {}: {field} must be -1 or more, got {days}", species.name),
                ));
            }
        }
    }
    Ok(file.species)
}

/// Loads `[[plants]]` tables.
///
/// # Errors
/// Fails if the file is missing or unreadable, a name is blank, or a health value is above
/// the maximum.
pub fn load_plants<P: AsRef<Path>>(path: P) -> Result<Vec<PlantRecord>> {
    let path = path.as_ref();
    let file: PlantsFile = read_toml(path)?;

    for plant in &file.plants {
        if plant.name.trim().is_empty() {
            return Err(invalid(path, "plant with an empty name".to_string()));
        }
        if plant.health > MAX_HEALTH {
            return Err(invalid(
                path,
                format!(
                    "plant {}: health must be 0 to {MAX_HEALTH}, got {}",
                    plant.name, plant.health
                ),
            ));
        }
    }
    Ok(file.plants)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Error;
    use std::fs;

    fn write(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_species_with_descriptive_fields() {
        let (_dir, path) = write(
            r#"
                [[species]]
                name = "Monstera"
                scientific_name = "Monstera deliciosa"
                sunlight = "indirect"
                temperature_min = 12.0
                avg_watering_days = 7
                avg_fertilizing_days = 14
                companions = ["Pothos"]

                [[species]]
                name = "Air plant"
                avg_watering_days = -1
                avg_fertilizing_days = -1
            "#,
        );

        let species = load_species(&path).unwrap();

        assert_eq!(species.len(), 2);
        assert_eq!(species[0].scientific_name, "Monstera deliciosa");
        assert_eq!(species[0].temperature_min, Some(12.0));
        assert_eq!(species[0].companions, vec!["Pothos".to_string()]);
        assert_eq!(species[1].avg_watering_days, SpeciesProfile::UNTRACKED);
    }

    #[test]
    fn test_interval_below_sentinel_rejected() {
        let (_dir, path) = write(
            r#"
                [[species]]
                name = "Broken"
                avg_watering_days = -2
                avg_fertilizing_days = 10
            "#,
        );

        let err = load_species(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
        assert!(err.to_string().contains("avg_watering_days"));
    }

    #[test]
    fn test_health_out_of_range_rejected() {
        let (_dir, path) = write(
            r#"
                [[plants]]
                name = "Overachiever"
                species = "Fern"
                health = 7
                obtained = "01.01.2023"
            "#,
        );

        let err = load_plants(&path).unwrap_err();
        assert!(err.to_string().contains("health must be 0 to 5, got 7"));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let (_dir, path) = write(
            r#"
                [[plants]]
                name = "Fern"
                species = "Fern"
                health = 3
                obtained = "2023-01-01"
            "#,
        );

        let err = load_plants(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
    }

    #[test]
    fn test_empty_file_has_no_plants() {
        let (_dir, path) = write("");
        assert!(load_plants(&path).unwrap().is_empty());
    }
}
