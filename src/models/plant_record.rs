//! Plant and graveyard records as handed over by the catalog loader.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Health value marking a dormant plant. Dormant plants are never scheduled.
pub const DORMANT: u8 = 0;

/// Highest valid health value.
pub const MAX_HEALTH: u8 = 5;

/// Static identity and attributes of one living plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Unique plant name
    pub name: String,
    /// Species name; may not match any loaded species
    pub species: String,
    /// 0 (dormant) to 5
    pub health: u8,
    /// Where the plant currently stands
    #[serde(default)]
    pub location: String,
    /// Where the plant came from
    #[serde(default)]
    pub origin: String,
    /// Day the plant was acquired
    #[serde(with = "crate::models::date_format")]
    pub obtained: NaiveDate,
    /// Whether the plant sits on a self-watering system
    #[serde(default)]
    pub auto_water: bool,
    /// Free-form notes
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A plant that has died. Read-only history, never scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraveyardRecord {
    /// Name the plant had
    pub plant_name: String,
    /// Its species name
    pub species_name: String,
    /// Day it was planted or acquired
    #[serde(with = "crate::models::date_format")]
    pub planted: NaiveDate,
    /// Day it died
    #[serde(with = "crate::models::date_format")]
    pub died: NaiveDate,
    /// Cause of death, if known
    #[serde(default)]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_plant_record_with_defaults() {
        let toml_str = r#"
            name = "Spiky"
            species = "Cactus"
            health = 4
            obtained = "12.06.2021"
        "#;

        let record: PlantRecord = toml::from_str(toml_str).unwrap();
        assert_eq!(record.name, "Spiky");
        assert_eq!(record.health, 4);
        assert!(!record.auto_water);
        assert!(record.location.is_empty());
        assert_eq!(record.obtained, NaiveDate::from_ymd_opt(2021, 6, 12).unwrap());
    }

    #[test]
    fn test_parse_graveyard_record() {
        let toml_str = r#"
            plant_name = "Fernando"
            species_name = "Boston Fern"
            planted = "01.04.2020"
            died = "15.08.2023"
            reason = "Spider mites"
        "#;

        let record: GraveyardRecord = toml::from_str(toml_str).unwrap();
        assert_eq!(record.died, NaiveDate::from_ymd_opt(2023, 8, 15).unwrap());
        assert_eq!(record.reason, "Spider mites");
    }
}
