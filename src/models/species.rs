//! Species profile - static care parameters shared by all plants of one species.

use super::care::CareKind;
use serde::{Deserialize, Serialize};

/// Care parameters for one species, loaded once per run and never modified.
///
/// The interval fields use `-1` ([`SpeciesProfile::UNTRACKED`]) to say the action is never
/// scheduled for this species. `0` is a valid interval meaning "every day".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesProfile {
    /// Unique species name, referenced by plants
    pub name: String,
    /// Botanical name
    #[serde(default)]
    pub scientific_name: String,
    /// Free-text light requirement ("direct", "indirect", "shade")
    #[serde(default)]
    pub sunlight: String,
    /// Lowest tolerated temperature in °C
    #[serde(default)]
    pub temperature_min: Option<f64>,
    /// Highest tolerated temperature in °C
    #[serde(default)]
    pub temperature_max: Option<f64>,
    /// Lower bound of the optimal temperature range in °C
    #[serde(default)]
    pub optimal_temperature_min: Option<f64>,
    /// Upper bound of the optimal temperature range in °C
    #[serde(default)]
    pub optimal_temperature_max: Option<f64>,
    /// Recommended distance to the nearest plant in cm
    #[serde(default)]
    pub plant_distance_cm: Option<f64>,
    /// Lowest tolerated soil pH
    #[serde(default)]
    pub ph_min: Option<f64>,
    /// Highest tolerated soil pH
    #[serde(default)]
    pub ph_max: Option<f64>,
    /// Days between waterings, `-1` if never scheduled
    pub avg_watering_days: i32,
    /// Days between fertilizings, `-1` if never scheduled
    pub avg_fertilizing_days: i32,
    /// Free-form watering advice
    #[serde(default)]
    pub watering_notes: Vec<String>,
    /// Free-form fertilizing advice
    #[serde(default)]
    pub fertilizing_notes: Vec<String>,
    /// Free-form pruning advice
    #[serde(default)]
    pub pruning_notes: Vec<String>,
    /// Species that do well planted nearby
    #[serde(default)]
    pub companions: Vec<String>,
    /// Anything else worth remembering
    #[serde(default)]
    pub additional_notes: Vec<String>,
}

impl SpeciesProfile {
    /// Interval sentinel: the action is never scheduled.
    pub const UNTRACKED: i32 = -1;

    /// Creates a profile with the two care intervals and no descriptive data.
    #[must_use]
    pub fn new(name: impl Into<String>, avg_watering_days: i32, avg_fertilizing_days: i32) -> Self {
        Self {
            name: name.into(),
            scientific_name: String::new(),
            sunlight: String::new(),
            temperature_min: None,
            temperature_max: None,
            optimal_temperature_min: None,
            optimal_temperature_max: None,
            plant_distance_cm: None,
            ph_min: None,
            ph_max: None,
            avg_watering_days,
            avg_fertilizing_days,
            watering_notes: vec![],
            fertilizing_notes: vec![],
            pruning_notes: vec![],
            companions: vec![],
            additional_notes: vec![],
        }
    }

    /// Raw interval for a recognized care kind, sentinel included.
    #[must_use]
    pub const fn raw_interval(&self, kind: CareKind) -> i32 {
        match kind {
            CareKind::Watering => self.avg_watering_days,
            CareKind::Fertilizing => self.avg_fertilizing_days,
        }
    }

    /// Interval in days for a care kind, or `None` when the species does not track it.
    #[must_use]
    pub fn interval_days(&self, kind: CareKind) -> Option<i64> {
        match self.raw_interval(kind) {
            Self::UNTRACKED => None,
            // Anything below the sentinel is rejected by the catalog loader.
            days => Some(i64::from(days)),
        }
    }
}
