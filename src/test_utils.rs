//! Shared test utilities for `plant-buddy`.
//!
//! This module provides a fixed reference date, date helpers relative to it, and a builder for
//! plants with sensible defaults so tests only spell out what they care about.

#![allow(clippy::unwrap_used)]

use crate::{
    core::plant::Plant,
    models::{GrowthEntry, LogEntry, PlantRecord, SpeciesProfile},
};
use chrono::{NaiveDate, TimeDelta};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the test harness. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// The "today" every test runs against: Wednesday, 12 June 2024.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

/// `days` before the reference date.
pub fn days_before(days: i64) -> NaiveDate {
    reference_date() - TimeDelta::days(days)
}

/// `days` after the reference date.
pub fn days_after(days: i64) -> NaiveDate {
    reference_date() + TimeDelta::days(days)
}

/// Creates a species with the given intervals and no descriptive data.
pub fn species(name: &str, avg_watering_days: i32, avg_fertilizing_days: i32) -> SpeciesProfile {
    SpeciesProfile::new(name, avg_watering_days, avg_fertilizing_days)
}

/// Creates a plant record with sensible defaults.
///
/// # Defaults
/// * `health`: 3
/// * `location`: "Living room"
/// * `obtained`: one year before the reference date
/// * `auto_water`: false
pub fn plant_record(name: &str, species_name: &str) -> PlantRecord {
    PlantRecord {
        name: name.to_string(),
        species: species_name.to_string(),
        health: 3,
        location: "Living room".to_string(),
        origin: "Garden centre".to_string(),
        obtained: days_before(365),
        auto_water: false,
        notes: vec![],
    }
}

/// Builder for [`Plant`] values in tests.
///
/// Without `.species(..)` the plant is built with an unresolved species.
pub struct PlantBuilder {
    record: PlantRecord,
    species: Option<Arc<SpeciesProfile>>,
    activities: Vec<LogEntry>,
    growth: Vec<GrowthEntry>,
}

impl PlantBuilder {
    pub fn new(name: &str, species_name: &str) -> Self {
        Self {
            record: plant_record(name, species_name),
            species: None,
            activities: vec![],
            growth: vec![],
        }
    }

    pub fn species(mut self, species: &SpeciesProfile) -> Self {
        self.species = Some(Arc::new(species.clone()));
        self
    }

    pub const fn health(mut self, health: u8) -> Self {
        self.record.health = health;
        self
    }

    pub const fn auto_water(mut self, auto_water: bool) -> Self {
        self.record.auto_water = auto_water;
        self
    }

    pub const fn obtained(mut self, obtained: NaiveDate) -> Self {
        self.record.obtained = obtained;
        self
    }

    pub fn activity(mut self, date: NaiveDate, activity: &str, note: &str) -> Self {
        self.activities.push(LogEntry::new(date, activity, note));
        self
    }

    pub fn growth(self, date: NaiveDate, height_cm: f64, width_cm: f64) -> Self {
        self.growth_with_note(date, height_cm, width_cm, "")
    }

    pub fn growth_with_note(
        mut self,
        date: NaiveDate,
        height_cm: f64,
        width_cm: f64,
        note: &str,
    ) -> Self {
        self.growth
            .push(GrowthEntry::new(date, height_cm, width_cm, note));
        self
    }

    pub fn build(self) -> Plant {
        Plant::new(
            self.record,
            self.species,
            self.activities,
            self.growth,
            reference_date(),
        )
    }
}
