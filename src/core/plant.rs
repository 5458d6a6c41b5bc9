//! Plant entity - one plant, its history, and everything derived from it.
//!
//! A [`Plant`] owns its activity and growth history (both kept newest first) and caches the
//! derived state the reports read: next due dates, observed care frequencies and current size.
//! The cache is rebuilt by every mutator, so all getters are plain reads.

use crate::models::{
    CareKind, DORMANT, GrowthEntry, LogEntry, PlantImage, PlantRecord, SpeciesProfile,
};
use chrono::{NaiveDate, TimeDelta};
use std::sync::Arc;
use tracing::debug;

/// A living plant together with its care history and derived schedule.
#[derive(Debug, Clone)]
pub struct Plant {
    record: PlantRecord,
    species: Option<Arc<SpeciesProfile>>,
    activities: Vec<LogEntry>,
    growth: Vec<GrowthEntry>,
    images: Vec<PlantImage>,
    reference_date: NaiveDate,
    current_height: f64,
    current_width: f64,
    next_watering: Option<NaiveDate>,
    next_fertilizing: Option<NaiveDate>,
    watering_frequency: f64,
    fertilizing_frequency: f64,
}

impl Plant {
    /// Builds a plant from its record, resolved species and history.
    ///
    /// `reference_date` is "today" for the run; due dates are never earlier than it.
    #[must_use]
    pub fn new(
        record: PlantRecord,
        species: Option<Arc<SpeciesProfile>>,
        activities: Vec<LogEntry>,
        growth: Vec<GrowthEntry>,
        reference_date: NaiveDate,
    ) -> Self {
        let mut plant = Self {
            record,
            species,
            activities,
            growth,
            images: vec![],
            reference_date,
            current_height: f64::NAN,
            current_width: f64::NAN,
            next_watering: None,
            next_fertilizing: None,
            watering_frequency: 0.0,
            fertilizing_frequency: 0.0,
        };
        plant.activities.sort_by(|a, b| b.date.cmp(&a.date));
        plant.growth.sort_by(|a, b| b.date.cmp(&a.date));
        plant.refresh_schedule();
        plant.update_size();
        plant
    }

    /// Computes when `kind` is next due, or `None` if it is not scheduled for this plant.
    ///
    /// Not scheduled means: no species profile, the species interval is the `-1` sentinel,
    /// the plant is dormant, or (for watering only) the plant is auto-watered. Without any
    /// matching history the action is due on the reference date. A lapsed action is clamped
    /// to the reference date rather than reported in the past.
    #[must_use]
    pub fn resolve_next_due(&self, kind: CareKind) -> Option<NaiveDate> {
        let species = self.species.as_deref()?;
        let interval = species.interval_days(kind)?;

        let suspended = match kind {
            CareKind::Watering => self.record.auto_water || self.is_dormant(),
            CareKind::Fertilizing => self.is_dormant(),
        };
        if suspended {
            return None;
        }

        let last = self.last_activity(kind).unwrap_or(NaiveDate::MIN);
        let candidate = last
            .checked_add_signed(TimeDelta::days(interval))
            .unwrap_or(self.reference_date);

        Some(candidate.max(self.reference_date))
    }

    /// Observed average days between entries of `kind`.
    ///
    /// Computed as the span between the first and last entry divided by the number of
    /// entries (not the mean gap). Returns `0.0` with fewer than two entries.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn resolve_frequency(&self, kind: CareKind) -> f64 {
        let dates: Vec<NaiveDate> = self.entries_of(kind).map(|entry| entry.date).collect();
        if dates.len() < 2 {
            return 0.0;
        }

        let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
            return 0.0;
        };
        (*last - *first).num_days().abs() as f64 / dates.len() as f64
    }

    /// Sets height and width from the chronologically last growth entry, NaN if there is none.
    pub fn update_size(&mut self) {
        // max_by_key keeps the last of equal dates, i.e. the most recently recorded entry
        match self.growth.iter().max_by_key(|entry| entry.date) {
            Some(latest) => {
                self.current_height = latest.height_cm;
                self.current_width = latest.width_cm;
            }
            None => {
                self.current_height = f64::NAN;
                self.current_width = f64::NAN;
            }
        }
    }

    /// Appends an activity and recomputes due dates and frequencies.
    pub fn record_activity(&mut self, entry: LogEntry) {
        debug!(plant = %self.record.name, activity = %entry.activity, date = %entry.date, "Recording activity");
        self.activities.push(entry);
        self.activities.sort_by(|a, b| b.date.cmp(&a.date));
        self.refresh_schedule();
    }

    /// Appends a growth measurement and recomputes the current size.
    pub fn record_growth(&mut self, entry: GrowthEntry) {
        debug!(plant = %self.record.name, date = %entry.date, "Recording growth");
        self.growth.push(entry);
        self.growth.sort_by(|a, b| b.date.cmp(&a.date));
        self.update_size();
    }

    /// Changes the health value and recomputes due dates.
    pub fn set_health(&mut self, health: u8) {
        self.record.health = health;
        self.refresh_schedule();
    }

    /// Changes the auto-water flag and recomputes due dates.
    pub fn set_auto_water(&mut self, auto_water: bool) {
        self.record.auto_water = auto_water;
        self.refresh_schedule();
    }

    /// Adds image references, keeping them newest first.
    pub fn attach_images(&mut self, images: impl IntoIterator<Item = PlantImage>) {
        self.images.extend(images);
        self.images.sort_by(|a, b| b.date.cmp(&a.date));
    }

    fn refresh_schedule(&mut self) {
        self.next_watering = self.resolve_next_due(CareKind::Watering);
        self.next_fertilizing = self.resolve_next_due(CareKind::Fertilizing);
        self.watering_frequency = self.resolve_frequency(CareKind::Watering);
        self.fertilizing_frequency = self.resolve_frequency(CareKind::Fertilizing);
        debug!(
            plant = %self.record.name,
            next_watering = ?self.next_watering,
            next_fertilizing = ?self.next_fertilizing,
            "Schedule refreshed"
        );
    }

    fn entries_of(&self, kind: CareKind) -> impl Iterator<Item = &LogEntry> {
        self.activities.iter().filter(move |entry| entry.is(kind))
    }

    /// Date of the most recent entry of `kind`.
    #[must_use]
    pub fn last_activity(&self, kind: CareKind) -> Option<NaiveDate> {
        self.entries_of(kind).map(|entry| entry.date).max()
    }

    /// Date of the most recent growth measurement.
    #[must_use]
    pub fn last_growth_date(&self) -> Option<NaiveDate> {
        self.growth.iter().map(|entry| entry.date).max()
    }

    /// Combined height and width change per day between the earliest and latest measurement.
    ///
    /// `None` with fewer than two measurements or when they all fall on the same day.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn growth_rate(&self) -> Option<f64> {
        let earliest = self.growth.iter().min_by_key(|entry| entry.date)?;
        let latest = self.growth.iter().max_by_key(|entry| entry.date)?;
        let days = (latest.date - earliest.date).num_days();
        if days == 0 {
            return None;
        }

        let height_change = latest.height_cm - earliest.height_cm;
        let width_change = latest.width_cm - earliest.width_cm;
        Some((height_change + width_change) / days as f64)
    }

    /// Days between acquisition and `on`.
    #[must_use]
    pub fn age_days(&self, on: NaiveDate) -> i64 {
        (on - self.record.obtained).num_days()
    }

    /// Unique plant name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Species name as recorded, whether or not it resolved
    #[must_use]
    pub fn species_name(&self) -> &str {
        &self.record.species
    }

    /// Resolved species profile
    #[must_use]
    pub fn species(&self) -> Option<&SpeciesProfile> {
        self.species.as_deref()
    }

    /// Health from 0 (dormant) to 5
    #[must_use]
    pub const fn health(&self) -> u8 {
        self.record.health
    }

    /// Whether scheduling is suspended for this plant.
    #[must_use]
    pub const fn is_dormant(&self) -> bool {
        self.record.health == DORMANT
    }

    /// Where the plant stands
    #[must_use]
    pub fn location(&self) -> &str {
        &self.record.location
    }

    /// Where the plant came from
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.record.origin
    }

    /// Day the plant was acquired
    #[must_use]
    pub const fn obtained(&self) -> NaiveDate {
        self.record.obtained
    }

    /// Whether the plant sits on a self-watering system
    #[must_use]
    pub const fn auto_water(&self) -> bool {
        self.record.auto_water
    }

    /// Free-form notes
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.record.notes
    }

    /// Activity history, newest first
    #[must_use]
    pub fn activities(&self) -> &[LogEntry] {
        &self.activities
    }

    /// Growth history, newest first
    #[must_use]
    pub fn growth(&self) -> &[GrowthEntry] {
        &self.growth
    }

    /// Image references, newest first
    #[must_use]
    pub fn images(&self) -> &[PlantImage] {
        &self.images
    }

    /// Height of the latest measurement in cm, NaN without measurements
    #[must_use]
    pub const fn current_height(&self) -> f64 {
        self.current_height
    }

    /// Width of the latest measurement in cm, NaN without measurements
    #[must_use]
    pub const fn current_width(&self) -> f64 {
        self.current_width
    }

    /// Next watering day, `None` if watering is not scheduled
    #[must_use]
    pub const fn next_watering(&self) -> Option<NaiveDate> {
        self.next_watering
    }

    /// Next fertilizing day, `None` if fertilizing is not scheduled
    #[must_use]
    pub const fn next_fertilizing(&self) -> Option<NaiveDate> {
        self.next_fertilizing
    }

    /// Cached due date for `kind`.
    #[must_use]
    pub const fn next_due(&self, kind: CareKind) -> Option<NaiveDate> {
        match kind {
            CareKind::Watering => self.next_watering,
            CareKind::Fertilizing => self.next_fertilizing,
        }
    }

    /// Observed days between waterings, `0.0` with fewer than two
    #[must_use]
    pub const fn watering_frequency(&self) -> f64 {
        self.watering_frequency
    }

    /// Observed days between fertilizings, `0.0` with fewer than two
    #[must_use]
    pub const fn fertilizing_frequency(&self) -> f64 {
        self.fertilizing_frequency
    }

    /// The reference date due dates were computed against
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}
