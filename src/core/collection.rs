//! Collection manager - assembles the plant graph once per run.
//!
//! Species are indexed by name, every plant record is resolved to its species and handed its
//! history, and leftover history is reported. Data problems never abort assembly: each one
//! becomes a [`Diagnostic`] that is logged and kept for the caller to report.

use super::plant::Plant;
use crate::models::{GrowthEntry, LogEntry, PlantImage, PlantRecord, SpeciesProfile};
use chrono::NaiveDate;
use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};
use tracing::{debug, info, warn};

/// An advisory data-integrity finding. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A plant names a species that was not loaded; its due dates stay empty
    MissingSpecies {
        /// Plant name
        plant: String,
        /// Species name the plant refers to
        species: String,
    },
    /// Activity entries for a plant name that does not exist
    OrphanedActivities {
        /// Unmatched plant name
        plant: String,
        /// Number of unused entries
        count: usize,
    },
    /// Growth entries for a plant name that does not exist
    OrphanedGrowth {
        /// Unmatched plant name
        plant: String,
        /// Number of unused entries
        count: usize,
    },
    /// A second species with an already loaded name; the first one is kept
    DuplicateSpecies {
        /// Species name
        name: String,
    },
    /// A second plant with an already loaded name; the first one is kept
    DuplicatePlant {
        /// Plant name
        name: String,
    },
    /// A record was routed to a plant that is not in the collection
    UnknownPlant {
        /// Plant name
        plant: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSpecies { plant, species } => {
                write!(f, "Cannot find species {species} for plant {plant}")
            }
            Self::OrphanedActivities { plant, count } => {
                write!(f, "Could not assign {count} activities to unknown plant {plant}")
            }
            Self::OrphanedGrowth { plant, count } => {
                write!(f, "Could not assign {count} growth entries to unknown plant {plant}")
            }
            Self::DuplicateSpecies { name } => write!(f, "Species {name} is defined twice"),
            Self::DuplicatePlant { name } => write!(f, "Plant {name} is defined twice"),
            Self::UnknownPlant { plant } => write!(f, "No plant named {plant}"),
        }
    }
}

/// Everything the loaders hand over for one run.
#[derive(Debug, Clone, Default)]
pub struct CollectionInput {
    /// All species profiles
    pub species: Vec<SpeciesProfile>,
    /// All living plants
    pub plants: Vec<PlantRecord>,
    /// Activity history keyed by plant name
    pub activities: HashMap<String, Vec<LogEntry>>,
    /// Growth history keyed by plant name
    pub growth: HashMap<String, Vec<GrowthEntry>>,
}

/// The assembled collection: species and plants, both sorted by name.
#[derive(Debug, Clone)]
pub struct Collection {
    species: Vec<Arc<SpeciesProfile>>,
    plants: Vec<Plant>,
    diagnostics: Vec<Diagnostic>,
    reference_date: NaiveDate,
}

impl Collection {
    /// Builds the collection from loaded records against `reference_date`.
    #[must_use]
    pub fn assemble(input: CollectionInput, reference_date: NaiveDate) -> Self {
        let CollectionInput {
            species,
            plants,
            mut activities,
            mut growth,
        } = input;
        let mut diagnostics = Vec::new();

        let mut species_index: HashMap<String, Arc<SpeciesProfile>> = HashMap::new();
        for profile in species {
            if species_index.contains_key(&profile.name) {
                diagnostics.push(Diagnostic::DuplicateSpecies {
                    name: profile.name.clone(),
                });
                continue;
            }
            species_index.insert(profile.name.clone(), Arc::new(profile));
        }

        let mut seen_plants = HashSet::new();
        let mut assembled = Vec::with_capacity(plants.len());
        for record in plants {
            if !seen_plants.insert(record.name.clone()) {
                diagnostics.push(Diagnostic::DuplicatePlant {
                    name: record.name.clone(),
                });
                continue;
            }

            let profile = species_index.get(&record.species).cloned();
            if profile.is_none() {
                diagnostics.push(Diagnostic::MissingSpecies {
                    plant: record.name.clone(),
                    species: record.species.clone(),
                });
            }

            let plant_activities = activities.remove(&record.name).unwrap_or_else(|| {
                debug!("No activities for {}", record.name);
                Vec::new()
            });
            let plant_growth = growth.remove(&record.name).unwrap_or_else(|| {
                debug!("No growth for {}", record.name);
                Vec::new()
            });

            assembled.push(Plant::new(
                record,
                profile,
                plant_activities,
                plant_growth,
                reference_date,
            ));
        }

        let mut orphaned_activities: Vec<(String, usize)> = activities
            .into_iter()
            .map(|(plant, entries)| (plant, entries.len()))
            .collect();
        orphaned_activities.sort();
        diagnostics.extend(
            orphaned_activities
                .into_iter()
                .map(|(plant, count)| Diagnostic::OrphanedActivities { plant, count }),
        );

        let mut orphaned_growth: Vec<(String, usize)> = growth
            .into_iter()
            .map(|(plant, entries)| (plant, entries.len()))
            .collect();
        orphaned_growth.sort();
        diagnostics.extend(
            orphaned_growth
                .into_iter()
                .map(|(plant, count)| Diagnostic::OrphanedGrowth { plant, count }),
        );

        for diagnostic in &diagnostics {
            warn!("{diagnostic}");
        }

        assembled.sort_by(|a, b| a.name().cmp(b.name()));
        let mut species: Vec<Arc<SpeciesProfile>> = species_index.into_values().collect();
        species.sort_by(|a, b| a.name.cmp(&b.name));

        info!(
            plants = assembled.len(),
            species = species.len(),
            diagnostics = diagnostics.len(),
            "Collection assembled"
        );

        Self {
            species,
            plants: assembled,
            diagnostics,
            reference_date,
        }
    }

    /// All plants, sorted by name
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// All species, sorted by name
    #[must_use]
    pub fn species(&self) -> &[Arc<SpeciesProfile>] {
        &self.species
    }

    /// Findings collected during assembly and later appends
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The "today" every plant was assembled against
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Looks up a plant by exact name.
    #[must_use]
    pub fn plant(&self, name: &str) -> Option<&Plant> {
        self.position(name).map(|index| &self.plants[index])
    }

    /// Looks up a species by exact name.
    #[must_use]
    pub fn find_species(&self, name: &str) -> Option<&SpeciesProfile> {
        self.species
            .binary_search_by(|profile| profile.name.as_str().cmp(name))
            .ok()
            .map(|index| self.species[index].as_ref())
    }

    /// Plants whose recorded species name is `species_name`.
    #[must_use]
    pub fn plants_of_species(&self, species_name: &str) -> Vec<&Plant> {
        self.plants
            .iter()
            .filter(|plant| plant.species_name() == species_name)
            .collect()
    }

    /// Distinct plant locations in order of first appearance.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = Vec::new();
        for plant in &self.plants {
            if !locations.contains(&plant.location()) {
                locations.push(plant.location());
            }
        }
        locations
    }

    /// Plants on a self-watering system.
    #[must_use]
    pub fn auto_watered(&self) -> Vec<&Plant> {
        self.plants.iter().filter(|plant| plant.auto_water()).collect()
    }

    /// Appends an activity to the named plant. Returns `false` and records a diagnostic if
    /// there is no such plant.
    pub fn record_activity(&mut self, plant_name: &str, entry: LogEntry) -> bool {
        self.with_plant(plant_name, |plant| plant.record_activity(entry))
    }

    /// Appends a growth measurement to the named plant. Returns `false` and records a
    /// diagnostic if there is no such plant.
    pub fn record_growth(&mut self, plant_name: &str, entry: GrowthEntry) -> bool {
        self.with_plant(plant_name, |plant| plant.record_growth(entry))
    }

    /// Attaches image references to the named plant.
    pub fn attach_images(&mut self, plant_name: &str, images: Vec<PlantImage>) -> bool {
        self.with_plant(plant_name, |plant| plant.attach_images(images))
    }

    fn with_plant(&mut self, plant_name: &str, update: impl FnOnce(&mut Plant)) -> bool {
        if let Some(index) = self.position(plant_name) {
            update(&mut self.plants[index]);
            true
        } else {
            let diagnostic = Diagnostic::UnknownPlant {
                plant: plant_name.to_string(),
            };
            warn!("{diagnostic}");
            self.diagnostics.push(diagnostic);
            false
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.plants
            .binary_search_by(|plant| plant.name().cmp(name))
            .ok()
    }
}
