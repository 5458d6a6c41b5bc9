//! Typed records consumed by the scheduling core.

/// Activity, growth and image records
pub mod care;
/// `dd.mm.yyyy` serde helpers
pub mod date_format;
/// Plant and graveyard records
pub mod plant_record;
/// Species care profiles
pub mod species;

pub use care::{CareKind, GrowthEntry, LogEntry, PlantImage};
pub use plant_record::{DORMANT, GraveyardRecord, MAX_HEALTH, PlantRecord};
pub use species::SpeciesProfile;
