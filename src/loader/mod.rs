//! File-backed loaders that turn the TOML data directory into a [`CollectionInput`].
//!
//! Loaders validate at the boundary: a malformed record fails the load with
//! [`Error::InvalidRecord`] naming the file, so the scheduling core only ever sees well-formed
//! data. Catalog files are required, log files are optional.

/// Species and plant catalog
pub mod catalog;

/// Activity, growth and photo logs
pub mod care_log;

/// Dead plants
pub mod graveyard;

use crate::{
    core::collection::CollectionInput,
    errors::{Error, Result},
    models::{GraveyardRecord, PlantImage},
};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, path::Path};
use tracing::{debug, info};

/// Species catalog file name
pub const SPECIES_FILE: &str = "species.toml";
/// Plant catalog file name
pub const PLANTS_FILE: &str = "plants.toml";
/// Activity log file name
pub const ACTIVITIES_FILE: &str = "activities.toml";
/// Growth log file name
pub const GROWTH_FILE: &str = "growth.toml";
/// Photo reference file name
pub const IMAGES_FILE: &str = "images.toml";
/// Graveyard file name
pub const GRAVEYARD_FILE: &str = "graveyard.toml";

/// Everything loaded from one data directory.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    /// Records for collection assembly
    pub input: CollectionInput,
    /// Photo references keyed by plant name
    pub images: HashMap<String, Vec<PlantImage>>,
    /// Plants that have died
    pub graveyard: Vec<GraveyardRecord>,
}

/// Parses a whole TOML file into `T`.
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {:?}", path);
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| Error::InvalidRecord {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Like [`read_toml`], but a missing file yields `T::default()`.
fn read_optional_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if path.exists() {
        read_toml(path)
    } else {
        info!("{:?} not found, treating it as empty", path);
        Ok(T::default())
    }
}

fn invalid(path: &Path, message: String) -> Error {
    Error::InvalidRecord {
        file: path.to_path_buf(),
        message,
    }
}

/// Loads every data file from `dir`.
///
/// # Errors
/// Fails if a catalog file is missing, or any present file is unreadable or holds an invalid
/// record.
pub fn load_data_dir<P: AsRef<Path>>(dir: P) -> Result<DataSet> {
    let dir = dir.as_ref();
    let species = catalog::load_species(dir.join(SPECIES_FILE))?;
    let plants = catalog::load_plants(dir.join(PLANTS_FILE))?;
    let activities = care_log::load_activities(dir.join(ACTIVITIES_FILE))?;
    let growth = care_log::load_growth(dir.join(GROWTH_FILE))?;
    let images = care_log::load_images(dir.join(IMAGES_FILE))?;
    let graveyard = graveyard::load_graveyard(dir.join(GRAVEYARD_FILE))?;

    info!(
        species = species.len(),
        plants = plants.len(),
        graveyard = graveyard.len(),
        "Loaded data directory {:?}",
        dir
    );

    Ok(DataSet {
        input: CollectionInput {
            species,
            plants,
            activities,
            growth,
        },
        images,
        graveyard,
    })
}
