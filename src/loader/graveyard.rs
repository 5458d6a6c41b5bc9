//! Graveyard file: plants that have died.

use super::{invalid, read_optional_toml};
use crate::{errors::Result, models::GraveyardRecord};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct GraveyardFile {
    #[serde(default)]
    graveyard: Vec<GraveyardRecord>,
}

/// Loads `[[graveyard]]` tables. A missing file is an empty graveyard.
///
/// # Errors
/// Fails on unreadable files or a record that died before it was planted.
pub fn load_graveyard<P: AsRef<Path>>(path: P) -> Result<Vec<GraveyardRecord>> {
    let path = path.as_ref();
    let file: GraveyardFile = read_optional_toml(path)?;

    if let Some(record) = file.graveyard.iter().find(|record| record.died < record.planted) {
        return Err(invalid(
            path,
            format!("{} died before it was planted", record.plant_name),
        ));
    }
    Ok(file.graveyard)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::fs;

    #[test]
    fn test_load_graveyard() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graveyard.toml");
        fs::write(
            &path,
            r#"
                [[graveyard]]
                plant_name = "Basil 2"
                species_name = "Basil"
                planted = "01.04.2024"
                died = "20.05.2024"
                reason = "Aphids"
            "#,
        )
        .unwrap();

        let graveyard = load_graveyard(&path).unwrap();

        assert_eq!(graveyard.len(), 1);
        assert_eq!(graveyard[0].reason, "Aphids");
    }

    #[test]
    fn test_death_before_planting_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graveyard.toml");
        fs::write(
            &path,
            r#"
                [[graveyard]]
                plant_name = "Ghost"
                species_name = "Basil"
                planted = "01.04.2024"
                died = "20.03.2024"
            "#,
        )
        .unwrap();

        assert!(load_graveyard(&path).is_err());
    }
}
