use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_json, DataError};

/// Vertical tier of the stacked city. Gates which activities a district
/// can host and which visual treatment the map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Upper,
    Mid,
    Under,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictCatalog {
    pub schema_version: u32,
    pub districts: Vec<DistrictDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistrictDefinition {
    pub id: String,
    pub name: String,
    pub layer: Layer,
    #[serde(default)]
    pub visuals: String,
}

pub fn load_district_catalog(path: impl AsRef<Path>) -> Result<DistrictCatalog, DataError> {
    let catalog: DistrictCatalog = read_json(path)?;
    catalog.validate()?;
    Ok(catalog)
}

impl DistrictCatalog {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.districts.is_empty() {
            return Err(DataError::Validation(
                "district catalog cannot be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for def in &self.districts {
            if def.id.trim().is_empty() {
                return Err(DataError::Validation(
                    "district id cannot be empty".to_string(),
                ));
            }
            if def.name.trim().is_empty() {
                return Err(DataError::Validation(format!(
                    "district {} has empty name",
                    def.id
                )));
            }
            if !seen.insert(def.id.as_str()) {
                return Err(DataError::Validation(format!(
                    "duplicate district id {}",
                    def.id
                )));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        let district = |id: &str, name: &str, layer: Layer, visuals: &str| DistrictDefinition {
            id: id.to_string(),
            name: name.to_string(),
            layer,
            visuals: visuals.to_string(),
        };

        Self {
            schema_version: 1,
            districts: vec![
                district("aurora", "Aurora Spires", Layer::Upper, "chrome"),
                district("neon", "Neon Strip", Layer::Mid, "holo"),
                district("underworks", "The Underworks", Layer::Under, "rust"),
            ],
        }
    }
}
