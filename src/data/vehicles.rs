use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_json, DataError};

/// Vehicle templates are presentation content: the garage panel and the
/// street renderer read them, the simulation rules never do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleCatalog {
    pub schema_version: u32,
    pub vehicles: Vec<VehicleDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDefinition {
    pub name: String,
    pub kind: String,
    pub speed: u8,
}

pub fn load_vehicle_catalog(path: impl AsRef<Path>) -> Result<VehicleCatalog, DataError> {
    let catalog: VehicleCatalog = read_json(path)?;
    catalog.validate()?;
    Ok(catalog)
}

impl VehicleCatalog {
    pub fn validate(&self) -> Result<(), DataError> {
        for def in &self.vehicles {
            if def.name.trim().is_empty() {
                return Err(DataError::Validation(
                    "vehicle name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        let vehicle = |name: &str, kind: &str, speed: u8| VehicleDefinition {
            name: name.to_string(),
            kind: kind.to_string(),
            speed,
        };

        Self {
            schema_version: 1,
            vehicles: vec![
                vehicle("Katana Bike", "bike", 9),
                vehicle("Mirage GT", "car", 8),
                vehicle("Brute Hauler", "truck", 4),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(VehicleCatalog::builtin().validate().is_ok());
    }
}
