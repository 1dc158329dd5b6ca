use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{read_json, DataError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactionKind {
    Corp,
    Gang,
    Merc,
    Rebel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionCatalog {
    pub schema_version: u32,
    pub factions: Vec<FactionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactionDefinition {
    pub name: String,
    pub kind: FactionKind,
    /// Starting power in [0,1]. Omitted entries start at 0.5.
    #[serde(default)]
    pub power: Option<f32>,
}

pub fn load_faction_catalog(path: impl AsRef<Path>) -> Result<FactionCatalog, DataError> {
    let catalog: FactionCatalog = read_json(path)?;
    catalog.validate()?;
    Ok(catalog)
}

impl FactionCatalog {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.factions.is_empty() {
            return Err(DataError::Validation(
                "faction catalog cannot be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for def in &self.factions {
            if def.name.trim().is_empty() {
                return Err(DataError::Validation(
                    "faction name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(def.name.as_str()) {
                return Err(DataError::Validation(format!(
                    "duplicate faction name {}",
                    def.name
                )));
            }
            if let Some(power) = def.power {
                if !(0.0..=1.0).contains(&power) {
                    return Err(DataError::Validation(format!(
                        "faction {} has starting power {} outside [0,1]",
                        def.name, power
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        let faction = |name: &str, kind: FactionKind, power: f32| FactionDefinition {
            name: name.to_string(),
            kind,
            power: Some(power),
        };

        Self {
            schema_version: 1,
            factions: vec![
                faction("Dominion Corps", FactionKind::Corp, 0.65),
                faction("BioVex", FactionKind::Corp, 0.5),
                faction("Ember Syndicate", FactionKind::Gang, 0.45),
                faction("VoltBlock Crew", FactionKind::Gang, 0.4),
                faction("Scorp Union", FactionKind::Merc, 0.35),
                faction("Free Signal", FactionKind::Rebel, 0.3),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(FactionCatalog::builtin().validate().is_ok());
    }

    #[test]
    fn out_of_range_power_is_rejected() {
        let catalog = FactionCatalog {
            schema_version: 1,
            factions: vec![FactionDefinition {
                name: "Overclocked".to_string(),
                kind: FactionKind::Gang,
                power: Some(1.4),
            }],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn missing_power_deserializes_as_none() {
        let def: FactionDefinition =
            serde_json::from_str(r#"{"name": "Night Union", "kind": "rebel"}"#).unwrap();
        assert!(def.power.is_none());
    }
}
