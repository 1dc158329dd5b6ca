use std::path::Path;

use serde::{Deserialize, Serialize};

use super::districts::Layer;
use super::{read_json, DataError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCatalog {
    pub schema_version: u32,
    pub activities: Vec<ActivityDefinition>,
}

/// An immutable contextual-event template. Tags drive the per-district
/// weighting; layers gate which districts can host the entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDefinition {
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub layers: Vec<Layer>,
}

impl ActivityDefinition {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

pub fn load_activity_catalog(path: impl AsRef<Path>) -> Result<ActivityCatalog, DataError> {
    let catalog: ActivityCatalog = read_json(path)?;
    catalog.validate()?;
    Ok(catalog)
}

impl ActivityCatalog {
    pub fn validate(&self) -> Result<(), DataError> {
        if self.activities.is_empty() {
            return Err(DataError::Validation(
                "activity catalog cannot be empty".to_string(),
            ));
        }
        for def in &self.activities {
            if def.name.trim().is_empty() {
                return Err(DataError::Validation(
                    "activity name cannot be empty".to_string(),
                ));
            }
            if def.layers.is_empty() {
                return Err(DataError::Validation(format!(
                    "activity {} has no eligible layers",
                    def.name
                )));
            }
        }
        Ok(())
    }

    pub fn builtin() -> Self {
        let activity =
            |name: &str, desc: &str, tags: &[&str], layers: &[Layer]| ActivityDefinition {
                name: name.to_string(),
                desc: desc.to_string(),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                layers: layers.to_vec(),
            };

        Self {
            schema_version: 1,
            activities: vec![
                activity(
                    "Skyway Circuit",
                    "Illegal hover race threading the upper spires.",
                    &["race"],
                    &[Layer::Upper],
                ),
                activity(
                    "Drone Derby",
                    "Modded couriers race the patrol grid for bragging rights.",
                    &["race", "hack"],
                    &[Layer::Mid],
                ),
                activity(
                    "Data Courier Run",
                    "A hot shard needs moving before the trace completes.",
                    &["race"],
                    &[Layer::Mid, Layer::Under],
                ),
                activity(
                    "Grid Intrusion",
                    "A corp subnet is briefly exposed to outside taps.",
                    &["hack"],
                    &[Layer::Upper, Layer::Mid],
                ),
                activity(
                    "Vault Crack",
                    "Old-money vault, new-money ice. Crews are forming.",
                    &["hack", "combat"],
                    &[Layer::Upper, Layer::Under],
                ),
                activity(
                    "Turf War",
                    "Two crews contest a block and everyone picks a side.",
                    &["combat"],
                    &[Layer::Mid, Layer::Under],
                ),
                activity(
                    "Pit Fights",
                    "Bare-knuckle brackets under the cooling stacks.",
                    &["combat"],
                    &[Layer::Under],
                ),
                activity(
                    "Sewer Stalker Hunt",
                    "Something bioengineered slipped its pen below the sump line.",
                    &["monster"],
                    &[Layer::Under],
                ),
                activity(
                    "Power Grid Sabotage",
                    "Brownout crews pay well for a blind transformer yard.",
                    &["sabotage"],
                    &[Layer::Mid, Layer::Under],
                ),
                activity(
                    "Gala Blackout Job",
                    "A charity gala with lax badge checks and greedy sponsors.",
                    &["hack", "sabotage"],
                    &[Layer::Upper],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(ActivityCatalog::builtin().validate().is_ok());
    }

    #[test]
    fn activity_without_layers_is_rejected() {
        let catalog = ActivityCatalog {
            schema_version: 1,
            activities: vec![ActivityDefinition {
                name: "Nowhere Job".to_string(),
                desc: "Floats free of the city.".to_string(),
                tags: vec!["hack".to_string()],
                layers: Vec::new(),
            }],
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn every_layer_has_candidates() {
        let catalog = ActivityCatalog::builtin();
        for layer in [Layer::Upper, Layer::Mid, Layer::Under] {
            assert!(
                catalog.activities.iter().any(|a| a.layers.contains(&layer)),
                "no builtin activity for {:?}",
                layer
            );
        }
    }
}
