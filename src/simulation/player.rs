use std::collections::BTreeMap;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Player's narrative stance. Drives both the district reactive rules and
/// the faction power dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Savior,
    Tyrant,
    Ghost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CyberArm {
    pub level: u8,
    pub mods: Vec<String>,
}

/// The player record. Only `alignment` is mutated by the simulation; the
/// rest is carried for the UI panels.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub credits: i64,
    /// Wanted level in [0,1].
    pub heat: f32,
    pub rep: BTreeMap<String, f32>,
    pub alignment: Alignment,
    pub arm: CyberArm,
    pub hacks: Vec<String>,
    pub vehicles: Vec<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        let rep = ["ember", "volt", "scorp", "biovex", "corps"]
            .into_iter()
            .map(|key| (key.to_string(), 0.0))
            .collect();

        Self {
            name: "Ryker Vale".to_string(),
            credits: 1200,
            heat: 0.2,
            rep,
            alignment: Alignment::Ghost,
            arm: CyberArm {
                level: 1,
                mods: vec!["Shock Gloves".to_string()],
            },
            hacks: vec![
                "Vehicle Hijack".to_string(),
                "Traffic Tamper".to_string(),
                "Drone Puppet".to_string(),
                "ATM Siphon".to_string(),
                "Camera Scrub".to_string(),
            ],
            vehicles: Vec::new(),
        }
    }
}
