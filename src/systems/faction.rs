use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::data::factions::{FactionCatalog, FactionKind};
use crate::simulation::city::CityState;
use crate::simulation::config::SimConfig;
use crate::simulation::events::EventQueue;
use crate::simulation::player::{Alignment, PlayerState};
use crate::simulation::rng::{clamp01, SimRng};
use crate::simulation::time::GameClock;

const DEFAULT_POWER: f32 = 0.5;
const UNREST_PIVOT: f32 = 0.4;
const SAFETY_PIVOT: f32 = 0.5;
const PRESSURE_GAIN: f32 = 0.02;

#[derive(Debug, Clone, Serialize)]
pub struct Faction {
    pub name: String,
    pub kind: FactionKind,
    pub power: f32,
}

/// Resource holding every faction in catalog order.
#[derive(Resource, Debug, Clone)]
pub struct FactionRoster {
    pub factions: Vec<Faction>,
}

impl FactionRoster {
    pub fn from_catalog(catalog: &FactionCatalog) -> Self {
        Self {
            factions: catalog
                .factions
                .iter()
                .map(|def| Faction {
                    name: def.name.clone(),
                    kind: def.kind,
                    power: def.power.unwrap_or(DEFAULT_POWER),
                })
                .collect(),
        }
    }

    /// Power lookup by name. Unknown names read as 0 so callers never
    /// have to handle a missing faction.
    pub fn power(&self, name: &str) -> f32 {
        self.factions
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.power)
            .unwrap_or(0.0)
    }
}

/// System: advances every faction's power once per tick.
pub fn faction_dynamics_system(
    mut roster: ResMut<FactionRoster>,
    city: Res<CityState>,
    player: Res<PlayerState>,
    mut rng: ResMut<SimRng>,
    config: Res<SimConfig>,
    clock: Res<GameClock>,
    mut events: ResMut<EventQueue>,
) {
    run_faction_dynamics(
        &mut roster,
        player.alignment,
        city.avg_unrest(),
        city.avg_safety(),
        &mut rng,
        config.surge_chance,
        &clock,
        &mut events,
    );
}

pub fn run_faction_dynamics(
    roster: &mut FactionRoster,
    alignment: Alignment,
    avg_unrest: f32,
    avg_safety: f32,
    rng: &mut SimRng,
    surge_chance: f32,
    clock: &GameClock,
    events: &mut EventQueue,
) {
    for faction in roster.factions.iter_mut() {
        let delta = alignment_delta(alignment, faction.kind)
            + pressure_delta(faction.kind, avg_unrest, avg_safety);
        faction.power = clamp01(faction.power + delta);
    }

    if rng.chance(surge_chance) {
        if let Some(dominant) = dominant_faction(roster) {
            events.push_log(clock, format!("{} influence surges.", dominant));
        }
    }
}

/// Fixed alignment-vs-kind interaction constants.
fn alignment_delta(alignment: Alignment, kind: FactionKind) -> f32 {
    match (alignment, kind) {
        (Alignment::Savior, FactionKind::Corp) => -0.01,
        (Alignment::Savior, FactionKind::Rebel) => 0.01,
        (Alignment::Tyrant, FactionKind::Gang) | (Alignment::Tyrant, FactionKind::Merc) => 0.02,
        // Corps thrive on hidden control
        (Alignment::Ghost, FactionKind::Corp) => 0.01,
        _ => 0.0,
    }
}

/// Citywide conditions: unrest feeds gangs and rebels, safety feeds corps.
fn pressure_delta(kind: FactionKind, avg_unrest: f32, avg_safety: f32) -> f32 {
    match kind {
        FactionKind::Gang | FactionKind::Rebel => (avg_unrest - UNREST_PIVOT) * PRESSURE_GAIN,
        FactionKind::Corp => (avg_safety - SAFETY_PIVOT) * PRESSURE_GAIN,
        FactionKind::Merc => 0.0,
    }
}

/// First faction holding the maximum power, in roster order.
fn dominant_faction(roster: &FactionRoster) -> Option<&str> {
    let mut best: Option<&Faction> = None;
    for faction in &roster.factions {
        match best {
            Some(current) if faction.power <= current.power => {}
            _ => best = Some(faction),
        }
    }
    best.map(|f| f.name.as_str())
}
