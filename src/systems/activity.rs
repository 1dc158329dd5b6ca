use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::data::activities::{ActivityCatalog, ActivityDefinition};
use crate::data::districts::Layer;
use crate::simulation::city::{CityState, District};
use crate::simulation::config::SimConfig;
use crate::simulation::rng::SimRng;

/// A catalog entry pinned to the district it fired in for this tick.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveActivity {
    pub name: String,
    pub desc: String,
    pub district_id: String,
}

/// Resource pairing the immutable activity catalog with the current
/// active list. The active list is replaced wholesale every tick.
#[derive(Resource, Debug, Clone)]
pub struct ActivityBoard {
    pub catalog: Vec<ActivityDefinition>,
    pub active: Vec<ActiveActivity>,
}

impl ActivityBoard {
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        Self {
            catalog: catalog.activities.clone(),
            active: Vec::new(),
        }
    }
}

/// System: regenerates the contextual-activity board from district state.
pub fn activity_spawn_system(
    mut board: ResMut<ActivityBoard>,
    city: Res<CityState>,
    mut rng: ResMut<SimRng>,
    config: Res<SimConfig>,
) {
    run_activity_spawn(&mut board, &city, &mut rng, config.max_active);
}

pub fn run_activity_spawn(
    board: &mut ActivityBoard,
    city: &CityState,
    rng: &mut SimRng,
    max_active: usize,
) {
    let mut picks = Vec::new();

    for district in &city.districts {
        let candidates: Vec<&ActivityDefinition> = board
            .catalog
            .iter()
            .filter(|a| a.layers.contains(&district.layer))
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let weights: Vec<f32> = candidates
            .iter()
            .map(|a| activity_weight(a, district))
            .collect();

        if let Some(idx) = pick_weighted(&weights, rng) {
            let choice = candidates[idx];
            picks.push(ActiveActivity {
                name: choice.name.clone(),
                desc: choice.desc.clone(),
                district_id: district.id.clone(),
            });
        }
    }

    picks.truncate(max_active);
    board.active = picks;
}

/// Per-tag contribution to a candidate's weight; an entry carrying
/// several matching tags sums them.
pub fn activity_weight(activity: &ActivityDefinition, district: &District) -> f32 {
    let mut weight = 0.0;
    if activity.has_tag("race") {
        weight += 0.3 + (1.0 - district.drones);
    }
    if activity.has_tag("hack") {
        weight += 0.3 + district.drones;
    }
    if activity.has_tag("combat") {
        weight += 0.3 + district.unrest + district.crime;
    }
    if activity.has_tag("monster") && district.layer == Layer::Under {
        weight += 0.6 + district.unrest;
    }
    if activity.has_tag("sabotage") {
        weight += 0.2 + (1.0 - district.safety);
    }
    weight
}

/// Roulette-wheel draw over non-negative weights. All-zero weights fall
/// back to a uniform pick; a float fall-through lands on the last
/// positive-weight candidate rather than whatever ends the list.
fn pick_weighted(weights: &[f32], rng: &mut SimRng) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let total: f32 = weights.iter().sum();
    if total <= 0.0 {
        return Some(rng.index(weights.len()));
    }

    let mut roll = rng.uniform() * total;
    let mut last_positive = 0;
    for (idx, weight) in weights.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        last_positive = idx;
        roll -= weight;
        if roll <= 0.0 {
            return Some(idx);
        }
    }
    Some(last_positive)
}
