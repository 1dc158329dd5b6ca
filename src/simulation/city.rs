use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::data::districts::{DistrictCatalog, Layer};

/// Faction control shares over a district, read by the map renderer.
/// The reactive rules do not move these yet.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ControlShares {
    pub corps: f32,
    pub gangs: f32,
    pub wild: f32,
}

impl Default for ControlShares {
    fn default() -> Self {
        Self {
            corps: 0.7,
            gangs: 0.2,
            wild: 0.1,
        }
    }
}

/// Live state of one district. The four metrics stay in [0,1]; only the
/// reactive-rules pass writes them.
#[derive(Debug, Clone, Serialize)]
pub struct District {
    pub id: String,
    pub name: String,
    pub layer: Layer,
    pub visuals: String,
    pub control: ControlShares,
    pub crime: f32,
    pub drones: f32,
    pub unrest: f32,
    pub safety: f32,
    /// Composite order index recomputed each tick; higher is calmer.
    pub visual_score: f32,
}

impl District {
    fn from_definition(def: &crate::data::districts::DistrictDefinition) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            layer: def.layer,
            visuals: def.visuals.clone(),
            control: ControlShares::default(),
            crime: 0.35,
            drones: 0.4,
            unrest: 0.25,
            safety: 0.6,
            visual_score: 0.0,
        }
    }
}

/// Resource holding the city's districts in catalog order.
#[derive(Resource, Debug, Clone)]
pub struct CityState {
    pub districts: Vec<District>,
}

impl CityState {
    pub fn from_catalog(catalog: &DistrictCatalog) -> Self {
        Self {
            districts: catalog
                .districts
                .iter()
                .map(District::from_definition)
                .collect(),
        }
    }

    pub fn avg_unrest(&self) -> f32 {
        average(self.districts.iter().map(|d| d.unrest))
    }

    pub fn avg_safety(&self) -> f32 {
        average(self.districts.iter().map(|d| d.safety))
    }
}

fn average(values: impl Iterator<Item = f32>) -> f32 {
    let mut total = 0.0;
    let mut count = 0u32;
    for value in values {
        total += value;
        count += 1;
    }
    total / count.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_catalog_seeds_baseline_metrics() {
        let city = CityState::from_catalog(&DistrictCatalog::builtin());
        assert_eq!(city.districts.len(), 3);
        for district in &city.districts {
            assert_eq!(district.crime, 0.35);
            assert_eq!(district.drones, 0.4);
            assert_eq!(district.unrest, 0.25);
            assert_eq!(district.safety, 0.6);
        }
    }

    #[test]
    fn averages_over_all_districts() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        city.districts[0].unrest = 0.1;
        city.districts[1].unrest = 0.2;
        city.districts[2].unrest = 0.6;
        assert!((city.avg_unrest() - 0.3).abs() < 1e-6);
    }
}
