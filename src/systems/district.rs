use bevy_ecs::prelude::*;

use crate::simulation::city::{CityState, District};
use crate::simulation::config::SimConfig;
use crate::simulation::events::EventQueue;
use crate::simulation::player::{Alignment, PlayerState};
use crate::simulation::rng::{clamp01, SimRng};
use crate::simulation::time::GameClock;
use crate::systems::faction::FactionRoster;

/// Faction names wired into the district feedback loop. Fixed by the
/// narrative, not configurable.
pub const DOMINANT_CORP: &str = "Dominion Corps";
pub const DOMINANT_GANGS: [&str; 2] = ["Ember Syndicate", "VoltBlock Crew"];

const CORP_PRESSURE_THRESHOLD: f32 = 0.6;
const GANG_PRESSURE_THRESHOLD: f32 = 1.0;
const DESTABILIZING_THRESHOLD: f32 = 0.65;

/// System: the reactive-rules pass over every district.
pub fn district_rules_system(
    mut city: ResMut<CityState>,
    player: Res<PlayerState>,
    factions: Res<FactionRoster>,
    mut rng: ResMut<SimRng>,
    config: Res<SimConfig>,
    clock: Res<GameClock>,
    mut events: ResMut<EventQueue>,
) {
    run_district_rules(
        &mut city,
        player.alignment,
        &factions,
        &mut rng,
        config.drift_std,
        &clock,
        &mut events,
    );
}

pub fn run_district_rules(
    city: &mut CityState,
    alignment: Alignment,
    factions: &FactionRoster,
    rng: &mut SimRng,
    drift_std: f32,
    clock: &GameClock,
    events: &mut EventQueue,
) {
    let corp_pressure = factions.power(DOMINANT_CORP);
    let gang_pressure: f32 = DOMINANT_GANGS.iter().map(|name| factions.power(name)).sum();

    for district in city.districts.iter_mut() {
        apply_drift(district, rng, drift_std);
        apply_alignment(district, alignment);
        apply_faction_pressure(district, corp_pressure, gang_pressure);

        let order = district.safety
            + (1.0 - district.unrest)
            + (1.0 - district.crime)
            + (1.0 - district.drones);
        district.visual_score = clamp01(order / 4.0);
    }

    let hot: Vec<&str> = city
        .districts
        .iter()
        .filter(|d| d.crime > DESTABILIZING_THRESHOLD || d.unrest > DESTABILIZING_THRESHOLD)
        .map(|d| d.name.as_str())
        .collect();
    if !hot.is_empty() {
        events.push_log(clock, format!("{} destabilizing.", hot.join(", ")));
    }
}

/// Background volatility: independent zero-mean Gaussian nudges.
fn apply_drift(district: &mut District, rng: &mut SimRng, drift_std: f32) {
    district.crime = clamp01(district.crime + rng.gaussian(0.0, drift_std));
    district.drones = clamp01(district.drones + rng.gaussian(0.0, drift_std));
    district.unrest = clamp01(district.unrest + rng.gaussian(0.0, drift_std));
}

fn apply_alignment(district: &mut District, alignment: Alignment) {
    match alignment {
        Alignment::Savior => {
            district.crime = clamp01(district.crime - 0.05);
            district.safety = clamp01(district.safety + 0.05);
            // More surveillance once corruption gets exposed
            district.drones = clamp01(district.drones + 0.02);
        }
        Alignment::Tyrant => {
            district.crime = clamp01(district.crime + 0.06);
            district.unrest = clamp01(district.unrest + 0.05);
            district.safety = clamp01(district.safety - 0.04);
        }
        Alignment::Ghost => {
            district.drones = clamp01(district.drones + 0.04);
            district.crime = clamp01(district.crime - 0.02);
        }
    }
}

fn apply_faction_pressure(district: &mut District, corp_pressure: f32, gang_pressure: f32) {
    if corp_pressure > CORP_PRESSURE_THRESHOLD {
        district.drones = clamp01(district.drones + 0.03);
        district.crime = clamp01(district.crime - 0.02);
    }
    if gang_pressure > GANG_PRESSURE_THRESHOLD {
        district.crime = clamp01(district.crime + 0.05);
        district.safety = clamp01(district.safety - 0.03);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::districts::DistrictCatalog;
    use crate::data::factions::{FactionCatalog, FactionDefinition, FactionKind};

    fn quiet_roster() -> FactionRoster {
        // Powers kept below both feedback thresholds.
        let catalog = FactionCatalog {
            schema_version: 1,
            factions: vec![
                FactionDefinition {
                    name: DOMINANT_CORP.to_string(),
                    kind: FactionKind::Corp,
                    power: Some(0.5),
                },
                FactionDefinition {
                    name: DOMINANT_GANGS[0].to_string(),
                    kind: FactionKind::Gang,
                    power: Some(0.3),
                },
                FactionDefinition {
                    name: DOMINANT_GANGS[1].to_string(),
                    kind: FactionKind::Gang,
                    power: Some(0.3),
                },
            ],
        };
        FactionRoster::from_catalog(&catalog)
    }

    fn run_once(city: &mut CityState, alignment: Alignment, roster: &FactionRoster) {
        let mut rng = SimRng::seeded(0);
        let clock = GameClock::default();
        let mut events = EventQueue::default();
        run_district_rules(city, alignment, roster, &mut rng, 0.0, &clock, &mut events);
    }

    #[test]
    fn savior_scenario_without_drift() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        city.districts[0].crime = 0.5;
        city.districts[0].safety = 0.5;

        run_once(&mut city, Alignment::Savior, &quiet_roster());

        let district = &city.districts[0];
        assert!((district.crime - 0.45).abs() < 1e-6);
        assert!((district.safety - 0.55).abs() < 1e-6);
    }

    #[test]
    fn alignment_branches_are_mutually_exclusive() {
        let roster = quiet_roster();
        let mut savior_city = CityState::from_catalog(&DistrictCatalog::builtin());
        let mut tyrant_city = savior_city.clone();

        run_once(&mut savior_city, Alignment::Savior, &roster);
        run_once(&mut tyrant_city, Alignment::Tyrant, &roster);

        // Savior lowers crime, tyrant raises it; unrest only moves for tyrant.
        assert!(savior_city.districts[0].crime < tyrant_city.districts[0].crime);
        assert_eq!(savior_city.districts[0].unrest, 0.25);
        assert!((tyrant_city.districts[0].unrest - 0.30).abs() < 1e-6);
    }

    #[test]
    fn corp_pressure_raises_drones() {
        let mut roster = quiet_roster();
        roster.factions[0].power = 0.7;
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());

        // Ghost already adds 0.04 drones; corp pressure adds another 0.03.
        run_once(&mut city, Alignment::Ghost, &roster);
        assert!((city.districts[0].drones - 0.47).abs() < 1e-6);
    }

    #[test]
    fn gang_pressure_raises_crime_and_cuts_safety() {
        let mut roster = quiet_roster();
        roster.factions[1].power = 0.6;
        roster.factions[2].power = 0.5;
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        city.districts[0].crime = 0.4;
        city.districts[0].safety = 0.5;

        run_once(&mut city, Alignment::Ghost, &roster);

        // Ghost: crime -0.02; gangs: crime +0.05, safety -0.03.
        assert!((city.districts[0].crime - 0.43).abs() < 1e-6);
        assert!((city.districts[0].safety - 0.47).abs() < 1e-6);
    }

    #[test]
    fn metrics_stay_clamped_over_many_ticks() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        let roster = quiet_roster();
        let mut rng = SimRng::seeded(99);
        let clock = GameClock::default();
        let mut events = EventQueue::default();

        for _ in 0..500 {
            run_district_rules(
                &mut city,
                Alignment::Tyrant,
                &roster,
                &mut rng,
                0.02,
                &clock,
                &mut events,
            );
            for district in &city.districts {
                for value in [
                    district.crime,
                    district.drones,
                    district.unrest,
                    district.safety,
                    district.visual_score,
                ] {
                    assert!((0.0..=1.0).contains(&value), "metric escaped: {}", value);
                }
            }
        }
    }

    #[test]
    fn destabilizing_log_names_all_hot_districts_once() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        city.districts[0].crime = 0.9;
        city.districts[2].unrest = 0.9;

        let mut rng = SimRng::seeded(0);
        let clock = GameClock::default();
        let mut events = EventQueue::default();
        run_district_rules(
            &mut city,
            Alignment::Ghost,
            &quiet_roster(),
            &mut rng,
            0.0,
            &clock,
            &mut events,
        );

        let logs: Vec<_> = events
            .0
            .iter()
            .filter_map(|event| match event {
                crate::simulation::events::WorldEvent::Log(entry) => Some(entry),
                _ => None,
            })
            .collect();
        assert_eq!(logs.len(), 1);
        assert_eq!(
            logs[0].message,
            "Aurora Spires, The Underworks destabilizing."
        );
    }

    #[test]
    fn calm_city_emits_no_destabilizing_log() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        let mut rng = SimRng::seeded(0);
        let clock = GameClock::default();
        let mut events = EventQueue::default();
        run_district_rules(
            &mut city,
            Alignment::Savior,
            &quiet_roster(),
            &mut rng,
            0.0,
            &clock,
            &mut events,
        );
        assert!(events.0.is_empty());
    }

    #[test]
    fn visual_score_is_the_order_composite() {
        let mut city = CityState::from_catalog(&DistrictCatalog::builtin());
        city.districts[0].crime = 0.0;
        city.districts[0].drones = 0.0;
        city.districts[0].unrest = 0.0;
        city.districts[0].safety = 1.0;

        run_once(&mut city, Alignment::Savior, &quiet_roster());

        // Savior keeps crime at 0, safety at 1; drones drifts to 0.02.
        let district = &city.districts[0];
        let expected = (district.safety
            + (1.0 - district.unrest)
            + (1.0 - district.crime)
            + (1.0 - district.drones))
            / 4.0;
        assert!((district.visual_score - expected).abs() < 1e-6);
        assert!(district.visual_score > 0.97);
    }
}
