use bevy_ecs::prelude::*;
use bevy_ecs::schedule::SystemSet;

use crate::data::WorldCatalogs;
use crate::simulation::city::CityState;
use crate::simulation::config::SimConfig;
use crate::simulation::events::EventQueue;
use crate::simulation::player::PlayerState;
use crate::simulation::rng::SimRng;
use crate::simulation::time::{advance_clock_system, GameClock};
use crate::systems::activity::{activity_spawn_system, ActivityBoard};
use crate::systems::district::district_rules_system;
use crate::systems::faction::{faction_dynamics_system, FactionRoster};

/// Canonical tick ordering for the simulation.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TickSet {
    Time,
    Districts,
    Factions,
    Activities,
}

/// Build the ECS world with baseline resources from the catalogs.
pub fn create_world(config: SimConfig, catalogs: &WorldCatalogs) -> World {
    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(GameClock::default());
    world.insert_resource(SimRng::seeded(config.seed));
    world.insert_resource(EventQueue::default());
    world.insert_resource(PlayerState::default());
    world.insert_resource(CityState::from_catalog(&catalogs.districts));
    world.insert_resource(FactionRoster::from_catalog(&catalogs.factions));
    world.insert_resource(ActivityBoard::from_catalog(&catalogs.activities));
    world
}

/// Build the system schedule in the canonical order. The clock advances
/// (and its Tick event is queued) before districts mutate, so the Tick of
/// hour H always precedes hour H's log lines in the event stream.
pub fn create_schedule() -> Schedule {
    let mut schedule = Schedule::default();

    schedule.configure_sets(
        (
            TickSet::Time,
            TickSet::Districts,
            TickSet::Factions,
            TickSet::Activities,
        )
            .chain(),
    );

    schedule.add_systems((
        advance_clock_system.in_set(TickSet::Time),
        district_rules_system.in_set(TickSet::Districts),
        faction_dynamics_system.in_set(TickSet::Factions),
        activity_spawn_system.in_set(TickSet::Activities),
    ));

    schedule
}
