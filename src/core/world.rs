use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::core::ecs::{create_schedule, create_world};
use crate::data::{DataError, WorldCatalogs};
use crate::simulation::city::{CityState, District};
use crate::simulation::config::SimConfig;
use crate::simulation::events::{EventQueue, WorldEvent};
use crate::simulation::player::{Alignment, PlayerState};
use crate::simulation::time::GameClock;
use crate::systems::activity::{ActiveActivity, ActivityBoard};
use crate::systems::faction::{Faction, FactionRoster};

type Listener = Box<dyn FnMut(&WorldEvent)>;

/// Wrapper around the ECS world and schedule. The single mutable root:
/// all simulation state changes flow through `tick` and `act`.
pub struct Game {
    world: World,
    schedule: Schedule,
    paused: bool,
    listeners: Vec<Listener>,
}

impl Game {
    /// Create a game world from static catalogs. Fails fast on an empty
    /// or inconsistent content set rather than simulating a hollow city.
    pub fn new(config: SimConfig, catalogs: &WorldCatalogs) -> Result<Self, DataError> {
        catalogs.validate()?;

        let mut world = create_world(config, catalogs);
        let clock = world.resource::<GameClock>().clone();
        let mut events = world.resource_mut::<EventQueue>();
        events.push_log(&clock, "Welcome to Neovale.");
        events.push_log(&clock, "Ryker returns as a wanted man.");

        Ok(Self {
            world,
            schedule: create_schedule(),
            paused: false,
            listeners: Vec::new(),
        })
    }

    /// Advance one simulated hour, unless paused. All events raised
    /// during the tick are delivered to listeners before this returns.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        self.schedule.run(&mut self.world);
        self.drain_events();
    }

    /// Suppress the effect of future ticks; the driver's timer keeps
    /// firing, the ticks just become no-ops until toggled back.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Commit to a narrative stance. Unrecognized ids are ignored.
    pub fn act(&mut self, action_id: &str) {
        let (alignment, ripple) = match action_id {
            "public_savior" => (
                Alignment::Savior,
                "Ryker leaks evidence of corporate abuse. Citizens rally.",
            ),
            "tyrant_takeover" => (
                Alignment::Tyrant,
                "Ryker seizes assets and intimidates gang lieutenants.",
            ),
            "ghost_influence" => (
                Alignment::Ghost,
                "Ryker puppeteers key nodes from the shadows.",
            ),
            _ => return,
        };

        self.world.resource_mut::<PlayerState>().alignment = alignment;
        let clock = self.world.resource::<GameClock>().clone();
        self.world
            .resource_mut::<EventQueue>()
            .push_log(&clock, ripple);
        self.drain_events();
    }

    /// Register an event listener. Listeners run synchronously, in
    /// registration order, for every event in emission order.
    pub fn subscribe(&mut self, listener: impl FnMut(&WorldEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver queued events. `tick` and `act` call this themselves;
    /// drivers call it once after subscribing to flush the
    /// construction-time welcome lines.
    pub fn drain_events(&mut self) {
        let events = self.world.resource_mut::<EventQueue>().drain();
        for event in &events {
            for listener in self.listeners.iter_mut() {
                listener(event);
            }
        }
    }

    /// Side-effect-free view of the full world state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, self.paused)
    }
}

/// Data snapshot handed to the UI layer; reads never touch simulation
/// state.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time: String,
    pub day: u32,
    pub hour: u8,
    pub paused: bool,
    pub player: PlayerState,
    pub districts: Vec<District>,
    pub factions: Vec<Faction>,
    pub active: Vec<ActiveActivity>,
}

impl Snapshot {
    fn capture(world: &World, paused: bool) -> Self {
        let clock = world.resource::<GameClock>();
        Snapshot {
            time: clock.time_string(),
            day: clock.day,
            hour: clock.hour,
            paused,
            player: world.resource::<PlayerState>().clone(),
            districts: world.resource::<CityState>().districts.clone(),
            factions: world.resource::<FactionRoster>().factions.clone(),
            active: world.resource::<ActivityBoard>().active.clone(),
        }
    }
}
