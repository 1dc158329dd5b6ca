use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::simulation::time::GameClock;

/// Everything the simulation tells the outside world. Consumers match on
/// the variant instead of registering against string event names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WorldEvent {
    Tick(GameClock),
    Log(LogEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub time: String,
    pub message: String,
}

/// Ordered queue the systems write into during a tick. The `Game` wrapper
/// drains it to listeners after the schedule completes, preserving
/// emission order: the Tick of hour H always precedes hour H's log lines.
#[derive(Resource, Default, Debug)]
pub struct EventQueue(pub Vec<WorldEvent>);

impl EventQueue {
    pub fn push_tick(&mut self, clock: &GameClock) {
        self.0.push(WorldEvent::Tick(clock.clone()));
    }

    pub fn push_log(&mut self, clock: &GameClock, message: impl Into<String>) {
        self.0.push(WorldEvent::Log(LogEntry {
            time: clock.time_string(),
            message: message.into(),
        }));
    }

    pub fn drain(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.0)
    }
}
