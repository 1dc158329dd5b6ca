use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Global resource tracking the simulation timeline.
/// One tick is one simulated hour.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub tick: u64,
    pub day: u32,
    pub hour: u8,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            tick: 0,
            day: 1,
            hour: 0,
        }
    }
}

impl GameClock {
    /// Timestamp prefix used for log entries, e.g. "Day 3 — 07:00".
    pub fn time_string(&self) -> String {
        format!("Day {} — {:02}:00", self.day, self.hour)
    }

    pub fn advance(&mut self) {
        self.tick += 1;
        self.hour += 1;

        if self.hour >= 24 {
            self.hour = 0;
            self.day += 1;
        }
    }
}

/// System: advances the clock and announces the new hour before any
/// reactive rule runs. 1 tick = 1 hour.
pub fn advance_clock_system(
    mut clock: ResMut<GameClock>,
    mut events: ResMut<crate::simulation::events::EventQueue>,
) {
    clock.advance();
    events.push_tick(&clock);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_wraps_into_day() {
        let mut clock = GameClock::default();
        for _ in 0..24 {
            clock.advance();
        }
        assert_eq!(clock.day, 2);
        assert_eq!(clock.hour, 0);
        assert_eq!(clock.tick, 24);
    }

    #[test]
    fn clock_is_strictly_monotonic() {
        let mut clock = GameClock::default();
        let mut previous = (clock.day, clock.hour);
        for _ in 0..200 {
            clock.advance();
            let current = (clock.day, clock.hour);
            assert!(current > previous, "clock went backwards: {:?}", current);
            assert!(clock.hour < 24);
            previous = current;
        }
        // 200 hours from day 1 hour 0 lands on day 9 hour 8.
        assert_eq!(previous, (9, 8));
    }

    #[test]
    fn time_string_pads_hour() {
        let clock = GameClock {
            tick: 7,
            day: 1,
            hour: 7,
        };
        assert_eq!(clock.time_string(), "Day 1 — 07:00");
    }
}
