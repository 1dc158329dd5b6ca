use bevy_ecs::prelude::*;

/// Tunables for a simulation run. The reactive-rule constants themselves
/// (alignment nudges, faction-pressure thresholds) are fixed in the
/// systems that apply them; this only covers the knobs a driver or test
/// legitimately varies.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimConfig {
    pub seed: u64,
    /// Standard deviation of the per-metric background drift. Zero
    /// disables drift entirely, which tests rely on.
    pub drift_std: f32,
    /// Per-tick probability of an "influence surge" faction log line.
    pub surge_chance: f32,
    /// Cap on the active-activity board.
    pub max_active: usize,
    /// Wall-clock milliseconds per simulated hour in the driver loop.
    pub tick_rate_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            drift_std: 0.02,
            surge_chance: 0.2,
            max_active: 9,
            tick_rate_ms: 2000,
        }
    }
}
