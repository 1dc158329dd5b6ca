// Re-export core modules for use by the binary or other consumers
pub mod core;
pub mod data;
pub mod simulation;
pub mod systems;

// Expose the main Game wrapper and the types consumers interact with
pub use crate::core::world::{Game, Snapshot};
pub use crate::data::WorldCatalogs;
pub use crate::simulation::config::SimConfig;
pub use crate::simulation::events::{LogEntry, WorldEvent};
