//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod engine;
pub mod food;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{check_collision, in_bounds};
pub use engine::{GameEngine, Snapshot, StartLayout};
pub use food::{free_cells, place_food};
pub use state::{
    Collision, Direction, GameEvent, GamePhase, GameState, Outcome, Position, RngState, Snake,
    Tally,
};
pub use steering::Steering;
pub use tick::tick;
