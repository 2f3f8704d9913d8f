//! Grid Snake - a single-player snake game on a square grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, game state)
//! - `session`: Drives an engine and feeds a render sink
//! - `renderer`: Text, DOM and canvas render sinks
//! - `platform`: Key mapping and browser timer glue
//! - `settings`: Data-driven game configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, LayoutError};
pub use session::Session;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Default grid dimension (cells per side)
    pub const GRID_SIZE: i32 = 20;
    /// Grid dimension of the classic board
    pub const CLASSIC_GRID_SIZE: i32 = 18;
    /// Smallest grid a game can be played on
    pub const MIN_GRID_SIZE: i32 = 4;

    /// Fixed tick period in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 100;

    /// Cell the single-segment snake starts on
    pub const START_CELL: (i32, i32) = (10, 10);

    /// Points awarded per food in the scoring variant
    pub const FOOD_REWARD: u64 = 10;
    /// Foods to eat before winning in the countdown variant
    pub const FOOD_QUOTA: u32 = 10;

    /// Uniform draws tried before falling back to the free-cell list
    pub const FOOD_REJECTION_ATTEMPTS: u32 = 1024;
}
