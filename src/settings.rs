//! Game configuration
//!
//! Every rule that differs between the known board variants is a field here,
//! so the engine never branches on hidden globals.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How eating food is scored and whether the game can be won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringMode {
    /// Unbounded point counter, `reward` per food
    Points { reward: u64 },
    /// Count down from `foods`; reaching zero wins the game
    Quota { foods: u32 },
}

impl Default for ScoringMode {
    fn default() -> Self {
        ScoringMode::Points { reward: FOOD_REWARD }
    }
}

/// How heading is stored and how reversals are rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteeringMode {
    /// A single committed direction, starting rightward
    #[default]
    Committed,
    /// Independent dx/dy deltas, stationary until the first input
    AxisDeltas,
}

/// When an accepted direction request takes effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTiming {
    /// Committed as soon as it is requested; two turns between ticks both land
    #[default]
    Immediate,
    /// Held as pending and committed when the next tick starts
    Buffered,
}

/// Whether the tail cell that is about to move away still blocks the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
    /// The full pre-move body collides, tail included
    #[default]
    Strict,
    /// The tail is ignored when it will be vacated this tick
    VacatingTailFree,
}

/// How a new food cell is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Uniform draws over the whole grid until one misses the snake
    #[default]
    Rejection,
    /// Uniform pick from the explicit list of free cells
    FreeCells,
}

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square grid
    pub grid_size: i32,
    /// Tick period used by the frontend scheduler
    pub tick_interval_ms: u32,
    /// Cell the snake starts on
    pub start: IVec2,
    pub scoring: ScoringMode,
    pub steering: SteeringMode,
    pub input_timing: InputTiming,
    pub tail_policy: TailPolicy,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: TICK_INTERVAL_MS,
            start: IVec2::new(START_CELL.0, START_CELL.1),
            scoring: ScoringMode::default(),
            steering: SteeringMode::default(),
            input_timing: InputTiming::default(),
            tail_policy: TailPolicy::default(),
            food_placement: FoodPlacement::default(),
        }
    }
}

impl GameConfig {
    /// 18x18 board, points per food, single committed direction
    pub fn classic() -> Self {
        Self {
            grid_size: CLASSIC_GRID_SIZE,
            ..Self::default()
        }
    }

    /// 20x20 board, win after eating the food quota
    pub fn countdown() -> Self {
        Self {
            scoring: ScoringMode::Quota { foods: FOOD_QUOTA },
            ..Self::default()
        }
    }

    /// 20x20 board, dx/dy steering that waits for the first key press
    pub fn arcade() -> Self {
        Self {
            steering: SteeringMode::AxisDeltas,
            ..Self::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "countdown" | "quota" => Some(Self::countdown()),
            "arcade" => Some(Self::arcade()),
            _ => None,
        }
    }

    /// Check that a game can actually be played with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
                min: MIN_GRID_SIZE,
            });
        }
        if !self.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds {
                x: self.start.x,
                y: self.start.y,
                size: self.grid_size,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        if let ScoringMode::Quota { foods: 0 } = self.scoring {
            return Err(ConfigError::ZeroFoodQuota);
        }
        Ok(())
    }

    /// Whether `pos` lies on the grid
    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        (0..self.grid_size).contains(&pos.x) && (0..self.grid_size).contains(&pos.y)
    }

    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
