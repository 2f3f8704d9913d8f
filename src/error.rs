//! Configuration errors
//!
//! The simulation itself never fails; only loading a configuration or
//! starting from a hand-built board can.

use thiserror::Error;

use crate::sim::Position;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is below the minimum of {min}")]
    GridTooSmall { size: i32, min: i32 },

    #[error("start cell ({x}, {y}) lies outside a {size}x{size} grid")]
    StartOutOfBounds { x: i32, y: i32, size: i32 },

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("food quota must be at least 1")]
    ZeroFoodQuota,

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a start layout was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("snake segment ({}, {}) lies outside the grid", .0.x, .0.y)]
    SegmentOutOfBounds(Position),

    #[error("snake covers ({}, {}) more than once", .0.x, .0.y)]
    OverlappingSegment(Position),

    #[error("food ({}, {}) lies outside the grid", .0.x, .0.y)]
    FoodOutOfBounds(Position),

    #[error("food ({}, {}) lies on the snake", .0.x, .0.y)]
    FoodOnSnake(Position),
}
