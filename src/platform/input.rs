//! Key mapping
//!
//! Raw key names (as reported by `KeyboardEvent.key`) to game commands.
//! Anything unrecognized maps to `None` and is ignored.

use crate::sim::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(Direction),
    /// Stop or resume the clock
    Pause,
}

pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "Up" | "up" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "Down" | "down" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "Left" | "left" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "Right" | "right" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" | "p" | "P" => Some(KeyCommand::Pause),
        _ => direction_for_key(key).map(KeyCommand::Turn),
    }
}
