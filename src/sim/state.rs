//! Game state and core simulation types
//!
//! Everything a renderer can observe lives here; the engine owns one
//! `GameState` and replaces it wholesale on every start.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::steering::Steering;
use crate::settings::{GameConfig, ScoringMode};

/// A grid cell, 0-indexed, y growing downward
pub type Position = IVec2;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// What ended a game by collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Head left the grid
    Wall,
    /// Head ran into the snake's own body
    Body,
}

/// Terminal result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Lost(Collision),
    Won,
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, never started
    #[default]
    Idle,
    /// Ticks advance the snake
    Running,
    /// Ended; only a new start leaves this phase
    Over(Outcome),
}

impl GamePhase {
    pub fn is_running(self) -> bool {
        self == GamePhase::Running
    }

    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Score or countdown, depending on the scoring mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tally {
    Points(u64),
    Remaining(u32),
}

impl Tally {
    pub fn initial(mode: ScoringMode) -> Self {
        match mode {
            ScoringMode::Points { .. } => Tally::Points(0),
            ScoringMode::Quota { foods } => Tally::Remaining(foods),
        }
    }

    /// Record one eaten food; returns true when the quota is exhausted
    pub fn record_food(&mut self, mode: ScoringMode) -> bool {
        match (self, mode) {
            (Tally::Points(points), ScoringMode::Points { reward }) => {
                *points += reward;
                false
            }
            (Tally::Remaining(left), ScoringMode::Quota { .. }) => {
                *left = left.saturating_sub(1);
                *left == 0
            }
            // A tally always comes from `initial` with the same mode
            _ => false,
        }
    }

    pub fn value(self) -> u64 {
        match self {
            Tally::Points(points) => points,
            Tally::Remaining(left) => left as u64,
        }
    }
}

/// Ordered snake body, head first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build from explicit segments, head first; `None` when there are none
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Position {
        // Never empty: constructors require a segment and pop_tail follows a push
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Segments head first
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, pos: Position) {
        self.body.push_front(pos);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}

/// Something a frontend may want to react to (sound, animation, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Turned(Direction),
    FoodEaten { at: Position, tally: Tally },
    FoodPlaced(Position),
    GameOver(Outcome),
}

/// RNG state wrapper; each game gets its own stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream.wrapping_mul(2).wrapping_add(1))
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub snake: Snake,
    pub steering: Steering,
    /// `None` only when the grid is full
    pub food: Option<Position>,
    pub tally: Tally,
    pub phase: GamePhase,
    /// Ticks that advanced the snake this game
    pub time_ticks: u64,
    pub rng_state: RngState,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh idle state; no food is placed until the game starts
    pub fn new(config: GameConfig, rng_state: RngState) -> Self {
        let rng = rng_state.to_rng();
        Self {
            snake: Snake::new(config.start),
            steering: Steering::new(config.steering, config.input_timing),
            food: None,
            tally: Tally::initial(config.scoring),
            phase: GamePhase::Idle,
            time_ticks: 0,
            rng_state,
            rng,
            config,
        }
    }

    /// Seeded RNG without a particular stream, for tests and tools
    pub fn seeded_rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }
}
