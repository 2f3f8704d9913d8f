//! Game engine
//!
//! Owns one game at a time and exposes the two external triggers, ticks and
//! direction requests, plus a read-only snapshot for renderers.

use std::collections::HashSet;

use glam::IVec2;
use serde::Serialize;

use super::collision::in_bounds;
use super::food::place_food;
use super::state::{
    Direction, GameEvent, GamePhase, GameState, Outcome, Position, RngState, Snake, Tally,
};
use super::steering::Steering;
use super::tick::tick;
use crate::error::LayoutError;
use crate::settings::{GameConfig, InputTiming};

/// Board a game starts from
#[derive(Debug, Clone)]
pub struct StartLayout {
    pub snake: Snake,
    /// `None` keeps the steering mode's default heading
    pub heading: Option<Direction>,
    /// `None` samples a free cell
    pub food: Option<Position>,
}

impl StartLayout {
    /// Single segment on the configured start cell
    pub fn for_config(config: &GameConfig) -> Self {
        Self {
            snake: Snake::new(config.start),
            heading: None,
            food: None,
        }
    }
}

/// Read-only view of the game for renderers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub grid_size: i32,
    pub snake: &'a Snake,
    pub food: Option<Position>,
    pub tally: Tally,
    pub phase: GamePhase,
    pub heading: Option<Direction>,
    pub tick: u64,
}

impl Snapshot<'_> {
    pub fn head(&self) -> Position {
        self.snake.head()
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }
}

pub struct GameEngine {
    config: GameConfig,
    seed: u64,
    games_started: u64,
    state: GameState,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// Idle engine; nothing moves until `start`
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let state = GameState::new(config.clone(), RngState::new(seed, 0));
        Self {
            config,
            seed,
            games_started: 0,
            state,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    /// Start a fresh game from the configured start cell.
    ///
    /// A start cell outside the grid is clamped onto it, so this never fails.
    pub fn start(&mut self) {
        let mut layout = StartLayout::for_config(&self.config);
        let max = IVec2::splat(self.config.grid_size.max(1) - 1);
        let head = layout.snake.head().clamp(IVec2::ZERO, max);
        if head != layout.snake.head() {
            log::warn!(
                "start cell ({}, {}) is off the grid, using ({}, {})",
                layout.snake.head().x,
                layout.snake.head().y,
                head.x,
                head.y
            );
            layout.snake = Snake::new(head);
        }
        self.begin(layout);
    }

    /// Start a fresh game from an explicit board.
    ///
    /// Every segment must be on the grid and distinct, and given food must
    /// be on a free cell. A refused layout leaves the current game untouched.
    pub fn start_with(&mut self, layout: StartLayout) -> Result<(), LayoutError> {
        self.check_layout(&layout)?;
        self.begin(layout);
        Ok(())
    }

    fn check_layout(&self, layout: &StartLayout) -> Result<(), LayoutError> {
        let grid_size = self.config.grid_size;
        let mut seen = HashSet::with_capacity(layout.snake.len());
        for seg in layout.snake.segments() {
            if !in_bounds(seg, grid_size) {
                return Err(LayoutError::SegmentOutOfBounds(seg));
            }
            if !seen.insert(seg) {
                return Err(LayoutError::OverlappingSegment(seg));
            }
        }
        match layout.food {
            Some(food) if !in_bounds(food, grid_size) => Err(LayoutError::FoodOutOfBounds(food)),
            Some(food) if seen.contains(&food) => Err(LayoutError::FoodOnSnake(food)),
            _ => Ok(()),
        }
    }

    /// Replace the previous game, running or not, in one assignment so no
    /// half-reset state is ever observable
    fn begin(&mut self, layout: StartLayout) {
        self.games_started += 1;
        let rng_state = RngState::new(self.seed, self.games_started);
        let mut state = GameState::new(self.config.clone(), rng_state);

        state.snake = layout.snake;
        let steering = Steering::new(self.config.steering, self.config.input_timing);
        state.steering = match layout.heading {
            Some(dir) => steering.with_heading(dir),
            None => steering,
        };
        state.food = layout.food.or_else(|| {
            place_food(
                &mut state.rng,
                self.config.grid_size,
                &state.snake,
                self.config.food_placement,
            )
        });
        state.phase = GamePhase::Running;

        self.state = state;
        self.events.clear();
        self.events.push(GameEvent::Started);
        if let Some(food) = self.state.food {
            self.events.push(GameEvent::FoodPlaced(food));
        }

        log::info!(
            "game {} started: {}x{} grid, seed {}",
            self.games_started,
            self.config.grid_size,
            self.config.grid_size,
            self.seed
        );
    }

    /// Ask the snake to turn; reversals and requests outside a running game
    /// are ignored. Returns whether the request was accepted.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if !self.state.phase.is_running() {
            return false;
        }
        let accepted = self.state.steering.request(dir);
        if accepted && self.config.input_timing == InputTiming::Immediate {
            self.events.push(GameEvent::Turned(dir));
        }
        if !accepted {
            log::trace!("direction {:?} rejected", dir);
        }
        accepted
    }

    /// Advance one step; returns the outcome on the tick that ends the game
    pub fn tick(&mut self) -> Option<Outcome> {
        let outcome = tick(&mut self.state, &mut self.events)?;
        log::info!(
            "game {} over: {:?}, length {}, tally {}",
            self.games_started,
            outcome,
            self.state.snake.len(),
            self.state.tally.value()
        );
        Some(outcome)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid_size: self.config.grid_size,
            snake: &self.state.snake,
            food: self.state.food,
            tally: self.state.tally,
            phase: self.state.phase,
            heading: self.state.steering.heading(),
            tick: self.state.time_ticks,
        }
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
