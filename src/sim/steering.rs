//! Direction-change arbitration
//!
//! Requests are always judged against the committed heading, never against
//! a pending one, so queued presses cannot chain into a reversal.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Direction;
use crate::settings::{InputTiming, SteeringMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Steering {
    mode: SteeringMode,
    timing: InputTiming,
    /// Committed per-tick step; zero while an axis-delta snake waits for input
    velocity: IVec2,
    /// Accepted request waiting for the next tick (buffered timing only)
    pending: Option<Direction>,
}

impl Steering {
    pub fn new(mode: SteeringMode, timing: InputTiming) -> Self {
        let velocity = match mode {
            SteeringMode::Committed => Direction::Right.delta(),
            SteeringMode::AxisDeltas => IVec2::ZERO,
        };
        Self {
            mode,
            timing,
            velocity,
            pending: None,
        }
    }

    /// Start with an explicit heading instead of the mode's default
    pub fn with_heading(mut self, dir: Direction) -> Self {
        self.velocity = dir.delta();
        self.pending = None;
        self
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Committed heading, `None` while stationary
    pub fn heading(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == self.velocity)
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != IVec2::ZERO
    }

    /// Whether `dir` would be accepted against the committed heading
    pub fn accepts(&self, dir: Direction) -> bool {
        match self.mode {
            SteeringMode::Committed => self.velocity != dir.opposite().delta(),
            SteeringMode::AxisDeltas => {
                if dir.is_horizontal() {
                    self.velocity.x == 0
                } else {
                    self.velocity.y == 0
                }
            }
        }
    }

    /// Apply or buffer a request; returns whether anything changed.
    ///
    /// Asking for the committed heading is a no-op, except that under
    /// buffered timing it drops a pending turn.
    pub fn request(&mut self, dir: Direction) -> bool {
        if dir.delta() == self.velocity {
            return self.pending.take().is_some();
        }
        if !self.accepts(dir) {
            return false;
        }
        match self.timing {
            InputTiming::Immediate => self.velocity = dir.delta(),
            InputTiming::Buffered => self.pending = Some(dir),
        }
        true
    }

    /// Fold a buffered request into the committed heading
    pub fn commit(&mut self) -> Option<Direction> {
        let dir = self.pending.take()?;
        self.velocity = dir.delta();
        Some(dir)
    }
}
