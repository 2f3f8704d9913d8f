//! Rendering module
//!
//! Renderers only read snapshots; they never touch the engine.

pub mod text;

#[cfg(target_arch = "wasm32")]
pub mod canvas;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use text::TextRenderer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
#[cfg(target_arch = "wasm32")]
pub use dom::DomRenderer;

use crate::sim::{Outcome, Snapshot, Tally};

/// Receives every frame the game produces
pub trait RenderSink {
    /// Draw the current board; called after every start and every tick
    fn render(&mut self, snapshot: &Snapshot<'_>);

    /// Show the end-of-game message; called exactly once per game
    fn game_over(&mut self, outcome: Outcome, snapshot: &Snapshot<'_>);
}

/// Body opacity (percent) by distance from the head, fading toward the tail
pub fn body_opacity(index: usize) -> u8 {
    const FADE: [u8; 13] = [100, 100, 95, 90, 80, 75, 70, 60, 50, 40, 30, 25, 20];
    FADE.get(index).copied().unwrap_or(20)
}

/// HUD line for the tally
pub fn tally_label(tally: Tally) -> String {
    match tally {
        Tally::Points(points) => format!("Score: {}", points),
        Tally::Remaining(left) => format!("Food left: {}", left),
    }
}

/// Headline for the end-of-game message
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "You won!",
        Outcome::Lost(_) => "Game Over!",
    }
}
