//! Plain-text renderer
//!
//! Draws the board as ASCII, one frame per render call. Used by the native
//! driver and handy in tests.

use std::io::Write;

use super::{RenderSink, outcome_message, tally_label};
use crate::sim::{Outcome, Snapshot};

pub const WALL_CHAR: char = '#';
pub const HEAD_CHAR: char = '@';
pub const BODY_CHAR: char = 'o';
pub const FOOD_CHAR: char = '*';
pub const EMPTY_CHAR: char = ' ';

/// Render the board with a wall border and the tally underneath
pub fn draw_board(snapshot: &Snapshot<'_>) -> String {
    let n = snapshot.grid_size.max(0) as usize;
    let mut rows = vec![vec![EMPTY_CHAR; n]; n];

    if let Some(food) = snapshot.food {
        rows[food.y as usize][food.x as usize] = FOOD_CHAR;
    }
    for (i, seg) in snapshot.snake.segments().enumerate() {
        rows[seg.y as usize][seg.x as usize] = if i == 0 { HEAD_CHAR } else { BODY_CHAR };
    }

    let border: String = std::iter::repeat_n(WALL_CHAR, n + 2).collect();
    let mut out = String::with_capacity((n + 3) * (n + 3));
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push(WALL_CHAR);
        out.extend(row);
        out.push(WALL_CHAR);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out.push_str(&tally_label(snapshot.tally));
    out.push('\n');
    out
}

/// Writes frames to any `Write` sink
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Render error: {}", e);
        }
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot<'_>) {
        let frame = draw_board(snapshot);
        self.emit(&frame);
    }

    fn game_over(&mut self, outcome: Outcome, snapshot: &Snapshot<'_>) {
        let message = format!(
            "{}\nYour score: {}\n",
            outcome_message(outcome),
            snapshot.tally.value()
        );
        self.emit(&message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::{Direction, GameEngine, Snake, StartLayout};
    use glam::IVec2;

    fn engine() -> GameEngine {
        let config = GameConfig {
            grid_size: 4,
            start: IVec2::new(1, 1),
            ..Default::default()
        };
        let mut engine = GameEngine::new(config, 1);
        engine.start_with(StartLayout {
            snake: Snake::from_segments([IVec2::new(1, 1), IVec2::new(0, 1)]).unwrap(),
            heading: Some(Direction::Right),
            food: Some(IVec2::new(3, 2)),
        }).unwrap();
        engine
    }

    #[test]
    fn test_draw_board() {
        let engine = engine();
        let board = draw_board(&engine.snapshot());
        let expected = "\
######
#    #
#o@  #
#   *#
#    #
######
Score: 0
";
        assert_eq!(board, expected);
    }

    #[test]
    fn test_text_renderer_game_over() {
        let mut engine = engine();
        let mut renderer = TextRenderer::new(Vec::new());
        engine.tick();
        engine.tick();
        let outcome = engine.tick().unwrap();
        renderer.game_over(outcome, &engine.snapshot());
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Game Over!\nYour score: 0\n");
    }
}
