//! Collision detection on the grid
//!
//! Walls are checked before the body so a head leaving the grid always
//! reports `Collision::Wall`.

use super::state::{Collision, Position, Snake};
use crate::settings::TailPolicy;

/// Check a candidate head against the grid bounds and the pre-move body.
///
/// `grows` tells whether the tail stays put this tick (food under the head).
/// With `TailPolicy::Strict` the tail always blocks, even though it would
/// move away when the snake does not grow.
pub fn check_collision(
    candidate: Position,
    snake: &Snake,
    grid_size: i32,
    tail_policy: TailPolicy,
    grows: bool,
) -> Option<Collision> {
    if !in_bounds(candidate, grid_size) {
        return Some(Collision::Wall);
    }

    let skip_tail = tail_policy == TailPolicy::VacatingTailFree && !grows && snake.len() > 1;
    let checked = if skip_tail { snake.len() - 1 } else { snake.len() };

    if snake.segments().take(checked).any(|seg| seg == candidate) {
        return Some(Collision::Body);
    }

    None
}

#[inline]
pub fn in_bounds(pos: Position, grid_size: i32) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < grid_size && pos.y < grid_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn ring() -> Snake {
        // Head at (5,5) moving down would land on the tail at (5,6)
        Snake::from_segments([
            IVec2::new(5, 5),
            IVec2::new(4, 5),
            IVec2::new(4, 6),
            IVec2::new(5, 6),
        ])
        .unwrap()
    }

    #[test]
    fn test_wall_collision() {
        let snake = Snake::new(IVec2::new(0, 0));
        for candidate in [
            IVec2::new(-1, 0),
            IVec2::new(0, -1),
            IVec2::new(20, 0),
            IVec2::new(0, 20),
        ] {
            assert_eq!(
                check_collision(candidate, &snake, 20, TailPolicy::Strict, false),
                Some(Collision::Wall)
            );
        }
        assert_eq!(
            check_collision(IVec2::new(19, 19), &snake, 20, TailPolicy::Strict, false),
            None
        );
    }

    #[test]
    fn test_body_collision() {
        let snake = ring();
        assert_eq!(
            check_collision(IVec2::new(4, 5), &snake, 20, TailPolicy::VacatingTailFree, false),
            Some(Collision::Body)
        );
        assert_eq!(
            check_collision(IVec2::new(6, 5), &snake, 20, TailPolicy::Strict, false),
            None
        );
    }

    #[test]
    fn test_strict_tail_blocks() {
        let snake = ring();
        assert_eq!(
            check_collision(IVec2::new(5, 6), &snake, 20, TailPolicy::Strict, false),
            Some(Collision::Body)
        );
    }

    #[test]
    fn test_vacating_tail_is_free_unless_growing() {
        let snake = ring();
        assert_eq!(
            check_collision(IVec2::new(5, 6), &snake, 20, TailPolicy::VacatingTailFree, false),
            None
        );
        assert_eq!(
            check_collision(IVec2::new(5, 6), &snake, 20, TailPolicy::VacatingTailFree, true),
            Some(Collision::Body)
        );
    }
}
