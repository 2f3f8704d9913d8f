//! Food placement
//!
//! Food is drawn uniformly from the cells the snake does not occupy.

use rand::Rng;
use rand::seq::IteratorRandom;

use super::state::{Position, Snake};
use crate::consts::FOOD_REJECTION_ATTEMPTS;
use crate::settings::FoodPlacement;

/// Pick a free cell for the next food, `None` if the snake fills the grid.
///
/// Rejection sampling retries uniform draws over the whole grid; after
/// `FOOD_REJECTION_ATTEMPTS` misses it falls back to the free-cell list so a
/// crowded grid still terminates. Both paths are uniform over free cells.
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid_size: i32,
    snake: &Snake,
    placement: FoodPlacement,
) -> Option<Position> {
    let cells = (grid_size as usize) * (grid_size as usize);
    if snake.len() >= cells {
        return None;
    }

    if placement == FoodPlacement::Rejection {
        for _ in 0..FOOD_REJECTION_ATTEMPTS {
            let pos = Position::new(
                rng.random_range(0..grid_size),
                rng.random_range(0..grid_size),
            );
            if !snake.contains(pos) {
                return Some(pos);
            }
        }
        log::debug!(
            "food rejection sampling missed {} times, using free cells",
            FOOD_REJECTION_ATTEMPTS
        );
    }

    free_cells(grid_size, snake).choose(rng)
}

/// Cells not covered by the snake, row-major
pub fn free_cells(grid_size: i32, snake: &Snake) -> impl Iterator<Item = Position> + '_ {
    (0..grid_size)
        .flat_map(move |y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(move |pos| !snake.contains(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use glam::IVec2;

    fn long_snake(grid_size: i32, keep_free: usize) -> Snake {
        // Boustrophedon fill leaving the last `keep_free` cells empty
        let mut cells = Vec::new();
        for y in 0..grid_size {
            let row: Vec<i32> = if y % 2 == 0 {
                (0..grid_size).collect()
            } else {
                (0..grid_size).rev().collect()
            };
            for x in row {
                cells.push(IVec2::new(x, y));
            }
        }
        let total = cells.len();
        cells.truncate(total - keep_free);
        Snake::from_segments(cells).unwrap()
    }

    #[test]
    fn test_food_avoids_snake() {
        let mut rng = GameState::seeded_rng(42);
        let snake = Snake::from_segments([IVec2::new(1, 1), IVec2::new(1, 2), IVec2::new(1, 3)]).unwrap();
        for placement in [FoodPlacement::Rejection, FoodPlacement::FreeCells] {
            for _ in 0..200 {
                let food = place_food(&mut rng, 4, &snake, placement).unwrap();
                assert!(!snake.contains(food));
                assert!((0..4).contains(&food.x) && (0..4).contains(&food.y));
            }
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = GameState::seeded_rng(7);
        let snake = long_snake(6, 1);
        let free: Vec<_> = free_cells(6, &snake).collect();
        assert_eq!(free.len(), 1);
        for placement in [FoodPlacement::Rejection, FoodPlacement::FreeCells] {
            assert_eq!(place_food(&mut rng, 6, &snake, placement), Some(free[0]));
        }
    }

    #[test]
    fn test_full_grid_has_no_food() {
        let mut rng = GameState::seeded_rng(1);
        let snake = long_snake(4, 0);
        assert_eq!(place_food(&mut rng, 4, &snake, FoodPlacement::Rejection), None);
        assert_eq!(free_cells(4, &snake).count(), 0);
    }

    #[test]
    fn test_free_cell_sampling_covers_all_cells() {
        let mut rng = GameState::seeded_rng(3);
        let snake = Snake::new(IVec2::new(0, 0));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(place_food(&mut rng, 4, &snake, FoodPlacement::FreeCells).unwrap());
        }
        assert_eq!(seen.len(), 15);
    }
}
