//! Fixed timestep simulation tick
//!
//! One call moves the snake one cell. Nothing here knows about timers or
//! drawing; the caller decides when to tick and what to show.

use super::collision::check_collision;
use super::food::place_food;
use super::state::{GameEvent, GamePhase, GameState, Outcome};

/// Advance the game by one step.
///
/// Returns the outcome on the tick that ends the game and `None` otherwise,
/// including every tick after the game is over.
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) -> Option<Outcome> {
    if !state.phase.is_running() {
        return None;
    }

    if let Some(dir) = state.steering.commit() {
        events.push(GameEvent::Turned(dir));
    }

    // Axis-delta snakes sit still until the first key press
    if !state.steering.is_moving() {
        return None;
    }

    let candidate = state.snake.head() + state.steering.velocity();
    let grows = state.food == Some(candidate);

    if let Some(collision) = check_collision(
        candidate,
        &state.snake,
        state.config.grid_size,
        state.config.tail_policy,
        grows,
    ) {
        return Some(finish(state, events, Outcome::Lost(collision)));
    }

    state.time_ticks += 1;
    state.snake.push_head(candidate);

    if !grows {
        state.snake.pop_tail();
        return None;
    }

    let quota_met = state.tally.record_food(state.config.scoring);
    state.food = None;
    events.push(GameEvent::FoodEaten {
        at: candidate,
        tally: state.tally,
    });
    log::debug!(
        "food eaten at ({}, {}), length {}, tally {}",
        candidate.x,
        candidate.y,
        state.snake.len(),
        state.tally.value()
    );

    if quota_met {
        return Some(finish(state, events, Outcome::Won));
    }

    state.food = place_food(
        &mut state.rng,
        state.config.grid_size,
        &state.snake,
        state.config.food_placement,
    );
    match state.food {
        Some(food) => {
            events.push(GameEvent::FoodPlaced(food));
            None
        }
        // Snake covers the whole grid: nothing left to eat or dodge
        None => Some(finish(state, events, Outcome::Won)),
    }
}

fn finish(state: &mut GameState, events: &mut Vec<GameEvent>, outcome: Outcome) -> Outcome {
    state.phase = GamePhase::Over(outcome);
    events.push(GameEvent::GameOver(outcome));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{GameConfig, InputTiming, ScoringMode, SteeringMode, TailPolicy};
    use crate::sim::state::{Collision, Direction, RngState, Snake, Tally};
    use crate::sim::steering::Steering;
    use glam::IVec2;

    fn running(config: GameConfig, segments: &[(i32, i32)], heading: Direction) -> GameState {
        let mut state = GameState::new(config.clone(), RngState::new(12345, 0));
        state.snake = Snake::from_segments(segments.iter().map(|&(x, y)| IVec2::new(x, y))).unwrap();
        state.steering = Steering::new(config.steering, config.input_timing).with_heading(heading);
        state.food = Some(IVec2::new(0, 19));
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_tick_moves_without_growth() {
        let mut state = running(GameConfig::default(), &[(10, 10), (9, 10)], Direction::Right);
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), None);
        let body: Vec<_> = state.snake.segments().collect();
        assert_eq!(body, vec![IVec2::new(11, 10), IVec2::new(10, 10)]);
        assert_eq!(state.time_ticks, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_tick_grows_on_food() {
        let mut state = running(GameConfig::default(), &[(10, 10)], Direction::Right);
        state.food = Some(IVec2::new(11, 10));
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), None);
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.tally, Tally::Points(10));
        let food = state.food.unwrap();
        assert!(!state.snake.contains(food));
        assert!(matches!(events[0], GameEvent::FoodEaten { .. }));
        assert_eq!(events[1], GameEvent::FoodPlaced(food));
    }

    #[test]
    fn test_tick_wall_loss() {
        let mut state = running(GameConfig::default(), &[(0, 5), (1, 5)], Direction::Left);
        let mut events = Vec::new();
        let outcome = tick(&mut state, &mut events);
        assert_eq!(outcome, Some(Outcome::Lost(Collision::Wall)));
        assert_eq!(state.phase, GamePhase::Over(Outcome::Lost(Collision::Wall)));
        // Snake is left as it was before the fatal step
        assert_eq!(state.snake.head(), IVec2::new(0, 5));
        assert_eq!(events, vec![GameEvent::GameOver(Outcome::Lost(Collision::Wall))]);
    }

    #[test]
    fn test_tick_after_game_over_is_noop() {
        let mut state = running(GameConfig::default(), &[(0, 5)], Direction::Left);
        let mut events = Vec::new();
        tick(&mut state, &mut events);
        let snake = state.snake.clone();
        let food = state.food;
        for _ in 0..5 {
            assert_eq!(tick(&mut state, &mut events), None);
        }
        assert_eq!(state.snake, snake);
        assert_eq!(state.food, food);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_strict_policy_tail_chase_loses() {
        let segments = [(5, 5), (4, 5), (4, 6), (5, 6)];
        let mut state = running(GameConfig::default(), &segments, Direction::Down);
        let mut events = Vec::new();
        assert_eq!(
            tick(&mut state, &mut events),
            Some(Outcome::Lost(Collision::Body))
        );

        let config = GameConfig {
            tail_policy: TailPolicy::VacatingTailFree,
            ..Default::default()
        };
        let mut state = running(config, &segments, Direction::Down);
        assert_eq!(tick(&mut state, &mut events), None);
        assert_eq!(state.snake.head(), IVec2::new(5, 6));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_quota_win_stops_the_tick() {
        let config = GameConfig {
            scoring: ScoringMode::Quota { foods: 1 },
            ..Default::default()
        };
        let mut state = running(config, &[(10, 10)], Direction::Right);
        state.food = Some(IVec2::new(11, 10));
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), Some(Outcome::Won));
        assert_eq!(state.tally, Tally::Remaining(0));
        assert_eq!(state.food, None);
        assert_eq!(events.last(), Some(&GameEvent::GameOver(Outcome::Won)));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::FoodPlaced(_))));
    }

    #[test]
    fn test_filling_the_grid_wins() {
        let config = GameConfig {
            grid_size: 4,
            start: IVec2::new(0, 0),
            ..Default::default()
        };
        // 15 cells covered tail to head, head at (1,3) facing the last free cell
        let mut segments = Vec::new();
        for y in 0..3 {
            let row: Vec<i32> = if y % 2 == 0 { (0..4).collect() } else { (0..4).rev().collect() };
            segments.extend(row.into_iter().map(|x| (x, y)));
        }
        segments.extend([(3, 3), (2, 3), (1, 3)]);
        segments.reverse();
        let mut state = running(config, &segments, Direction::Left);
        assert_eq!(state.snake.head(), IVec2::new(1, 3));
        state.food = Some(IVec2::new(0, 3));
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), Some(Outcome::Won));
        assert_eq!(state.snake.len(), 16);
    }

    #[test]
    fn test_buffered_turn_commits_on_tick() {
        let config = GameConfig {
            input_timing: InputTiming::Buffered,
            ..Default::default()
        };
        let mut state = running(config, &[(10, 10)], Direction::Right);
        assert!(state.steering.request(Direction::Down));
        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.snake.head(), IVec2::new(10, 11));
        assert_eq!(events, vec![GameEvent::Turned(Direction::Down)]);
    }

    #[test]
    fn test_stationary_snake_waits() {
        let config = GameConfig {
            steering: SteeringMode::AxisDeltas,
            ..Default::default()
        };
        let mut state = GameState::new(config, RngState::new(1, 0));
        state.phase = GamePhase::Running;
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), None);
        assert_eq!(state.snake.head(), IVec2::new(10, 10));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_idle_state_does_not_tick() {
        let mut state = GameState::new(GameConfig::default(), RngState::new(1, 0));
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, &mut events), None);
        assert_eq!(state.snake.head(), IVec2::new(10, 10));
        assert_eq!(state.phase, GamePhase::Idle);
    }
}
