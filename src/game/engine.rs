use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, GameState, Position, Snake},
};

/// What a single step did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced, length unchanged
    Moved,
    /// Head landed on the food: grew by one, scored, food re-rolled
    AteFood,
    /// Game ended; snake, food and score were left untouched
    Collided(CollisionType),
    /// State was already terminal, nothing happened
    Halted,
}

impl StepOutcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepOutcome::Collided(_) | StepOutcome::Halted)
    }
}

/// The game engine that handles all movement, collision and food logic
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fresh run: one segment at the start cell heading right, score 0
    pub fn reset(&mut self) -> GameState {
        let food = self.random_position();
        GameState::new(
            Snake::new(self.config.start),
            Direction::Right,
            food,
            self.config.grid_size,
        )
    }

    /// Advance the snake one cell in its committed direction
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if state.game_over {
            return StepOutcome::Halted;
        }

        let new_head = state.snake.head().moved_in_direction(state.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            debug!("collision {:?} at ({}, {})", collision, new_head.x, new_head.y);
            state.game_over = true;
            return StepOutcome::Collided(collision);
        }

        let ate_food = new_head == state.food;
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += 1;
            state.food = self.random_position();
            StepOutcome::AteFood
        } else {
            StepOutcome::Moved
        }
    }

    /// Uniform draw on each axis. The snake is not consulted, so food may
    /// land under a segment.
    pub fn random_position(&mut self) -> Position {
        let size = self.config.grid_size as i32;
        Position::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }

    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // The tail still counts: it has not moved yet.
        if state.is_occupied_by_snake(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_engine(seed: u64) -> GameEngine<StdRng> {
        GameEngine::with_rng(GameConfig::default(), StdRng::seed_from_u64(seed))
    }

    fn state_with(segments: Vec<Position>, direction: Direction, food: Position) -> GameState {
        GameState::new(
            Snake::from_segments(segments).unwrap(),
            direction,
            food,
            20,
        )
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(GameConfig::default());
        let state = engine.reset();

        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.segments(), &[Position::new(10, 10)]);
        assert!(state.is_in_bounds(state.food));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded_engine(1);
        let mut state = state_with(
            vec![Position::new(10, 10)],
            Direction::Right,
            Position::new(0, 0),
        );

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.snake.segments(), &[Position::new(11, 10)]);
        assert_eq!(state.score, 0);
        assert_eq!(state.food, Position::new(0, 0));
    }

    #[test]
    fn test_each_direction_moves_head() {
        for dir in Direction::ALL {
            let mut engine = seeded_engine(2);
            let mut state = state_with(vec![Position::new(10, 10)], dir, Position::new(0, 0));
            engine.step(&mut state);
            assert_eq!(
                state.snake.head(),
                Position::new(10, 10).moved_in_direction(dir)
            );
        }
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = seeded_engine(7);
        let mut state = state_with(
            vec![Position::new(10, 10)],
            Direction::Right,
            Position::new(11, 10),
        );

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, StepOutcome::AteFood);
        assert_eq!(
            state.snake.segments(),
            &[Position::new(11, 10), Position::new(10, 10)]
        );
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_food_is_redrawn_after_eating() {
        let mut engine = seeded_engine(42);
        let mut reference = seeded_engine(42);
        let mut state = state_with(
            vec![Position::new(10, 10)],
            Direction::Right,
            Position::new(11, 10),
        );

        engine.step(&mut state);

        assert_eq!(state.food, reference.random_position());
    }

    #[test]
    fn test_long_snake_keeps_length_when_not_eating() {
        let mut engine = seeded_engine(3);
        let mut state = state_with(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Down,
            Position::new(15, 15),
        );

        engine.step(&mut state);

        assert_eq!(
            state.snake.segments(),
            &[Position::new(5, 6), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = seeded_engine(4);
        let mut state = state_with(
            vec![Position::new(0, 0)],
            Direction::Left,
            Position::new(5, 5),
        );
        let before = state.clone();

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, StepOutcome::Collided(CollisionType::Wall));
        assert!(state.game_over);
        assert_eq!(state.snake, before.snake);
        assert_eq!(state.food, before.food);
        assert_eq!(state.score, before.score);
    }

    #[test]
    fn test_far_wall_collision() {
        let mut engine = seeded_engine(5);
        let mut state = state_with(
            vec![Position::new(19, 7)],
            Direction::Right,
            Position::new(5, 5),
        );

        assert_eq!(
            engine.step(&mut state),
            StepOutcome::Collided(CollisionType::Wall)
        );
    }

    #[test]
    fn test_self_collision() {
        let mut engine = seeded_engine(6);
        // Head at (5,5) moving up into (5,4), which is part of the body
        let mut state = state_with(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 4),
                Position::new(5, 4),
                Position::new(4, 4),
            ],
            Direction::Up,
            Position::new(15, 15),
        );
        let before = state.clone();

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, StepOutcome::Collided(CollisionType::SelfCollision));
        assert!(state.game_over);
        assert_eq!(state.snake, before.snake);
        assert_eq!(state.score, before.score);
    }

    #[test]
    fn test_moving_onto_tail_is_a_collision() {
        let mut engine = seeded_engine(8);
        // A 2x2 loop: the next head cell is the current tail
        let mut state = state_with(
            vec![
                Position::new(5, 5),
                Position::new(6, 5),
                Position::new(6, 4),
                Position::new(5, 4),
            ],
            Direction::Up,
            Position::new(15, 15),
        );

        assert_eq!(
            engine.step(&mut state),
            StepOutcome::Collided(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = seeded_engine(9);
        let mut state = engine.reset();
        state.game_over = true;
        let before = state.clone();

        let outcome = engine.step(&mut state);

        assert_eq!(outcome, StepOutcome::Halted);
        assert_eq!(state, before);
    }

    #[test]
    fn test_random_position_in_bounds() {
        let mut engine = seeded_engine(10);
        for _ in 0..1000 {
            let pos = engine.random_position();
            assert!((0..20).contains(&pos.x));
            assert!((0..20).contains(&pos.y));
        }
    }

    #[test]
    fn test_terminal_outcomes() {
        assert!(StepOutcome::Halted.is_terminal());
        assert!(StepOutcome::Collided(CollisionType::Wall).is_terminal());
        assert!(!StepOutcome::Moved.is_terminal());
        assert!(!StepOutcome::AteFood.is_terminal());
    }
}
