use std::time::Duration;

use log::info;
use rand::Rng;
use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::Direction,
    engine::{GameEngine, StepOutcome},
    speed::tick_interval,
    state::GameState,
};
use crate::input::controller::handle_direction_input;
use crate::storage::{Highscore, KeyValueStore};

/// The one mutable game instance the front end owns and renders from
pub struct Session<S, R = ThreadRng> {
    engine: GameEngine<R>,
    state: GameState,
    highscore: Highscore<S>,
}

impl<S: KeyValueStore> Session<S, ThreadRng> {
    pub fn new(config: GameConfig, store: S) -> Self {
        Self::with_engine(GameEngine::new(config), store)
    }
}

impl<S: KeyValueStore, R: Rng> Session<S, R> {
    /// Start a run on `engine`, loading the high score from `store`
    pub fn with_engine(mut engine: GameEngine<R>, store: S) -> Self {
        let state = engine.reset();
        let highscore = Highscore::load(store);
        Self {
            engine,
            state,
            highscore,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Test support: drop the session into an arbitrary position. Play only
    /// ever changes state through `tick`, `steer` and `restart`.
    #[doc(hidden)]
    pub fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub fn highscore(&self) -> u32 {
        self.highscore.best()
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Advance one step. Ending the run records the high score.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.engine.step(&mut self.state);

        if let StepOutcome::Collided(collision) = outcome {
            info!(
                "game over: {:?}, score {}, length {}",
                collision,
                self.state.score,
                self.state.snake.len()
            );
            self.highscore.record(self.state.score);
        }

        outcome
    }

    /// Feed a direction request through the reversal guard
    pub fn steer(&mut self, direction: Direction) -> bool {
        handle_direction_input(&mut self.state, direction)
    }

    /// Start over. The high score carries across runs.
    pub fn restart(&mut self) {
        info!("restarting, high score {}", self.highscore.best());
        self.state = self.engine.reset();
    }

    /// How long to wait before the next tick at the current score
    pub fn tick_interval(&self) -> Duration {
        tick_interval(self.state.score, self.engine.config())
    }
}
