//! Core game logic for Snake
//!
//! Everything here is free of terminal I/O: the engine advances a
//! [`GameState`], the [`Session`] ties a running state to the persisted
//! high score, and [`tick_interval`] turns the score into a game speed.

pub mod config;
pub mod direction;
pub mod engine;
pub mod session;
pub mod speed;
pub mod state;

// Re-export commonly used types
pub use config::{GRID_SIZE, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, StepOutcome};
pub use session::Session;
pub use speed::tick_interval;
pub use state::{CollisionType, GameState, Position, Snake};
