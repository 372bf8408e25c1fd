use serde::{Deserialize, Serialize};

use super::state::Position;

/// Side length of the square board
pub const GRID_SIZE: usize = 20;

/// Constants for the board and the speed curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width and height of the game grid
    pub grid_size: usize,
    /// Cell the single-segment snake starts on
    pub start: Position,
    /// Tick interval at score 0, in milliseconds
    pub base_tick_ms: u64,
    /// Fastest allowed tick interval, in milliseconds
    pub min_tick_ms: u64,
    /// Milliseconds shaved off the interval per point scored
    pub tick_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            start: Position::new(10, 10),
            base_tick_ms: 200,
            min_tick_ms: 50,
            tick_step_ms: 5,
        }
    }
}
