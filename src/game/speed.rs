use std::time::Duration;

use super::config::GameConfig;

/// Delay before the next step: `base - score * step`, floored at `min`
pub fn tick_interval(score: u32, config: &GameConfig) -> Duration {
    let speedup = u64::from(score).saturating_mul(config.tick_step_ms);
    let millis = config
        .base_tick_ms
        .saturating_sub(speedup)
        .max(config.min_tick_ms);
    Duration::from_millis(millis)
}
