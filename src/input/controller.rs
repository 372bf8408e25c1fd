use crate::game::{Direction, GameState};

/// Direction the snake should commit to when `requested` arrives while
/// heading `current`. A straight reversal is refused; anything else wins.
pub fn resolve_direction(current: Direction, requested: Direction) -> Direction {
    if current.is_opposite(requested) {
        current
    } else {
        requested
    }
}

/// Commit `requested` as the state's direction unless it reverses the
/// currently committed one. Returns whether it was accepted.
///
/// Requests are not queued: each accepted one replaces the last, and the
/// next step uses whatever is committed when it runs.
pub fn handle_direction_input(state: &mut GameState, requested: Direction) -> bool {
    let resolved = resolve_direction(state.direction, requested);
    state.direction = resolved;
    resolved == requested
}
