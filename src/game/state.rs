use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `direction`
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake body, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A one-segment snake
    pub fn new(head: Position) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit segments, head at index 0.
    ///
    /// Returns `None` for an empty segment list.
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { body: segments })
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Whether any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; drop the tail unless growing
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a step ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head ran into a segment
    SelfCollision,
}

/// Everything one run of the game needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    /// Committed direction, consumed by the next step
    pub direction: Direction,
    pub food: Position,
    pub score: u32,
    pub game_over: bool,
    pub grid_size: usize,
}

impl GameState {
    pub fn new(snake: Snake, direction: Direction, food: Position, grid_size: usize) -> Self {
        Self {
            snake,
            direction,
            food,
            score: 0,
            game_over: false,
            grid_size,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.grid_size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_from_segments() {
        assert!(Snake::from_segments(vec![]).is_none());

        let snake = Snake::from_segments(vec![
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
        ])
        .unwrap();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(3, 3));
        assert_eq!(snake.segments()[2], Position::new(1, 3));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.segments(), &[Position::new(6, 5)]);

        snake.advance(Position::new(7, 5), true);
        assert_eq!(snake.segments(), &[Position::new(7, 5), Position::new(6, 5)]);
    }

    #[test]
    fn test_occupies_includes_head_and_tail() {
        let snake =
            Snake::from_segments(vec![Position::new(5, 5), Position::new(4, 5)]).unwrap();
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5)),
            Direction::Right,
            Position::new(10, 10),
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
        assert!(!state.is_in_bounds(Position::new(0, -1)));
    }
}
