//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input translation, rendering, journaling).
//!
//! # Grid
//!
//! The playfield is a fixed square:
//!
//! - **Size**: 25x25 cells (indexed 0-24 on both axes)
//! - **Origin**: (0, 0) is the top-left cell; `y` grows downward
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 150 | One simulation step per tick |
//!
//! # Starting configuration
//!
//! The snake starts as `[(9, 9), (8, 9)]` (head first) travelling left, with
//! the first food at `(3, 3)`. Every game-over restores exactly this layout.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction, GRID_SIZE};
//!
//! let head = Cell::new(0, 9);
//! assert!(head.in_bounds(GRID_SIZE));
//!
//! // One step past the left wall is off the board.
//! let next = head.step(Direction::Left);
//! assert_eq!(next, Cell::new(-1, 9));
//! assert!(!next.in_bounds(GRID_SIZE));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Left.as_str(), "left");
//! ```

/// Cells per side of the square grid.
pub const GRID_SIZE: i16 = 25;

/// Total number of cells on the grid.
pub const GRID_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Fixed tick interval in milliseconds.
pub const TICK_MS: u32 = 150;

/// Snake body at start and after every game-over, head first.
pub const START_SNAKE: [Cell; 2] = [Cell::new(9, 9), Cell::new(8, 9)];

/// Travel direction before the first input.
pub const START_DIRECTION: Direction = Direction::Left;

/// Food cell at session start.
pub const START_FOOD: Cell = Cell::new(3, 3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout_defaults() {
        assert_eq!(GRID_SIZE, 25);
        assert_eq!(GRID_CELLS, 625);
        assert_eq!(TICK_MS, 150);
        assert_eq!(START_SNAKE, [Cell::new(9, 9), Cell::new(8, 9)]);
        assert_eq!(START_DIRECTION, Direction::Left);
        assert_eq!(START_FOOD, Cell::new(3, 3));
    }

    #[test]
    fn starting_layout_is_on_board_and_contiguous() {
        for cell in START_SNAKE {
            assert!(cell.in_bounds(GRID_SIZE));
        }
        assert!(START_SNAKE[0].is_adjacent(START_SNAKE[1]));
        assert!(START_FOOD.in_bounds(GRID_SIZE));
        assert!(!START_SNAKE.contains(&START_FOOD));
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
        }
    }

    #[test]
    fn step_moves_by_the_direction_vector() {
        let c = Cell::new(3, 4);
        assert_eq!(c.step(Direction::Up), Cell::new(3, 3));
        assert_eq!(c.step(Direction::Down), Cell::new(3, 5));
        assert_eq!(c.step(Direction::Left), Cell::new(2, 4));
        assert_eq!(c.step(Direction::Right), Cell::new(4, 4));
    }

    #[test]
    fn bounds_are_half_open() {
        assert!(Cell::new(0, 0).in_bounds(GRID_SIZE));
        assert!(Cell::new(24, 24).in_bounds(GRID_SIZE));
        assert!(!Cell::new(25, 0).in_bounds(GRID_SIZE));
        assert!(!Cell::new(0, -1).in_bounds(GRID_SIZE));
    }

    #[test]
    fn direction_names_are_lowercase_words() {
        let names: Vec<&str> = Direction::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(names, ["up", "down", "left", "right"]);
    }
}

/// One grid position.
///
/// Coordinates are signed so a candidate head one step past a wall can be
/// represented and rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. May be off the board.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when `0 <= x,y < size`.
    pub fn in_bounds(self, size: i16) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Manhattan distance 1.
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Movement direction, doubling as the per-tick movement vector.
///
/// - **Up**: (0, -1)
/// - **Down**: (0, 1)
/// - **Left**: (-1, 0)
/// - **Right**: (1, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Displacement applied to the head for one tick.
    pub fn vector(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Why a move ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionCause {
    /// The head left the grid.
    Wall,
    /// The head entered a cell still occupied by the body.
    SelfBody,
}

impl CollisionCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionCause::Wall => "wall",
            CollisionCause::SelfBody => "self",
        }
    }
}

/// Core-side event emitted by a tick.
///
/// Consumed by observers (the journal); never fed back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The committed travel direction changed at this tick.
    Turned { from: Direction, to: Direction },
    /// The head landed on food.
    FoodEaten { at: Cell, score: u32, length: u16 },
    /// The head collided; `score` and `length` are the values before the reset.
    GameOver {
        cause: CollisionCause,
        at: Cell,
        score: u32,
        length: u16,
    },
}
