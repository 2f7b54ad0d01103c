//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation rules and state. It has **zero
//! dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is exercised directly by unit tests
//! - **Portable**: Runs in the terminal binary, headless tests, and benches
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake body, food, score, and the one-step advance
//! - [`food`]: Food placement over free cells or the whole grid
//! - [`rules`]: Self-collision and food-placement rule switches
//! - [`rng`]: Seeded LCG for reproducible sessions
//! - [`snapshot`]: Read-only per-tick copy for renderers
//!
//! # Game Rules
//!
//! - The head moves one cell per tick in the committed direction
//! - Leaving the grid or biting the body resets the snake, score and food
//! - Landing on food scores a point and grows the snake by one
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, StepResult};
//! use tui_snake_types::{Direction, START_SNAKE};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.head(), START_SNAKE[0]);
//!
//! assert_eq!(game.advance(Direction::Left), StepResult::Moved);
//! assert_eq!(game.length(), 2);
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, StepResult};
pub use rng::SimpleRng;
pub use rules::{FoodPlacement, Rules, SelfCollision};
pub use snapshot::{GameSnapshot, Tile};
