//! Tick engine and session driver.
//!
//! - [`clock`]: millisecond clocks (real and manual)
//! - [`tick`]: cancellable fixed-interval scheduler
//! - [`session`]: owns the game, the translator, and the intent receiver; applies one
//!   advance per tick
//! - [`config`]: session settings from environment variables
//!
//! # Example
//!
//! ```
//! use tui_snake_engine::{ManualClock, Session, SessionConfig};
//! use tui_snake_input::intent_channel;
//! use tui_snake_types::{Direction, TICK_MS};
//!
//! let (keys, intents) = intent_channel();
//! let clock = ManualClock::new(0);
//! let mut session = Session::new(&SessionConfig::default(), intents, clock.clone());
//! session.start();
//!
//! keys.send(Direction::Up);
//! clock.advance(TICK_MS as u64);
//! let report = session.pump().expect("one tick due");
//! assert_eq!(report.direction, Direction::Up);
//!
//! session.stop();
//! assert!(!keys.send(Direction::Left));
//! ```

pub mod clock;
pub mod config;
pub mod session;
pub mod tick;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SessionConfig;
pub use session::{Session, TickReport};
pub use tick::{Tick, TickEngine};
