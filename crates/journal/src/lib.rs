//! Optional JSON-lines event journal.
//!
//! When `SNAKE_LOG_PATH` is set, session and gameplay events are appended to
//! that file, one JSON object per line:
//!
//! | `type`            | fields                                        |
//! |-------------------|-----------------------------------------------|
//! | `session_started` | `seed`, `rules`, `grid`, `tick_ms`            |
//! | `turned`          | `episode`, `tick`, `from`, `to`               |
//! | `food_eaten`      | `episode`, `tick`, `x`, `y`, `score`, `length`|
//! | `game_over`       | `episode`, `tick`, `cause`, `x`, `y`, `score`, `length` |
//! | `session_stopped` | `episode`, `tick`, `best_score`               |
//!
//! Every line also has `ts`, in milliseconds since the Unix epoch.

pub mod config;
pub mod record;
pub mod writer;

pub use tui_snake_types as types;

pub use config::JournalConfig;
pub use record::Record;
pub use writer::Journal;
