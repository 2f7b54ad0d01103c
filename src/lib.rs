//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{types,core,input,engine,term,journal}`
//! so the binary, integration tests and benches share one import path.

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_input as input;
pub use tui_snake_journal as journal;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
