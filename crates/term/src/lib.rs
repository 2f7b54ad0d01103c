//! Terminal rendering for the Snake game.
//!
//! Renders into a plain framebuffer instead of using a widget toolkit, then
//! flushes only the changed cells to the terminal.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: snapshot to framebuffer, plus button-pad hit testing
//! - [`renderer`]: crossterm backend with diffed redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Rect, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
