//! Terminal input module.
//!
//! Maps `crossterm` events onto the few things the board cares about: a left
//! mouse press at a terminal cell, a resize, and a request to quit. Turning a cell
//! into a frame pixel is the presentation layer's job, not this crate's.

pub mod map;

pub use click_chess_types as types;

pub use map::{map_event, should_quit, RawInput};
