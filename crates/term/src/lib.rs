//! Rendering pipeline, from board state to terminal.
//!
//! Two buffers are involved:
//!
//! 1. [`PixelFrame`]: the frame target the board is painted into, in frame pixels
//!    (512x512 by default). [`BoardRenderer`] draws squares, highlights, and sprites
//!    here through the [`FrameTarget`] trait.
//! 2. [`FrameBuffer`]: terminal cells. [`present_into`] downsamples the pixel frame
//!    into half-block cells, and [`TerminalRenderer`] flushes only the cells that
//!    changed since the previous frame.
//!
//! Everything except [`TerminalRenderer`] is pure and unit-testable.

pub mod board_view;
pub mod fb;
pub mod pixels;
pub mod present;
pub mod renderer;

pub use click_chess_assets as assets;
pub use click_chess_core as core;
pub use click_chess_types as types;

pub use board_view::{BoardPalette, BoardRenderer};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use pixels::{FrameTarget, PixelFrame};
pub use present::{present_into, BoardLayout, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use types::Rgb;
