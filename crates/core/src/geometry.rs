//! Pixel <-> square mapping for the frame target.
//!
//! The board occupies the top-left `8 * square_px` pixels in both axes. Anything
//! outside that region is not a square and never becomes a [`BoardCoordinate`].

use crate::types::{BoardCoordinate, BOARD_DIM, DEFAULT_SQUARE_PX};

/// Axis-aligned pixel rectangle, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.w && y - self.y < self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    square_px: u32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            square_px: DEFAULT_SQUARE_PX,
        }
    }
}

impl BoardGeometry {
    /// Square edge is `frame_height / 8`, never less than one pixel.
    pub fn from_frame_height(frame_height: u32) -> Self {
        Self {
            square_px: (frame_height / BOARD_DIM as u32).max(1),
        }
    }

    pub fn square_px(&self) -> u32 {
        self.square_px
    }

    /// Edge length of the whole board in pixels.
    pub fn board_px(&self) -> u32 {
        self.square_px * BOARD_DIM as u32
    }

    /// Square under pixel `(x, y)`; `None` outside the board.
    pub fn coordinate_at(&self, x: u32, y: u32) -> Option<BoardCoordinate> {
        let col = x / self.square_px;
        let row = y / self.square_px;
        if row >= BOARD_DIM as u32 || col >= BOARD_DIM as u32 {
            return None;
        }
        BoardCoordinate::new(row as u8, col as u8)
    }

    pub fn square_rect(&self, at: BoardCoordinate) -> PixelRect {
        PixelRect::new(
            at.col() as u32 * self.square_px,
            at.row() as u32 * self.square_px,
            self.square_px,
            self.square_px,
        )
    }
}
