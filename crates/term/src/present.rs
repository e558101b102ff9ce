//! Pixel frame -> terminal cells.
//!
//! The board region of the pixel frame is resampled onto a square grid of
//! "sub-pixels", two per terminal cell stacked vertically using `▀` (foreground is
//! the top half, background the bottom). The grid edge is a multiple of 16 so every
//! board square covers a whole number of cells, which keeps the click mapping
//! exact.
//!
//! One row under the board is kept for a status line.

use crate::fb::{CellStyle, FrameBuffer};
use crate::pixels::PixelFrame;
use crate::types::{Rgb, BOARD_DIM};

const UPPER_HALF: char = '▀';

/// Sub-pixel edge granularity: 8 squares, 2 sub-pixels per cell row.
const SIDE_STEP: u16 = BOARD_DIM as u16 * 2;

const TOO_SMALL: &str = "terminal too small";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board sits in the terminal, and how cells map to frame pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    /// Board edge in sub-pixels: `side` columns by `side / 2` rows.
    side: u16,
    /// Board edge in frame pixels.
    board_px: u32,
}

impl BoardLayout {
    /// Fit a `board_px`-pixel board into `viewport`, centred. `None` if it cannot fit.
    pub fn fit(viewport: Viewport, board_px: u32) -> Option<Self> {
        let rows = viewport.height.saturating_sub(1);
        let max_side = viewport.width.min(rows.saturating_mul(2));
        let side = max_side - max_side % SIDE_STEP;
        if side == 0 || board_px == 0 {
            return None;
        }
        Some(Self {
            origin_x: (viewport.width - side) / 2,
            origin_y: (rows - side / 2) / 2,
            side,
            board_px,
        })
    }

    pub fn origin(&self) -> (u16, u16) {
        (self.origin_x, self.origin_y)
    }

    /// Board size in terminal cells.
    pub fn cells(&self) -> (u16, u16) {
        (self.side, self.side / 2)
    }

    /// Frame pixel under the centre of terminal cell `(column, row)`.
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Option<(u32, u32)> {
        let (w, h) = self.cells();
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let i = (column - self.origin_x) as u32;
        let j = (row - self.origin_y) as u32;
        if i >= w as u32 || j >= h as u32 {
            return None;
        }
        let side = self.side as u32;
        let x = (2 * i + 1) * self.board_px / (2 * side);
        let y = (2 * j + 1) * self.board_px / side;
        Some((x, y))
    }

    /// Frame pixel sampled for sub-pixel `(sx, sy)`.
    fn sample_point(&self, sx: u32, sy: u32) -> (u32, u32) {
        let side = self.side as u32;
        (
            (2 * sx + 1) * self.board_px / (2 * side),
            (2 * sy + 1) * self.board_px / (2 * side),
        )
    }
}

/// Downsample `frame` into `fb`, sized to `viewport`.
///
/// Returns the layout used, or `None` when the viewport is too small (a notice is
/// drawn instead).
pub fn present_into(
    frame: &PixelFrame,
    board_px: u32,
    status: &str,
    viewport: Viewport,
    fb: &mut FrameBuffer,
) -> Option<BoardLayout> {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));

    let board_px = board_px.min(frame.width()).min(frame.height());
    let Some(layout) = BoardLayout::fit(viewport, board_px) else {
        fb.put_str(0, 0, TOO_SMALL, CellStyle::default());
        return None;
    };

    let (w, h) = layout.cells();
    let (ox, oy) = layout.origin();
    let sample = |sx: u32, sy: u32| -> Rgb {
        let (x, y) = layout.sample_point(sx, sy);
        frame.get(x, y).unwrap_or_default()
    };

    for j in 0..h {
        for i in 0..w {
            let top = sample(i as u32, 2 * j as u32);
            let bottom = sample(i as u32, 2 * j as u32 + 1);
            fb.set(ox + i, oy + j, CellStyle::new(top, bottom).into_cell(UPPER_HALF));
        }
    }

    let text_w = status.chars().count() as u16;
    let status_x = ox + w.saturating_sub(text_w) / 2;
    fb.put_str(status_x, oy + h, status, CellStyle::default());

    Some(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardGeometry;
    use crate::pixels::FrameTarget;
    use crate::types::BoardCoordinate;

    #[test]
    fn fit_rounds_down_to_whole_squares() {
        // 80x25: 24 usable rows -> 48 sub-pixels, width 80 -> side 48.
        let l = BoardLayout::fit(Viewport::new(80, 25), 512).unwrap();
        assert_eq!(l.cells(), (48, 24));
        assert_eq!(l.origin(), (16, 0));
    }

    #[test]
    fn fit_is_limited_by_width_too() {
        let l = BoardLayout::fit(Viewport::new(40, 100), 512).unwrap();
        assert_eq!(l.cells(), (32, 16));
    }

    #[test]
    fn fit_fails_on_tiny_terminals() {
        assert!(BoardLayout::fit(Viewport::new(15, 40), 512).is_none());
        assert!(BoardLayout::fit(Viewport::new(80, 8), 512).is_none());
    }

    #[test]
    fn every_cell_maps_to_the_square_it_shows() {
        let geometry = BoardGeometry::default();
        for vp in [Viewport::new(80, 25), Viewport::new(200, 60), Viewport::new(17, 9)] {
            let l = BoardLayout::fit(vp, geometry.board_px()).unwrap();
            let (w, h) = l.cells();
            let (ox, oy) = l.origin();
            let cols_per_square = w / BOARD_DIM as u16;
            let rows_per_square = h / BOARD_DIM as u16;
            for j in 0..h {
                for i in 0..w {
                    let (x, y) = l.cell_to_pixel(ox + i, oy + j).unwrap();
                    let expected = BoardCoordinate::new(
                        (j / rows_per_square) as u8,
                        (i / cols_per_square) as u8,
                    );
                    assert_eq!(geometry.coordinate_at(x, y), expected, "cell ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn cells_outside_the_board_map_to_nothing() {
        let l = BoardLayout::fit(Viewport::new(80, 25), 512).unwrap();
        let (ox, oy) = l.origin();
        let (w, h) = l.cells();
        assert_eq!(l.cell_to_pixel(ox - 1, oy), None);
        assert_eq!(l.cell_to_pixel(ox + w, oy), None);
        assert_eq!(l.cell_to_pixel(ox, oy + h), None);
    }

    #[test]
    fn half_blocks_carry_top_and_bottom_colours() {
        let mut frame = PixelFrame::new(512, 512);
        frame.clear(Rgb::new(10, 10, 10));
        // Paint the bottom half of the first square row red.
        frame.fill_rect(crate::core::PixelRect::new(0, 32, 512, 32), Rgb::new(200, 0, 0));

        // 16x9 viewport -> side 16, one cell row per square.
        let mut fb = FrameBuffer::new(1, 1);
        let layout = present_into(&frame, 512, "", Viewport::new(16, 9), &mut fb).unwrap();
        assert_eq!(layout.cells(), (16, 8));

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, UPPER_HALF);
        assert_eq!(cell.style.fg, Rgb::new(10, 10, 10));
        assert_eq!(cell.style.bg, Rgb::new(200, 0, 0));
    }

    #[test]
    fn status_line_sits_under_the_board() {
        let frame = PixelFrame::new(512, 512);
        let mut fb = FrameBuffer::new(1, 1);
        present_into(&frame, 512, "white to move", Viewport::new(32, 17), &mut fb).unwrap();
        assert!(fb.row_text(16).contains("white to move"));
    }

    #[test]
    fn tiny_viewport_shows_notice() {
        let frame = PixelFrame::new(512, 512);
        let mut fb = FrameBuffer::new(1, 1);
        assert!(present_into(&frame, 512, "", Viewport::new(20, 4), &mut fb).is_none());
        assert!(fb.row_text(0).starts_with("terminal too"));
    }
}
