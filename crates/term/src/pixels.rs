//! Pixel frame target.

use crate::assets::Sprite;
use crate::core::PixelRect;
use crate::types::Rgb;

/// Anything the board can be painted onto.
///
/// All operations clip to the target's bounds.
pub trait FrameTarget {
    /// Opaque fill.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Translucent overlay of `color` at `alpha` (0..=255).
    fn tint_rect(&mut self, rect: PixelRect, color: Rgb, alpha: u8);

    /// Alpha-composite `sprite` stretched over `rect`.
    fn blit(&mut self, rect: PixelRect, sprite: &Sprite);
}

/// Opaque RGB pixel buffer, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelFrame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Visit every in-bounds pixel of `rect` with its local offset.
    fn for_each_in(&mut self, rect: PixelRect, mut f: impl FnMut(u32, u32, &mut Rgb)) {
        let x_end = rect.x.saturating_add(rect.w).min(self.width);
        let y_end = rect.y.saturating_add(rect.h).min(self.height);
        for y in rect.y..y_end {
            let row = (y as usize) * (self.width as usize);
            for x in rect.x..x_end {
                f(x - rect.x, y - rect.y, &mut self.pixels[row + x as usize]);
            }
        }
    }
}

impl FrameTarget for PixelFrame {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.for_each_in(rect, |_, _, px| *px = color);
    }

    fn tint_rect(&mut self, rect: PixelRect, color: Rgb, alpha: u8) {
        self.for_each_in(rect, |_, _, px| *px = px.blend(color, alpha));
    }

    fn blit(&mut self, rect: PixelRect, sprite: &Sprite) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let (sw, sh) = (sprite.width() as u64, sprite.height() as u64);
        let (rw, rh) = (rect.w as u64, rect.h as u64);
        self.for_each_in(rect, |dx, dy, px| {
            let src = sprite.get((dx as u64 * sw / rw) as u32, (dy as u64 * sh / rh) as u32);
            if src.a != 0 {
                *px = px.blend(src.rgb(), src.a);
            }
        });
    }
}
