//! RGBA sprites and their JSON source format.
//!
//! ```json
//! { "width": 2, "height": 2,
//!   "palette": { "#": "#000000", "w": "#ffffffcc" },
//!   "rows": ["#.", "w#"] }
//! ```
//!
//! `.` is always transparent. Every other character must be a single-character key
//! in `palette`, whose value is `#rrggbb` or `#rrggbbaa`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::Rgba;

/// Palette character reserved for a fully transparent pixel.
pub const TRANSPARENT_CHAR: char = '.';

/// A decoded image, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Build from raw pixels. `None` if the buffer length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A single-colour sprite. Mostly useful for tests and placeholders.
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let len = (width.max(1) as usize) * (height.max(1) as usize);
        Self {
            width: width.max(1),
            height: height.max(1),
            pixels: vec![color; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Nearest-neighbour resample to `width x height`.
    pub fn scaled(&self, width: u32, height: u32) -> Sprite {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return self.clone();
        }
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let sx = (x as u64 * self.width as u64 / width as u64) as u32;
                pixels.push(self.get(sx, sy));
            }
        }
        Sprite {
            width,
            height,
            pixels,
        }
    }
}

/// On-disk sprite description.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SpriteFile {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
    pub rows: Vec<String>,
}

impl SpriteFile {
    /// Decode into pixels, or describe the first problem found.
    pub fn decode(&self) -> Result<Sprite, String> {
        if self.width == 0 || self.height == 0 {
            return Err("width and height must be non-zero".to_string());
        }
        if self.rows.len() != self.height as usize {
            return Err(format!(
                "expected {} rows, found {}",
                self.height,
                self.rows.len()
            ));
        }

        let mut palette = BTreeMap::new();
        for (key, value) in &self.palette {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(format!("palette key {key:?} is not a single character"));
            };
            if ch == TRANSPARENT_CHAR {
                return Err(format!("palette may not redefine {TRANSPARENT_CHAR:?}"));
            }
            let color = parse_hex_color(value)
                .ok_or_else(|| format!("palette entry {key:?} has bad colour {value:?}"))?;
            palette.insert(ch, color);
        }

        let mut pixels = Vec::with_capacity((self.width as usize) * (self.height as usize));
        for (y, row) in self.rows.iter().enumerate() {
            let count = row.chars().count();
            if count != self.width as usize {
                return Err(format!(
                    "row {y} has {count} pixels, expected {}",
                    self.width
                ));
            }
            for ch in row.chars() {
                if ch == TRANSPARENT_CHAR {
                    pixels.push(Rgba::TRANSPARENT);
                    continue;
                }
                let color = palette
                    .get(&ch)
                    .ok_or_else(|| format!("row {y} uses {ch:?}, which is not in the palette"))?;
                pixels.push(*color);
            }
        }

        Sprite::from_pixels(self.width, self.height, pixels)
            .ok_or_else(|| "pixel buffer does not match dimensions".to_string())
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}
