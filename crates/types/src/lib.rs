//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (selection logic, rules engine, rendering, input).
//!
//! # Board Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_DIM` | 8 | Rows and columns on the board |
//! | `DEFAULT_FRAME_WIDTH` | 512 | Pixel width of the frame target |
//! | `DEFAULT_FRAME_HEIGHT` | 512 | Pixel height of the frame target |
//! | `DEFAULT_SQUARE_PX` | 64 | `DEFAULT_FRAME_HEIGHT / BOARD_DIM` |
//! | `DEFAULT_TARGET_FPS` | 15 | Frame cycles per second |
//!
//! Row 0 is the top of the board (player two's back rank), column 0 is the left edge.
//!
//! # Examples
//!
//! ```
//! use click_chess_types::{BoardCoordinate, PieceKind, PieceVisual, Player};
//!
//! let c = BoardCoordinate::new(6, 0).unwrap();
//! assert_eq!((c.row(), c.col()), (6, 0));
//! assert!(BoardCoordinate::new(8, 0).is_none());
//!
//! let pawn = PieceVisual::new(Player::One, PieceKind::Pawn);
//! assert_eq!(pawn.asset_name(), "white_pawn");
//! ```

use std::fmt;

/// Rows and columns on the board.
pub const BOARD_DIM: u8 = 8;

/// Default frame target width in pixels.
pub const DEFAULT_FRAME_WIDTH: u32 = 512;

/// Default frame target height in pixels.
pub const DEFAULT_FRAME_HEIGHT: u32 = 512;

/// Default square edge in pixels (frame height / board dimension).
pub const DEFAULT_SQUARE_PX: u32 = DEFAULT_FRAME_HEIGHT / BOARD_DIM as u32;

/// Default frame cycles per second.
pub const DEFAULT_TARGET_FPS: u32 = 15;

/// Opacity of the selection and destination overlays (100/255, about 39%).
pub const HIGHLIGHT_ALPHA: u8 = 100;

/// Upper bound on destinations from one square. A queen in the centre reaches 27.
pub const MAX_DESTINATIONS: usize = 32;

/// The two seats at the board.
///
/// Player one plays white and starts on the bottom two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Colour name used in asset file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "white",
            Player::Two => "black",
        }
    }

    /// Row direction a pawn of this player advances in.
    pub fn forward(self) -> i8 {
        match self {
            Player::One => -1,
            Player::Two => 1,
        }
    }

    /// Back rank row for this player.
    pub fn home_row(self) -> u8 {
        match self {
            Player::One => BOARD_DIM - 1,
            Player::Two => 0,
        }
    }
}

/// The six chess piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse piece kind from its lowercase name (case-insensitive).
    ///
    /// ```
    /// use click_chess_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("Knight"), Some(PieceKind::Knight));
    /// assert_eq!(PieceKind::from_str("dragon"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pawn" => Some(PieceKind::Pawn),
            "knight" => Some(PieceKind::Knight),
            "bishop" => Some(PieceKind::Bishop),
            "rook" => Some(PieceKind::Rook),
            "queen" => Some(PieceKind::Queen),
            "king" => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece as drawn on screen: who owns it and what it is.
///
/// Rendering lookups only; carries no gameplay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceVisual {
    pub owner: Player,
    pub kind: PieceKind,
}

impl PieceVisual {
    /// Number of distinct owner/kind combinations.
    pub const COUNT: usize = 12;

    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }

    /// Dense index in `0..PieceVisual::COUNT`, owner-major.
    pub fn index(&self) -> usize {
        let owner = match self.owner {
            Player::One => 0,
            Player::Two => 1,
        };
        owner * PieceKind::ALL.len() + self.kind.ordinal()
    }

    /// Every owner/kind combination, in `index()` order.
    pub fn all() -> impl Iterator<Item = PieceVisual> {
        Player::ALL
            .into_iter()
            .flat_map(|owner| PieceKind::ALL.into_iter().map(move |kind| Self::new(owner, kind)))
    }

    /// Asset stem, e.g. `white_knight`.
    pub fn asset_name(&self) -> String {
        format!("{}_{}", self.owner.as_str(), self.kind.as_str())
    }
}

/// Contents of one board square. `None` is empty.
pub type Square = Option<PieceVisual>;

/// A square on the board, both components in `0..BOARD_DIM`.
///
/// The fields are private so an out-of-range coordinate can never be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardCoordinate {
    row: u8,
    col: u8,
}

impl BoardCoordinate {
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_DIM && col < BOARD_DIM {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Step by a signed delta, `None` when it leaves the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Row-major index in `0..64`.
    pub fn index(&self) -> usize {
        self.row as usize * BOARD_DIM as usize + self.col as usize
    }

    /// `(row + col) mod 2 == 0` squares are light.
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = BoardCoordinate> {
        (0..BOARD_DIM).flat_map(|row| (0..BOARD_DIM).map(move |col| Self { row, col }))
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Source-over blend of `src` at `alpha` (0 = keep self, 255 = replace).
    pub fn blend(self, src: Rgb, alpha: u8) -> Rgb {
        let a = alpha as u16;
        let mix = |dst: u8, src: u8| -> u8 {
            ((src as u16 * a + dst as u16 * (255 - a) + 127) / 255) as u8
        };
        Rgb::new(mix(self.r, src.r), mix(self.g, src.g), mix(self.b, src.b))
    }
}

/// RGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}
