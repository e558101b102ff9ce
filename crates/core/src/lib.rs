//! Board-side logic: pure, deterministic, and testable
//!
//! This crate holds everything between a raw click and a rendered frame that does not
//! touch a terminal or a file:
//!
//! - [`rules`]: the [`RulesEngine`] / [`BoardSnapshot`] boundary the board talks to
//! - [`selection`]: the two-click [`SelectionController`] state machine
//! - [`geometry`]: pixel <-> square mapping for the frame target
//! - [`snapshot`]: [`Placement`], a plain 8x8 board usable as a snapshot
//!
//! # Example
//!
//! ```
//! use click_chess_core::{BoardGeometry, BoardSnapshot, Placement, SelectionController, SelectionState};
//! use click_chess_core::types::{PieceKind, Player};
//!
//! let board = Placement::standard();
//! let geometry = BoardGeometry::from_frame_height(512);
//!
//! // A click at pixel (10, 400) lands on row 6, column 0: a white pawn.
//! let at = geometry.coordinate_at(10, 400).unwrap();
//! assert_eq!(board.piece_at(at).map(|p| (p.owner, p.kind)), Some((Player::One, PieceKind::Pawn)));
//!
//! let selection = SelectionController::new();
//! assert_eq!(selection.state(), SelectionState::Empty);
//! ```

pub mod geometry;
pub mod rules;
pub mod selection;
pub mod snapshot;

pub use click_chess_types as types;

pub use geometry::{BoardGeometry, PixelRect};
pub use rules::{BoardSnapshot, LegalDestinations, MoveVerdict, RulesEngine};
pub use selection::{ClickOutcome, SelectionController, SelectionState};
pub use snapshot::Placement;
