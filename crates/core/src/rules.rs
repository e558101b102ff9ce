//! The narrow boundary between the board UI and whatever enforces chess rules.

use arrayvec::ArrayVec;

use crate::types::{BoardCoordinate, Player, Square, MAX_DESTINATIONS};

/// Ordered destination squares for one selected piece.
pub type LegalDestinations = ArrayVec<BoardCoordinate, MAX_DESTINATIONS>;

/// What the rules engine did with a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    Applied,
    Rejected,
}

/// Read-only view of piece placement and whose turn it is.
pub trait BoardSnapshot {
    fn piece_at(&self, at: BoardCoordinate) -> Square;

    fn whose_turn(&self) -> Player;
}

/// A rules engine as seen from the board.
///
/// Implementations own the position; the board only ever asks questions and
/// submits moves.
pub trait RulesEngine: BoardSnapshot {
    /// True iff a piece occupies `at` that could be the source of a move request.
    fn is_selectable_piece(&self, at: BoardCoordinate) -> bool;

    /// Destinations for the piece on `from`. Empty for an empty square, an
    /// opponent piece, or a piece with no legal moves.
    fn valid_moves(&self, from: BoardCoordinate) -> LegalDestinations;

    /// Try to play `from -> to`. An illegal request must leave the position unchanged.
    fn move_piece(&mut self, from: BoardCoordinate, to: BoardCoordinate) -> MoveVerdict;
}
