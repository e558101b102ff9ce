//! Plain board placement.
//!
//! [`Placement`] is the smallest thing that satisfies [`BoardSnapshot`]: 64 squares and a
//! side to move. The rules engine keeps one as its position, and tests build synthetic
//! ones to drive the renderer without any rules at all.

use crate::rules::BoardSnapshot;
use crate::types::{BoardCoordinate, PieceKind, PieceVisual, Player, Square, BOARD_DIM};

const SQUARES: usize = (BOARD_DIM as usize) * (BOARD_DIM as usize);

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    squares: [Square; SQUARES],
    turn: Player,
}

impl Placement {
    /// An empty board with `turn` to move.
    pub fn empty(turn: Player) -> Self {
        Self {
            squares: [None; SQUARES],
            turn,
        }
    }

    /// The standard opening position, player one (white) to move.
    pub fn standard() -> Self {
        let mut board = Self::empty(Player::One);
        for player in Player::ALL {
            let home = player.home_row();
            let pawns = (home as i8 + player.forward()) as u8;
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                board.put(home, col, Some(PieceVisual::new(player, *kind)));
                board.put(pawns, col, Some(PieceVisual::new(player, PieceKind::Pawn)));
            }
        }
        board
    }

    pub fn get(&self, at: BoardCoordinate) -> Square {
        self.squares[at.index()]
    }

    pub fn set(&mut self, at: BoardCoordinate, square: Square) {
        self.squares[at.index()] = square;
    }

    /// Take whatever stands on `at`, leaving it empty.
    pub fn take(&mut self, at: BoardCoordinate) -> Square {
        self.squares[at.index()].take()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Player) {
        self.turn = turn;
    }

    /// Builder-style placement for tests and fixtures.
    pub fn with(mut self, row: u8, col: u8, owner: Player, kind: PieceKind) -> Self {
        self.put(row, col, Some(PieceVisual::new(owner, kind)));
        self
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (BoardCoordinate, PieceVisual)> + '_ {
        BoardCoordinate::all().filter_map(move |c| self.get(c).map(|p| (c, p)))
    }

    fn put(&mut self, row: u8, col: u8, square: Square) {
        if let Some(at) = BoardCoordinate::new(row, col) {
            self.set(at, square);
        }
    }
}

impl BoardSnapshot for Placement {
    fn piece_at(&self, at: BoardCoordinate) -> Square {
        self.get(at)
    }

    fn whose_turn(&self) -> Player {
        self.turn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    #[test]
    fn standard_layout_has_32_pieces() {
        let board = Placement::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.turn(), Player::One);
    }

    #[test]
    fn standard_layout_puts_white_at_the_bottom() {
        let board = Placement::standard();
        assert_eq!(
            board.get(at(7, 4)),
            Some(PieceVisual::new(Player::One, PieceKind::King))
        );
        assert_eq!(
            board.get(at(6, 0)),
            Some(PieceVisual::new(Player::One, PieceKind::Pawn))
        );
        assert_eq!(
            board.get(at(0, 3)),
            Some(PieceVisual::new(Player::Two, PieceKind::Queen))
        );
        assert_eq!(board.get(at(4, 4)), None);
    }

    #[test]
    fn take_empties_the_square() {
        let mut board = Placement::empty(Player::Two).with(2, 2, Player::Two, PieceKind::Rook);
        assert!(board.take(at(2, 2)).is_some());
        assert_eq!(board.get(at(2, 2)), None);
        assert_eq!(board.whose_turn(), Player::Two);
    }
}
