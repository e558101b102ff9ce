//! Reference rules engine.
//!
//! [`StandardRules`] plays standard chess behind the [`RulesEngine`] boundary so the
//! board has something real to talk to. It covers piece movement, captures, castling,
//! en passant, queen auto-promotion, check filtering, and mate/stalemate detection.
//! Nothing in the board UI depends on how it does any of that.
//!
//! ```
//! use click_chess_core::{BoardSnapshot, MoveVerdict, RulesEngine};
//! use click_chess_core::types::{BoardCoordinate, Player};
//! use click_chess_engine::StandardRules;
//!
//! let mut rules = StandardRules::new();
//! let e2 = BoardCoordinate::new(6, 4).unwrap();
//! let e4 = BoardCoordinate::new(4, 4).unwrap();
//!
//! assert!(rules.valid_moves(e2).contains(&e4));
//! assert_eq!(rules.move_piece(e2, e4), MoveVerdict::Applied);
//! assert_eq!(rules.whose_turn(), Player::Two);
//! ```

mod movegen;

pub use click_chess_core as core;
pub use click_chess_types as types;

use crate::core::{BoardSnapshot, LegalDestinations, MoveVerdict, Placement, RulesEngine};
use crate::types::{BoardCoordinate, Player, Square};
use movegen::Position;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StandardRules {
    position: Position,
    status: GameStatus,
}

impl Default for StandardRules {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardRules {
    /// Standard opening position, player one to move.
    pub fn new() -> Self {
        Self::from_placement(Placement::standard())
    }

    /// Start from an arbitrary placement.
    ///
    /// Castling is allowed wherever a king and rook still stand on their home
    /// squares; no en passant capture is pending.
    pub fn from_placement(board: Placement) -> Self {
        let position = Position::new(board);
        let status = evaluate(&position);
        Self { position, status }
    }

    pub fn placement(&self) -> &Placement {
        &self.position.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}

fn evaluate(position: &Position) -> GameStatus {
    let turn = position.board.turn();
    let in_check = position.in_check(turn);
    match (position.has_any_legal_move(), in_check) {
        (true, false) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}

impl BoardSnapshot for StandardRules {
    fn piece_at(&self, at: BoardCoordinate) -> Square {
        self.position.board.get(at)
    }

    fn whose_turn(&self) -> Player {
        self.position.board.turn()
    }
}

impl RulesEngine for StandardRules {
    fn is_selectable_piece(&self, at: BoardCoordinate) -> bool {
        self.position.board.get(at).is_some()
    }

    fn valid_moves(&self, from: BoardCoordinate) -> LegalDestinations {
        let mut out = LegalDestinations::new();
        if self.status.is_over() {
            return out;
        }
        match self.position.board.get(from) {
            Some(piece) if piece.owner == self.whose_turn() => {
                out.extend(self.position.legal_moves(from).iter().map(|m| m.to));
            }
            _ => {}
        }
        out
    }

    fn move_piece(&mut self, from: BoardCoordinate, to: BoardCoordinate) -> MoveVerdict {
        if self.status.is_over() {
            return MoveVerdict::Rejected;
        }
        let owner = match self.position.board.get(from) {
            Some(piece) => piece.owner,
            None => return MoveVerdict::Rejected,
        };
        if owner != self.whose_turn() {
            return MoveVerdict::Rejected;
        }
        let Some(mv) = self
            .position
            .legal_moves(from)
            .into_iter()
            .find(|m| m.to == to)
        else {
            return MoveVerdict::Rejected;
        };

        self.position.apply(mv);
        let status = evaluate(&self.position);
        if status != self.status {
            tracing::info!(
                status = status.as_str(),
                to_move = self.whose_turn().as_str(),
                "game status changed"
            );
        }
        self.status = status;
        MoveVerdict::Applied
    }
}
