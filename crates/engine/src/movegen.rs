//! Move generation and attack detection on a [`Position`].
//!
//! Generation is two-stage: `pseudo_moves` follows piece movement rules only, and
//! `legal_moves` drops anything that leaves the mover's king attacked.

use arrayvec::ArrayVec;

use crate::core::Placement;
use crate::types::{BoardCoordinate, PieceKind, PieceVisual, Player, MAX_DESTINATIONS};

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const KING_COL: u8 = 4;
const QUEENSIDE_ROOK_COL: u8 = 0;
const KINGSIDE_ROOK_COL: u8 = 7;

pub(crate) type MoveList = ArrayVec<Move, MAX_DESTINATIONS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveKind {
    Normal,
    DoublePush { skipped: BoardCoordinate },
    EnPassant { captured: BoardCoordinate },
    Castle { rook_from: BoardCoordinate, rook_to: BoardCoordinate },
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Move {
    pub from: BoardCoordinate,
    pub to: BoardCoordinate,
    pub kind: MoveKind,
}

impl Move {
    fn new(from: BoardCoordinate, to: BoardCoordinate, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }
}

/// Which castles are still available, indexed by player then side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CastlingRights {
    kingside: [bool; 2],
    queenside: [bool; 2],
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            kingside: [false; 2],
            queenside: [false; 2],
        }
    }

    /// Grant every castle whose king and rook stand on their home squares.
    pub fn inferred(board: &Placement) -> Self {
        let mut rights = Self::none();
        for player in Player::ALL {
            let home = player.home_row();
            let king_home = piece_is(board, home, KING_COL, player, PieceKind::King);
            let i = slot(player);
            rights.kingside[i] =
                king_home && piece_is(board, home, KINGSIDE_ROOK_COL, player, PieceKind::Rook);
            rights.queenside[i] =
                king_home && piece_is(board, home, QUEENSIDE_ROOK_COL, player, PieceKind::Rook);
        }
        rights
    }

    /// Drop rights touched by a move from `from` to `to`.
    fn update(&mut self, from: BoardCoordinate, to: BoardCoordinate) {
        for player in Player::ALL {
            let home = player.home_row();
            let i = slot(player);
            for sq in [from, to] {
                if sq.row() != home {
                    continue;
                }
                match sq.col() {
                    KING_COL => {
                        self.kingside[i] = false;
                        self.queenside[i] = false;
                    }
                    KINGSIDE_ROOK_COL => self.kingside[i] = false,
                    QUEENSIDE_ROOK_COL => self.queenside[i] = false,
                    _ => {}
                }
            }
        }
    }
}

fn slot(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

fn piece_is(board: &Placement, row: u8, col: u8, owner: Player, kind: PieceKind) -> bool {
    BoardCoordinate::new(row, col)
        .and_then(|c| board.get(c))
        .is_some_and(|p| p == PieceVisual::new(owner, kind))
}

/// Full rules position: placement plus the state placement alone cannot express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Position {
    pub board: Placement,
    pub castling: CastlingRights,
    /// Square a pawn may capture into en passant this turn.
    pub en_passant: Option<BoardCoordinate>,
}

impl Position {
    pub fn new(board: Placement) -> Self {
        let castling = CastlingRights::inferred(&board);
        Self {
            board,
            castling,
            en_passant: None,
        }
    }

    pub fn king_of(&self, player: Player) -> Option<BoardCoordinate> {
        self.board
            .pieces()
            .find(|(_, p)| *p == PieceVisual::new(player, PieceKind::King))
            .map(|(c, _)| c)
    }

    pub fn in_check(&self, player: Player) -> bool {
        self.king_of(player)
            .is_some_and(|k| is_attacked(&self.board, k, player.opponent()))
    }

    /// Play `mv` without any legality check and hand the turn over.
    pub fn apply(&mut self, mv: Move) {
        let Some(mut piece) = self.board.take(mv.from) else {
            return;
        };

        self.en_passant = None;
        match mv.kind {
            MoveKind::Normal => {}
            MoveKind::DoublePush { skipped } => self.en_passant = Some(skipped),
            MoveKind::EnPassant { captured } => {
                self.board.take(captured);
            }
            MoveKind::Castle { rook_from, rook_to } => {
                let rook = self.board.take(rook_from);
                self.board.set(rook_to, rook);
            }
            MoveKind::Promotion => piece.kind = PieceKind::Queen,
        }

        self.board.set(mv.to, Some(piece));
        self.castling.update(mv.from, mv.to);
        self.board.set_turn(self.board.turn().opponent());
    }

    /// Moves for the piece on `from` that keep its own king safe.
    pub fn legal_moves(&self, from: BoardCoordinate) -> MoveList {
        let mut out = MoveList::new();
        let Some(piece) = self.board.get(from) else {
            return out;
        };
        for mv in self.pseudo_moves(from) {
            let mut next = self.clone();
            next.apply(mv);
            if !next.in_check(piece.owner) {
                out.push(mv);
            }
        }
        out
    }

    /// True if the side to move has at least one legal move.
    pub fn has_any_legal_move(&self) -> bool {
        let turn = self.board.turn();
        self.board
            .pieces()
            .filter(|(_, p)| p.owner == turn)
            .any(|(c, _)| !self.legal_moves(c).is_empty())
    }

    fn pseudo_moves(&self, from: BoardCoordinate) -> MoveList {
        let mut out = MoveList::new();
        let Some(piece) = self.board.get(from) else {
            return out;
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves(from, piece.owner, &mut out),
            PieceKind::Knight => self.step_moves(from, piece.owner, &KNIGHT_STEPS, &mut out),
            PieceKind::Bishop => self.slide_moves(from, piece.owner, &DIAGONAL, &mut out),
            PieceKind::Rook => self.slide_moves(from, piece.owner, &ORTHOGONAL, &mut out),
            PieceKind::Queen => {
                self.slide_moves(from, piece.owner, &ORTHOGONAL, &mut out);
                self.slide_moves(from, piece.owner, &DIAGONAL, &mut out);
            }
            PieceKind::King => {
                self.step_moves(from, piece.owner, &KING_STEPS, &mut out);
                self.castle_moves(from, piece.owner, &mut out);
            }
        }
        out
    }

    fn pawn_moves(&self, from: BoardCoordinate, owner: Player, out: &mut MoveList) {
        let forward = owner.forward();
        let last_row = owner.opponent().home_row();
        let start_row = (owner.home_row() as i8 + forward) as u8;

        let advance = |to: BoardCoordinate| {
            if to.row() == last_row {
                MoveKind::Promotion
            } else {
                MoveKind::Normal
            }
        };

        if let Some(one) = from.offset(forward, 0) {
            if self.board.get(one).is_none() {
                out.push(Move::new(from, one, advance(one)));
                if from.row() == start_row {
                    if let Some(two) = one.offset(forward, 0) {
                        if self.board.get(two).is_none() {
                            out.push(Move::new(from, two, MoveKind::DoublePush { skipped: one }));
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(to) = from.offset(forward, d_col) else {
                continue;
            };
            match self.board.get(to) {
                Some(target) if target.owner != owner => {
                    out.push(Move::new(from, to, advance(to)));
                }
                None if self.en_passant == Some(to) => {
                    if let Some(captured) = from.offset(0, d_col) {
                        out.push(Move::new(from, to, MoveKind::EnPassant { captured }));
                    }
                }
                _ => {}
            }
        }
    }

    fn step_moves(
        &self,
        from: BoardCoordinate,
        owner: Player,
        steps: &[(i8, i8)],
        out: &mut MoveList,
    ) {
        for &(dr, dc) in steps {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            if self.board.get(to).map_or(true, |p| p.owner != owner) {
                out.push(Move::new(from, to, MoveKind::Normal));
            }
        }
    }

    fn slide_moves(
        &self,
        from: BoardCoordinate,
        owner: Player,
        rays: &[(i8, i8)],
        out: &mut MoveList,
    ) {
        for &(dr, dc) in rays {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, dc) {
                match self.board.get(to) {
                    None => out.push(Move::new(from, to, MoveKind::Normal)),
                    Some(p) => {
                        if p.owner != owner {
                            out.push(Move::new(from, to, MoveKind::Normal));
                        }
                        break;
                    }
                }
                cur = to;
            }
        }
    }

    fn castle_moves(&self, from: BoardCoordinate, owner: Player, out: &mut MoveList) {
        let home = owner.home_row();
        if from.row() != home || from.col() != KING_COL {
            return;
        }
        let enemy = owner.opponent();
        if is_attacked(&self.board, from, enemy) {
            return;
        }
        let i = slot(owner);

        let empty = |cols: &[u8]| {
            cols.iter().all(|&c| {
                BoardCoordinate::new(home, c).is_some_and(|sq| self.board.get(sq).is_none())
            })
        };
        let safe = |cols: &[u8]| {
            cols.iter().all(|&c| {
                BoardCoordinate::new(home, c).is_some_and(|sq| !is_attacked(&self.board, sq, enemy))
            })
        };

        if self.castling.kingside[i]
            && piece_is(&self.board, home, KINGSIDE_ROOK_COL, owner, PieceKind::Rook)
            && empty(&[5, 6])
            && safe(&[5, 6])
        {
            if let (Some(to), Some(rook_from), Some(rook_to)) = (
                BoardCoordinate::new(home, 6),
                BoardCoordinate::new(home, KINGSIDE_ROOK_COL),
                BoardCoordinate::new(home, 5),
            ) {
                out.push(Move::new(from, to, MoveKind::Castle { rook_from, rook_to }));
            }
        }

        if self.castling.queenside[i]
            && piece_is(&self.board, home, QUEENSIDE_ROOK_COL, owner, PieceKind::Rook)
            && empty(&[1, 2, 3])
            && safe(&[2, 3])
        {
            if let (Some(to), Some(rook_from), Some(rook_to)) = (
                BoardCoordinate::new(home, 2),
                BoardCoordinate::new(home, QUEENSIDE_ROOK_COL),
                BoardCoordinate::new(home, 3),
            ) {
                out.push(Move::new(from, to, MoveKind::Castle { rook_from, rook_to }));
            }
        }
    }
}

/// Whether any piece of `by` attacks `sq`.
pub(crate) fn is_attacked(board: &Placement, sq: BoardCoordinate, by: Player) -> bool {
    let holds = |c: Option<BoardCoordinate>, kinds: &[PieceKind]| {
        c.and_then(|c| board.get(c))
            .is_some_and(|p| p.owner == by && kinds.contains(&p.kind))
    };

    // A pawn of `by` attacks one row ahead of itself, so look one row behind `sq`.
    let back = -by.forward();
    if holds(sq.offset(back, -1), &[PieceKind::Pawn]) || holds(sq.offset(back, 1), &[PieceKind::Pawn]) {
        return true;
    }

    if KNIGHT_STEPS
        .iter()
        .any(|&(dr, dc)| holds(sq.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_STEPS
        .iter()
        .any(|&(dr, dc)| holds(sq.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    let ray_hits = |rays: &[(i8, i8)], kinds: &[PieceKind]| {
        rays.iter().any(|&(dr, dc)| {
            let mut cur = sq;
            while let Some(next) = cur.offset(dr, dc) {
                if let Some(p) = board.get(next) {
                    return p.owner == by && kinds.contains(&p.kind);
                }
                cur = next;
            }
            false
        })
    };

    ray_hits(&ORTHOGONAL, &[PieceKind::Rook, PieceKind::Queen])
        || ray_hits(&DIAGONAL, &[PieceKind::Bishop, PieceKind::Queen])
}
