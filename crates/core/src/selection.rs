//! Two-click selection state machine.
//!
//! The first click arms a source square and asks the rules engine where the piece
//! on it may go. The second click either cancels (same square), is discarded
//! (nothing to move on the source), or becomes a move request. Every path out of
//! `OneSquareSelected` lands back in `Empty` with the destination set cleared.
//!
//! | state | click | condition | next | effect |
//! |-------|-------|-----------|------|--------|
//! | `Empty` | `c` | - | `OneSquareSelected(c)` | destinations = `valid_moves(c)` |
//! | `OneSquareSelected(c)` | `c` | - | `Empty` | clear |
//! | `OneSquareSelected(c)` | `c2` | `c` not selectable | `Empty` | clear, no move |
//! | `OneSquareSelected(c)` | `c2` | `c` selectable | `Empty` | `move_piece(c, c2)`, clear |

use crate::rules::{LegalDestinations, MoveVerdict, RulesEngine};
use crate::types::BoardCoordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    OneSquareSelected(BoardCoordinate),
}

impl SelectionState {
    pub fn selected(&self) -> Option<BoardCoordinate> {
        match self {
            SelectionState::Empty => None,
            SelectionState::OneSquareSelected(at) => Some(*at),
        }
    }
}

/// What a single click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A source square was armed with `destinations` legal targets.
    Selected {
        at: BoardCoordinate,
        destinations: usize,
    },
    /// The armed square was clicked again.
    Deselected { at: BoardCoordinate },
    /// The armed square held nothing movable; the click pair was dropped.
    Discarded {
        from: BoardCoordinate,
        to: BoardCoordinate,
    },
    /// A move request went to the rules engine.
    MoveSubmitted {
        from: BoardCoordinate,
        to: BoardCoordinate,
        verdict: MoveVerdict,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    destinations: LegalDestinations,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Destinations for the armed square; empty whenever the state is `Empty`.
    pub fn destinations(&self) -> &[BoardCoordinate] {
        &self.destinations
    }

    /// Drop any selection, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
        self.destinations.clear();
    }

    /// Feed one click. Total over every (state, click) pair.
    pub fn click<E>(&mut self, engine: &mut E, at: BoardCoordinate) -> ClickOutcome
    where
        E: RulesEngine + ?Sized,
    {
        let from = match self.state {
            SelectionState::Empty => {
                self.destinations = engine.valid_moves(at);
                self.state = SelectionState::OneSquareSelected(at);
                tracing::debug!(%at, destinations = self.destinations.len(), "square selected");
                return ClickOutcome::Selected {
                    at,
                    destinations: self.destinations.len(),
                };
            }
            SelectionState::OneSquareSelected(from) => from,
        };

        self.reset();

        if from == at {
            tracing::debug!(%at, "selection cleared");
            return ClickOutcome::Deselected { at };
        }

        if !engine.is_selectable_piece(from) {
            tracing::debug!(%from, to = %at, "nothing to move, click pair discarded");
            return ClickOutcome::Discarded { from, to: at };
        }

        let verdict = engine.move_piece(from, at);
        match verdict {
            MoveVerdict::Applied => tracing::debug!(%from, to = %at, "move applied"),
            MoveVerdict::Rejected => tracing::debug!(%from, to = %at, "move rejected"),
        }
        ClickOutcome::MoveSubmitted {
            from,
            to: at,
            verdict,
        }
    }
}
