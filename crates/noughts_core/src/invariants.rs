//! First-class invariants, checked by the test suites.
//!
//! Invariants are logical properties that must hold throughout a
//! session. They are testable independently and document the engine's
//! guarantees.

use crate::rules::Line;
use crate::session::MatchSession;
use crate::types::{Board, Cell};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks whether the invariant holds.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// At most one mark holds a completed line on any reachable board.
///
/// Play stops the moment a line is completed, so a second mark never
/// gets the move that would complete its own line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut winner = None;
        for line in Line::ALL {
            let [a, b, c] = line.cells();
            let cell = board.get(a);
            if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
                if let Cell::Occupied(mark) = cell {
                    match winner {
                        None => winner = Some(mark),
                        Some(existing) if existing != mark => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "at most one mark holds a completed line"
    }
}

/// The board is exactly the replay of the recorded move history.
///
/// Verified by replaying the history onto a fresh board and comparing:
/// every recorded move must land on an empty cell, and the result must
/// equal the live board. Cells are therefore write-once between
/// restarts.
pub struct BoardMatchesHistory;

impl Invariant<MatchSession> for BoardMatchesHistory {
    fn holds(session: &MatchSession) -> bool {
        let mut replayed = Board::new();
        for mv in session.history() {
            if !replayed.is_empty(mv.coord) {
                return false;
            }
            if replayed.place(mv.coord, mv.mark).is_err() {
                return false;
            }
        }
        replayed == *session.board()
    }

    fn description() -> &'static str {
        "the board equals the replay of the move history"
    }
}
