//! Move records and the session-level error taxonomy.

use crate::coord::Coord;
use crate::types::{Mark, PlaceError};
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
///
/// Recorded in the match history so the session's board can always be
/// reconstructed by replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Errors surfaced by [`MatchSession::attempt_move`].
///
/// None of these are fatal: the presentation layer treats all of them as
/// a no-op and leaves the session untouched.
///
/// [`MatchSession::attempt_move`]: crate::MatchSession::attempt_move
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates outside `[0, 2]` — a presentation-layer bug.
    #[display("coordinates ({_0}, {_1}) are outside the board")]
    OutOfRange(usize, usize),
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The match is over; no moves are accepted until restart.
    #[display("the match is already over")]
    MatchOver,
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::CellOccupied => MoveError::Occupied,
        }
    }
}
