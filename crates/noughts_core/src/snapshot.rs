//! Serializable view of the session for the presentation layer.

use crate::ai::Difficulty;
use crate::rules::{MatchOutcome, Win};
use crate::session::{GameMode, ScoreBoard};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything the presentation layer renders, captured at one instant.
///
/// Produced by [`MatchSession::snapshot`]; the live session holds a
/// monotonic clock and so cannot be serialized directly.
///
/// [`MatchSession::snapshot`]: crate::MatchSession::snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// The board grid.
    pub board: Board,
    /// Current match outcome.
    pub outcome: MatchOutcome,
    /// The mark whose turn it is.
    pub to_move: Mark,
    /// Time left in the current turn.
    pub remaining: Duration,
    /// Session score tallies.
    pub scores: ScoreBoard,
    /// Current game mode.
    pub mode: GameMode,
    /// Current computer skill tier.
    pub difficulty: Difficulty,
    /// The winning line, for highlight rendering.
    pub winning_line: Option<Win>,
}
