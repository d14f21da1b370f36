//! The computer opponent: tiered move-selection heuristics.
//!
//! No game-tree search at any tier. Hard plays the classic positional
//! ladder: win, block, center, corner, edge.

use crate::coord::Coord;
use crate::rules;
use crate::types::{Board, Mark};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Computer opponent skill tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumIter)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Wins or blocks when possible, otherwise random.
    Medium,
    /// Wins, blocks, then prefers center over corners over edges.
    Hard,
}

impl Difficulty {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles Easy -> Medium -> Hard -> Easy.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Picks an empty cell for `mark` according to the difficulty tier.
///
/// Returns `None` only when the board has no empty cells, which a
/// correctly-driven session never asks about. Hypothetical moves are
/// tested on a scratch copy; the real board is never touched.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    mark: Mark,
    rng: &mut impl Rng,
) -> Option<Coord> {
    let choice = match difficulty {
        Difficulty::Easy => random_cell(board, rng),
        Difficulty::Medium => completing_cell(board, mark)
            .or_else(|| completing_cell(board, mark.opponent()))
            .or_else(|| random_cell(board, rng)),
        Difficulty::Hard => completing_cell(board, mark)
            .or_else(|| completing_cell(board, mark.opponent()))
            .or_else(|| center(board))
            .or_else(|| random_among(board, &Coord::CORNERS, rng))
            .or_else(|| random_among(board, &Coord::EDGES, rng)),
    };
    if let Some(coord) = choice {
        debug!(%coord, "computer chose cell");
    }
    choice
}

/// First empty cell, in row-major order, that completes a line for
/// `mark`. Ties are broken by the lowest row-major index.
fn completing_cell(board: &Board, mark: Mark) -> Option<Coord> {
    for coord in board.empty_cells() {
        let mut scratch = board.clone();
        if scratch.place(coord, mark).is_err() {
            continue;
        }
        if rules::find_win(&scratch).is_some_and(|w| w.mark == mark) {
            return Some(coord);
        }
    }
    None
}

fn center(board: &Board) -> Option<Coord> {
    board.is_empty(Coord::CENTER).then_some(Coord::CENTER)
}

/// Uniform pick over all empty cells.
fn random_cell(board: &Board, rng: &mut impl Rng) -> Option<Coord> {
    pick(&board.empty_cells(), rng)
}

/// Uniform pick over the empty cells among `candidates`.
fn random_among(board: &Board, candidates: &[Coord], rng: &mut impl Rng) -> Option<Coord> {
    let open: Vec<Coord> = candidates
        .iter()
        .copied()
        .filter(|c| board.is_empty(*c))
        .collect();
    pick(&open, rng)
}

fn pick(cells: &[Coord], rng: &mut impl Rng) -> Option<Coord> {
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.random_range(0..cells.len())])
}
