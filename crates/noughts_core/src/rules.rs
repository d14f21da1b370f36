//! Outcome evaluation: winning-line search and draw detection.
//!
//! Evaluation is pure — it reads the board and returns a result. Anything
//! visual (highlighting the winning line) happens in the presentation
//! layer, reacting to the [`Win`] carried in the outcome.

use crate::coord::Coord;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 triples of cells that win the game if uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// A horizontal row (0 = top).
    Row(u8),
    /// A vertical column (0 = left).
    Column(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// All 8 lines in evaluation order: rows top-to-bottom, columns
    /// left-to-right, main diagonal, anti-diagonal.
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// Returns the three cells making up this line.
    pub fn cells(self) -> [Coord; 3] {
        match self {
            Line::Row(r) => [Coord::at(r, 0), Coord::at(r, 1), Coord::at(r, 2)],
            Line::Column(c) => [Coord::at(0, c), Coord::at(1, c), Coord::at(2, c)],
            Line::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }
}

/// A decided win: which mark, along which line.
///
/// The line identity is part of the result so the presentation layer can
/// highlight it without the rules module doing any drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: Line,
}

/// The status of a match as read off a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// A mark completed a line.
    Won(Win),
    /// The board is full with no winner.
    Draw,
}

impl MatchOutcome {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            MatchOutcome::Won(win) => Some(win.mark),
            _ => None,
        }
    }
}

/// Finds the first fully-marked line in evaluation order.
#[instrument(level = "debug")]
pub fn find_win(board: &Board) -> Option<Win> {
    for line in Line::ALL {
        let [a, b, c] = line.cells();
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some(Win { mark, line });
            }
        }
    }
    None
}

/// Evaluates the board.
///
/// Returns `Won` for the first fully-marked line in the fixed scan order
/// (rows top-to-bottom, columns left-to-right, main diagonal,
/// anti-diagonal), else `Draw` if the board is full, else `InProgress`.
#[instrument(level = "debug")]
pub fn evaluate(board: &Board) -> MatchOutcome {
    if let Some(win) = find_win(board) {
        return MatchOutcome::Won(win);
    }
    if board.is_full() {
        MatchOutcome::Draw
    } else {
        MatchOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: usize, col: usize, mark: Mark) {
        board.place(Coord::new(row, col).unwrap(), mark).unwrap();
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), MatchOutcome::InProgress);
    }

    #[test]
    fn test_row_win_carries_line_identity() {
        let mut board = Board::new();
        place(&mut board, 1, 0, Mark::O);
        place(&mut board, 1, 1, Mark::O);
        place(&mut board, 1, 2, Mark::O);

        assert_eq!(
            evaluate(&board),
            MatchOutcome::Won(Win {
                mark: Mark::O,
                line: Line::Row(1),
            })
        );
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new();
        place(&mut board, 0, 2, Mark::X);
        place(&mut board, 1, 2, Mark::X);
        place(&mut board, 2, 2, Mark::X);

        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(
            outcome,
            MatchOutcome::Won(Win {
                mark: Mark::X,
                line: Line::Column(2),
            })
        );
    }

    #[test]
    fn test_diagonal_wins() {
        let mut board = Board::new();
        place(&mut board, 0, 0, Mark::X);
        place(&mut board, 1, 1, Mark::X);
        place(&mut board, 2, 2, Mark::X);
        assert_eq!(
            find_win(&board).map(|w| w.line),
            Some(Line::MainDiagonal)
        );

        let mut board = Board::new();
        place(&mut board, 0, 2, Mark::O);
        place(&mut board, 1, 1, Mark::O);
        place(&mut board, 2, 0, Mark::O);
        assert_eq!(
            find_win(&board).map(|w| w.line),
            Some(Line::AntiDiagonal)
        );
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // X holds both the top row and the left column; the row is
        // reported because rows are scanned first.
        let mut board = Board::new();
        place(&mut board, 0, 0, Mark::X);
        place(&mut board, 0, 1, Mark::X);
        place(&mut board, 0, 2, Mark::X);
        place(&mut board, 1, 0, Mark::X);
        place(&mut board, 2, 0, Mark::X);

        assert_eq!(find_win(&board).map(|w| w.line), Some(Line::Row(0)));
    }

    #[test]
    fn test_draw_requires_full_board() {
        // X O X / O X X / O X O — full, no line.
        let mut board = Board::new();
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        for (i, mark) in layout.into_iter().enumerate() {
            board.place(Coord::from_index(i).unwrap(), mark).unwrap();
        }
        assert_eq!(evaluate(&board), MatchOutcome::Draw);
    }

    #[test]
    fn test_incomplete_line_is_not_a_win() {
        let mut board = Board::new();
        place(&mut board, 0, 0, Mark::X);
        place(&mut board, 0, 1, Mark::X);
        assert_eq!(evaluate(&board), MatchOutcome::InProgress);
    }

    #[test]
    fn test_line_cells_cover_expected_coords() {
        let [a, b, c] = Line::AntiDiagonal.cells();
        assert_eq!((a.row(), a.col()), (0, 2));
        assert_eq!((b.row(), b.col()), (1, 1));
        assert_eq!((c.row(), c.col()), (2, 0));
    }
}
