//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_core::Coord;

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Coord::new(row, col).unwrap_or(cursor)
}
