//! Validated board coordinates.

use serde::{Deserialize, Serialize};

/// A board coordinate with row and column both in `[0, 2]`.
///
/// Validity is guaranteed by construction: the only public constructors
/// are [`Coord::new`] and [`Coord::from_index`], which reject anything
/// off the board. Indexing is row-major, matching the board layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// The center cell (1, 1).
    pub const CENTER: Coord = Coord { row: 1, col: 1 };

    /// The four corner cells, row-major.
    pub const CORNERS: [Coord; 4] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 2 },
    ];

    /// The four edge cells, row-major.
    pub const EDGES: [Coord; 4] = [
        Coord { row: 0, col: 1 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 1 },
    ];

    /// All 9 cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, returning `None` if either component is
    /// outside `[0, 2]`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Constructs from components known to be in range.
    ///
    /// Callers must only pass values in `[0, 2]`.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Converts to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: (index / 3) as u8,
                col: (index % 3) as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(0, 0).is_some());
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
        assert!(Coord::new(7, 7).is_none());
    }

    #[test]
    fn test_index_round_trip() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_all_is_row_major() {
        let mut last = None;
        for coord in Coord::ALL {
            if let Some(prev) = last {
                assert!(coord.index() > prev);
            }
            last = Some(coord.index());
        }
    }

    #[test]
    fn test_constant_sets_partition_the_board() {
        let mut cells: Vec<Coord> = Vec::new();
        cells.push(Coord::CENTER);
        cells.extend(Coord::CORNERS);
        cells.extend(Coord::EDGES);
        cells.sort_by_key(|c| c.index());
        assert_eq!(cells.len(), 9);
        assert_eq!(cells, Coord::ALL.to_vec());
    }
}
