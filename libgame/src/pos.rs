use std::fmt;

use itertools::Itertools;

/// A cell coordinate, row first. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the `index`-th cell of a row-major buffer `cols` cells wide.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Row-major index in a `rows` x `cols` buffer, `None` outside of it.
    pub fn to_index(self, rows: usize, cols: usize) -> Option<usize> {
        if self.row >= rows || self.col >= cols {
            return None;
        }

        Some(self.col + self.row * cols)
    }

    /// The square of side `2 * radius + 1` centred here, clipped to a `rows` x `cols` grid.
    /// Includes the centre.
    pub fn neighborhood(self, radius: usize, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
        let row_range = self.row.saturating_sub(radius)..self.row.saturating_add(radius + 1).min(rows);
        let col_range = self.col.saturating_sub(radius)..self.col.saturating_add(radius + 1).min(cols);

        row_range.cartesian_product(col_range).map(Position::from)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
