use itertools::Itertools;

use super::{error::GridError, pos::Position};

/// Upper bound on the cell count of a grid, padding excluded.
pub const MAX_CELLS: usize = 1 << 28;

/// A bounded, flat grid of cells stored in row-major order. Cells outside the bounds don't exist,
/// there is no wrap-around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let cell_count = Self::check_dimensions(rows, cols)?;
        Self::with_cells(rows, cols, vec![CellState::default(); cell_count])
    }

    pub fn with_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self, GridError> {
        let cell_count = Self::check_dimensions(rows, cols)?;

        if cells.len() != cell_count {
            return Err(GridError::CellCountMismatch {
                rows,
                cols,
                expected: cell_count,
                actual: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn with_alive_cells<I, P>(rows: usize, cols: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        let mut grid = Self::new(rows, cols)?;

        for position in alive {
            let position = position.into();
            let cell = grid.cell_mut(position).ok_or(GridError::OutOfBounds {
                position,
                rows,
                cols,
            })?;

            *cell = CellState::Alive;
        }

        Ok(grid)
    }

    pub fn new_random(rows: usize, cols: usize, alive_cells: usize) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;

        if alive_cells > grid.cells.len() {
            return Err(GridError::TooManyAliveCells {
                requested: alive_cells,
                capacity: grid.cells.len(),
            });
        }

        let mut available_positions = (0..rows)
            .cartesian_product(0..cols)
            .map(Position::from)
            .collect_vec();

        for _ in 0..alive_cells {
            let chosen_index = rand::random_range(0..available_positions.len());
            let chosen_position = available_positions.swap_remove(chosen_index);

            if let Some(cell) = grid.cell_mut(chosen_position) {
                *cell = CellState::Alive;
            }
        }

        Ok(grid)
    }

    /// Returns the cell count of a `rows` x `cols` grid.
    fn check_dimensions(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyDimensions { rows, cols });
        }

        rows.checked_mul(cols)
            .filter(|cell_count| *cell_count <= MAX_CELLS)
            .ok_or(GridError::TooLarge {
                rows,
                cols,
                max_cells: MAX_CELLS,
            })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    pub fn alive_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| pos)
    }

    pub fn count_cells(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Counts the alive cells in the square window of half-width `radius` around `pos`, the centre included.
    /// The window is clipped to the grid, so cells near the edges simply have fewer cells to count.
    pub fn count_alive_neighbors(&self, pos: Position, radius: usize) -> usize {
        pos.neighborhood(radius, self.rows, self.cols)
            .filter(|&neighbor| self.cell(neighbor).is_some_and(CellState::is_alive))
            .count()
    }

    /// Builds a grid of the same shape with every cell replaced by `f(pos, cell)`.
    pub fn map_cells<F>(&self, mut f: F) -> Grid
    where
        F: FnMut(Position, CellState) -> CellState,
    {
        let cells = self
            .enumerate_cells()
            .map(|(pos, cell)| f(pos, *cell))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Copy of the grid surrounded by `border` dead cells on every side.
    /// `MAX_CELLS` keeps the padded shape far from overflowing for any reasonable border.
    pub fn padded(&self, border: usize) -> Grid {
        let rows = self.rows + border * 2;
        let cols = self.cols + border * 2;

        let mut cells = vec![CellState::Dead; rows * cols];
        for (row, source_row) in self.cells.chunks(self.cols).enumerate() {
            let start = (row + border) * cols + border;
            cells[start..start + self.cols].copy_from_slice(source_row);
        }

        Self { rows, cols, cells }
    }

    /// Row-major view of the `height` x `width` window whose top-left corner is `(top, left)`.
    /// Returns `None` if the window doesn't fit in the grid.
    pub fn window(
        &self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Option<impl Iterator<Item = CellState> + '_> {
        let bottom = top.checked_add(height)?;
        let right = left.checked_add(width)?;

        if bottom > self.rows || right > self.cols {
            return None;
        }

        let cells = (top..bottom).flat_map(move |row| {
            let start = row * self.cols;
            self.cells[start + left..start + right].iter().copied()
        });

        Some(cells)
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        pos.into().to_index(self.rows, self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position::from_index(index, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(&self) -> bool {
        *self == CellState::Alive
    }
}
