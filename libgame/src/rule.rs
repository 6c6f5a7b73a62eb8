use crate::{
    grid::{CellState, Grid},
    pos::Position,
};

/// Birth/survival neighbour counts of a life-like rule. The default is Conway's B3/S23.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl Rule {
    /// `live_neighbors` must not include the cell itself.
    pub fn next_state(&self, current: CellState, live_neighbors: usize) -> CellState {
        let alive = match current {
            CellState::Alive => self.survive.contains(&live_neighbors),
            CellState::Dead => self.birth.contains(&live_neighbors),
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }

    /// Builds the next generation. Every transition reads only from `grid`, never from the grid being built.
    pub fn evolve(&self, grid: &Grid) -> Grid {
        grid.map_cells(|pos, cell| self.evolve_cell(grid, pos, cell))
    }

    fn evolve_cell(&self, grid: &Grid, pos: Position, cell: CellState) -> CellState {
        let mut live_neighbors = grid.count_alive_neighbors(pos, 1);

        // The window count includes the centre.
        if cell.is_alive() {
            live_neighbors -= 1;
        }

        self.next_state(cell, live_neighbors)
    }
}
