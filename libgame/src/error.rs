use thiserror::Error;

use crate::pos::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} exceeds the limit of {max_cells} cells")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_cells: usize,
    },

    #[error("grid of {rows}x{cols} needs {expected} cells, got {actual}")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cell {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("cannot place {requested} alive cells on a grid of {capacity} cells")]
    TooManyAliveCells { requested: usize, capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("template {variant} has an empty {height}x{width} shape")]
    EmptyShape {
        variant: &'static str,
        height: usize,
        width: usize,
    },

    #[error("template {variant} declares {height}x{width} = {expected} cells but its bitmap holds {actual}")]
    ShapeMismatch {
        variant: &'static str,
        height: usize,
        width: usize,
        expected: usize,
        actual: usize,
    },

    #[error("template {variant} contains invalid bitmap character {character:?}")]
    InvalidCell {
        variant: &'static str,
        character: char,
    },

    #[error("templates {first} and {second} share priority rank {rank}")]
    DuplicateRank {
        first: &'static str,
        second: &'static str,
        rank: usize,
    },
}
