use crate::{grid::Grid, pos::Position, tally::Tally};

use super::{Catalogue, Template};

/// Width of the dead border added around the grid before scanning.
pub const PADDING: usize = 1;

/// Scans every anchor of `grid` against the catalogue and tallies the matches.
///
/// Templates are tested in rank order and the first match wins, so an anchor contributes at most one
/// count. Different anchors are independent of each other.
pub fn scan(grid: &Grid, catalogue: &Catalogue) -> Tally {
    let padded = grid.padded(PADDING);
    let mut tally = Tally::default();

    for (anchor, _) in grid.enumerate_cells() {
        if let Some(template) = match_at(&padded, catalogue, anchor) {
            tally.record(template.family);
        }
    }

    tally
}

/// Finds the first template matching at `anchor`, a coordinate of the unpadded grid.
///
/// The template window's top-left corner sits at `anchor` in padded coordinates, which puts the
/// template's dead ring one cell up and left of the anchor in the original grid. Windows that run
/// past the padded grid never match.
pub fn match_at<'a>(padded: &Grid, catalogue: &'a Catalogue, anchor: Position) -> Option<&'a Template> {
    catalogue
        .templates()
        .iter()
        .find(|template| window_matches(padded, anchor, template))
}

fn window_matches(padded: &Grid, anchor: Position, template: &Template) -> bool {
    padded
        .window(anchor.row, anchor.col, template.height, template.width)
        .is_some_and(|window| window.eq(template.cells.iter().copied()))
}
