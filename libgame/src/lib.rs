use grid::Grid;
use pattern::{Catalogue, matcher};
use rule::Rule;
use tally::GenerationReport;

pub mod error;
pub mod grid;
pub mod pattern;
pub mod pos;
pub mod rule;
pub mod tally;

/// Drives a grid generation by generation, tallying the life-forms of every generation on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    grid: Grid,
    rule: Rule,
    catalogue: Catalogue,
    generation: usize,
}

impl Simulation {
    pub fn new(grid: Grid, rule: Rule, catalogue: Catalogue) -> Self {
        Self {
            grid,
            rule,
            catalogue,
            generation: 0,
        }
    }

    /// Runs exactly one generation. The pattern scan and the evolution both read the same
    /// pre-update snapshot, the grid is then replaced as a whole.
    pub fn advance(&mut self) -> GenerationReport {
        let tally = matcher::scan(&self.grid, &self.catalogue);
        self.grid = self.rule.evolve(&self.grid);
        self.generation += 1;

        log::debug!(
            "Generation {} tallied {} life-forms",
            self.generation,
            tally.total()
        );

        GenerationReport {
            generation: self.generation,
            tally,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of generations advanced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{grid::CellState, pattern::Family, pos::Position};

    fn simulation_of(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Simulation {
        let grid = Grid::with_alive_cells(rows, cols, alive.iter().copied()).unwrap();
        Simulation::new(grid, Rule::default(), Catalogue::standard().unwrap())
    }

    fn alive_set(grid: &Grid) -> Vec<Position> {
        grid.alive_positions().sorted().collect_vec()
    }

    fn only(report: &GenerationReport, family: Family) -> bool {
        Family::iter().all(|other| report.tally.count(other) == usize::from(other == family))
    }

    #[test]
    fn block_stays_and_is_tallied_once() {
        let mut simulation = simulation_of(8, 8, &[(3, 3), (3, 4), (4, 3), (4, 4)]);
        let initial = simulation.grid().clone();

        let report = simulation.advance();

        assert_eq!(simulation.grid(), &initial);
        assert_eq!(report.generation, 1);
        assert!(only(&report, Family::Block));
    }

    #[test]
    fn blinker_is_tallied_once_every_generation() {
        let mut simulation = simulation_of(9, 9, &[(4, 3), (4, 4), (4, 5)]);

        for _ in 0..6 {
            let report = simulation.advance();
            assert!(only(&report, Family::Blinker));
            assert_eq!(report.tally.total(), 1);
        }
        assert_eq!(simulation.generation(), 6);
    }

    #[test]
    fn toad_is_tallied_once_every_generation() {
        let mut simulation = simulation_of(
            10,
            10,
            &[(4, 4), (4, 5), (4, 6), (5, 3), (5, 4), (5, 5)],
        );

        for _ in 0..4 {
            let report = simulation.advance();
            assert!(only(&report, Family::Toad));
        }
    }

    #[test]
    fn beacon_is_tallied_once_every_generation() {
        let mut simulation = simulation_of(
            10,
            10,
            &[(2, 2), (2, 3), (3, 2), (3, 3), (4, 4), (4, 5), (5, 4), (5, 5)],
        );

        for _ in 0..4 {
            let report = simulation.advance();
            assert!(only(&report, Family::Beacon));
        }
    }

    #[test]
    fn empty_grid_reports_nothing() {
        let mut simulation = simulation_of(5, 5, &[]);
        let report = simulation.advance();

        assert_eq!(report.tally.total(), 0);
        assert!(Family::iter().all(|family| report.tally.percent(family) == 0));
        assert_eq!(simulation.grid().count_cells(CellState::Alive), 0);
    }

    #[test]
    fn glider_translates_diagonally_and_matches_one_phase_at_a_time() {
        let mut simulation = simulation_of(14, 14, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        let initial = alive_set(simulation.grid());

        let mut matched_variants = Vec::new();
        for _ in 0..4 {
            let report = simulation.advance();
            assert!(only(&report, Family::Glider));

            let padded = simulation.grid().padded(matcher::PADDING);
            let variants = simulation
                .grid()
                .enumerate_cells()
                .filter_map(|(anchor, _)| matcher::match_at(&padded, simulation.catalogue(), anchor))
                .map(|template| template.variant)
                .collect_vec();
            assert_eq!(variants.len(), 1);
            matched_variants.push(variants[0]);
        }

        let translated = initial
            .iter()
            .map(|pos| Position::new(pos.row + 1, pos.col + 1))
            .collect_vec();
        assert_eq!(alive_set(simulation.grid()), translated);

        // After four generations the glider is back in its first phase.
        assert_eq!(
            matched_variants,
            vec!["glider-v2", "glider-v3", "glider-v4", "glider-v1"]
        );
    }

    #[test]
    fn lightweight_spaceship_is_tallied_in_every_phase() {
        let mut simulation = simulation_of(
            10,
            20,
            &[(3, 3), (3, 6), (4, 7), (5, 3), (5, 7), (6, 4), (6, 5), (6, 6), (6, 7)],
        );

        for _ in 0..4 {
            let report = simulation.advance();
            assert!(only(&report, Family::LightweightSpaceship));
        }
    }

    #[test]
    fn advancing_is_deterministic() {
        let grid = Grid::new_random(20, 20, 150).unwrap();
        let mut first = Simulation::new(grid.clone(), Rule::default(), Catalogue::standard().unwrap());
        let mut second = Simulation::new(grid, Rule::default(), Catalogue::standard().unwrap());

        for _ in 0..5 {
            assert_eq!(first.advance(), second.advance());
            assert_eq!(first.grid(), second.grid());
        }
    }
}
