use std::{env, path::PathBuf, time::Duration};

use anyhow::Context;
use colored::Colorize;
use config::Config;
use input::InitialState;
use libgame::{
    Simulation,
    grid::Grid,
    pattern::Catalogue,
    rule::Rule,
    tally::Tally,
};
use renderer::{NullRenderer, Renderer, terminal::TerminalRenderer};
use report::{ReportFile, ReportSink};

mod config;
mod input;
mod renderer;
mod report;

const DEFAULT_INPUT_PATH: &str = "input.txt";
const DEFAULT_REPORT_PATH: &str = "output.txt";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Usage: census [input|-] [report|-] [config]
    let mut args = env::args().skip(1);

    let input_path = args.next().filter(|path| path != "-");

    let report_path = args
        .next()
        .filter(|path| path != "-")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

    let config = match args.next() {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    let initial_state = load_initial_state(input_path, &config)?;
    let catalogue = Catalogue::standard().context("Invalid pattern catalogue")?;

    let renderer: Box<dyn Renderer> = if config.render {
        Box::new(TerminalRenderer::new(Duration::from_millis(
            config.frame_interval_millis,
        )))
    } else {
        Box::new(NullRenderer)
    };

    let report_file = ReportFile::create(&report_path, &initial_state.grid)?;

    log::info!(
        "Running {} generations on a {}x{} grid",
        initial_state.generations,
        initial_state.grid.rows(),
        initial_state.grid.cols()
    );

    let simulation = Simulation::new(initial_state.grid, Rule::default(), catalogue);
    let totals = run_simulation(
        simulation,
        initial_state.generations,
        renderer,
        report_file,
    )?;

    log::info!(
        "Finished {} generations, {} life-forms tallied in total",
        initial_state.generations,
        totals.total()
    );

    println!(
        "{} {} generations, report written to {}",
        "Done:".green(),
        initial_state.generations,
        report_path.display()
    );
    for (family, count) in totals.iter() {
        println!("  {:<10} {count:6}", family.label());
    }

    Ok(())
}

fn load_initial_state(input_path: Option<String>, config: &Config) -> anyhow::Result<InitialState> {
    match (input_path, config.random) {
        (Some(input_path), _) => InitialState::load(input_path),
        (None, Some(random)) => {
            let grid = Grid::new_random(random.rows, random.cols, random.alive_cells)
                .context("Invalid random grid config")?;

            Ok(InitialState {
                grid,
                generations: random.generations,
            })
        }
        (None, None) => InitialState::load(DEFAULT_INPUT_PATH),
    }
}

/// Runs the simulation for a fixed number of generations, returns the number of
/// life-forms seen per family over the whole run.
fn run_simulation<R>(
    mut simulation: Simulation,
    generations: usize,
    mut renderer: Box<dyn Renderer>,
    mut report_sink: R,
) -> anyhow::Result<Tally>
where
    R: ReportSink,
{
    let mut totals = Tally::default();

    for _ in 0..generations {
        let report = simulation.advance();

        renderer.render(report.generation, simulation.grid())?;
        report_sink.append(&report)?;

        totals += report.tally;
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use libgame::{pattern::Family, tally::GenerationReport};

    use super::*;

    #[derive(Default)]
    struct CollectingSink {
        reports: Vec<GenerationReport>,
    }

    impl ReportSink for &mut CollectingSink {
        fn append(&mut self, report: &GenerationReport) -> anyhow::Result<()> {
            self.reports.push(*report);
            Ok(())
        }
    }

    #[test]
    fn every_generation_reaches_the_sink_once() {
        let grid = Grid::with_alive_cells(9, 9, [[4usize, 3usize], [4, 4], [4, 5]]).unwrap();
        let simulation = Simulation::new(grid, Rule::default(), Catalogue::standard().unwrap());
        let mut sink = CollectingSink::default();

        let totals = run_simulation(simulation, 5, Box::new(NullRenderer), &mut sink).unwrap();

        let generations = sink.reports.iter().map(|report| report.generation).collect::<Vec<_>>();
        assert_eq!(generations, vec![1, 2, 3, 4, 5]);
        assert_eq!(totals.count(Family::Blinker), 5);
        assert_eq!(totals.total(), 5);
    }

    #[test]
    fn random_config_is_used_without_input_file() {
        let config = Config {
            random: Some(config::RandomSeedConfig {
                rows: 6,
                cols: 7,
                alive_cells: 10,
                generations: 3,
            }),
            ..Config::default()
        };

        let state = load_initial_state(None, &config).unwrap();
        assert_eq!((state.grid.rows(), state.grid.cols()), (6, 7));
        assert_eq!(state.generations, 3);
    }
}
