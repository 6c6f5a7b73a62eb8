use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, bail};
use libgame::{grid::Grid, pos::Position};

/// The starting grid and how many generations to run it for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialState {
    pub grid: Grid,
    pub generations: usize,
}

impl InitialState {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read initial state from {}", path.display()))?;

        text.parse()
    }
}

/// The first line holds the grid size `rows cols`, the second one the generation count.
/// Every following line is an alive cell `row col`, up to the first blank line.
impl FromStr for InitialState {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text.lines().enumerate();

        let (_, size_line) = lines.next().context("Missing grid size line")?;
        let [rows, cols] = parse_pair(size_line).context("Invalid grid size")?;

        let (_, generations_line) = lines.next().context("Missing generation count line")?;
        let generations = generations_line
            .trim()
            .parse::<usize>()
            .context("Invalid generation count")?;

        let alive = lines
            .map_while(|(index, line)| (!line.trim().is_empty()).then_some((index, line)))
            .map(|(index, line)| {
                parse_pair(line)
                    .map(Position::from)
                    .with_context(|| format!("Invalid cell on line {}", index + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if alive.is_empty() {
            log::warn!("Initial state has no alive cells");
        }

        let grid = Grid::with_alive_cells(rows, cols, alive).context("Invalid initial grid")?;

        Ok(Self { grid, generations })
    }
}

fn parse_pair(line: &str) -> anyhow::Result<[usize; 2]> {
    let values = line
        .split_whitespace()
        .map(str::parse::<usize>)
        .collect::<Result<Vec<_>, _>>()?;

    match values[..] {
        [first, second] => Ok([first, second]),
        _ => bail!("expected two numbers, got {:?}", line.trim()),
    }
}
