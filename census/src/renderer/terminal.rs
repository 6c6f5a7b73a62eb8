use std::{
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;
use itertools::Itertools;
use libgame::grid::{CellState, Grid};

use super::{Renderer, pacer::FramePacer};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the grid to stdout, two characters per cell so cells come out roughly square.
pub struct TerminalRenderer {
    pacer: FramePacer,
}

impl TerminalRenderer {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            pacer: FramePacer::new(frame_interval),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, generation: usize, grid: &Grid) -> anyhow::Result<()> {
        let frame = draw_frame(generation, grid);

        self.pacer.sleep();

        let mut stdout = io::stdout().lock();
        write!(stdout, "{CLEAR_SCREEN}{frame}")?;
        stdout.flush()?;

        Ok(())
    }
}

pub fn draw_frame(generation: usize, grid: &Grid) -> String {
    let rows = grid
        .enumerate_cells()
        .chunk_by(|(pos, _)| pos.row)
        .into_iter()
        .map(|(_, cells)| {
            cells
                .map(|(_, cell)| match cell {
                    CellState::Alive => "██".bright_white().to_string(),
                    CellState::Dead => "··".bright_black().to_string(),
                })
                .join("")
        })
        .join("\n");

    format!("{}\n{rows}\n", format!("generation {generation}").bold())
}
