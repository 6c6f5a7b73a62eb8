use libgame::grid::Grid;

pub mod pacer;
pub mod terminal;

/// Consumes the evolved grid of every generation. Never changes the simulation.
pub trait Renderer {
    fn render(&mut self, generation: usize, grid: &Grid) -> anyhow::Result<()>;
}

pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _generation: usize, _grid: &Grid) -> anyhow::Result<()> {
        Ok(())
    }
}
