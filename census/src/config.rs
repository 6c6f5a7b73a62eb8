use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Whether to draw every generation to the terminal.
    pub render: bool,

    /// The minimum time between two drawn generations.
    pub frame_interval_millis: u64,

    /// Start from a random grid when no input file is given.
    pub random: Option<RandomSeedConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: true,
            frame_interval_millis: 50,
            random: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RandomSeedConfig {
    pub rows: usize,
    pub cols: usize,

    /// The amount of alive cells to spawn at the start.
    pub alive_cells: usize,

    pub generations: usize,
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        Self::parse(&config_serialized)
    }

    pub fn parse(config_serialized: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(config_serialized).context("Couldn't deserialize config")
    }
}
