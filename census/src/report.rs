use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use anyhow::Context;
use chrono::NaiveDate;
use libgame::{grid::Grid, tally::GenerationReport};

/// Receives the report text of every generation.
pub trait ReportSink {
    fn append(&mut self, report: &GenerationReport) -> anyhow::Result<()>;
}

/// A human-readable report file. Creating it truncates any previous run's report.
pub struct ReportFile {
    file: File,
}

impl ReportFile {
    pub fn create<P>(path: P, grid: &Grid) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        if let Some(parent_path) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent_path).context("Couldn't create report directory")?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Couldn't create report file {}", path.display()))?;

        let today = chrono::Local::now().date_naive();
        file.write_all(header(today, grid).as_bytes())
            .context("Couldn't write report header")?;

        Ok(Self { file })
    }
}

impl ReportSink for ReportFile {
    fn append(&mut self, report: &GenerationReport) -> anyhow::Result<()> {
        self.file
            .write_all(report.to_string().as_bytes())
            .with_context(|| format!("Couldn't append generation {} to report", report.generation))
    }
}

pub fn header(date: NaiveDate, grid: &Grid) -> String {
    format!(
        "Simulation at {}\nUniverse size {} x {}\n\n",
        date.format("%Y-%m-%d"),
        grid.rows(),
        grid.cols()
    )
}
