use std::{fmt, ops::AddAssign};

use strum::{EnumCount, IntoEnumIterator};

use crate::pattern::Family;

/// Per-family match counts of a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    counts: [usize; Family::COUNT],
}

impl Tally {
    pub fn record(&mut self, family: Family) {
        self.counts[family.index()] += 1;
    }

    pub fn count(&self, family: Family) -> usize {
        self.counts[family.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of all matches taken by `family`, rounded down. An empty tally reports zero everywhere.
    pub fn percent(&self, family: Family) -> usize {
        let total = self.total().max(1);
        self.count(family) * 100 / total
    }

    pub fn iter(&self) -> impl Iterator<Item = (Family, usize)> + '_ {
        Family::iter().map(|family| (family, self.count(family)))
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Self) {
        for (count, other_count) in self.counts.iter_mut().zip(other.counts) {
            *count += other_count;
        }
    }
}

/// The tally of one generation together with its 1-based generation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: usize,
    pub tally: Tally,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "============= ITERATION {} =============", self.generation)?;
        writeln!(f, "   Lifeform   |   Count   |   Percent   ")?;

        for (family, count) in self.tally.iter() {
            writeln!(
                f,
                "   {:<10} |     {}     |     {}   ",
                family.label(),
                count,
                self.tally.percent(family)
            )?;
        }

        writeln!(f, "{}", "-".repeat(38))?;
        writeln!(f, "   {:<10} |     {}     |", "total", self.tally.total())?;
        write!(f, "\n\n")
    }
}
