//! Timings of repeated full runs.
use crate::common_types::AlgorithmId;
use crate::error::SortError;
use itertools::{Itertools, MinMaxResult};
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Elapsed times (in nanoseconds) of several full runs of one algorithm on
/// one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingReport {
    /// which algorithm ran
    pub algorithm: AlgorithmId,
    /// how many values were sorted
    pub input_len: usize,
    /// wall time of each run, in run order
    pub runs: Vec<u64>,
}

impl TimingReport {
    /// Number of runs.
    pub fn trials(&self) -> usize {
        self.runs.len()
    }

    /// Sum of all runs times.
    pub fn total(&self) -> u64 {
        self.runs.iter().sum()
    }

    /// Mean run time (0 when no runs).
    pub fn average(&self) -> u64 {
        if self.runs.is_empty() {
            0
        } else {
            self.total() / self.runs.len() as u64
        }
    }

    /// Median run time (upper median, 0 when no runs).
    pub fn median(&self) -> u64 {
        let sorted: Vec<u64> = self.runs.iter().cloned().sorted().collect();
        sorted.get(sorted.len() / 2).cloned().unwrap_or(0)
    }

    /// Fastest and slowest runs.
    pub fn min_max(&self) -> Option<(u64, u64)> {
        match self.runs.iter().cloned().minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(t) => Some((t, t)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// The two lines displayed after timing.
    pub fn summary(&self) -> (String, String) {
        (
            format!(
                "Average time over {} trials: {}ns",
                self.trials(),
                self.average()
            ),
            format!(
                "Total time for {} trials: {}ms",
                self.trials(),
                self.total() / 1_000_000
            ),
        )
    }

    /// Load a report saved as json.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<TimingReport, SortError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Save the report as json.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SortError> {
        let file = File::create(path)?;
        serde_json::to_writer(file, &self)?;
        Ok(())
    }
}

/// Human readable duration from nanoseconds.
pub(crate) fn time_string(nano: u64) -> String {
    match nano {
        n if n < 1_000 => format!("{}ns", n),
        n if n < 1_000_000 => format!("{:.2}us", n as f64 / 1_000.0),
        n if n < 1_000_000_000 => format!("{:.2}ms", n as f64 / 1_000_000.0),
        n => format!("{:.2}s", n as f64 / 1_000_000_000.0),
    }
}
