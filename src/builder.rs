use crate::common_types::STEP_BUDGET;
use crate::controller::SessionController;
use crate::error::SortError;
use serde_derive::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use std::time::Duration;

/// Timing knobs of stepped sessions. All durations are in milliseconds so
/// that config files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pacing {
    /// maximal number of pauses in a run (and of steps in a session)
    pub step_budget: usize,
    /// how long the engine waits after each pause
    pub pause_interval_ms: u64,
    /// how long a step waits before draining
    pub drain_delay_ms: u64,
    /// how long a step waits at most for a snapshot
    pub drain_timeout_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            step_budget: STEP_BUDGET,
            pause_interval_ms: 10,
            drain_delay_ms: 10,
            drain_timeout_ms: 1_000,
        }
    }
}

impl Pacing {
    pub(crate) fn pause_interval(&self) -> Duration {
        Duration::from_millis(self.pause_interval_ms)
    }
    pub(crate) fn drain_delay(&self) -> Duration {
        Duration::from_millis(self.drain_delay_ms)
    }
    pub(crate) fn drain_timeout(&self) -> Duration {
        Duration::from_millis(self.drain_timeout_ms)
    }

    /// Load pacing from a json file. Missing fields keep their default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Pacing, SortError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Save pacing as a json file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SortError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

/// Builder for `SessionController`
#[derive(Debug)]
pub struct ControllerBuilder {
    pacing: Pacing,
    thread_name: String,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        ControllerBuilder::new()
    }
}

impl ControllerBuilder {
    /// Creates a new ControllerBuilder with default pacing.
    pub fn new() -> Self {
        ControllerBuilder {
            pacing: Pacing::default(),
            thread_name: "sort-engine".to_string(),
        }
    }
    /// Start from given pacing (usually loaded from a file).
    pub fn pacing(self, pacing: Pacing) -> Self {
        ControllerBuilder { pacing, ..self }
    }
    /// Sets the maximal number of pauses per run.
    pub fn step_budget(mut self, step_budget: usize) -> Self {
        self.pacing.step_budget = step_budget;
        self
    }
    /// Sets how long the engine waits after each pause.
    pub fn pause_interval(mut self, interval: Duration) -> Self {
        self.pacing.pause_interval_ms = interval.as_millis() as u64;
        self
    }
    /// Sets how long a step waits before draining.
    pub fn drain_delay(mut self, delay: Duration) -> Self {
        self.pacing.drain_delay_ms = delay.as_millis() as u64;
        self
    }
    /// Sets the maximal wait for a snapshot in a step.
    pub fn drain_timeout(mut self, timeout: Duration) -> Self {
        self.pacing.drain_timeout_ms = timeout.as_millis() as u64;
        self
    }
    /// Name given to engine threads.
    pub fn thread_name<S: Into<String>>(self, name: S) -> Self {
        ControllerBuilder {
            thread_name: name.into(),
            ..self
        }
    }
    /// Build the `SessionController`.
    pub fn build(self) -> SessionController {
        SessionController::new(self.pacing, self.thread_name)
    }
}
