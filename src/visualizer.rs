//! Front end glue: what a user interface drives.
use crate::chart::ChartSink;
use crate::common_types::{AlgorithmId, Value, TIMING_TRIALS};
use crate::controller::{SessionController, Step};
use crate::error::SortError;
use crate::numbers::random_numbers;
use crate::snapshot::Snapshot;
use crate::stats::TimingReport;
use rand::Rng;
use tracing::info;

/// Holds the numbers on display and the selected algorithm, forwards
/// everything drained from the controller to a chart.
///
/// Changing numbers or algorithm always cancels the running session first.
pub struct Visualizer<C: ChartSink> {
    numbers: Vec<Value>,
    algorithm: AlgorithmId,
    controller: SessionController,
    chart: C,
    trials: usize,
    can_step: bool,
}

impl<C: ChartSink> Visualizer<C> {
    /// Start with no numbers and the first algorithm of the menu.
    pub fn new(controller: SessionController, chart: C) -> Self {
        Visualizer {
            numbers: Vec::new(),
            algorithm: AlgorithmId::ALL[0],
            controller,
            chart,
            trials: TIMING_TRIALS,
            can_step: true,
        }
    }

    /// Preselect an algorithm, drawing nothing.
    pub fn with_algorithm(self, algorithm: AlgorithmId) -> Self {
        Visualizer { algorithm, ..self }
    }

    /// Number of full runs timed by `time`.
    pub fn trials(self, trials: usize) -> Self {
        Visualizer { trials, ..self }
    }

    /// Numbers on display.
    pub fn numbers(&self) -> &[Value] {
        &self.numbers
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// The chart we draw on.
    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// Get the chart back.
    pub fn into_chart(self) -> C {
        self.chart
    }

    /// Is stepping still meaningful (false once the last step was drawn).
    pub fn can_step(&self) -> bool {
        self.can_step
    }

    fn reset(&mut self) -> Result<(), SortError> {
        self.controller.cancel();
        self.can_step = true;
        self.chart
            .render(&Snapshot::unsorted(self.numbers.clone()))?;
        Ok(())
    }

    /// Draw a fresh random set of numbers.
    pub fn generate_numbers<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SortError> {
        self.set_numbers(random_numbers(rng))
    }

    /// Replace the numbers on display.
    pub fn set_numbers(&mut self, numbers: Vec<Value>) -> Result<(), SortError> {
        self.numbers = numbers;
        self.reset()
    }

    /// Select another algorithm, the unsorted numbers are drawn again.
    pub fn select_algorithm(&mut self, algorithm: AlgorithmId) -> Result<(), SortError> {
        self.algorithm = algorithm;
        self.reset()
    }

    /// Draw the next step of the selected algorithm.
    pub fn step(&mut self) -> Result<Step, SortError> {
        let step = self
            .controller
            .start_or_advance_step(&self.numbers, self.algorithm)?;
        self.chart.render(&step.snapshot)?;
        self.can_step = !step.done;
        Ok(step)
    }

    /// Time full runs of the selected algorithm and draw the sorted numbers.
    pub fn time(&mut self) -> Result<TimingReport, SortError> {
        let (report, sorted) =
            self.controller
                .timed_trials(&self.numbers, self.algorithm, self.trials)?;
        self.chart.render(&sorted)?;
        self.can_step = true;
        let (average, total) = report.summary();
        info!(algorithm = %self.algorithm, "{} / {}", average, total);
        Ok(report)
    }
}
