//! `SortEngine`: one algorithm run over a private copy of the numbers.
use crate::algorithms::{self, RADIX_DOMAIN};
use crate::common_types::{AlgorithmId, Value};
use crate::error::Interrupted;
use crate::pause::{NoPauses, Pacer, PausePoint};
use crate::publisher::StepPublisher;
use tracing::debug;

/// A sort waiting to be run.
///
/// The engine owns a copy of its input: nothing the caller holds is ever
/// touched, and the working array never leaves the engine except as copies
/// handed to the pause points.
#[derive(Debug, Clone)]
pub struct SortEngine {
    algorithm: AlgorithmId,
    numbers: Vec<Value>,
    budget: Option<usize>,
}

impl SortEngine {
    /// Prepare a full (non stepping) run of `algorithm` on a copy of `numbers`.
    pub fn new(algorithm: AlgorithmId, numbers: &[Value]) -> Self {
        SortEngine {
            algorithm,
            numbers: numbers.to_vec(),
            budget: None,
        }
    }

    /// Switch to step mode, pausing at most `budget` times.
    pub fn stepping(self, budget: usize) -> Self {
        SortEngine {
            budget: Some(budget),
            ..self
        }
    }

    /// Which algorithm we run.
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// Are we pausing.
    pub fn is_stepping(&self) -> bool {
        self.budget.is_some()
    }

    /// Sort, reporting pauses to `pauses`. Returns the final arrangement.
    pub fn run<P: PausePoint>(self, pauses: &mut P) -> Result<Vec<Value>, Interrupted> {
        let SortEngine {
            algorithm,
            mut numbers,
            budget,
        } = self;
        if algorithm == AlgorithmId::RadixSort && numbers.iter().any(|v| !RADIX_DOMAIN.contains(v)) {
            debug!(
                "radix sort input exceeds {:?}, ordering will be wrong",
                RADIX_DOMAIN
            );
        }
        let len = numbers.len();
        let mut pacer = Pacer::new(pauses, len, budget);
        algorithms::run(algorithm, &mut numbers, &mut pacer)?;
        Ok(numbers)
    }

    /// Run to completion and hand the result over through `publisher`.
    /// Cancellation is logged, never reported.
    pub(crate) fn run_and_publish(self, mut publisher: StepPublisher, session: u64) {
        let algorithm = self.algorithm;
        let outcome = self
            .run(&mut publisher)
            .and_then(|sorted| publisher.finish(sorted));
        match outcome {
            Ok(()) => debug!(
                session,
                %algorithm,
                snapshots = publisher.published(),
                "sort finished"
            ),
            Err(Interrupted) => debug!(
                session,
                %algorithm,
                snapshots = publisher.published(),
                "sort interrupted"
            ),
        }
    }
}

impl AlgorithmId {
    /// Sort `data` in place, without any pause.
    pub fn sort(self, data: &mut [Value]) {
        let len = data.len();
        let mut sink = NoPauses;
        let mut pacer = Pacer::new(&mut sink, len, None);
        // `NoPauses` never interrupts
        let _ = algorithms::run(self, data, &mut pacer);
    }
}
