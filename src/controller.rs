//! `SessionController` owning at most one running sort at a time.
use crate::builder::Pacing;
use crate::common_types::{AlgorithmId, Value};
use crate::engine::SortEngine;
use crate::error::SortError;
use crate::publisher::{handoff, Handoff};
use crate::snapshot::Snapshot;
use crate::stats::TimingReport;
use crossbeam_channel::RecvTimeoutError;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// One engine in flight together with the receiving end of its handoff.
/// Dropping it cancels the engine: its channels disconnect and its thread
/// is detached.
struct Session {
    id: u64,
    algorithm: AlgorithmId,
    stepping: bool,
    steps: usize,
    exhausted: bool,
    handoff: Handoff,
    worker: Option<JoinHandle<()>>,
}

impl Session {
    /// No snapshot will ever come again.
    fn engine_done(&self) -> bool {
        self.worker.as_ref().map_or(true, |w| w.is_finished())
            && self.handoff.snapshots.is_empty()
    }
}

/// Result of a run to completion.
#[derive(Debug, Clone)]
pub struct FullRun {
    /// the final arrangement
    pub snapshot: Snapshot,
    /// wall time from spawning the engine until it terminated
    pub elapsed: Duration,
}

/// Result of a single step.
#[derive(Debug, Clone)]
pub struct Step {
    /// what to draw
    pub snapshot: Snapshot,
    /// 1 based index of this step in its session
    pub step: usize,
    /// no more steps should be requested, the next one starts over
    pub done: bool,
}

/// Runs sorts on a background thread, either to completion or step by step.
///
/// Starting anything always discards the previous session first, together
/// with its handoff channel, so a superseded engine can never reach the
/// caller. Cancellation is not acknowledged: the old engine notices at its
/// next publish or pacing wait and exits on its own.
pub struct SessionController {
    pacing: Pacing,
    thread_name: String,
    session: Option<Session>,
    sessions_started: u64,
}

impl SessionController {
    pub(crate) fn new(pacing: Pacing, thread_name: String) -> Self {
        SessionController {
            pacing,
            thread_name,
            session: None,
            sessions_started: 0,
        }
    }

    /// Current pacing.
    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Is a stepped session alive.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Algorithm of the live session, if any.
    pub fn active_algorithm(&self) -> Option<AlgorithmId> {
        self.session.as_ref().map(|s| s.algorithm)
    }

    /// Steps taken so far in the live session.
    pub fn step_count(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.steps)
    }

    fn spawn(
        &mut self,
        numbers: &[Value],
        algorithm: AlgorithmId,
        stepping: bool,
    ) -> Result<Session, SortError> {
        let id = self.sessions_started;
        self.sessions_started += 1;
        let mut engine = SortEngine::new(algorithm, numbers);
        if stepping {
            engine = engine.stepping(self.pacing.step_budget);
        }
        let (publisher, handoff) = handoff(self.pacing.pause_interval());
        let worker = thread::Builder::new()
            .name(format!("{}-{}", self.thread_name, id))
            .spawn(move || engine.run_and_publish(publisher, id))
            .map_err(SortError::Spawn)?;
        debug!(session = id, %algorithm, stepping, len = numbers.len(), "sort session started");
        Ok(Session {
            id,
            algorithm,
            stepping,
            steps: 0,
            exhausted: false,
            handoff,
            worker: Some(worker),
        })
    }

    /// Drop the live session, if any, without waiting for its engine.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(
                session = session.id,
                algorithm = %session.algorithm,
                steps = session.steps,
                "sort session cancelled"
            );
        }
    }

    /// Sort `numbers` to completion, blocking until the engine terminates.
    /// There is no timeout: only use this off interactive paths.
    pub fn start_full(
        &mut self,
        numbers: &[Value],
        algorithm: AlgorithmId,
    ) -> Result<FullRun, SortError> {
        self.cancel();
        let start = Instant::now();
        let mut session = self.spawn(numbers, algorithm, false)?;
        if let Some(worker) = session.worker.take() {
            worker.join().map_err(|_| SortError::EngineFailed)?;
        }
        let elapsed = start.elapsed();
        let snapshot = session
            .handoff
            .snapshots
            .try_recv()
            .map_err(|_| SortError::MissingSnapshot)?;
        Ok(FullRun { snapshot, elapsed })
    }

    /// Time `trials` full runs (at least one). Returns the timings and the
    /// last run's final snapshot.
    pub fn timed_trials(
        &mut self,
        numbers: &[Value],
        algorithm: AlgorithmId,
        trials: usize,
    ) -> Result<(TimingReport, Snapshot), SortError> {
        let mut runs = Vec::with_capacity(trials.max(1));
        let mut last = self.start_full(numbers, algorithm)?;
        runs.push(last.elapsed.as_nanos() as u64);
        for _ in 1..trials {
            last = self.start_full(numbers, algorithm)?;
            runs.push(last.elapsed.as_nanos() as u64);
        }
        let report = TimingReport {
            algorithm,
            input_len: numbers.len(),
            runs,
        };
        debug!(%algorithm, trials = report.trials(), average = report.average(), "timing done");
        Ok((report, last.snapshot))
    }

    /// Advance the stepped session by one snapshot, starting a new session
    /// when there is none (or the previous one is done).
    ///
    /// Waits the drain delay, then at most the drain timeout: a slow
    /// algorithm never stalls the caller. A failed step leaves the
    /// controller usable.
    pub fn start_or_advance_step(
        &mut self,
        numbers: &[Value],
        algorithm: AlgorithmId,
    ) -> Result<Step, SortError> {
        let mut session = match self.session.take() {
            Some(session) if session.stepping && !session.exhausted => session,
            stale => {
                drop(stale);
                self.spawn(numbers, algorithm, true)?
            }
        };
        session.steps += 1;
        thread::sleep(self.pacing.drain_delay());
        let timeout = self.pacing.drain_timeout();
        match session.handoff.snapshots.recv_timeout(timeout) {
            Ok(snapshot) => {
                let done = snapshot.is_final()
                    || session.steps > self.pacing.step_budget
                    || session.engine_done();
                session.exhausted = done;
                let step = Step {
                    snapshot,
                    step: session.steps,
                    done,
                };
                self.session = Some(session);
                Ok(step)
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!(
                    session = session.id,
                    step = session.steps,
                    "no snapshot published within {:?}",
                    timeout
                );
                self.session = Some(session);
                Err(SortError::DrainTimeout(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                let failure = match session.worker.take().map(JoinHandle::join) {
                    Some(Err(_)) => SortError::EngineFailed,
                    _ => SortError::SessionClosed,
                };
                warn!(session = session.id, "dropping sort session: {}", failure);
                Err(failure)
            }
        }
    }
}
