//! Handoff between a sort engine and whoever drains its snapshots.
//!
//! The slot is a crossbeam channel of capacity one: a publish blocks while
//! the previous snapshot is still waiting. A second channel, on which nothing
//! is ever sent, carries cancellation: when the controller drops its sending
//! half every blocked publish and every pacing wait wakes up with
//! [`Interrupted`].
use crate::common_types::Value;
use crate::error::Interrupted;
use crate::pause::PausePoint;
use crate::snapshot::{Snapshot, SnapshotKind};
use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// Engine side of a handoff.
pub struct StepPublisher {
    slot: Sender<Snapshot>,
    cancelled: Receiver<()>,
    pause_interval: Duration,
    published: usize,
}

/// Controller side of a handoff. Dropping it cancels the session.
pub(crate) struct Handoff {
    pub(crate) snapshots: Receiver<Snapshot>,
    // never used to send: dropping it is the cancellation signal
    pub(crate) _cancel: Sender<()>,
}

/// Create a fresh handoff. Channels are never reused across sessions.
pub(crate) fn handoff(pause_interval: Duration) -> (StepPublisher, Handoff) {
    let (slot, snapshots) = bounded(1);
    let (cancel, cancelled) = bounded(0);
    (
        StepPublisher {
            slot,
            cancelled,
            pause_interval,
            published: 0,
        },
        Handoff {
            snapshots,
            _cancel: cancel,
        },
    )
}

impl StepPublisher {
    /// Number of snapshots handed over so far.
    pub fn published(&self) -> usize {
        self.published
    }

    /// Block until the slot is free, then hand over a copy of `arrangement`.
    fn publish(&mut self, kind: SnapshotKind, arrangement: Vec<Value>) -> Result<(), Interrupted> {
        let snapshot = Snapshot::new(self.published + 1, kind, arrangement);
        select! {
            send(self.slot, snapshot) -> sent => sent.map_err(|_| Interrupted)?,
            recv(self.cancelled) -> _ => return Err(Interrupted),
        }
        self.published += 1;
        Ok(())
    }

    /// Throttle the engine. Wakes up early only to abort.
    fn wait(&self) -> Result<(), Interrupted> {
        match self.cancelled.recv_timeout(self.pause_interval) {
            Err(RecvTimeoutError::Timeout) => Ok(()),
            _ => Err(Interrupted),
        }
    }

    /// Hand over the completed arrangement. Called exactly once per run.
    pub fn finish(&mut self, arrangement: Vec<Value>) -> Result<(), Interrupted> {
        self.publish(SnapshotKind::Final, arrangement)
    }
}

impl PausePoint for StepPublisher {
    fn pause(&mut self, arrangement: &[Value]) -> Result<(), Interrupted> {
        self.publish(SnapshotKind::Intermediate, arrangement.to_vec())?;
        self.wait()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn slot_holds_a_single_snapshot() {
        let (mut publisher, handoff) = handoff(Duration::from_millis(0));
        publisher.finish(vec![1, 2]).unwrap();
        assert_eq!(publisher.published(), 1);
        // slot is full: a second publish would block, check through the channel
        assert!(handoff.snapshots.is_full());
        let snapshot = handoff.snapshots.recv().unwrap();
        assert!(snapshot.is_final());
        assert_eq!(snapshot.sequence, 1);
        assert_eq!(snapshot.values(), &[1, 2]);
    }

    #[test]
    fn pause_publishes_then_waits() {
        let (mut publisher, handoff) = handoff(Duration::from_millis(1));
        publisher.pause(&[3, 1, 2]).unwrap();
        let snapshot = handoff.snapshots.try_recv().unwrap();
        assert_eq!(snapshot.kind, SnapshotKind::Intermediate);
        assert_eq!(snapshot.values(), &[3, 1, 2]);
    }

    #[test]
    fn cancellation_unblocks_a_full_slot() {
        let (mut publisher, handoff) = handoff(Duration::from_millis(0));
        publisher.finish(vec![1]).unwrap();
        let blocked = thread::spawn(move || publisher.finish(vec![2]));
        thread::sleep(Duration::from_millis(20));
        drop(handoff);
        assert_eq!(blocked.join().unwrap(), Err(Interrupted));
    }

    #[test]
    fn cancellation_cuts_pacing_short() {
        let (mut publisher, handoff) = handoff(Duration::from_secs(60));
        let Handoff { snapshots, _cancel } = handoff;
        let paused = thread::spawn(move || publisher.pause(&[1]));
        snapshots.recv().unwrap();
        drop(_cancel);
        assert_eq!(paused.join().unwrap(), Err(Interrupted));
    }
}
