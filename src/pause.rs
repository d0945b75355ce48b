//! Pause points: where algorithms may stop and show their current arrangement.
//!
//! Algorithms never decide by themselves when to publish. They `tick` a
//! [`Pacer`] after each unit of work and the pacer decides, from the cadence
//! and the step budget, whether this tick is a pause.
use crate::common_types::Value;
use crate::error::Interrupted;
use std::cmp::max;

/// Something receiving the arrangements of a run at its pause points.
pub trait PausePoint {
    /// Called with the whole working array at each pause.
    /// Returning `Err(Interrupted)` aborts the run.
    fn pause(&mut self, arrangement: &[Value]) -> Result<(), Interrupted>;
}

/// Ignores every pause (full runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPauses;

impl PausePoint for NoPauses {
    fn pause(&mut self, _arrangement: &[Value]) -> Result<(), Interrupted> {
        Ok(())
    }
}

/// Records a copy of the arrangement at each pause.
impl PausePoint for Vec<Vec<Value>> {
    fn pause(&mut self, arrangement: &[Value]) -> Result<(), Interrupted> {
        self.push(arrangement.to_vec());
        Ok(())
    }
}

/// Number of work units between two pauses.
///
/// Never zero: when there is less work than pauses wanted we pause at every unit.
/// A zero budget means no pauses at all, cadence is then irrelevant.
pub fn cadence(work_units: usize, budget: usize) -> usize {
    if budget == 0 {
        1
    } else {
        max(1, work_units / budget)
    }
}

/// Per run pause scheduling. Counters are owned by the run, several engines
/// can therefore be built and run side by side in tests.
pub(crate) struct Pacer<'p> {
    sink: &'p mut dyn PausePoint,
    stepping: bool,
    cadence: usize,
    budget: usize,
    ticks: usize,
    pauses: usize,
}

impl<'p> Pacer<'p> {
    /// Pauses for `len` values, or never if `budget` is `None`.
    pub(crate) fn new(sink: &'p mut dyn PausePoint, len: usize, budget: Option<usize>) -> Self {
        let budget = budget.unwrap_or(0);
        Pacer {
            sink,
            // nothing to show on trivial inputs
            stepping: budget > 0 && len > 1,
            cadence: cadence(len, budget),
            budget,
            ticks: 0,
            pauses: 0,
        }
    }

    /// One more unit of work done, pause if it is time to.
    pub(crate) fn tick(&mut self, arrangement: &[Value]) -> Result<(), Interrupted> {
        self.ticks += 1;
        if self.ticks % self.cadence == 0 {
            self.pause(arrangement)
        } else {
            Ok(())
        }
    }

    /// Pause right now (unless stepping is off or the budget is spent).
    pub(crate) fn pause(&mut self, arrangement: &[Value]) -> Result<(), Interrupted> {
        if !self.stepping || self.pauses >= self.budget {
            return Ok(());
        }
        self.pauses += 1;
        self.sink.pause(arrangement)
    }

    #[cfg(test)]
    pub(crate) fn pauses(&self) -> usize {
        self.pauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cadence_never_zero() {
        assert_eq!(cadence(0, 20), 1);
        assert_eq!(cadence(7, 20), 1);
        assert_eq!(cadence(20, 20), 1);
        assert_eq!(cadence(400, 20), 20);
        assert_eq!(cadence(999, 20), 49);
        assert_eq!(cadence(10, 0), 1);
    }

    #[test]
    fn pauses_are_capped_by_budget() {
        let mut recorded: Vec<Vec<Value>> = Vec::new();
        let data = vec![3, 2, 1];
        {
            let mut pacer = Pacer::new(&mut recorded, 30, Some(4));
            for _ in 0..30 {
                pacer.tick(&data).unwrap();
            }
            assert_eq!(pacer.pauses(), 4);
        }
        assert_eq!(recorded.len(), 4);
    }

    #[test]
    fn no_pauses_without_budget_or_on_trivial_input() {
        let mut recorded: Vec<Vec<Value>> = Vec::new();
        {
            let mut pacer = Pacer::new(&mut recorded, 100, None);
            for _ in 0..100 {
                pacer.tick(&[1, 2]).unwrap();
            }
        }
        {
            let mut pacer = Pacer::new(&mut recorded, 1, Some(20));
            pacer.pause(&[1]).unwrap();
        }
        assert!(recorded.is_empty());
    }
}
