//! Immutable copies of the working array handed over to consumers.
use crate::common_types::Value;
use serde_derive::{Deserialize, Serialize};

/// Where in a run was a snapshot taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapshotKind {
    /// the numbers as given, before any sorting
    Unsorted,
    /// taken at a pause point, the array is partially sorted
    Intermediate,
    /// the arrangement left once the algorithm completed
    Final,
}

/// A point in time copy of the array being sorted.
/// Consumers only ever see these, never the engine's working buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1 based position of this snapshot among all snapshots of its session
    /// (0 for unsorted numbers)
    pub sequence: usize,
    /// pause or completion
    pub kind: SnapshotKind,
    values: Vec<Value>,
}

impl Snapshot {
    pub(crate) fn new(sequence: usize, kind: SnapshotKind, values: Vec<Value>) -> Self {
        Snapshot {
            sequence,
            kind,
            values,
        }
    }

    /// The unsorted numbers, shown before a session starts.
    pub fn unsorted(values: Vec<Value>) -> Self {
        Snapshot::new(0, SnapshotKind::Unsorted, values)
    }

    /// Is this the last snapshot of its session.
    pub fn is_final(&self) -> bool {
        self.kind == SnapshotKind::Final
    }

    /// The values, in their arrangement at snapshot time.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Take ownership of the values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is there nothing to display.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate on (index, value) pairs, the chart coordinates.
    pub fn points<'a>(&'a self) -> impl Iterator<Item = (usize, Value)> + 'a {
        self.values.iter().cloned().enumerate()
    }
}
