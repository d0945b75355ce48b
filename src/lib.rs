//! This crate runs classic sorting algorithms on a background thread and
//! lets a foreground caller watch them work.
//!
//! A sort either runs to completion (to time it) or pauses a bounded number
//! of times, handing over a copy of its array at each pause, so that a user
//! interface can draw it step by step. Starting anything new safely discards
//! the sort in flight.
//!
//! ```
//! use sort_steps::{AlgorithmId, ControllerBuilder};
//!
//! let mut controller = ControllerBuilder::new().build();
//! let run = controller
//!     .start_full(&[170, 45, 75, 90, 802, 24, 2, 66], AlgorithmId::RadixSort)
//!     .expect("sorting failed");
//! assert_eq!(run.snapshot.values(), &[2, 24, 45, 66, 75, 90, 170, 802]);
//! ```
#![deny(missing_docs)]
#![warn(clippy::all)]

mod algorithms;
mod builder;
pub use crate::builder::{ControllerBuilder, Pacing};
mod chart;
pub use crate::chart::{ChartSink, SvgChart};
mod common_types;
pub use crate::common_types::{AlgorithmId, Value, STEP_BUDGET, TIMING_TRIALS};
mod compare;
pub use crate::compare::Comparator;
mod controller;
pub use crate::controller::{FullRun, SessionController, Step};
mod engine;
pub use crate::engine::SortEngine;
mod error;
pub use crate::error::{Interrupted, SortError};
mod numbers;
pub use crate::numbers::{random_numbers, SET_LEN, SET_VALUES};
mod pause;
pub use crate::pause::{cadence, NoPauses, PausePoint};
pub mod prelude;
mod publisher;
pub use crate::publisher::StepPublisher;
mod snapshot;
pub use crate::snapshot::{Snapshot, SnapshotKind};
mod stats;
pub use crate::stats::TimingReport;
pub(crate) mod svg;
pub use crate::svg::{fill_svg_file, scatter, write_svg_file, Dot};
mod visualizer;
pub use crate::visualizer::Visualizer;
