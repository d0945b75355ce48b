//! Everything needed to drive sorts from a front end.
pub use crate::chart::{ChartSink, SvgChart};
pub use crate::common_types::{AlgorithmId, Value};
pub use crate::controller::{FullRun, SessionController, Step};
pub use crate::error::SortError;
pub use crate::visualizer::Visualizer;
pub use crate::ControllerBuilder;
