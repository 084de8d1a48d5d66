//! Serializable reports describing an analysis request.
//!
//! `SweepReport` is what the CLI writes as `sweep.json`: the input descriptor,
//! the resolved sweep parameters, one sample per threshold and a timing trace.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SweepReport, ThresholdSample};
pub use timing::{Stage, StageTiming, TimingBreakdown};
