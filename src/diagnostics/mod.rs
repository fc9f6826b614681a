//! Diagnostics data model returned by the pipeline and written by the harness.
//!
//! [`DehazeReport`] is the main entry point: it bundles the dehazed image and
//! the intermediate maps with a serializable [`PipelineTrace`] describing the
//! run (estimated light, map statistics, per-stage timings).

pub mod maps;
pub mod pipeline;
pub mod timing;

pub use maps::MapStats;
pub use pipeline::{DehazeReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
