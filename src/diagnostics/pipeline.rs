use crate::atmosphere::AtmosphericLight;
use crate::diagnostics::{MapStats, TimingBreakdown};
use crate::image::{ImageF32, PixelBuffer};
use crate::pipeline::DehazeParams;
use serde::Serialize;

/// Result produced by [`Dehazer::process_with_diagnostics`](crate::Dehazer).
///
/// Only the trace is serialized; the buffers are kept for callers that want
/// to save or inspect them.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DehazeReport {
    #[serde(skip)]
    pub output: PixelBuffer,
    #[serde(skip)]
    pub dark_channel: ImageF32,
    #[serde(skip)]
    pub transmission: ImageF32,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing one dehazing run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub params: DehazeParams,
    pub atmospheric_light: AtmosphericLight,
    /// Number of dark-channel pixels the light was estimated from.
    pub light_candidates: usize,
    pub dark_channel: MapStats,
    /// Statistics of the raw (unfloored) transmission.
    pub transmission: MapStats,
    /// Pixels whose transmission was raised to `t0` during recovery.
    pub floored_pixels: usize,
    pub timings: TimingBreakdown,
}

impl PipelineTrace {
    /// Share of pixels affected by the transmission floor.
    pub fn floored_fraction(&self) -> f64 {
        let pixels = self.input.width * self.input.height;
        if pixels == 0 {
            0.0
        } else {
            self.floored_pixels as f64 / pixels as f64
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}
