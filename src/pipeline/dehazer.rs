use super::params::DehazeParams;
use crate::atmosphere::{self, AtmosphericLight};
use crate::dark_channel::{self, COLOR_CHANNELS};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{DehazeReport, InputDescriptor, MapStats, PipelineTrace, TimingBreakdown};
use crate::error::{DehazeError, Result};
use crate::image::{ImageF32, ImageU8, ImageView, PixelBuffer};
use crate::radiance;
use crate::transmission;
use log::debug;
use std::time::Instant;

/// Stage labels used in [`TimingBreakdown`].
pub const STAGE_DARK_CHANNEL: &str = "dark_channel";
pub const STAGE_ATMOSPHERE: &str = "atmospheric_light";
pub const STAGE_TRANSMISSION: &str = "transmission";
pub const STAGE_RECOVERY: &str = "recovery";

/// Dehazer holding a validated parameter set.
///
/// Holds no per-image state; one instance can process any number of images,
/// from any number of threads.
#[derive(Clone, Debug)]
pub struct Dehazer {
    params: DehazeParams,
}

struct StageOutputs {
    dark: ImageF32,
    light: AtmosphericLight,
    transmission: ImageF32,
    output: PixelBuffer,
}

impl Dehazer {
    /// Create a dehazer, rejecting out-of-range parameters up front.
    pub fn new(params: DehazeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &DehazeParams {
        &self.params
    }

    /// Dehaze `image` and return the recovered buffer.
    pub fn process(&self, image: ImageU8<'_>) -> Result<PixelBuffer> {
        let mut timings = TimingBreakdown::default();
        Ok(self.run_stages(image, &mut timings)?.output)
    }

    /// Dehaze `image` and capture the intermediate maps and a trace.
    pub fn process_with_diagnostics(&self, image: ImageU8<'_>) -> Result<DehazeReport> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let StageOutputs {
            dark,
            light,
            transmission,
            output,
        } = self.run_stages(image, &mut timings)?;

        let t0 = self.params.t0;
        let floored_pixels = transmission.data.iter().filter(|&&t| t < t0).count();
        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
                channels: image.channels(),
            },
            params: self.params.clone(),
            atmospheric_light: light,
            light_candidates: atmosphere::candidate_count(dark.w * dark.h, self.params.top_fraction),
            dark_channel: MapStats::of(&dark),
            transmission: MapStats::of(&transmission),
            floored_pixels,
            timings: TimingBreakdown {
                total_ms: elapsed_ms(total_start),
                ..timings
            },
        };
        Ok(DehazeReport {
            output,
            dark_channel: dark,
            transmission,
            trace,
        })
    }

    fn run_stages(&self, image: ImageU8<'_>, timings: &mut TimingBreakdown) -> Result<StageOutputs> {
        let p = &self.params;
        let total_start = Instant::now();
        debug!(
            "pipeline: start w={} h={} channels={} window={} omega={} t0={}",
            image.width(),
            image.height(),
            image.channels(),
            p.window_size,
            p.omega,
            p.t0
        );
        if image.channels() != COLOR_CHANNELS {
            return Err(DehazeError::InvalidChannelCount {
                found: image.channels(),
            });
        }
        image.check_shape()?;

        let start = Instant::now();
        let dark = dark_channel::compute(&image, p.window_size)?;
        timings.push(STAGE_DARK_CHANNEL, elapsed_ms(start));

        let start = Instant::now();
        let light = atmosphere::estimate(&image, &dark, p.top_fraction, p.atmosphere)?;
        timings.push(STAGE_ATMOSPHERE, elapsed_ms(start));

        let start = Instant::now();
        let transmission =
            transmission::estimate(&image, &light, p.omega, p.window_size, p.zero_light)?;
        timings.push(STAGE_TRANSMISSION, elapsed_ms(start));

        let start = Instant::now();
        let output = radiance::recover(&image, &light, &transmission, p.t0)?;
        timings.push(STAGE_RECOVERY, elapsed_ms(start));

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "pipeline: done light={:?} total_ms={:.3}",
            light.components(),
            timings.total_ms
        );
        Ok(StageOutputs {
            dark,
            light,
            transmission,
            output,
        })
    }
}

/// Run the four stages on `image` with `params`.
pub fn run(image: ImageU8<'_>, params: &DehazeParams) -> Result<PixelBuffer> {
    Dehazer::new(params.clone())?.process(image)
}

/// Like [`run`], also returning intermediate maps and a trace.
pub fn run_with_diagnostics(image: ImageU8<'_>, params: &DehazeParams) -> Result<DehazeReport> {
    Dehazer::new(params.clone())?.process_with_diagnostics(image)
}
