//! Atmospheric light estimation.
//!
//! The haziest pixels are the ones with the brightest dark channel; the color
//! of the airlight is read from the input image at those positions.
//!
//! - `k = max(1, floor(N * top_fraction))` candidates are selected, ordered by
//!   dark-channel value (descending) and then by flat index (ascending), so
//!   ties always resolve to the lowest index.
//! - [`AtmosphereMode::ChannelMax`] returns the per-channel maximum over the
//!   candidates. [`AtmosphereMode::BrightestPixel`] returns the single
//!   candidate with the largest channel maximum instead.
//!
//! This stage is a global reduction over every pixel and therefore runs
//! sequentially between the data-parallel stages.
use crate::dark_channel::COLOR_CHANNELS;
use crate::error::{DehazeError, Result};
use crate::image::{ImageF32, ImageView, Sample};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Share of pixels treated as "haziest" when estimating the light.
pub const DEFAULT_TOP_FRACTION: f64 = 0.001;

/// Estimated airlight color, one component per channel in input order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AtmosphericLight(pub [f32; 3]);

impl AtmosphericLight {
    pub fn components(&self) -> [f32; 3] {
        self.0
    }

    /// First channel whose component is zero, if any.
    pub fn zero_channel(&self) -> Option<usize> {
        self.0.iter().position(|&a| a == 0.0)
    }
}

/// How the light color is read from the selected candidates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtmosphereMode {
    /// Per-channel maximum over all candidates.
    #[default]
    ChannelMax,
    /// The single candidate pixel with the highest channel maximum.
    BrightestPixel,
}

/// Number of candidates for `pixels` pixels: `max(1, floor(pixels * fraction))`,
/// never more than `pixels`.
pub fn candidate_count(pixels: usize, fraction: f64) -> usize {
    let k = (pixels as f64 * fraction).floor() as usize;
    k.max(1).min(pixels)
}

/// Flat indices of the `k` brightest dark-channel pixels, brightest first.
pub fn select_brightest(dark: &ImageF32, k: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f32)> = dark.data.iter().copied().enumerate().collect();
    let k = k.min(ranked.len());
    if k == 0 {
        return Vec::new();
    }
    let order = |a: &(usize, f32), b: &(usize, f32)| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0));
    if k < ranked.len() {
        ranked.select_nth_unstable_by(k - 1, order);
        ranked.truncate(k);
    }
    ranked.sort_unstable_by(order);
    ranked.into_iter().map(|(i, _)| i).collect()
}

/// Estimate the atmospheric light of `image` from its dark channel.
pub fn estimate<I>(
    image: &I,
    dark: &ImageF32,
    top_fraction: f64,
    mode: AtmosphereMode,
) -> Result<AtmosphericLight>
where
    I: ImageView,
{
    if image.channels() != COLOR_CHANNELS {
        return Err(DehazeError::InvalidChannelCount {
            found: image.channels(),
        });
    }
    if (image.width(), image.height()) != (dark.w, dark.h) {
        return Err(DehazeError::DimensionMismatch {
            expected: (image.width(), image.height()),
            actual: (dark.w, dark.h),
        });
    }
    if !(top_fraction > 0.0 && top_fraction <= 1.0) {
        return Err(DehazeError::InvalidParameter {
            name: "top_fraction",
            value: top_fraction,
            range: "(0, 1]",
        });
    }
    let pixels = dark.w * dark.h;
    if pixels == 0 {
        return Err(DehazeError::DegenerateSelection { pixels });
    }
    image.check_shape()?;

    let k = candidate_count(pixels, top_fraction);
    if (pixels as f64 * top_fraction) < 1.0 {
        warn!(
            "atmosphere: {pixels} pixels give no candidate at fraction {top_fraction}, using 1"
        );
    }
    let candidates = select_brightest(dark, k);
    if candidates.is_empty() {
        return Err(DehazeError::DegenerateSelection { pixels });
    }

    let width = dark.w;
    let sample = |idx: usize| -> [f32; 3] {
        let (x, y) = (idx % width, idx / width);
        let px = &image.row(y)[x * COLOR_CHANNELS..(x + 1) * COLOR_CHANNELS];
        [px[0].to_f32(), px[1].to_f32(), px[2].to_f32()]
    };

    let light = match mode {
        AtmosphereMode::ChannelMax => {
            let mut acc = [f32::NEG_INFINITY; 3];
            for &idx in &candidates {
                let px = sample(idx);
                for c in 0..COLOR_CHANNELS {
                    acc[c] = acc[c].max(px[c]);
                }
            }
            acc
        }
        AtmosphereMode::BrightestPixel => {
            let mut best = sample(candidates[0]);
            let mut best_intensity = best[0].max(best[1]).max(best[2]);
            for &idx in &candidates[1..] {
                let px = sample(idx);
                let intensity = px[0].max(px[1]).max(px[2]);
                if intensity > best_intensity {
                    best_intensity = intensity;
                    best = px;
                }
            }
            best
        }
    };

    debug!(
        "atmosphere::estimate pixels={pixels} candidates={k} mode={mode:?} light={light:?}"
    );
    Ok(AtmosphericLight(light))
}
