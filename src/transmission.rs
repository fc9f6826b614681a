//! Transmission estimation.
//!
//! `t(x) = 1 - omega * dark(I / A)(x)`: the image is normalized by the
//! atmospheric light channel by channel, and the dark channel of the result
//! (same window as the first pass) measures how much airlight each patch
//! holds. `omega < 1` keeps a trace of haze on distant objects.
//!
//! A zero light component cannot normalize its channel. [`ZeroLightPolicy`]
//! decides whether that aborts the run or the channel is read as `0.0`.
use crate::atmosphere::AtmosphericLight;
use crate::dark_channel::{self, COLOR_CHANNELS};
use crate::error::{DehazeError, Result};
use crate::image::{ColorImageF32, ImageF32, ImageView, Sample};
use crate::parallel::for_each_row_mut;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Handling of a zero atmospheric-light component during normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ZeroLightPolicy {
    /// Fail with [`DehazeError::ZeroAtmosphericLight`].
    #[default]
    Reject,
    /// Treat the normalized value of that channel as `0.0`.
    Sentinel,
}

/// Divide every sample by the light component of its channel.
pub fn normalize<I>(image: &I, light: &AtmosphericLight, policy: ZeroLightPolicy) -> Result<ColorImageF32>
where
    I: ImageView + Sync,
{
    if image.channels() != COLOR_CHANNELS {
        return Err(DehazeError::InvalidChannelCount {
            found: image.channels(),
        });
    }
    image.check_shape()?;
    if let Some(channel) = light.zero_channel() {
        match policy {
            ZeroLightPolicy::Reject => {
                return Err(DehazeError::ZeroAtmosphericLight { channel });
            }
            ZeroLightPolicy::Sentinel => {
                warn!("transmission: atmospheric light is zero in channel {channel}, normalizing it to 0");
            }
        }
    }

    let a = light.components();
    let (w, h) = (image.width(), image.height());
    let mut out = ColorImageF32::new(w, h, COLOR_CHANNELS);
    for_each_row_mut(&mut out.data, w * COLOR_CHANNELS, |y, dst| {
        let src = image.row(y);
        for (d, s) in dst.chunks_exact_mut(COLOR_CHANNELS).zip(src.chunks_exact(COLOR_CHANNELS)) {
            for c in 0..COLOR_CHANNELS {
                d[c] = if a[c] == 0.0 { 0.0 } else { s[c].to_f32() / a[c] };
            }
        }
    });
    Ok(out)
}

/// Estimate the transmission map of `image` given its atmospheric light.
pub fn estimate<I>(
    image: &I,
    light: &AtmosphericLight,
    omega: f32,
    window: usize,
    policy: ZeroLightPolicy,
) -> Result<ImageF32>
where
    I: ImageView + Sync,
{
    if !(omega > 0.0 && omega <= 1.0) {
        return Err(DehazeError::InvalidParameter {
            name: "omega",
            value: omega as f64,
            range: "(0, 1]",
        });
    }
    let normalized = normalize(image, light, policy)?;
    let dark = dark_channel::compute(&normalized, window)?;
    debug!(
        "transmission::estimate w={} h={} omega={omega} window={window}",
        dark.w, dark.h
    );
    Ok(dark.map(|d| 1.0 - omega * d))
}
