//! Dark channel of a color image.
//!
//! Purpose
//! - In haze-free outdoor patches at least one color channel is usually close
//!   to zero. Haze adds airlight to every channel, lifting that minimum, so the
//!   dark channel is a per-pixel haze indicator.
//!
//! Design
//! - Step 1 takes the minimum over the three channels of each pixel.
//! - Step 2 erodes that map with a flat `window × window` element (see
//!   [`filters::MinFilter`] for the border policy).
//! - Works on any [`ImageView`]: 8-bit input and the light-normalized float
//!   image share the same code path. Values keep the input scale.
//!
//! Invariants
//! - Every output value is ≤ the per-pixel channel minimum of the source.
//! - Output is pointwise non-increasing in the window size.

pub mod filters;

#[cfg(test)]
mod tests;

use crate::error::{DehazeError, Result};
use crate::image::{ImageF32, ImageView, Sample};
use crate::parallel::for_each_row_mut;
use filters::MinFilter;
use log::debug;

/// Number of channels the dark channel prior is defined for.
pub const COLOR_CHANNELS: usize = 3;

/// Per-pixel minimum over the interleaved channels of `image`.
///
/// Assumes the shape was already validated.
pub fn channel_min<I>(image: &I) -> ImageF32
where
    I: ImageView + Sync,
{
    let (w, h, c) = (image.width(), image.height(), image.channels());
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 || c == 0 {
        return out;
    }
    for_each_row_mut(&mut out.data, w, |y, dst| {
        let src = image.row(y);
        for (d, px) in dst.iter_mut().zip(src.chunks_exact(c)) {
            *d = px
                .iter()
                .map(|&s| s.to_f32())
                .fold(f32::INFINITY, f32::min);
        }
    });
    out
}

/// Compute the dark channel of a 3-channel image with a `window × window`
/// local-minimum filter.
pub fn compute<I>(image: &I, window: usize) -> Result<ImageF32>
where
    I: ImageView + Sync,
{
    if image.channels() != COLOR_CHANNELS {
        return Err(DehazeError::InvalidChannelCount {
            found: image.channels(),
        });
    }
    image.check_shape()?;
    let filter = MinFilter::new(window)?;
    debug!(
        "dark_channel::compute w={} h={} window={}",
        image.width(),
        image.height(),
        window
    );
    Ok(filter.apply(&channel_min(image)))
}
