//! Local-minimum (erosion) filter with a flat square structuring element.
//!
//! The square element is separable: a horizontal minimum over `window`
//! samples followed by a vertical minimum over `window` rows gives exactly the
//! minimum over the `window × window` neighbourhood.
//!
//! Border policy: edge replication. Replicated samples already lie inside the
//! clipped window, so for a minimum this is the same as shrinking the window
//! at the borders, and the same as padding with +∞.
use crate::error::{DehazeError, Result};
use crate::image::ImageF32;
use crate::parallel::for_each_row_mut;

/// Flat `window × window` minimum filter, centred on each pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinFilter {
    window: usize,
}

impl MinFilter {
    /// Window side length must be positive and odd so the element is centred.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 || window % 2 == 0 {
            return Err(DehazeError::InvalidWindowSize(window));
        }
        Ok(Self { window })
    }

    #[inline]
    pub fn radius(&self) -> usize {
        self.window / 2
    }

    /// Erode `src`, returning a map of the same size.
    pub fn apply(&self, src: &ImageF32) -> ImageF32 {
        let r = self.radius();
        if r == 0 || src.w == 0 || src.h == 0 {
            return src.clone();
        }
        let (w, h) = (src.w, src.h);

        // horizontal
        let mut tmp = ImageF32::new(w, h);
        for_each_row_mut(&mut tmp.data, w, |y, dst| {
            let row = &src.data[y * w..(y + 1) * w];
            for (x, out) in dst.iter_mut().enumerate() {
                let lo = x.saturating_sub(r);
                let hi = (x + r).min(w - 1);
                *out = row[lo..=hi].iter().copied().fold(f32::INFINITY, f32::min);
            }
        });

        // vertical
        let mut out = ImageF32::new(w, h);
        for_each_row_mut(&mut out.data, w, |y, dst| {
            let lo = y.saturating_sub(r);
            let hi = (y + r).min(h - 1);
            dst.copy_from_slice(&tmp.data[lo * w..(lo + 1) * w]);
            for yy in lo + 1..=hi {
                let row = &tmp.data[yy * w..(yy + 1) * w];
                for (d, &v) in dst.iter_mut().zip(row) {
                    *d = d.min(v);
                }
            }
        });
        out
    }
}
