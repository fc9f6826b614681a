use crate::error::{DehazeError, Result};

/// Scalar sample stored in an image buffer.
///
/// Every stage computes in `f32`; this converts 8-bit and float samples to a
/// common representation without caring which buffer they came from.
pub trait Sample: Copy + Send + Sync {
    fn to_f32(self) -> f32;
}

impl Sample for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

/// Row-major, channel-interleaved read access.
///
/// `row(y)` returns `width() * channels()` samples; `stride()` counts samples
/// between the starts of consecutive rows.
pub trait ImageView {
    type Pixel: Sample;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    fn channels(&self) -> usize {
        1
    }

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// Check that the image is non-empty and its rows can be read.
    fn check_shape(&self) -> Result<()> {
        if self.width() == 0 || self.height() == 0 {
            return Err(DehazeError::EmptyImage {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.image.height().saturating_sub(self.y);
        (left, Some(left))
    }
}
