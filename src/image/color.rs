/// Owned interleaved float image, used for the light-normalized input.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorImageF32 {
    pub w: usize,
    pub h: usize,
    pub channels: usize,
    pub data: Vec<f32>,
}

impl ColorImageF32 {
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        Self {
            w,
            h,
            channels,
            data: vec![0.0; w * h * channels],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> f32 {
        self.data[(y * self.w + x) * self.channels + c]
    }
}

impl crate::image::traits::ImageView for ColorImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w * self.channels
    }
    #[inline]
    fn channels(&self) -> usize {
        self.channels
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let len = self.w * self.channels;
        &self.data[y * len..(y + 1) * len]
    }
}
