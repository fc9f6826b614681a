//! Scene radiance recovery, the last pipeline stage.
//!
//! Inverts the haze model `I = J t + A (1 - t)` per channel:
//! `J = (I - A) / max(t, t0) + A`. The floor `t0` keeps thick-haze regions
//! from dividing by a near-zero transmission. Arithmetic is `f32`; the result
//! is clipped to `[0, 255]` and truncated to `u8`.
use crate::atmosphere::AtmosphericLight;
use crate::dark_channel::COLOR_CHANNELS;
use crate::error::{DehazeError, Result};
use crate::image::{ImageF32, ImageView, PixelBuffer, Sample};
use crate::parallel::for_each_row_mut;
use log::debug;

/// Transmission with every value raised to at least `t0`.
pub fn floor_transmission(transmission: &ImageF32, t0: f32) -> ImageF32 {
    transmission.map(|t| t.max(t0))
}

/// Recover the haze-free image.
pub fn recover<I>(
    image: &I,
    light: &AtmosphericLight,
    transmission: &ImageF32,
    t0: f32,
) -> Result<PixelBuffer>
where
    I: ImageView + Sync,
{
    if image.channels() != COLOR_CHANNELS {
        return Err(DehazeError::InvalidChannelCount {
            found: image.channels(),
        });
    }
    image.check_shape()?;
    if (image.width(), image.height()) != (transmission.w, transmission.h) {
        return Err(DehazeError::DimensionMismatch {
            expected: (image.width(), image.height()),
            actual: (transmission.w, transmission.h),
        });
    }
    if !(t0 > 0.0 && t0 < 1.0) {
        return Err(DehazeError::InvalidParameter {
            name: "t0",
            value: t0 as f64,
            range: "(0, 1)",
        });
    }

    let a = light.components();
    let (w, h) = (image.width(), image.height());
    let mut out = PixelBuffer::new(w, h, COLOR_CHANNELS);
    for_each_row_mut(out.data_mut(), w * COLOR_CHANNELS, |y, dst| {
        let src = image.row(y);
        let t_row = &transmission.data[y * w..(y + 1) * w];
        for ((d, s), &t) in dst
            .chunks_exact_mut(COLOR_CHANNELS)
            .zip(src.chunks_exact(COLOR_CHANNELS))
            .zip(t_row)
        {
            let t = t.max(t0);
            for c in 0..COLOR_CHANNELS {
                let j = (s[c].to_f32() - a[c]) / t + a[c];
                d[c] = j.clamp(0.0, 255.0) as u8;
            }
        }
    });
    debug!("radiance::recover w={w} h={h} t0={t0}");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_raises_low_transmission_only() {
        let mut t = ImageF32::new(3, 1);
        t.data = vec![0.05, 0.1, 0.7];
        let floored = floor_transmission(&t, 0.1);
        assert_eq!(floored.data, vec![0.1, 0.1, 0.7]);
        assert!(floored.data.iter().all(|&v| v >= 0.1));
    }

    #[test]
    fn pixels_equal_to_light_are_unchanged() {
        let img = PixelBuffer::filled(3, 2, &[200, 180, 160]);
        let light = AtmosphericLight([200.0, 180.0, 160.0]);
        let t = ImageF32::filled(3, 2, 0.01);
        let out = recover(&img.as_view(), &light, &t, 0.1).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn inversion_matches_haze_model() {
        // I = J t + A (1 - t) with J = 40, A = 240, t = 0.5 gives I = 140
        let img = PixelBuffer::filled(2, 2, &[140, 140, 140]);
        let light = AtmosphericLight([240.0; 3]);
        let t = ImageF32::filled(2, 2, 0.5);
        let out = recover(&img.as_view(), &light, &t, 0.1).unwrap();
        assert!(out.data().iter().all(|&v| v == 40));
    }

    #[test]
    fn extreme_values_are_clipped() {
        let mut img = PixelBuffer::filled(2, 1, &[0, 0, 0]);
        img.set_pixel(1, 0, &[255, 255, 255]);
        let light = AtmosphericLight([128.0; 3]);
        let t = ImageF32::filled(2, 1, 0.0);
        let out = recover(&img.as_view(), &light, &t, 0.1).unwrap();
        assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(out.pixel(1, 0), &[255, 255, 255]);
    }

    #[test]
    fn fractional_results_truncate() {
        // (101 - 100) / 0.4 + 100 = 102.5
        let img = PixelBuffer::filled(1, 1, &[101, 101, 101]);
        let light = AtmosphericLight([100.0; 3]);
        let t = ImageF32::filled(1, 1, 0.4);
        let out = recover(&img.as_view(), &light, &t, 0.1).unwrap();
        assert_eq!(out.pixel(0, 0), &[102, 102, 102]);
    }

    #[test]
    fn transmission_size_must_match() {
        let img = PixelBuffer::filled(2, 2, &[1, 2, 3]);
        let light = AtmosphericLight([1.0; 3]);
        let t = ImageF32::filled(2, 3, 0.5);
        let err = recover(&img.as_view(), &light, &t, 0.1).unwrap_err();
        assert!(matches!(err, DehazeError::DimensionMismatch { .. }));
    }

    #[test]
    fn t0_must_lie_strictly_inside_unit_interval() {
        let img = PixelBuffer::filled(1, 1, &[1, 2, 3]);
        let light = AtmosphericLight([1.0; 3]);
        let t = ImageF32::filled(1, 1, 0.5);
        for t0 in [0.0, 1.0, -0.5] {
            let err = recover(&img.as_view(), &light, &t, t0).unwrap_err();
            assert!(matches!(err, DehazeError::InvalidParameter { name: "t0", .. }));
        }
    }
}
