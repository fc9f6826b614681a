#![allow(dead_code)]

use dcp_dehaze::image::PixelBuffer;

/// Airlight used by the synthetic haze generator.
pub const HAZE_LIGHT: [u8; 3] = [230, 220, 210];

/// Constant-color RGB image.
pub fn uniform_rgb(width: usize, height: usize, color: [u8; 3]) -> PixelBuffer {
    PixelBuffer::filled(width, height, &color)
}

/// Haze-free scene that satisfies the dark channel prior exactly.
///
/// The top `sky_rows` rows are filled with [`HAZE_LIGHT`]. Every other pixel
/// has one channel at zero, rotating in 8×8 tiles, and the remaining two
/// channels follow smooth gradients.
pub fn clear_scene(width: usize, height: usize, sky_rows: usize) -> PixelBuffer {
    assert!(width > 0 && height > sky_rows, "scene needs rows below the sky");
    let mut img = PixelBuffer::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            if y < sky_rows {
                img.set_pixel(x, y, &HAZE_LIGHT);
                continue;
            }
            let a = (40 + (x * 160) / width) as u8;
            let b = (30 + (y * 170) / height) as u8;
            let px = match (x / 8 + y / 8) % 3 {
                0 => [0, a, b],
                1 => [a, 0, b],
                _ => [a, b, 0],
            };
            img.set_pixel(x, y, &px);
        }
    }
    img
}

/// Apply the haze model `I = J t + A (1 - t)` with a constant transmission,
/// rounding to the nearest 8-bit value.
pub fn add_haze(clear: &PixelBuffer, light: [u8; 3], transmission: f32) -> PixelBuffer {
    let mut hazy = clear.clone();
    for (dst, src) in hazy
        .data_mut()
        .chunks_exact_mut(3)
        .zip(clear.data().chunks_exact(3))
    {
        for c in 0..3 {
            let a = light[c] as f32;
            let v = src[c] as f32 * transmission + a * (1.0 - transmission);
            dst[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    hazy
}

/// Deterministic pseudo-random RGB noise (xorshift).
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.max(1);
    let mut data = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height * 3 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push((state >> 24) as u8);
    }
    PixelBuffer::from_raw(width, height, 3, data).expect("noise buffer")
}
