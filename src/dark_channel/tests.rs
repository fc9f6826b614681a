use super::filters::MinFilter;
use super::*;
use crate::image::{ColorImageF32, ImageU8, PixelBuffer};

fn gradient_rgb(width: usize, height: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, 3);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 37 + y * 11) % 256) as u8;
            let g = ((x * 5 + y * 53) % 256) as u8;
            let b = ((x * 29 + y * 7 + 90) % 256) as u8;
            img.set_pixel(x, y, &[r, g, b]);
        }
    }
    img
}

#[test]
fn uniform_image_keeps_channel_minimum_for_every_window() {
    let img = PixelBuffer::filled(9, 7, &[180, 120, 210]);
    for window in [1, 3, 5, 15] {
        let dark = compute(&img.as_view(), window).expect("dark channel");
        assert_eq!((dark.w, dark.h), (9, 7));
        assert!(
            dark.data.iter().all(|&v| v == 120.0),
            "window={window} produced {:?}",
            dark.min_max()
        );
    }
}

#[test]
fn window_one_equals_channel_minimum() {
    let img = gradient_rgb(12, 10);
    let view = img.as_view();
    let dark = compute(&view, 1).expect("dark channel");
    for y in 0..10 {
        for x in 0..12 {
            let px = view.pixel(x, y);
            let expected = px.iter().copied().min().unwrap() as f32;
            assert_eq!(dark.get(x, y), expected, "mismatch at ({x}, {y})");
        }
    }
}

#[test]
fn dark_channel_is_bounded_by_channel_minimum() {
    let img = gradient_rgb(16, 16);
    let minimum = channel_min(&img.as_view());
    let dark = compute(&img.as_view(), 5).expect("dark channel");
    for (d, m) in dark.data.iter().zip(&minimum.data) {
        assert!(d <= m);
    }
}

#[test]
fn larger_windows_never_increase_the_dark_channel() {
    let img = gradient_rgb(20, 14);
    let small = compute(&img.as_view(), 3).expect("window 3");
    let large = compute(&img.as_view(), 7).expect("window 7");
    for (i, (s, l)) in small.data.iter().zip(&large.data).enumerate() {
        assert!(l <= s, "pixel {i}: window 7 gave {l} > window 3 gave {s}");
    }
}

#[test]
fn corner_minimum_spreads_by_radius_with_edge_replication() {
    let mut img = PixelBuffer::filled(8, 8, &[200, 200, 200]);
    img.set_pixel(0, 0, &[10, 40, 90]);
    let dark = compute(&img.as_view(), 5).expect("dark channel");
    for y in 0..8 {
        for x in 0..8 {
            let expected = if x <= 2 && y <= 2 { 10.0 } else { 200.0 };
            assert_eq!(dark.get(x, y), expected, "unexpected value at ({x}, {y})");
        }
    }
}

#[test]
fn window_larger_than_image_yields_global_minimum() {
    let img = gradient_rgb(4, 3);
    let global = channel_min(&img.as_view()).min_max().unwrap().0;
    let dark = compute(&img.as_view(), 15).expect("dark channel");
    assert!(dark.data.iter().all(|&v| v == global));
}

#[test]
fn non_color_images_are_rejected() {
    let gray = PixelBuffer::filled(4, 4, &[128]);
    let err = compute(&gray.as_view(), 3).unwrap_err();
    assert!(matches!(err, DehazeError::InvalidChannelCount { found: 1 }));

    let rgba = PixelBuffer::filled(4, 4, &[1, 2, 3, 255]);
    let err = compute(&rgba.as_view(), 3).unwrap_err();
    assert!(matches!(err, DehazeError::InvalidChannelCount { found: 4 }));
}

#[test]
fn even_or_zero_windows_are_rejected() {
    let img = PixelBuffer::filled(4, 4, &[1, 2, 3]);
    for window in [0, 2, 14] {
        let err = compute(&img.as_view(), window).unwrap_err();
        assert!(matches!(err, DehazeError::InvalidWindowSize(w) if w == window));
    }
}

#[test]
fn truncated_buffer_is_reported_instead_of_panicking() {
    let data = vec![0u8; 10];
    let view = ImageU8::packed(2, 2, 3, &data);
    let err = compute(&view, 3).unwrap_err();
    assert!(matches!(
        err,
        DehazeError::BufferSize {
            expected: 12,
            actual: 10
        }
    ));
}

#[test]
fn empty_image_is_rejected() {
    let view = ImageU8::packed(0, 5, 3, &[]);
    let err = compute(&view, 3).unwrap_err();
    assert!(matches!(err, DehazeError::EmptyImage { width: 0, height: 5 }));
}

#[test]
fn float_images_share_the_same_code_path() {
    let mut img = ColorImageF32::new(3, 3, 3);
    for (i, v) in img.data.iter_mut().enumerate() {
        *v = 1.0 - i as f32 * 0.01;
    }
    let dark = compute(&img, 7).expect("dark channel");
    let last = img.data.last().copied().unwrap();
    assert!(dark.data.iter().all(|&v| (v - last).abs() < 1e-6));
}

#[test]
fn strided_views_skip_row_padding() {
    // 2x2 RGB with two padding bytes per row set to 0
    let data = [
        50, 60, 70, 80, 90, 100, 0, 0, //
        110, 120, 130, 140, 150, 160, 0, 0,
    ];
    let view = ImageU8 {
        w: 2,
        h: 2,
        channels: 3,
        stride: 8,
        data: &data,
    };
    let dark = compute(&view, 1).expect("dark channel");
    assert_eq!(dark.data, vec![50.0, 80.0, 110.0, 140.0]);
}

#[test]
fn min_filter_matches_brute_force() {
    let img = gradient_rgb(11, 9);
    let base = channel_min(&img.as_view());
    let filter = MinFilter::new(5).unwrap();
    let fast = filter.apply(&base);
    let r = filter.radius() as isize;
    for y in 0..9isize {
        for x in 0..11isize {
            let mut m = f32::INFINITY;
            for dy in -r..=r {
                for dx in -r..=r {
                    let sx = (x + dx).clamp(0, 10) as usize;
                    let sy = (y + dy).clamp(0, 8) as usize;
                    m = m.min(base.get(sx, sy));
                }
            }
            assert_eq!(fast.get(x as usize, y as usize), m);
        }
    }
}
