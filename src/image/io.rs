//! Codec helpers: the only place the crate touches image files.
//!
//! - `load_rgb_image`: decode any format the `image` crate supports into an
//!   owned RGB8 [`PixelBuffer`].
//! - `save_rgb_image`: write a 3-channel buffer; the format follows the file
//!   extension.
//! - `save_grayscale_f32`: write a single-channel map (dark channel,
//!   transmission) as an 8-bit grayscale image.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView, PixelBuffer};
use crate::error::{DehazeError, Result};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to interleaved 8-bit RGB.
///
/// Channel order is R, G, B as produced by the decoder and is kept as-is by
/// every pipeline stage.
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|source| DehazeError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelBuffer::from_raw(width, height, 3, img.into_raw())
}

/// Save a 3-channel 8-bit image; the format is inferred from the extension.
pub fn save_rgb_image(image: ImageU8<'_>, path: &Path) -> Result<()> {
    if image.channels != 3 {
        return Err(DehazeError::InvalidChannelCount {
            found: image.channels,
        });
    }
    image.check_shape()?;
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, px) in row.chunks_exact(3).enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([px[0], px[1], px[2]]));
        }
    }
    out.save(path).map_err(|source| DehazeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a float map to a grayscale image as `clamp(v * scale, 0, 255)`.
///
/// Use `scale = 1.0` for maps already in 0..255 and `255.0` for maps in 0..1.
pub fn save_grayscale_f32(map: &ImageF32, scale: f32, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(map.w as u32, map.h as u32);
    for y in 0..map.h {
        let row = map.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = (px * scale).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|source| DehazeError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
///
/// Nothing is written when serialization fails.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        DehazeError::Config(format!("failed to serialize {}: {e}", path.display()))
    })?;
    ensure_parent_dir(path)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
