//! Error type shared by every pipeline stage and the I/O helpers.
//!
//! Stages never recover locally: each failure is returned as a
//! [`DehazeError`] and propagated with `?` up to the caller of
//! [`pipeline::run`](crate::pipeline::run). Only the command-line harness
//! catches and reports them.
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T, E = DehazeError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum DehazeError {
    /// The image does not carry exactly three interleaved channels.
    #[error("input must be a 3-channel color image, got {found} channel(s)")]
    InvalidChannelCount { found: usize },

    /// Width or height is zero.
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// The backing buffer is shorter than the declared shape requires.
    #[error("buffer holds {actual} samples, {expected} required")]
    BufferSize { expected: usize, actual: usize },

    /// Two buffers that must share spatial dimensions do not.
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Local-minimum window must be a positive odd side length.
    #[error("window size must be a positive odd integer, got {0}")]
    InvalidWindowSize(usize),

    /// A scalar parameter is outside its admissible range.
    #[error("parameter `{name}` = {value} is outside {range}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    /// An atmospheric-light component is zero and cannot normalize the image.
    #[error("atmospheric light is zero in channel {channel}")]
    ZeroAtmosphericLight { channel: usize },

    /// No pixel is available for the atmospheric-light selection.
    #[error("atmospheric light selection is empty ({pixels} pixels available)")]
    DegenerateSelection { pixels: usize },

    /// The codec could not produce a pixel buffer from the file.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The codec could not write the output file.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Runtime configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
