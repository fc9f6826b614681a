#![doc = include_str!("../README.md")]

// Pipeline stages, in execution order.
pub mod atmosphere;
pub mod dark_channel;
pub mod radiance;
pub mod transmission;

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod pipeline;

mod parallel;

// --- High-level re-exports -------------------------------------------------

pub use crate::atmosphere::{AtmosphereMode, AtmosphericLight};
pub use crate::diagnostics::{DehazeReport, PipelineTrace};
pub use crate::error::{DehazeError, Result};
pub use crate::pipeline::{run, run_with_diagnostics, DehazeParams, Dehazer};
pub use crate::transmission::ZeroLightPolicy;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use dcp_dehaze::prelude::*;
///
/// # fn main() -> dcp_dehaze::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let rgb = vec![128u8; w * h * 3];
/// let img = ImageU8::packed(w, h, 3, &rgb);
///
/// let dehazer = Dehazer::new(DehazeParams::default())?;
/// let clear = dehazer.process(img)?;
/// println!("{}x{}", clear.width(), clear.height());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, PixelBuffer};
    pub use crate::{DehazeError, DehazeParams, Dehazer};
}
