//! Dehazing pipeline composing the four dark-channel-prior stages.
//!
//! Overview
//! - Dark channel of the input ([`crate::dark_channel`]).
//! - Atmospheric light from the brightest dark-channel pixels
//!   ([`crate::atmosphere`]).
//! - Transmission from the dark channel of the light-normalized image
//!   ([`crate::transmission`]).
//! - Radiance recovery with a floored transmission ([`crate::radiance`]).
//!
//! Each run is a pure function of the image and the parameters: no state is
//! carried between calls and any stage error aborts the run.
//!
//! Typical usage:
//! ```no_run
//! use dcp_dehaze::{DehazeParams, Dehazer};
//! use dcp_dehaze::image::PixelBuffer;
//!
//! # fn example(hazy: PixelBuffer) -> dcp_dehaze::Result<()> {
//! let dehazer = Dehazer::new(DehazeParams::default())?;
//! let report = dehazer.process_with_diagnostics(hazy.as_view())?;
//! println!("light = {:?}", report.trace.atmospheric_light.components());
//! # Ok(())
//! # }
//! ```

mod dehazer;
pub mod params;


pub use dehazer::{
    run, run_with_diagnostics, Dehazer, STAGE_ATMOSPHERE, STAGE_DARK_CHANNEL, STAGE_RECOVERY,
    STAGE_TRANSMISSION,
};
pub use params::DehazeParams;
