//! Parameter types configuring the dehazing stages.
//!
//! Defaults follow the values commonly used with the dark channel prior:
//! a 15×15 window, `omega = 0.95` and a transmission floor of `0.1`.
use crate::atmosphere::{AtmosphereMode, DEFAULT_TOP_FRACTION};
use crate::error::{DehazeError, Result};
use crate::transmission::ZeroLightPolicy;
use serde::{Deserialize, Serialize};

/// Pipeline-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DehazeParams {
    /// Side length of the square local-minimum window (positive, odd).
    pub window_size: usize,
    /// Fraction of haze removed, in `(0, 1]`.
    pub omega: f32,
    /// Lower bound applied to the transmission during recovery, in `(0, 1)`.
    pub t0: f32,
    /// Share of pixels used to estimate the atmospheric light, in `(0, 1]`.
    pub top_fraction: f64,
    pub atmosphere: AtmosphereMode,
    pub zero_light: ZeroLightPolicy,
}

impl Default for DehazeParams {
    fn default() -> Self {
        Self {
            window_size: 15,
            omega: 0.95,
            t0: 0.1,
            top_fraction: DEFAULT_TOP_FRACTION,
            atmosphere: AtmosphereMode::default(),
            zero_light: ZeroLightPolicy::default(),
        }
    }
}

impl DehazeParams {
    /// Check every field against its admissible range.
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || self.window_size % 2 == 0 {
            return Err(DehazeError::InvalidWindowSize(self.window_size));
        }
        check_range("omega", self.omega as f64, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
        check_range("t0", self.t0 as f64, "(0, 1)", |v| v > 0.0 && v < 1.0)?;
        check_range("top_fraction", self.top_fraction, "(0, 1]", |v| {
            v > 0.0 && v <= 1.0
        })?;
        Ok(())
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    range: &'static str,
    ok: impl Fn(f64) -> bool,
) -> Result<()> {
    if ok(value) {
        Ok(())
    } else {
        Err(DehazeError::InvalidParameter { name, value, range })
    }
}
