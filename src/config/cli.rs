//! Command-line arguments of the `dcp-dehaze` harness.
//!
//! Flags override the values of an optional JSON config (`--config`), which
//! in turn override the built-in defaults.
use super::runtime::{load_config, RuntimeConfig};
use crate::atmosphere::AtmosphereMode;
use crate::error::Result;
use crate::transmission::ZeroLightPolicy;
use clap::Parser;
use std::path::PathBuf;

/// Parsed command line, before it is merged with a config file.
#[derive(Clone, Debug, Default, PartialEq, Parser)]
#[command(name = "dcp-dehaze")]
#[command(version, about = "Remove haze from a photograph with the dark channel prior", long_about = None)]
pub struct CliArgs {
    /// Hazy input image (asked for on stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// JSON runtime config
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dehazed output image [default: <INPUT stem>_dehazed.png]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the pipeline trace as JSON
    #[arg(long = "json", value_name = "FILE")]
    pub json_out: Option<PathBuf>,

    /// Save the dark channel and transmission maps
    #[arg(long, value_name = "DIR")]
    pub debug_dir: Option<PathBuf>,

    /// Local-minimum window side length (odd)
    #[arg(long = "window", value_name = "N")]
    pub window_size: Option<usize>,

    /// Fraction of haze removed, in (0, 1]
    #[arg(long, value_name = "FLOAT")]
    pub omega: Option<f32>,

    /// Transmission floor, in (0, 1)
    #[arg(long, value_name = "FLOAT")]
    pub t0: Option<f32>,

    /// Share of pixels used for the atmospheric light, in (0, 1]
    #[arg(long, value_name = "FLOAT")]
    pub top_fraction: Option<f64>,

    /// Take the atmospheric light from the single brightest candidate
    #[arg(long)]
    pub brightest_pixel: bool,

    /// What to do when an atmospheric-light component is zero
    #[arg(long, value_enum, value_name = "POLICY")]
    pub zero_light: Option<ZeroLightPolicy>,
}

/// Merge `args` over the config file they name (if any).
pub fn resolve(args: &CliArgs) -> Result<RuntimeConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(path) = &args.output {
        config.output.image = Some(path.clone());
    }
    if let Some(path) = &args.json_out {
        config.output.json_out = Some(path.clone());
    }
    if let Some(dir) = &args.debug_dir {
        config.output.debug_dir = Some(dir.clone());
    }
    let params = &mut config.params;
    if let Some(window) = args.window_size {
        params.window_size = window;
    }
    if let Some(omega) = args.omega {
        params.omega = omega;
    }
    if let Some(t0) = args.t0 {
        params.t0 = t0;
    }
    if let Some(fraction) = args.top_fraction {
        params.top_fraction = fraction;
    }
    if args.brightest_pixel {
        params.atmosphere = AtmosphereMode::BrightestPixel;
    }
    if let Some(policy) = args.zero_light {
        params.zero_light = policy;
    }
    Ok(config)
}
