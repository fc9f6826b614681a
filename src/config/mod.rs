//! Runtime configuration for the command-line harness.
//!
//! A JSON file deserialized into [`RuntimeConfig`] (every field optional)
//! plus command-line flags ([`CliArgs`], parsed with `clap`) that override it.

pub mod cli;
pub mod runtime;

pub use cli::{resolve, CliArgs};
pub use runtime::{load_config, parse_config, OutputConfig, RuntimeConfig};
