use crate::error::{DehazeError, Result};
use crate::pipeline::DehazeParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem when no output path is configured.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_dehazed";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Dehazed image path; defaults to `<stem>_dehazed.png` next to the input.
    pub image: Option<PathBuf>,
    pub json_out: Option<PathBuf>,
    /// Directory receiving the dark channel and transmission maps.
    pub debug_dir: Option<PathBuf>,
}

/// Everything the harness needs for one run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub input: Option<PathBuf>,
    pub output: OutputConfig,
    pub params: DehazeParams,
}

impl RuntimeConfig {
    /// Where the dehazed image of `input` is written.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        if let Some(path) = &self.output.image {
            return path.clone();
        }
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        input.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}.png"))
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        DehazeError::Config(format!("failed to read config {}: {e}", path.display()))
    })?;
    parse_config(&contents)
        .map_err(|e| DehazeError::Config(format!("failed to parse config {}: {e}", path.display())))
}

/// Parse a JSON runtime config; missing fields take their defaults.
pub fn parse_config(json: &str) -> std::result::Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(json)
}
