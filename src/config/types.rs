//! Configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent configuration loaded from `config.toml`.
///
/// Every field is optional; command-line flags take precedence over config
/// values, which take precedence over built-in defaults.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit path to the ffmpeg binary.
    pub ffmpeg_path: Option<PathBuf>,

    /// Directory the merged output file is written to.
    pub output_dir: Option<PathBuf>,
}
