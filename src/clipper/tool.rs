//! External media tool invocation.
//!
//! The orchestrator talks to ffmpeg through the [`MediaTool`] trait so the
//! clip-and-merge sequence can be exercised without a real binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::constants::FFMPEG_BINARY;
use crate::error::{Error, Result};

/// Failure of a single external tool invocation.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// The tool process could not be launched.
    #[error("failed to launch media tool: {0}")]
    Spawn(#[from] std::io::Error),

    /// The tool ran but exited non-zero.
    #[error("media tool exit status {status}: {stderr}")]
    Exit {
        /// Exit status (-1 if terminated by signal).
        status: i32,
        /// Captured diagnostic output.
        stderr: String,
    },
}

/// The two operations the orchestrator needs from the external media tool.
///
/// Both are synchronous, blocking calls; success is indicated solely by the
/// returned result. No timeouts are imposed, an invocation blocks for as
/// long as the tool runs.
pub trait MediaTool {
    /// Extract `duration_secs` of media starting at `start_secs` from
    /// `source` into `dest` without re-encoding.
    fn extract(
        &self,
        source: &Path,
        start_secs: u64,
        duration_secs: u64,
        dest: &Path,
    ) -> std::result::Result<(), ToolError>;

    /// Concatenate the files listed in `manifest` (in list order) into `dest`.
    fn concat(&self, manifest: &Path, dest: &Path) -> std::result::Result<(), ToolError>;
}

/// ffmpeg invoked as a subprocess.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    binary: PathBuf,
}

impl Ffmpeg {
    /// Locate a usable ffmpeg binary.
    ///
    /// An explicit path (from `--ffmpeg`, `FFMPEG_PATH`, or the config file)
    /// takes precedence and must exist. Without one, `ffmpeg` on PATH is
    /// probed with `-version`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FfmpegNotFound`] if no usable binary is found.
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Self {
                    binary: path.to_path_buf(),
                });
            }
            return Err(Error::FfmpegNotFound);
        }

        let probe = Command::new(FFMPEG_BINARY)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(status) if status.success() => Ok(Self {
                binary: PathBuf::from(FFMPEG_BINARY),
            }),
            _ => Err(Error::FfmpegNotFound),
        }
    }

    /// Path of the binary this instance invokes.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run the binary with the given arguments, waiting for it to exit.
    fn run(&self, cmd: &mut Command) -> std::result::Result<(), ToolError> {
        debug!("invoking {:?}", cmd);

        let output = cmd
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()?;

        if output.status.success() {
            return Ok(());
        }

        Err(ToolError::Exit {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

impl MediaTool for Ffmpeg {
    // -ss before -i requests a fast demuxer-level seek; with -c copy the
    // actual cut snaps to the nearest keyframe. Accepted tradeoff for
    // speed and quality preservation.
    fn extract(
        &self,
        source: &Path,
        start_secs: u64,
        duration_secs: u64,
        dest: &Path,
    ) -> std::result::Result<(), ToolError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-hide_banner", "-loglevel", "error"])
            .args(["-ss", &start_secs.to_string()])
            .args(["-t", &duration_secs.to_string()])
            .arg("-i")
            .arg(source)
            .args(["-c", "copy", "-y"])
            .arg(dest);
        self.run(&mut cmd)
    }

    fn concat(&self, manifest: &Path, dest: &Path) -> std::result::Result<(), ToolError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-hide_banner", "-loglevel", "error"])
            .args(["-f", "concat", "-safe", "0"])
            .arg("-i")
            .arg(manifest)
            .args(["-c", "copy", "-y"])
            .arg(dest);
        self.run(&mut cmd)
    }
}
