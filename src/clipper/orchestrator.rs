//! Sequential clip-and-merge orchestration.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::constants::MANIFEST_FILENAME;
use crate::error::{Error, Result};
use crate::interval::Interval;

use super::outpath::clip_extension;
use super::tool::{MediaTool, ToolError};

/// One interval bound to its 1-based position and temporary clip file.
///
/// Owned exclusively by the orchestrator for the duration of one run; the
/// file vanishes with the temporary directory.
#[derive(Debug)]
pub struct ClipJob {
    /// 1-based position in the interval list.
    pub index: usize,
    /// The interval this job extracts.
    pub interval: Interval,
    /// Temporary file the extraction writes to.
    pub output: PathBuf,
}

/// Ordered list of clip paths written in the external tool's concat
/// demuxer list format, one `file '<path>'` line per clip.
#[derive(Debug)]
pub struct MergeManifest {
    path: PathBuf,
}

impl MergeManifest {
    /// Write a manifest for `jobs` into `dir`, preserving job order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestWrite`] if the list file cannot be written.
    pub fn write(dir: &Path, jobs: &[ClipJob]) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);

        let mut contents = Vec::new();
        for job in jobs {
            // Temp paths are generated by this process and never contain
            // quotes, so no escaping is needed.
            writeln!(contents, "file '{}'", job.output.display()).map_err(|e| {
                Error::ManifestWrite {
                    path: path.clone(),
                    source: e,
                }
            })?;
        }

        std::fs::write(&path, contents).map_err(|e| Error::ManifestWrite {
            path: path.clone(),
            source: e,
        })?;

        Ok(Self { path })
    }

    /// Path of the written list file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Drives the extract-then-merge sequence against a [`MediaTool`].
///
/// Strictly sequential: each interval is processed to completion before the
/// next begins, and the merge runs only after every extraction succeeded. A
/// single tool failure aborts the whole run with no retry and no partial
/// output.
pub struct Orchestrator<T: MediaTool> {
    tool: T,
    output_path: PathBuf,
}

impl<T: MediaTool> Orchestrator<T> {
    /// Create an orchestrator writing its merged result to `output_path`.
    pub fn new(tool: T, output_path: PathBuf) -> Self {
        Self { tool, output_path }
    }

    /// Extract every interval from `input` and merge the clips in order.
    ///
    /// Returns the final output path on success. Temporary clip files live
    /// in a scoped directory that is deleted when this function returns,
    /// on the failure paths as well.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtractFailed`] or [`Error::MergeFailed`] when the
    /// external tool exits non-zero, naming the step (and interval) that
    /// failed. A partially written final file is removed on merge failure.
    pub fn run(&self, input: &Path, intervals: &[Interval]) -> Result<PathBuf> {
        if intervals.is_empty() {
            return Err(Error::NoIntervals);
        }

        let tmpdir = TempDir::new()?;
        let extension = clip_extension(input);
        let total = intervals.len();

        let jobs: Vec<ClipJob> = intervals
            .iter()
            .enumerate()
            .map(|(i, interval)| ClipJob {
                index: i + 1,
                interval: *interval,
                output: tmpdir
                    .path()
                    .join(format!("clip_{:03}.{extension}", i + 1)),
            })
            .collect();

        for job in &jobs {
            println!("Processing subclip {} out of {total}", job.index);
            debug!("extracting {} to {}", job.interval, job.output.display());

            self.tool
                .extract(
                    input,
                    job.interval.start.as_secs(),
                    job.interval.duration_secs(),
                    &job.output,
                )
                .map_err(|e| extract_error(e, job))?;
        }

        println!("Merging subclips");
        let manifest = MergeManifest::write(tmpdir.path(), &jobs)?;

        if let Err(e) = self.tool.concat(manifest.path(), &self.output_path) {
            // Whatever the tool managed to write must not survive the run.
            let _ = std::fs::remove_file(&self.output_path);
            return Err(merge_error(e));
        }

        info!("merged {total} clip(s) into {}", self.output_path.display());
        println!("Result saved to {}", self.output_path.display());

        Ok(self.output_path.clone())
    }
}

fn extract_error(e: ToolError, job: &ClipJob) -> Error {
    match e {
        ToolError::Spawn(source) => Error::Io(source),
        ToolError::Exit { status, stderr } => Error::ExtractFailed {
            index: job.index,
            interval: job.interval.to_string(),
            status,
            stderr,
        },
    }
}

fn merge_error(e: ToolError) -> Error {
    match e {
        ToolError::Spawn(source) => Error::Io(source),
        ToolError::Exit { status, stderr } => Error::MergeFailed { status, stderr },
    }
}
