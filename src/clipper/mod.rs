//! Clip-and-merge orchestration.
//!
//! Drives the external media tool: one stream-copy extraction per interval
//! into a scoped temporary directory, then a single concatenation of the
//! results into the final output file.

mod orchestrator;
mod outpath;
mod tool;

pub use orchestrator::{ClipJob, MergeManifest, Orchestrator};
pub use outpath::{clip_extension, derive_output_path};
pub use tool::{Ffmpeg, MediaTool, ToolError};
