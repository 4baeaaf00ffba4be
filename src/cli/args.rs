//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Cut intervals out of a video and merge them with ffmpeg.
#[derive(Debug, Parser)]
#[command(name = "vclip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Video file to clip.
    pub input: Option<PathBuf>,

    /// Common options for clipping.
    #[command(flatten)]
    pub clip: ClipArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the clipping run.
#[derive(Debug, Args)]
pub struct ClipArgs {
    /// Intervals to extract, in the format `[HH:]MM:SS-[HH:]MM:SS`.
    #[arg(short, long, num_args = 1.., conflicts_with = "interval_file")]
    pub intervals: Vec<String>,

    /// File containing one interval per line (blank lines and # comments skipped).
    #[arg(short = 'f', long)]
    pub interval_file: Option<PathBuf>,

    /// Directory for the merged output file (default: current directory).
    #[arg(short, long, env = "VCLIP_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to the ffmpeg binary (default: probe PATH).
    #[arg(long, env = "FFMPEG_PATH")]
    pub ffmpeg: Option<PathBuf>,

    /// Suppress informational log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
