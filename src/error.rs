//! Error types for vclip.

/// Result type alias for vclip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for vclip.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Interval token does not match the required `[HH:]MM:SS-[HH:]MM:SS` structure.
    #[error("malformed interval '{token}': {reason}")]
    MalformedInterval {
        /// The offending token as the user supplied it.
        token: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Interval end offset is not strictly greater than its start offset.
    #[error("invalid range '{interval}': end must be greater than start")]
    InvalidRange {
        /// The offending interval in canonical form.
        interval: String,
    },

    /// No interval tokens were supplied.
    #[error("no intervals specified (use -i or -f)")]
    NoIntervals,

    /// Clip options were supplied without an input video path.
    #[error("no input video specified")]
    NoInput,

    /// Source media path does not resolve.
    #[error("input file not found: {path}")]
    InputNotFound {
        /// Path that was supplied.
        path: std::path::PathBuf,
    },

    /// Failed to read an interval file.
    #[error("failed to read interval file '{path}'")]
    IntervalFileRead {
        /// Path to the interval file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No usable ffmpeg binary could be located.
    #[error("ffmpeg not found (set FFMPEG_PATH, use --ffmpeg, or put ffmpeg on PATH)")]
    FfmpegNotFound,

    /// ffmpeg exited non-zero while extracting a subclip.
    #[error(
        "extraction failed for interval {index} ({interval}), ffmpeg exit status {status}: {stderr}"
    )]
    ExtractFailed {
        /// 1-based position of the interval in the list.
        index: usize,
        /// The interval in canonical form.
        interval: String,
        /// Exit status reported by ffmpeg.
        status: i32,
        /// Captured ffmpeg diagnostics.
        stderr: String,
    },

    /// ffmpeg exited non-zero while concatenating the subclips.
    #[error("merge failed, ffmpeg exit status {status}: {stderr}")]
    MergeFailed {
        /// Exit status reported by ffmpeg.
        status: i32,
        /// Captured ffmpeg diagnostics.
        stderr: String,
    },

    /// Failed to write the concat manifest file.
    #[error("failed to write merge manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
