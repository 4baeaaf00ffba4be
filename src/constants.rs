//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "vclip";

/// Binary name probed on PATH when no explicit ffmpeg location is given.
pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Suffix inserted before the extension of the merged output file.
pub const OUTPUT_SUFFIX: &str = "_clip";

/// Extension used for intermediate clips when the input has none.
pub const DEFAULT_CLIP_EXTENSION: &str = "mp4";

/// Filename of the concat demuxer list inside the temp directory.
pub const MANIFEST_FILENAME: &str = "merge_manifest.txt";

/// Time field bounds for interval tokens.
pub mod time {
    /// Seconds per minute.
    pub const SECS_PER_MINUTE: u64 = 60;

    /// Seconds per hour.
    pub const SECS_PER_HOUR: u64 = 3600;

    /// Exclusive upper bound for the minutes and seconds fields.
    pub const FIELD_LIMIT: u64 = 60;
}
