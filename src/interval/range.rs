//! Interval tokens and interval lists.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

use super::TimeOffset;

/// A user-specified (start, end) time range within the source video.
///
/// Invariant: `end > start`, enforced at parse time. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Start of the range.
    pub start: TimeOffset,
    /// End of the range (exclusive of further material, strictly after start).
    pub end: TimeOffset,
}

impl Interval {
    /// Parse one interval token in the format `[HH:]MM:SS-[HH:]MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInterval`] when the token lacks the `-`
    /// separator or either side fails time parsing, and
    /// [`Error::InvalidRange`] when `end <= start`.
    pub fn parse(token: &str) -> Result<Self> {
        let Some((start_text, end_text)) = token.split_once('-') else {
            return Err(Error::MalformedInterval {
                token: token.to_string(),
                reason: "missing '-' separator between start and end".to_string(),
            });
        };

        if end_text.contains('-') {
            return Err(Error::MalformedInterval {
                token: token.to_string(),
                reason: "must contain exactly one '-' separator".to_string(),
            });
        }

        let start = TimeOffset::parse(start_text, token)?;
        let end = TimeOffset::parse(end_text, token)?;

        if end <= start {
            return Err(Error::InvalidRange {
                interval: format!("{start}-{end}"),
            });
        }

        Ok(Self { start, end })
    }

    /// Length of the interval in seconds.
    pub fn duration_secs(&self) -> u64 {
        self.end.as_secs() - self.start.as_secs()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Parse interval tokens in user order.
///
/// Order is preserved verbatim; it becomes the concatenation order of the
/// merged output. Overlapping or out-of-order intervals are accepted and
/// processed independently.
///
/// # Errors
///
/// Returns [`Error::NoIntervals`] for an empty token list, otherwise the
/// first parse failure encountered.
pub fn parse_intervals<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Interval>> {
    if tokens.is_empty() {
        return Err(Error::NoIntervals);
    }

    tokens
        .iter()
        .map(|token| Interval::parse(token.as_ref()))
        .collect()
}

/// Read interval tokens from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns [`Error::IntervalFileRead`] if the file cannot be read.
pub fn read_interval_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::IntervalFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect())
}
