//! Time offsets within the source media.

use std::fmt;

use crate::constants::time::{FIELD_LIMIT, SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::error::{Error, Result};

/// A non-negative duration into the source media, normalized to whole seconds.
///
/// Canonical display form is `HH:MM:SS`, zero-padded to two digits per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOffset {
    total_secs: u64,
}

impl TimeOffset {
    /// Create an offset from a total number of seconds.
    pub const fn from_secs(total_secs: u64) -> Self {
        Self { total_secs }
    }

    /// Total seconds represented by this offset.
    pub const fn as_secs(self) -> u64 {
        self.total_secs
    }

    /// Parse one side of an interval token.
    ///
    /// Accepts exactly two (`MM:SS`) or three (`HH:MM:SS`) colon-separated
    /// fields. The minutes and seconds fields must be integers below 60.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInterval`] naming the full `token` when the
    /// field count is wrong or any field fails to parse. The caller passes
    /// the whole interval token so error messages point at what the user
    /// actually typed.
    pub fn parse(text: &str, token: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(':').collect();

        let (hours, minutes, seconds) = match fields.as_slice() {
            [mm, ss] => (0, parse_bounded(mm, token)?, parse_bounded(ss, token)?),
            [hh, mm, ss] => (
                parse_number(hh, token)?,
                parse_bounded(mm, token)?,
                parse_bounded(ss, token)?,
            ),
            _ => {
                return Err(Error::MalformedInterval {
                    token: token.to_string(),
                    reason: format!("time '{text}' must have the form [HH:]MM:SS"),
                });
            }
        };

        // Minutes and seconds are bounded below 60; only the hours term can
        // overflow the total.
        hours
            .checked_mul(SECS_PER_HOUR)
            .and_then(|h| h.checked_add(minutes * SECS_PER_MINUTE + seconds))
            .map(Self::from_secs)
            .ok_or_else(|| Error::MalformedInterval {
                token: token.to_string(),
                reason: format!("time '{text}' is too large"),
            })
    }
}

impl fmt::Display for TimeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.total_secs / SECS_PER_HOUR;
        let minutes = (self.total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE;
        let seconds = self.total_secs % SECS_PER_MINUTE;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Parse a minutes or seconds field (bounded below 60).
fn parse_bounded(field: &str, token: &str) -> Result<u64> {
    let value = parse_number(field, token)?;
    if value >= FIELD_LIMIT {
        return Err(Error::MalformedInterval {
            token: token.to_string(),
            reason: format!("value '{field}' must be between 0 and {}", FIELD_LIMIT - 1),
        });
    }
    Ok(value)
}

/// Parse a non-negative integer field. Hours have no upper bound.
fn parse_number(field: &str, token: &str) -> Result<u64> {
    field.parse().map_err(|_| Error::MalformedInterval {
        token: token.to_string(),
        reason: format!("value '{field}' is not a number"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        let offset = TimeOffset::parse("5:40", "5:40-5:45").unwrap();
        assert_eq!(offset.as_secs(), 340);
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        let offset = TimeOffset::parse("1:02:03", "1:02:03-1:02:04").unwrap();
        assert_eq!(offset.as_secs(), 3723);
    }

    #[test]
    fn test_parse_single_field_is_malformed() {
        let result = TimeOffset::parse("10", "10-20");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_parse_four_fields_is_malformed() {
        let result = TimeOffset::parse("1:2:3:4", "1:2:3:4-1:2:3:5");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_parse_non_numeric_field_is_malformed() {
        let result = TimeOffset::parse("a:30", "a:30-1:00");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_parse_negative_field_is_malformed() {
        let result = TimeOffset::parse("-1:30", "-1:30-1:00");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_seconds_field_out_of_range() {
        let result = TimeOffset::parse("0:61", "0:61-1:00");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_minutes_field_out_of_range() {
        let result = TimeOffset::parse("60:00", "60:00-61:00");
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_hours_field_unbounded() {
        let offset = TimeOffset::parse("100:00:00", "100:00:00-100:00:01").unwrap();
        assert_eq!(offset.as_secs(), 360_000);
    }

    #[test]
    fn test_oversized_hours_field_is_malformed() {
        let token = "6000000000000000:00:00-6000000000000001:00:00";
        let result = TimeOffset::parse("6000000000000000:00:00", token);
        assert!(matches!(result, Err(Error::MalformedInterval { .. })));
    }

    #[test]
    fn test_largest_representable_hours_value() {
        let text = format!("{}:00:00", u64::MAX / 3600);
        let token = format!("{text}-{text}");
        let offset = TimeOffset::parse(&text, &token).unwrap();
        assert_eq!(offset.as_secs(), (u64::MAX / 3600) * 3600);
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(TimeOffset::from_secs(44).to_string(), "00:00:44");
        assert_eq!(TimeOffset::from_secs(340).to_string(), "00:05:40");
        assert_eq!(TimeOffset::from_secs(3723).to_string(), "01:02:03");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for token in ["0:44", "00:44", "5:40", "1:02:03", "23:59:59"] {
            let rendered = TimeOffset::parse(token, token).unwrap().to_string();
            let reparsed = TimeOffset::parse(&rendered, &rendered).unwrap();
            assert_eq!(reparsed.to_string(), rendered);
        }
    }
}
