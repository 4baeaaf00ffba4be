//! Interval parsing and validation.
//!
//! Converts user-supplied `[HH:]MM:SS-[HH:]MM:SS` tokens into a typed,
//! ordered sequence of time ranges. User order is preserved verbatim; it
//! determines the concatenation order of the merged output.

mod offset;
mod range;

pub use offset::TimeOffset;
pub use range::{Interval, parse_intervals, read_interval_file};
