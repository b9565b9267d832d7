//! Error types for timecode parsing and construction.

use thiserror::Error;

/// Error type for timecode operations.
///
/// Every failure is synchronous and surfaced at the offending call; an
/// operation either produces a fully consistent value or nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    /// The mode name is not one of the eight known modes.
    #[error("invalid timecode mode: {0:?}")]
    InvalidMode(String),

    /// The string does not match `DD:DD:DD:DD` (`:`, `;`, and `.` separators
    /// are interchangeable).
    #[error("invalid timecode string: {0:?}")]
    InvalidFormat(String),

    /// A field parsed correctly but exceeds its bound for the given mode.
    #[error("timecode {field} value {value} out of range (max {max})")]
    FieldOutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    /// A frame count supplied as a float is not a whole number.
    #[error("invalid frame count: {0}")]
    InvalidCount(f64),

    /// Construction was given neither a string nor a count.
    #[error("timecode string and frame count both absent")]
    MissingInput,
}

/// Result type alias for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;
