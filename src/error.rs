//! Conversion Errors
//!
//! Errors raised when a raw reply does not have the shape a converter
//! expects. These are contract violations between this layer and the store
//! (or the transport feeding it) and are returned to the caller unchanged.
//!
//! Absent inputs are never errors here: they resolve to default bytes,
//! empty collections or omitted arguments inside the converters themselves.

use thiserror::Error;

/// Errors that can occur while converting a reply into domain types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// The reply (or one of its elements) had the wrong RESP type
    #[error("unexpected reply: expected {expected}, got {actual}")]
    UnexpectedReply {
        expected: &'static str,
        actual: &'static str,
    },

    /// A fixed-shape reply had the wrong number of elements
    #[error("wrong number of reply elements: expected {expected}, got {actual}")]
    WrongElementCount { expected: usize, actual: usize },

    /// A flat key/value or member/score array had an odd length
    #[error("reply has an odd number of elements: {0}")]
    UnpairedElements(usize),

    /// A score could not be parsed as a floating-point number
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// A cursor or other integer carried as text could not be parsed
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// A numeric field was outside the range the protocol allows
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// A slot range whose start lies after its end
    #[error("inverted slot range: start {start} > end {end}")]
    InvertedSlotRange { start: u16, end: u16 },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
