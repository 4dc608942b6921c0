//! Error types for the ALMA core library.

use thiserror::Error;

/// Top-level error type for all ALMA operations.
#[derive(Error, Debug)]
pub enum AlmaError {
    /// A bounded scalar was built outside its declared interval through the
    /// validating constructor.
    #[error("Range violation: {scalar} value {value} outside [{min}, {max}]")]
    RangeViolation {
        /// Which bounded scalar rejected the value.
        scalar: &'static str,
        /// The offending value.
        value: f32,
        /// Inclusive lower bound.
        min: f32,
        /// Inclusive upper bound.
        max: f32,
    },

    /// An emotion category outside the closed emotion table.
    #[error("Unmapped emotion category: {0}")]
    UnmappedCategory(String),

    /// The virtual emotion center was requested with no active emotions.
    #[error("Cannot aggregate a virtual emotion center from zero active emotions")]
    EmptyAggregation,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, AlmaError>;
