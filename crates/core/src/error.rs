//! Error types raised by the outcome combinators themselves.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Error type for failures synthesized by this crate.
///
/// Most failures travel through [`crate::Fallible`] as whatever cause the
/// underlying operation raised. The variants here cover the two places the
/// combinators must invent a cause of their own: extracting a value that is
/// absent, and narrowing a value to a type that cannot represent it.
#[derive(Debug, Error)]
pub enum Error {
    // Extraction errors
    #[error("missing value: {what}")]
    MissingValue { what: String },

    // Conversion errors
    #[error("cannot represent {from} value as {to}")]
    CastFailed {
        from: &'static str,
        to: &'static str,
    },
}

impl Error {
    /// Create a missing-value error naming what was expected.
    pub fn missing_value(what: impl Into<String>) -> Self {
        Self::MissingValue { what: what.into() }
    }

    /// Create a failed-cast error from source and target type names.
    pub const fn cast_failed(from: &'static str, to: &'static str) -> Self {
        Self::CastFailed { from, to }
    }
}
