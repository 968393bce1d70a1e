//! Error types for the core ephemeris layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from constant validation or series evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// A physical constant failed validation.
    InvalidConstants(&'static str),
    /// A series or derived quantity evaluated to NaN or infinity.
    NonFinite(&'static str),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConstants(msg) => write!(f, "invalid physical constants: {msg}"),
            Self::NonFinite(what) => write!(f, "non-finite value: {what}"),
        }
    }
}

impl Error for CoreError {}

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(value: f64, what: &'static str) -> Result<f64, CoreError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::NonFinite(what))
    }
}
