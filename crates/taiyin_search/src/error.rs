//! Error types for event searches.

use std::error::Error;
use std::fmt::{Display, Formatter};

use taiyin_core::CoreError;

/// Errors from the iterative finders and the event searches built on them.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// A refinement pass hit a vanishing curvature or slope, or produced a
    /// non-finite time. `pass` is 1-based.
    NumericDivergence { stage: &'static str, pass: usize },
    /// Invalid search plan or request.
    InvalidConfig(&'static str),
    /// Error from the core layer.
    Core(CoreError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumericDivergence { stage, pass } => {
                write!(f, "numeric divergence in {stage}, pass {pass}")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Core(e) => write!(f, "core error: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for SearchError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_stage_and_pass() {
        let e = SearchError::NumericDivergence { stage: "lunar node", pass: 2 };
        assert_eq!(e.to_string(), "numeric divergence in lunar node, pass 2");
    }

    #[test]
    fn core_error_is_source() {
        let e: SearchError = CoreError::NonFinite("t").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "core error: non-finite value: t");
    }
}
