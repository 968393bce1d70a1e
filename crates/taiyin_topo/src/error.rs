//! Error types for observer-dependent computations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use taiyin_core::CoreError;

/// Errors from parallax, refraction and parallactic-angle computations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TopoError {
    /// The refraction formula has no meaningful value at this altitude.
    RefractionUndefined { altitude_rad: f64 },
    /// Parallactic angle requested for an observer at a geographic pole.
    PoleSingularity { latitude_rad: f64 },
    /// Invalid observer site parameter.
    InvalidLocation(&'static str),
    /// Parallax needs a physical distance; got a direction-only value.
    UnitlessDistance,
    /// Error from the core layer.
    Core(CoreError),
}

impl Display for TopoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RefractionUndefined { altitude_rad } => write!(
                f,
                "refraction undefined at altitude {:.6}°",
                altitude_rad.to_degrees()
            ),
            Self::PoleSingularity { latitude_rad } => write!(
                f,
                "parallactic angle undefined at latitude {:.9}°",
                latitude_rad.to_degrees()
            ),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::UnitlessDistance => write!(f, "parallax requires a distance with a physical unit"),
            Self::Core(e) => write!(f, "core error: {e}"),
        }
    }
}

impl Error for TopoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for TopoError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}
