//! Types for lunar phase searches.

use std::f64::consts::{FRAC_PI_2, PI};

/// Principal phase of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarPhase {
    /// Elongation 0°.
    NewMoon,
    /// Elongation 90°.
    FirstQuarter,
    /// Elongation 180°.
    FullMoon,
    /// Elongation 270°.
    LastQuarter,
}

impl LunarPhase {
    pub const ALL: [Self; 4] = [Self::NewMoon, Self::FirstQuarter, Self::FullMoon, Self::LastQuarter];

    /// Elongation of this phase in `[0, 2π)`.
    pub fn elongation_rad(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FirstQuarter => FRAC_PI_2,
            Self::FullMoon => PI,
            Self::LastQuarter => 3.0 * FRAC_PI_2,
        }
    }
}

/// A refined lunar phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPhaseEvent {
    /// Event time, Julian centuries TT since J2000.0.
    pub t_tt: f64,
    pub phase: LunarPhase,
}
