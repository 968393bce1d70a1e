//! Types for solar-term searches.

use std::f64::consts::PI;

/// Angular spacing of solar terms.
pub const SOLAR_TERM_STEP_RAD: f64 = PI / 12.0;

/// Number of solar terms in a tropical year.
pub const SOLAR_TERMS_PER_YEAR: u8 = 24;

/// A solar-term crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermEvent {
    /// Event time, Julian centuries TT since J2000.0.
    pub t_tt: f64,
    /// 0 = March equinox, 6 = June solstice, 12 = September equinox,
    /// 18 = December solstice.
    pub index: u8,
    /// Apparent solar longitude at the event in `[0, 2π)`.
    pub longitude_rad: f64,
}
