//! Longitude → time solvers.
//!
//! Each solver starts from the mean motion and takes a fixed number of
//! Newton steps on an unwrapped longitude, raising the series truncation
//! as the estimate improves. Targets are cumulative: `w` and `w + 2π`
//! name different events one revolution apart.
//!
//! The `_fast` variants replace most of the series with a handful of
//! closed-form periodic corrections. They are good to several minutes and
//! serve as seeds for calendar tables.

use std::f64::consts::PI;

use taiyin_core::{
    SeriesProvider, Terms, earth_lon, earth_speed, ensure_finite, moon_lon, moon_speed,
    moon_sun_elongation, sun_apparent_lon,
};
use taiyin_frames::RAD_PER_ARCSEC;

use crate::error::SearchError;

/// Earth's heliocentric longitude at J2000.0, radians.
const EARTH_LON_J2000: f64 = 1.753_47;
/// Moon's mean longitude at J2000.0, radians.
const MOON_LON_J2000: f64 = 3.810_34;
/// Moon − Sun mean elongation at J2000.0, negated, radians.
const ELONGATION_OFFSET: f64 = 1.084_72;

/// Mean motions, radians per Julian century.
const EARTH_MEAN_MOTION: f64 = 628.331_965_331_8;
const MOON_MEAN_MOTION: f64 = 8_399.709_110_333_84;
const SYNODIC_MEAN_MOTION: f64 = 7_771.377_145_002_04;

fn finite(t: f64) -> Result<f64, SearchError> {
    Ok(ensure_finite(t, "event time")?)
}

/// Time (centuries TT) when the Earth's geometric heliocentric longitude
/// reaches `w`.
pub fn earth_lon_time<P: SeriesProvider + ?Sized>(p: &P, w: f64) -> Result<f64, SearchError> {
    let mut t = (w - EARTH_LON_J2000) / EARTH_MEAN_MOTION;
    t += (w - earth_lon(p, t, Terms::Leading(10))) / earth_speed(t);
    t += (w - earth_lon(p, t, Terms::Full)) / earth_speed(t);
    finite(t)
}

/// Time when the Moon's geometric longitude reaches `w`.
pub fn moon_lon_time<P: SeriesProvider + ?Sized>(p: &P, w: f64) -> Result<f64, SearchError> {
    let mut t = (w - MOON_LON_J2000) / MOON_MEAN_MOTION;
    t += (w - moon_lon(p, t, Terms::Leading(3))) / MOON_MEAN_MOTION;
    let v = moon_speed(t);
    t += (w - moon_lon(p, t, Terms::Leading(20))) / v;
    t += (w - moon_lon(p, t, Terms::Full)) / v;
    finite(t)
}

/// Time when the Sun's apparent longitude reaches `w`.
///
/// `w = 2πn + kπ/12` is solar term `k` of year `n`.
pub fn solar_term_time<P: SeriesProvider + ?Sized>(p: &P, w: f64) -> Result<f64, SearchError> {
    let mut t = (w - EARTH_LON_J2000 - PI) / EARTH_MEAN_MOTION;
    t += (w - sun_apparent_lon(p, t, Terms::Leading(10))) / earth_speed(t);
    t += (w - sun_apparent_lon(p, t, Terms::Full)) / earth_speed(t);
    finite(t)
}

/// Time when the apparent Moon − Sun elongation reaches `w`.
///
/// `w = 2πn` is a new Moon, `w = 2πn + π` a full Moon.
pub fn syzygy_time<P: SeriesProvider + ?Sized>(p: &P, w: f64) -> Result<f64, SearchError> {
    let mut t = (w + ELONGATION_OFFSET) / SYNODIC_MEAN_MOTION;
    t += (w - moon_sun_elongation(p, t, Terms::Leading(3), Terms::Leading(3)))
        / SYNODIC_MEAN_MOTION;
    let v = moon_speed(t) - earth_speed(t);
    t += (w - moon_sun_elongation(p, t, Terms::Leading(20), Terms::Leading(10))) / v;
    t += (w - moon_sun_elongation(p, t, Terms::Full, Terms::Leading(60))) / v;
    finite(t)
}

/// Low-precision [`solar_term_time`]: one series call.
pub fn solar_term_time_fast<P: SeriesProvider + ?Sized>(
    p: &P,
    w: f64,
) -> Result<f64, SearchError> {
    let v = EARTH_MEAN_MOTION;
    let mut t = (w - EARTH_LON_J2000 - PI) / v;
    t -= (0.000_005_297 * t * t
        + 0.033_416_6 * (4.669_257 + 628.307_585 * t).cos()
        + 0.000_206_1 * (2.678_23 + 628.307_585 * t).cos() * t)
        / v;
    // Aberration plus the leading nutation term.
    let correction = (20.5 + 17.2 * (2.1824 - 33.757_05 * t).sin()) * RAD_PER_ARCSEC;
    t += (w - earth_lon(p, t, Terms::Leading(8)) - PI + correction) / v;
    finite(t)
}

/// Low-precision [`syzygy_time`]: one series call.
pub fn syzygy_time_fast<P: SeriesProvider + ?Sized>(p: &P, w: f64) -> Result<f64, SearchError> {
    let mut t = (w + ELONGATION_OFFSET) / SYNODIC_MEAN_MOTION;
    let t2 = t * t;
    t -= (-0.000_033_09 * t2
        + 0.109_76 * (0.784_758 + 8_328.691_424_6 * t + 0.000_152_292 * t2).cos()
        + 0.022_24 * (0.187_40 + 7_214.062_865_4 * t - 0.000_218_48 * t2).cos()
        - 0.033_42 * (4.669_257 + 628.307_585 * t).cos())
        / SYNODIC_MEAN_MOTION;

    let sun = 4.895_063_2
        + EARTH_MEAN_MOTION * t
        + 0.000_005_297 * t * t
        + 0.033_416_6 * (4.669_257 + 628.307_585 * t).cos()
        + 0.000_206_1 * (2.678_23 + 628.307_585 * t).cos() * t
        + 0.000_349 * (4.6261 + 1_256.615_17 * t).cos()
        - 20.5 * RAD_PER_ARCSEC;
    let elongation = moon_lon(p, t, Terms::Leading(20)) - sun;
    let v = 7_771.38
        - 914.0 * (0.7848 + 8_328.691_425 * t + 0.000_152_3 * t * t).sin()
        - 179.0 * (2.543 + 15_542.754_3 * t).sin()
        - 160.0 * (0.1874 + 7_214.062_9 * t).sin();
    t += (w - elongation) / v;
    finite(t)
}
