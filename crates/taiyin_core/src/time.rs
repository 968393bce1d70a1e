//! Time arguments: Julian centuries, ΔT, mean sidereal time and the
//! equation of time.
//!
//! Every series in this workspace takes `t`, Julian centuries of TT since
//! J2000.0. Civil-time conversion is out of scope; callers bring JD.

use std::f64::consts::{PI, TAU};

use taiyin_frames::{ARCSEC_PER_RAD, normalize_mrad, normalize_rrad, rotate_lon_lat};

use crate::apparent::{earth_lon, sun_apparent_lon};
use crate::nutation::{mean_obliquity, nutation};
use crate::series::{Body, Quantity, SeriesProvider, Terms};

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date → Julian centuries since J2000.0.
#[inline]
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Julian centuries since J2000.0 → Julian Date.
#[inline]
pub fn centuries_to_jd(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JD
}

/// Days since J2000.0 → Julian centuries.
#[inline]
pub fn days_to_centuries(days: f64) -> f64 {
    days / DAYS_PER_CENTURY
}

/// Decimal year of a Julian Date (Julian-year approximation).
pub fn jd_to_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT = TT − UT in seconds for a decimal year.
///
/// Espenak & Meeus polynomials between 1860 and 2150; the long-term
/// parabola `−20 + 32u²` (u in centuries from 1820) outside that range.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if !(1860.0..2150.0).contains(&y) {
        let u = (y - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251_754 * t.powi(2) + 0.016_806_68 * t.powi(3)
            - 0.000_447_362_4 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    }
}

/// ΔT in days at a UT Julian Date.
pub fn delta_t_days(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_to_year(jd_ut)) / SECONDS_PER_DAY
}

/// Mean sidereal time at Greenwich, radians in `[0, 2π)`.
///
/// * `days_ut` — days of UT since J2000.0.
/// * `delta_t_days` — ΔT in days, used for the precession polynomial
///   which runs on TT.
pub fn mean_sidereal_time(days_ut: f64, delta_t_days: f64) -> f64 {
    let tt = (days_ut + delta_t_days) / DAYS_PER_CENTURY;
    let t2 = tt * tt;
    let t3 = t2 * tt;
    let t4 = t3 * tt;
    let rotation = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * days_ut);
    let poly = 0.014_506 + 4612.157_399_66 * tt + 1.396_677_21 * t2 - 0.000_093_44 * t3
        + 0.000_018_82 * t4;
    normalize_mrad(rotation + poly / ARCSEC_PER_RAD)
}

/// Constant of aberration used with the Sun's mean longitude, arcseconds.
const ABERRATION_ARCSEC: f64 = 20.5;

/// Earth series terms for [`equation_of_time_fast`].
const FAST_EOT_TERMS: Terms = Terms::Leading(5);

/// Equation of time (apparent − mean solar time) in days at `t`
/// centuries TT.
///
/// Positive when a sundial runs ahead of the clock, as in early November.
pub fn equation_of_time<P: SeriesProvider + ?Sized>(p: &P, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let mean_lon = (1_753_470_142.0 + 628_331_965_331.8 * t + 5296.74 * t2 + 0.432 * t3
        - 0.1124 * t4
        - 0.000_09 * t5)
        / 1e9
        + PI
        - ABERRATION_ARCSEC / ARCSEC_PER_RAD;

    let (dpsi, deps) = nutation(t);
    let eps = mean_obliquity(t) + deps;
    let lon = sun_apparent_lon(p, t, Terms::Full);
    let lat = -p.evaluate(Body::Earth, Quantity::Latitude, t, Terms::Full);
    let (ra, _) = rotate_lon_lat(lon, lat, eps);

    normalize_rrad(mean_lon - ra + dpsi * eps.cos()) / TAU
}

/// Low-precision [`equation_of_time`]: truncated Earth series, mean
/// obliquity, no nutation or aberration. Good to several seconds.
pub fn equation_of_time_fast<P: SeriesProvider + ?Sized>(p: &P, t: f64) -> f64 {
    let mean_lon = (1_753_470_142.0 + 628_331_965_331.8 * t + 5296.74 * t * t) / 1e9 + PI;
    let eps = (84_381.4088 - 46.836_051 * t) / ARCSEC_PER_RAD;
    let (ra, _) = rotate_lon_lat(earth_lon(p, t, FAST_EOT_TERMS) + PI, 0.0, eps);
    normalize_rrad(mean_lon - ra) / TAU
}
