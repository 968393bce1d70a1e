//! Apparent longitudes of the Sun and the Moon, and their elongation.
//!
//! Longitudes here stay cumulative (not reduced to `[0, 2π)`): the
//! inverse-time solvers count whole revolutions through them.

use std::f64::consts::PI;

use taiyin_frames::{ARCSEC_PER_RAD, arcsec_to_rad};

use crate::nutation::nutation_in_longitude;
use crate::series::{Body, Quantity, SeriesProvider, Terms};

/// Light-time correction to the Moon's longitude, radians.
pub const MOON_LIGHT_TIME_LON: f64 = -3.4e-6;

/// Amplitude of the Moon's latitude aberration, arcseconds.
const MOON_LAT_ABERRATION_ARCSEC: f64 = 0.063;

/// VSOP87 dynamical ecliptic → FK5 longitude offset, arcseconds.
pub const FK5_LON_OFFSET_ARCSEC: f64 = -0.090_33;

/// Annual aberration of the Sun's longitude at `t`, radians.
///
/// `−20.49552″ · (1 + e·cos v)` with the Earth's orbital eccentricity `e`
/// and the Sun's mean anomaly `v`.
pub fn sun_aberration(t: f64) -> f64 {
    let v = -0.043_126 + 628.301_955 * t - 0.000_002_732 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    -20.495_52 * (1.0 + e * v.cos()) / ARCSEC_PER_RAD
}

/// Geometric heliocentric longitude of the Earth.
pub fn earth_lon<P: SeriesProvider + ?Sized>(p: &P, t: f64, terms: Terms) -> f64 {
    p.evaluate(Body::Earth, Quantity::Longitude, t, terms)
}

/// Geometric geocentric longitude of the Moon.
pub fn moon_lon<P: SeriesProvider + ?Sized>(p: &P, t: f64, terms: Terms) -> f64 {
    p.evaluate(Body::Moon, Quantity::Longitude, t, terms)
}

/// Geocentric apparent longitude of the Sun: nutation, aberration and the
/// FK5 offset applied to the reversed heliocentric Earth longitude.
pub fn sun_apparent_lon<P: SeriesProvider + ?Sized>(p: &P, t: f64, terms: Terms) -> f64 {
    earth_lon(p, t, terms)
        + PI
        + nutation_in_longitude(t)
        + sun_aberration(t)
        + arcsec_to_rad(FK5_LON_OFFSET_ARCSEC)
}

/// Geocentric apparent longitude of the Moon.
pub fn moon_apparent_lon<P: SeriesProvider + ?Sized>(p: &P, t: f64, terms: Terms) -> f64 {
    moon_lon(p, t, terms) + nutation_in_longitude(t) + MOON_LIGHT_TIME_LON
}

/// Aberration of the Moon's latitude at `t`, radians.
pub fn moon_lat_aberration(t: f64) -> f64 {
    let arg = 0.057 + 8433.4662 * t + 0.000_064 * t * t;
    MOON_LAT_ABERRATION_ARCSEC * arg.sin() / ARCSEC_PER_RAD
}

/// Geocentric apparent latitude of the Moon.
pub fn moon_apparent_lat<P: SeriesProvider + ?Sized>(p: &P, t: f64, terms: Terms) -> f64 {
    p.evaluate(Body::Moon, Quantity::Latitude, t, terms) + moon_lat_aberration(t)
}

/// Apparent Moon − Sun longitude. Nutation cancels and is not evaluated.
///
/// `0` at new Moon, `π` at full Moon (modulo whole turns).
pub fn moon_sun_elongation<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    moon_terms: Terms,
    sun_terms: Terms,
) -> f64 {
    let moon = moon_lon(p, t, moon_terms) + MOON_LIGHT_TIME_LON;
    let sun = earth_lon(p, t, sun_terms)
        + PI
        + sun_aberration(t)
        + arcsec_to_rad(FK5_LON_OFFSET_ARCSEC);
    moon - sun
}
