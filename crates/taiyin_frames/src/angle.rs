//! Angle normalization.
//!
//! Every angle in the workspace is an `f64` in radians. Two canonical
//! ranges are used:
//!
//! - `[0, 2π)` for longitudes, right ascensions and azimuths
//!   ([`normalize_mrad`]);
//! - `(-π, π]` for signed differences and hour angles
//!   ([`normalize_rrad`]).
//!
//! Both reductions are total over the finite reals and idempotent: a value
//! already in range is returned bit-for-bit unchanged.

use std::f64::consts::{PI, TAU};

/// Arcseconds per radian.
pub const ARCSEC_PER_RAD: f64 = 180.0 * 3600.0 / PI;

/// Radians per arcsecond.
pub const RAD_PER_ARCSEC: f64 = PI / (180.0 * 3600.0);

/// Reduce an angle to `[0, 2π)`.
pub fn normalize_mrad(x: f64) -> f64 {
    if (0.0..TAU).contains(&x) {
        return x;
    }
    let r = x.rem_euclid(TAU);
    // rem_euclid rounds up to TAU for tiny negative inputs
    if r >= TAU { 0.0 } else { r }
}

/// Reduce an angle to `(-π, π]`.
pub fn normalize_rrad(x: f64) -> f64 {
    if x > -PI && x <= PI {
        return x;
    }
    let r = normalize_mrad(x);
    if r > PI { r - TAU } else { r }
}

/// Signed distance from `a` to the nearest integer multiple of `period`.
///
/// Result lies in `(-period/2, period/2]`.
pub fn wrap_nearest(a: f64, period: f64) -> f64 {
    let c = a / period;
    let mut c = c - c.floor();
    if c > 0.5 {
        c -= 1.0;
    }
    c * period
}

/// Convert arcseconds to radians.
#[inline]
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec * RAD_PER_ARCSEC
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn mrad_in_range_untouched() {
        assert_eq!(normalize_mrad(1.25), 1.25);
        assert_eq!(normalize_mrad(0.0), 0.0);
    }

    #[test]
    fn mrad_wraps_negative() {
        assert!((normalize_mrad(-PI / 2.0) - 1.5 * PI).abs() < EPS);
    }

    #[test]
    fn mrad_wraps_large() {
        assert!((normalize_mrad(7.0 * PI) - PI).abs() < 1e-9);
        assert!((normalize_mrad(-1.0e6) - (-1.0e6f64).rem_euclid(TAU)).abs() < 1e-9);
    }

    #[test]
    fn mrad_tiny_negative_is_zero() {
        let r = normalize_mrad(-1.0e-20);
        assert!((0.0..TAU).contains(&r), "got {r}");
    }

    #[test]
    fn mrad_full_turn_is_zero() {
        assert_eq!(normalize_mrad(TAU), 0.0);
    }

    #[test]
    fn rrad_upper_bound_inclusive() {
        assert_eq!(normalize_rrad(PI), PI);
    }

    #[test]
    fn rrad_lower_bound_exclusive() {
        let r = normalize_rrad(-PI);
        assert!((r - PI).abs() < EPS, "got {r}");
    }

    #[test]
    fn rrad_wraps() {
        assert!((normalize_rrad(1.5 * PI) + 0.5 * PI).abs() < EPS);
        assert!((normalize_rrad(-1.5 * PI) - 0.5 * PI).abs() < EPS);
    }

    #[test]
    fn wrap_nearest_signed() {
        assert!((wrap_nearest(10.2, 1.0) - 0.2).abs() < 1e-12);
        assert!((wrap_nearest(10.8, 1.0) + 0.2).abs() < 1e-12);
        assert!((wrap_nearest(-0.3, 1.0) + 0.3).abs() < 1e-12);
    }

    #[test]
    fn arcsec_roundtrip() {
        assert!((arcsec_to_rad(ARCSEC_PER_RAD) - 1.0).abs() < EPS);
    }
}
