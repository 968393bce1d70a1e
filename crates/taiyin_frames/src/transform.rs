//! Frame rotations.
//!
//! All transforms here are rotations of the frame about its x axis (the
//! equinox direction for ecliptic/equatorial, the east–west line for the
//! horizontal frame). Distances pass through unchanged.
//!
//! Horizontal coordinates use azimuth measured from the south point,
//! increasing towards the west, in `[0, 2π)`; altitude is positive above
//! the horizon.

use std::f64::consts::FRAC_PI_2;

use crate::angle::normalize_mrad;
use crate::spherical::{
    Ecliptic, Equatorial, Frame, Horizontal, SphericalCoords, cartesian_to_spherical,
    spherical_to_cartesian,
};

/// Rotate a direction about the x axis by `e` radians.
///
/// Returns `(lon, lat)` with `lon` in `[0, 2π)`. Written in the
/// product form so directions at the poles stay finite.
pub fn rotate_lon_lat(lon_rad: f64, lat_rad: f64, e: f64) -> (f64, f64) {
    let (sin_j, cos_j) = lon_rad.sin_cos();
    let (sin_w, cos_w) = lat_rad.sin_cos();
    let (sin_e, cos_e) = e.sin_cos();

    let lon = (sin_j * cos_w * cos_e - sin_w * sin_e).atan2(cos_j * cos_w);
    let lat = (cos_e * sin_w + sin_e * cos_w * sin_j).clamp(-1.0, 1.0).asin();
    (normalize_mrad(lon), lat)
}

/// Rotate coordinates about the x axis of their frame by `e` radians.
///
/// The frame tag is kept: this changes the pole, not the frame kind.
pub fn rotate_about_x<F: Frame>(coord: SphericalCoords<F>, e: f64) -> SphericalCoords<F> {
    let (lon, lat) = rotate_lon_lat(coord.lon_rad, coord.lat_rad, e);
    coord.reframe(lon, lat)
}

/// Equatorial → horizontal.
///
/// * `observer_lon_rad` — east longitude of the observer.
/// * `observer_lat_rad` — geographic latitude of the observer.
/// * `gst_rad` — Greenwich sidereal time.
pub fn equatorial_to_horizontal(
    eq: SphericalCoords<Equatorial>,
    observer_lon_rad: f64,
    observer_lat_rad: f64,
    gst_rad: f64,
) -> SphericalCoords<Horizontal> {
    let shifted = eq.lon_rad + FRAC_PI_2 - gst_rad - observer_lon_rad;
    let (lon, lat) = rotate_lon_lat(shifted, eq.lat_rad, FRAC_PI_2 - observer_lat_rad);
    eq.reframe(normalize_mrad(FRAC_PI_2 - lon), lat)
}

/// Horizontal → equatorial; exact inverse of [`equatorial_to_horizontal`].
pub fn horizontal_to_equatorial(
    hz: SphericalCoords<Horizontal>,
    observer_lon_rad: f64,
    observer_lat_rad: f64,
    gst_rad: f64,
) -> SphericalCoords<Equatorial> {
    let (lon, lat) = rotate_lon_lat(
        FRAC_PI_2 - hz.lon_rad,
        hz.lat_rad,
        -(FRAC_PI_2 - observer_lat_rad),
    );
    hz.reframe(
        normalize_mrad(lon - FRAC_PI_2 + gst_rad + observer_lon_rad),
        lat,
    )
}

/// Ecliptic → equatorial for obliquity `eps_rad`.
pub fn ecliptic_to_equatorial(
    ecl: SphericalCoords<Ecliptic>,
    eps_rad: f64,
) -> SphericalCoords<Equatorial> {
    let (lon, lat) = rotate_lon_lat(ecl.lon_rad, ecl.lat_rad, eps_rad);
    ecl.reframe(lon, lat)
}

/// Equatorial → ecliptic for obliquity `eps_rad`.
pub fn equatorial_to_ecliptic(
    eq: SphericalCoords<Equatorial>,
    eps_rad: f64,
) -> SphericalCoords<Ecliptic> {
    let (lon, lat) = rotate_lon_lat(eq.lon_rad, eq.lat_rad, -eps_rad);
    eq.reframe(lon, lat)
}

/// Position of `body` as seen from `origin`, both given relative to the
/// same centre and in the same frame. With the Sun as centre and the
/// Earth as `origin` this is the heliocentric → geocentric shift.
///
/// Returns `None` when the two distances are in different units.
pub fn heliocentric_to_geocentric<F: Frame>(
    body: SphericalCoords<F>,
    origin: SphericalCoords<F>,
) -> Option<SphericalCoords<F>> {
    if body.distance.unit != origin.distance.unit {
        return None;
    }
    let b = spherical_to_cartesian(body.lon_rad, body.lat_rad, body.distance.value);
    let o = spherical_to_cartesian(origin.lon_rad, origin.lat_rad, origin.distance.value);
    let (lon, lat, r) = cartesian_to_spherical(&[b[0] - o[0], b[1] - o[1], b[2] - o[2]]);
    Some(SphericalCoords::new(lon, lat, body.distance.with_value(r)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical::Distance;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    #[test]
    fn rotation_inverse() {
        let (lon, lat) = rotate_lon_lat(1.1, 0.4, 0.409);
        let (lon2, lat2) = rotate_lon_lat(lon, lat, -0.409);
        assert!((lon2 - 1.1).abs() < EPS);
        assert!((lat2 - 0.4).abs() < EPS);
    }

    #[test]
    fn rotation_pole_is_finite() {
        let (lon, lat) = rotate_lon_lat(0.3, FRAC_PI_2, 0.5);
        assert!(lon.is_finite());
        assert!((lat - (FRAC_PI_2 - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn solstice_point_has_declination_eps() {
        let eps = 0.409_092_6;
        let ecl = SphericalCoords::<Ecliptic>::direction(FRAC_PI_2, 0.0);
        let eq = ecliptic_to_equatorial(ecl, eps);
        assert!((eq.lat_rad - eps).abs() < EPS);
        assert!((eq.lon_rad - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn meridian_transit_altitude() {
        // Body on the meridian: altitude = 90° - (φ - δ), azimuth 0 (south).
        let phi = 0.7;
        let dec = 0.2;
        let gst = 1.3;
        let lon_obs = 0.4;
        let eq = SphericalCoords::<Equatorial>::direction(gst + lon_obs, dec);
        let hz = equatorial_to_horizontal(eq, lon_obs, phi, gst);
        assert!((hz.lat_rad - (FRAC_PI_2 - (phi - dec))).abs() < 1e-12);
        let az = hz.lon_rad.min(2.0 * PI - hz.lon_rad);
        assert!(az < 1e-9, "azimuth {}", hz.lon_rad);
    }

    #[test]
    fn west_of_meridian_has_small_positive_azimuth() {
        let phi = 0.7;
        let eq = SphericalCoords::<Equatorial>::direction(1.0 - 0.1, 0.1);
        let hz = equatorial_to_horizontal(eq, 0.0, phi, 1.0);
        assert!(hz.lon_rad > 0.0 && hz.lon_rad < FRAC_PI_2);
    }

    #[test]
    fn horizontal_roundtrip_keeps_distance() {
        let eq = SphericalCoords::<Equatorial>::new(5.2, -0.6, Distance::km(370_000.0));
        let hz = equatorial_to_horizontal(eq, 2.0, -0.5, 3.3);
        let back = horizontal_to_equatorial(hz, 2.0, -0.5, 3.3);
        assert!((back.lon_rad - 5.2).abs() < 1e-10);
        assert!((back.lat_rad + 0.6).abs() < 1e-10);
        assert_eq!(back.distance, eq.distance);
    }

    #[test]
    fn geocentric_shift_rejects_mixed_units() {
        let a = SphericalCoords::<Ecliptic>::new(0.0, 0.0, Distance::au(1.0));
        let b = SphericalCoords::<Ecliptic>::new(0.0, 0.0, Distance::km(1.0));
        assert!(heliocentric_to_geocentric(a, b).is_none());
    }

    #[test]
    fn geocentric_shift_opposite_direction() {
        let body = SphericalCoords::<Ecliptic>::new(0.0, 0.0, Distance::au(0.0));
        let earth = SphericalCoords::<Ecliptic>::new(1.0, 0.0, Distance::au(1.0));
        let geo = heliocentric_to_geocentric(body, earth).expect("same unit");
        assert!((geo.lon_rad - (1.0 + PI)).abs() < 1e-12);
        assert!((geo.distance.value - 1.0).abs() < 1e-12);
    }
}
