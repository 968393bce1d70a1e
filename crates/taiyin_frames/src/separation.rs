//! Great-circle angular separation.

use crate::angle::normalize_rrad;
use crate::spherical::{Frame, SphericalCoords};

/// Below this, in both coordinates, the flat-sky approximation is used.
///
/// At 1e-3 rad the planar error is under 1e-10 rad, while the spherical
/// cosine formula has already lost about half its significant digits.
pub const SMALL_ANGLE_RAD: f64 = 1e-3;

/// Separation between `(lon1, lat1)` and `(lon2, lat2)`, radians in `[0, π]`.
pub fn angular_separation(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let dj = normalize_rrad(lon1 - lon2);
    let dw = lat1 - lat2;
    if dj.abs() < SMALL_ANGLE_RAD && dw.abs() < SMALL_ANGLE_RAD {
        return (dj * ((lat1 + lat2) / 2.0).cos()).hypot(dw);
    }
    let c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dj.cos();
    c.clamp(-1.0, 1.0).acos()
}

/// Separation between two positions in the same frame.
pub fn separation<F: Frame>(a: &SphericalCoords<F>, b: &SphericalCoords<F>) -> f64 {
    angular_separation(a.lon_rad, a.lat_rad, b.lon_rad, b.lat_rad)
}
