//! Parallactic angle.

use std::f64::consts::FRAC_PI_2;

use taiyin_frames::{Equatorial, SphericalCoords, normalize_mrad};

use crate::error::TopoError;
use crate::site::ObserverSite;

/// Observers closer than this to a pole get [`TopoError::PoleSingularity`].
pub const POLE_EPSILON_RAD: f64 = 1e-10;

/// Parallactic angle of `eq` for `site` at Greenwich sidereal time `gst`,
/// radians in `[0, 2π)`.
pub fn parallactic_angle(
    eq: &SphericalCoords<Equatorial>,
    site: &ObserverSite,
    gst_rad: f64,
) -> Result<f64, TopoError> {
    site.check()?;
    let phi = site.lat_rad;
    if FRAC_PI_2 - phi.abs() < POLE_EPSILON_RAD {
        return Err(TopoError::PoleSingularity { latitude_rad: phi });
    }
    let h = gst_rad + site.lon_rad - eq.lon_rad;
    let (sin_w, cos_w) = eq.lat_rad.sin_cos();
    let q = h.sin().atan2(phi.tan() * cos_w - sin_w * h.cos());
    Ok(normalize_mrad(q))
}
