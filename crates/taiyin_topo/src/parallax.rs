//! Diurnal parallax: geocentric → topocentric equatorial coordinates.

use taiyin_core::PhysicalConstants;
use taiyin_frames::{
    Equatorial, SphericalCoords, cartesian_to_spherical, spherical_to_cartesian,
};

use crate::error::TopoError;
use crate::site::ObserverSite;

/// Geocentric equatorial rectangular position of the observer in km.
///
/// `g` is the observer's local sidereal time (body right ascension plus
/// hour angle).
fn observer_xyz(g: f64, site: &ObserverSite, constants: &PhysicalConstants) -> [f64; 3] {
    let phi = site.lat_rad;
    let f = constants.earth_axis_ratio;
    let r_earth = constants.earth_equatorial_radius_km;
    let u = (f * phi.tan()).atan();
    let r0 = r_earth * u.cos() + site.elevation_km * phi.cos();
    let z0 = r_earth * u.sin() * f + site.elevation_km * phi.sin();
    [r0 * g.cos(), r0 * g.sin(), z0]
}

/// Shift `coord` from the geocentre to the observer at `site`.
///
/// * `hour_angle_rad` — local hour angle of the body.
///
/// The distance unit decides the scale; the result keeps the input's
/// unit. Direction-only input is rejected with
/// [`TopoError::UnitlessDistance`]; constants that fail validation with
/// [`TopoError::Core`].
pub fn topocentric(
    coord: SphericalCoords<Equatorial>,
    hour_angle_rad: f64,
    site: &ObserverSite,
    constants: &PhysicalConstants,
) -> Result<SphericalCoords<Equatorial>, TopoError> {
    site.check()?;
    let constants = &constants.checked()?;
    let scale = constants
        .km_per_unit(coord.distance.unit)
        .ok_or(TopoError::UnitlessDistance)?;

    let body = spherical_to_cartesian(coord.lon_rad, coord.lat_rad, coord.distance.value * scale);
    let obs = observer_xyz(coord.lon_rad + hour_angle_rad, site, constants);
    let (lon, lat, r_km) =
        cartesian_to_spherical(&[body[0] - obs[0], body[1] - obs[1], body[2] - obs[2]]);

    Ok(SphericalCoords::new(lon, lat, coord.distance.with_value(r_km / scale)))
}
