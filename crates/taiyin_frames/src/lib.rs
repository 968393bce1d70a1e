//! Angles, frame-tagged coordinates and frame rotations.
//!
//! Provides angle normalization, spherical ↔ Cartesian conversion,
//! ecliptic/equatorial/horizontal rotations and great-circle separation.

pub mod angle;
pub mod separation;
pub mod spherical;
pub mod transform;

pub use angle::{
    ARCSEC_PER_RAD, RAD_PER_ARCSEC, arcsec_to_rad, normalize_mrad, normalize_rrad, wrap_nearest,
};
pub use separation::{SMALL_ANGLE_RAD, angular_separation, separation};
pub use spherical::{
    Distance, DistanceUnit, Ecliptic, Equatorial, Frame, Horizontal, SphericalCoords,
    cartesian_to_spherical, spherical_to_cartesian,
};
pub use transform::{
    ecliptic_to_equatorial, equatorial_to_ecliptic, equatorial_to_horizontal,
    heliocentric_to_geocentric, horizontal_to_equatorial, rotate_about_x, rotate_lon_lat,
};
