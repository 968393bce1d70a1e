//! Observer-dependent corrections.
//!
//! This crate provides:
//! - Observer site description and validation
//! - Diurnal parallax (geocentric → topocentric) with explicit distance units
//! - Standard-atmosphere refraction in both directions
//! - Parallactic angle
//! - A full equatorial → apparent horizontal pipeline
//! - Lunar apparent radius and sunrise/sunset

pub mod error;
pub mod observe;
pub mod parallactic;
pub mod parallax;
pub mod refraction;
pub mod riseset;
pub mod semidiameter;
pub mod site;

pub use error::TopoError;
pub use observe::{RefractionMode, observe};
pub use parallactic::{POLE_EPSILON_RAD, parallactic_angle};
pub use parallax::topocentric;
pub use refraction::{
    MAX_REFRACTION_RAD, apparent_altitude, refraction_from_apparent, refraction_from_true,
    true_altitude,
};
pub use riseset::{RiseSet, RiseSetKind, sun_rise_set};
pub use semidiameter::moon_apparent_radius;
pub use site::ObserverSite;
