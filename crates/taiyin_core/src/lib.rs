//! Core ephemeris layer: series evaluation, time arguments and apparent
//! longitudes of the Sun and the Moon.
//!
//! This crate provides:
//! - The [`SeriesProvider`] seam and the built-in [`TruncatedTheory`]
//! - Physical constants as an injected, validated value
//! - ΔT, Julian centuries, mean sidereal time and the equation of time
//! - Nutation, obliquity and solar aberration
//! - Precession between J2000.0 and the equinox of date
//! - Apparent solar/lunar longitudes and their elongation
//! - Whole ecliptic coordinates of the Earth and the Moon
//! - Mean angular speeds and the lunar illuminated fraction

pub mod apparent;
pub mod constants;
pub mod error;
pub mod illumination;
pub mod nutation;
pub mod position;
pub mod precession;
pub mod series;
pub mod speed;
pub mod theory;
pub mod time;

pub use apparent::{
    FK5_LON_OFFSET_ARCSEC, MOON_LIGHT_TIME_LON, earth_lon, moon_apparent_lat, moon_apparent_lon,
    moon_lat_aberration, moon_lon, moon_sun_elongation, sun_aberration, sun_apparent_lon,
};
pub use constants::PhysicalConstants;
pub use error::{CoreError, ensure_finite};
pub use illumination::moon_illuminated_fraction;
pub use nutation::{
    mean_obliquity, nutate_equatorial, nutate_equatorial_at, nutation, nutation_in_longitude,
    true_obliquity,
};
pub use position::{earth_coords, moon_coords};
pub use precession::{
    PrecessionAngle, PrecessionModel, precess_ecliptic_from_j2000, precess_ecliptic_to_j2000,
    precess_equatorial_from_j2000, precess_equatorial_to_j2000, precession_angle,
};
pub use series::{Body, Quantity, SeriesProvider, Terms};
pub use speed::{earth_speed, moon_speed};
pub use theory::TruncatedTheory;
pub use time::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, centuries_to_jd, days_to_centuries,
    delta_t_days, delta_t_seconds, equation_of_time, equation_of_time_fast, jd_to_centuries,
    jd_to_year, mean_sidereal_time,
};
