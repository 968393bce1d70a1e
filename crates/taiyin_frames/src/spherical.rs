//! Frame- and unit-tagged spherical coordinates.
//!
//! A [`SphericalCoords`] carries its reference frame in the type
//! (`SphericalCoords<Ecliptic>`, `SphericalCoords<Equatorial>`,
//! `SphericalCoords<Horizontal>`) and its distance unit in the value
//! ([`Distance`]). Frame changes only happen through the named transforms
//! in [`crate::transform`].

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::angle::normalize_mrad;

mod sealed {
    pub trait Sealed {}
}

/// Reference frame marker.
pub trait Frame: sealed::Sealed + Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Human-readable frame name.
    const NAME: &'static str;
}

/// Ecliptic of date: longitude/latitude measured from the equinox along the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ecliptic;

/// Equatorial of date: right ascension/declination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equatorial;

/// Local horizontal: azimuth/altitude for a specific observer and instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Horizontal;

impl sealed::Sealed for Ecliptic {}
impl sealed::Sealed for Equatorial {}
impl sealed::Sealed for Horizontal {}

impl Frame for Ecliptic {
    const NAME: &'static str = "ecliptic";
}

impl Frame for Equatorial {
    const NAME: &'static str = "equatorial";
}

impl Frame for Horizontal {
    const NAME: &'static str = "horizontal";
}

/// Unit a distance is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// Kilometres.
    Km,
    /// Astronomical units.
    Au,
    /// Earth equatorial radii.
    EarthRadii,
    /// Direction only; the magnitude carries no physical unit.
    Unitless,
}

/// A non-negative distance together with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    /// Threshold of the legacy magnitude heuristic: raw values below this are AU.
    pub const LEGACY_AU_THRESHOLD: f64 = 500.0;

    /// Magnitudes must be non-negative; checked in debug builds.
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        debug_assert!(value.is_nan() || value >= 0.0, "negative distance {value}");
        Self { value, unit }
    }

    pub fn km(value: f64) -> Self {
        Self::new(value, DistanceUnit::Km)
    }

    pub fn au(value: f64) -> Self {
        Self::new(value, DistanceUnit::Au)
    }

    pub fn earth_radii(value: f64) -> Self {
        Self::new(value, DistanceUnit::EarthRadii)
    }

    /// Unit-sphere distance (direction only).
    pub const fn unit_sphere() -> Self {
        Self { value: 1.0, unit: DistanceUnit::Unitless }
    }

    /// Tag a raw series distance using the magnitude heuristic:
    /// values below 500 are taken as AU, anything else as km.
    ///
    /// Negative or non-finite magnitudes give `None`. Only for callers
    /// holding untagged values; prefer an explicit unit.
    pub fn infer_legacy(raw: f64) -> Option<Self> {
        if !raw.is_finite() || raw < 0.0 {
            return None;
        }
        Some(if raw < Self::LEGACY_AU_THRESHOLD {
            Self::au(raw)
        } else {
            Self::km(raw)
        })
    }

    /// Same unit, different magnitude.
    pub fn with_value(self, value: f64) -> Self {
        Self::new(value, self.unit)
    }
}

/// Spherical coordinates in frame `F`.
///
/// Longitude-like component in radians, latitude-like component in
/// radians, and a tagged distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords<F: Frame> {
    pub lon_rad: f64,
    pub lat_rad: f64,
    pub distance: Distance,
    frame: PhantomData<F>,
}

impl<F: Frame> SphericalCoords<F> {
    pub fn new(lon_rad: f64, lat_rad: f64, distance: Distance) -> Self {
        Self {
            lon_rad,
            lat_rad,
            distance,
            frame: PhantomData,
        }
    }

    /// Direction-only coordinates on the unit sphere.
    pub fn direction(lon_rad: f64, lat_rad: f64) -> Self {
        Self::new(lon_rad, lat_rad, Distance::unit_sphere())
    }

    /// Name of the frame these coordinates are expressed in.
    pub fn frame_name(&self) -> &'static str {
        F::NAME
    }

    /// Relabel into another frame. Only the transforms in this crate call it.
    pub(crate) fn reframe<G: Frame>(self, lon_rad: f64, lat_rad: f64) -> SphericalCoords<G> {
        SphericalCoords::new(lon_rad, lat_rad, self.distance)
    }

    /// Rectangular components in the distance's own unit.
    pub fn to_cartesian(&self) -> [f64; 3] {
        spherical_to_cartesian(self.lon_rad, self.lat_rad, self.distance.value)
    }

    /// Build from rectangular components expressed in `unit`.
    pub fn from_cartesian(xyz: &[f64; 3], unit: DistanceUnit) -> Self {
        let (lon, lat, r) = cartesian_to_spherical(xyz);
        Self::new(lon, lat, Distance::new(r, unit))
    }
}

/// Convert `(lon, lat, r)` to `[x, y, z]`.
pub fn spherical_to_cartesian(lon_rad: f64, lat_rad: f64, r: f64) -> [f64; 3] {
    let cos_lat = lat_rad.cos();
    [
        r * cos_lat * lon_rad.cos(),
        r * cos_lat * lon_rad.sin(),
        r * lat_rad.sin(),
    ]
}

/// Convert `[x, y, z]` to `(lon, lat, r)` with `lon` in `[0, 2π)`.
///
/// The zero vector maps to `(0, 0, 0)`.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> (f64, f64, f64) {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let lon = normalize_mrad(y.atan2(x));
    let lat = (z / r).clamp(-1.0, 1.0).asin();
    (lon, lat, r)
}
