//! Physical constants injected into every observer-dependent computation.

use taiyin_frames::DistanceUnit;

use crate::error::CoreError;

/// Immutable set of physical constants.
///
/// [`Default`] gives the reference values. Components take
/// `&PhysicalConstants` explicitly; nothing reads a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Earth equatorial radius in km.
    pub earth_equatorial_radius_km: f64,
    /// Polar-to-equatorial axis ratio of the reference ellipsoid.
    pub earth_axis_ratio: f64,
    /// Astronomical unit in km.
    pub au_km: f64,
    /// Speed of light in km/s.
    pub speed_of_light_km_s: f64,
    /// Lunar radius as a fraction of the Earth equatorial radius.
    pub moon_earth_radius_ratio: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            earth_equatorial_radius_km: 6378.1366,
            earth_axis_ratio: 0.996_647_19,
            au_km: 1.495_978_706_91e8,
            speed_of_light_km_s: 299_792.458,
            moon_earth_radius_ratio: 0.272_507_6,
        }
    }
}

impl PhysicalConstants {
    /// Light travel time across one AU, in days.
    pub fn light_time_per_au_days(&self) -> f64 {
        self.au_km / self.speed_of_light_km_s / 86_400.0
    }

    /// Kilometres per one unit of `unit`, or `None` for direction-only values.
    pub fn km_per_unit(&self, unit: DistanceUnit) -> Option<f64> {
        match unit {
            DistanceUnit::Km => Some(1.0),
            DistanceUnit::Au => Some(self.au_km),
            DistanceUnit::EarthRadii => Some(self.earth_equatorial_radius_km),
            DistanceUnit::Unitless => None,
        }
    }

    /// Validate the constants.
    pub fn validate(&self) -> Result<(), &'static str> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(self.earth_equatorial_radius_km) {
            return Err("earth_equatorial_radius_km must be positive");
        }
        if !positive(self.earth_axis_ratio) || self.earth_axis_ratio > 1.0 {
            return Err("earth_axis_ratio must be in (0, 1]");
        }
        if !positive(self.au_km) {
            return Err("au_km must be positive");
        }
        if !positive(self.speed_of_light_km_s) {
            return Err("speed_of_light_km_s must be positive");
        }
        if !positive(self.moon_earth_radius_ratio) {
            return Err("moon_earth_radius_ratio must be positive");
        }
        Ok(())
    }

    /// [`validate`](Self::validate) mapped into [`CoreError`].
    pub fn checked(self) -> Result<Self, CoreError> {
        self.validate().map_err(CoreError::InvalidConstants)?;
        Ok(self)
    }
}
