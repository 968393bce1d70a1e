//! Observer location.

use crate::error::TopoError;

/// Geographic site of an observer on the reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverSite {
    /// Geographic longitude in radians, east positive.
    pub lon_rad: f64,
    /// Geographic latitude in radians, north positive.
    pub lat_rad: f64,
    /// Elevation above the ellipsoid in km.
    pub elevation_km: f64,
}

impl ObserverSite {
    pub fn new(lon_rad: f64, lat_rad: f64, elevation_km: f64) -> Self {
        Self {
            lon_rad,
            lat_rad,
            elevation_km,
        }
    }

    /// Build from degrees (longitude east positive) and elevation in metres.
    pub fn from_degrees(lon_deg: f64, lat_deg: f64, elevation_m: f64) -> Self {
        Self::new(lon_deg.to_radians(), lat_deg.to_radians(), elevation_m / 1000.0)
    }

    /// Sea-level site from degrees.
    pub fn sea_level(lon_deg: f64, lat_deg: f64) -> Self {
        Self::from_degrees(lon_deg, lat_deg, 0.0)
    }

    /// Validate the site.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.lon_rad.is_finite() {
            return Err("longitude must be finite");
        }
        if !self.lat_rad.is_finite() || self.lat_rad.abs() > std::f64::consts::FRAC_PI_2 {
            return Err("latitude must be within [-90, 90] degrees");
        }
        if !self.elevation_km.is_finite() {
            return Err("elevation must be finite");
        }
        Ok(())
    }

    /// [`validate`](Self::validate) mapped into [`TopoError`].
    pub(crate) fn check(&self) -> Result<(), TopoError> {
        self.validate().map_err(TopoError::InvalidLocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_constructor() {
        let s = ObserverSite::from_degrees(116.4, 39.9, 50.0);
        assert!((s.lon_rad.to_degrees() - 116.4).abs() < 1e-12);
        assert!((s.lat_rad.to_degrees() - 39.9).abs() < 1e-12);
        assert!((s.elevation_km - 0.05).abs() < 1e-15);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn rejects_bad_latitude() {
        let s = ObserverSite::sea_level(0.0, 91.0);
        assert_eq!(
            s.check(),
            Err(TopoError::InvalidLocation("latitude must be within [-90, 90] degrees"))
        );
        let s = ObserverSite::new(f64::NAN, 0.0, 0.0);
        assert!(s.validate().is_err());
    }
}
