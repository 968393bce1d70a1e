//! Topocentric apparent radius of the Moon.

use taiyin_core::{PhysicalConstants, ensure_finite};
use taiyin_frames::ARCSEC_PER_RAD;

use crate::error::TopoError;

/// Scale applied to the lunar radius ratio for the semidiameter.
const MOON_RADIUS_SCALE: f64 = 1.000_003_6;

/// Apparent semidiameter of the Moon in arcseconds.
///
/// * `distance_km` — geocentric distance of the Moon.
/// * `altitude_rad` — altitude of the Moon above the observer's horizon;
///   the Moon looks larger overhead because the observer is closer.
pub fn moon_apparent_radius(
    distance_km: f64,
    altitude_rad: f64,
    constants: &PhysicalConstants,
) -> Result<f64, TopoError> {
    let constants = constants.checked()?;
    let r_earth = constants.earth_equatorial_radius_km;
    let s = constants.moon_earth_radius_ratio * r_earth * MOON_RADIUS_SCALE * ARCSEC_PER_RAD;
    let radius = s / distance_km * (1.0 + altitude_rad.sin() * r_earth / distance_km);
    ensure_finite(radius, "lunar semidiameter").map_err(TopoError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiyin_core::CoreError;

    #[test]
    fn mean_distance_on_horizon() {
        let c = PhysicalConstants::default();
        let s = moon_apparent_radius(384_400.0, 0.0, &c).expect("valid");
        assert!((s - 932.6).abs() < 0.5, "s = {s}″");
    }

    #[test]
    fn overhead_is_larger() {
        let c = PhysicalConstants::default();
        let horizon = moon_apparent_radius(384_400.0, 0.0, &c).expect("valid");
        let zenith =
            moon_apparent_radius(384_400.0, std::f64::consts::FRAC_PI_2, &c).expect("valid");
        let ratio = zenith / horizon - 1.0;
        assert!((ratio - 6378.1366 / 384_400.0).abs() < 1e-12);
    }

    #[test]
    fn negative_earth_radius_is_rejected() {
        let bad = PhysicalConstants {
            earth_equatorial_radius_km: -1.0,
            ..Default::default()
        };
        assert_eq!(
            moon_apparent_radius(384_400.0, 0.3, &bad),
            Err(TopoError::Core(CoreError::InvalidConstants(
                "earth_equatorial_radius_km must be positive"
            )))
        );
    }

    #[test]
    fn zero_distance_is_non_finite() {
        let c = PhysicalConstants::default();
        assert_eq!(
            moon_apparent_radius(0.0, 0.0, &c),
            Err(TopoError::Core(CoreError::NonFinite("lunar semidiameter")))
        );
    }
}
