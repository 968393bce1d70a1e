//! Observer pipeline: geocentric equatorial → topocentric horizontal.

use log::debug;
use taiyin_core::PhysicalConstants;
use taiyin_frames::{
    DistanceUnit, Equatorial, Horizontal, SphericalCoords, equatorial_to_horizontal,
};

use crate::error::TopoError;
use crate::parallax::topocentric;
use crate::refraction::apparent_altitude;
use crate::site::ObserverSite;

/// Whether to lift the altitude by atmospheric refraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefractionMode {
    /// Geometric altitude.
    None,
    /// Standard-atmosphere refraction.
    #[default]
    Standard,
}

/// Horizontal coordinates of `eq` as seen from `site` at Greenwich
/// sidereal time `gst_rad`.
///
/// Parallax is applied for bodies with a physical distance; direction-only
/// input (stars) is taken as infinitely far. Where refraction is undefined
/// (well below the horizon) the geometric altitude is kept.
pub fn observe(
    eq: SphericalCoords<Equatorial>,
    site: &ObserverSite,
    gst_rad: f64,
    constants: &PhysicalConstants,
    refraction: RefractionMode,
) -> Result<SphericalCoords<Horizontal>, TopoError> {
    site.check()?;
    let constants = &constants.checked()?;
    let topo = if eq.distance.unit == DistanceUnit::Unitless {
        eq
    } else {
        let hour_angle = gst_rad + site.lon_rad - eq.lon_rad;
        topocentric(eq, hour_angle, site, constants)?
    };

    let mut hz = equatorial_to_horizontal(topo, site.lon_rad, site.lat_rad, gst_rad);
    if refraction == RefractionMode::Standard {
        match apparent_altitude(hz.lat_rad) {
            Ok(h) => hz.lat_rad = h,
            Err(e) => debug!("keeping geometric altitude: {e}"),
        }
    }
    Ok(hz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;
    use taiyin_core::CoreError;
    use taiyin_frames::Distance;

    #[test]
    fn star_on_meridian() {
        let site = ObserverSite::sea_level(0.0, 40.0);
        let star = SphericalCoords::<Equatorial>::direction(2.0, 0.2);
        let hz = observe(star, &site, 2.0, &PhysicalConstants::default(), RefractionMode::None)
            .expect("valid site");
        let expected = FRAC_PI_2 - (40.0_f64.to_radians() - 0.2);
        assert!((hz.lat_rad - expected).abs() < 1e-12);
    }

    #[test]
    fn refraction_lifts_low_body() {
        let site = ObserverSite::sea_level(0.0, 0.0);
        let star = SphericalCoords::<Equatorial>::direction(0.0, 0.0);
        // Hour angle just under 90°: low in the west.
        let gst = FRAC_PI_2 - 0.05;
        let c = PhysicalConstants::default();
        let geo = observe(star, &site, gst, &c, RefractionMode::None).expect("ok");
        let app = observe(star, &site, gst, &c, RefractionMode::Standard).expect("ok");
        assert!(app.lat_rad > geo.lat_rad);
        assert!(app.lat_rad - geo.lat_rad < 0.01);
    }

    #[test]
    fn deep_below_horizon_keeps_geometric_altitude() {
        let site = ObserverSite::sea_level(0.0, 0.0);
        let star = SphericalCoords::<Equatorial>::direction(0.0, 0.0);
        let c = PhysicalConstants::default();
        let geo = observe(star, &site, 2.5, &c, RefractionMode::None).expect("ok");
        let app = observe(star, &site, 2.5, &c, RefractionMode::Standard).expect("ok");
        assert!(geo.lat_rad < -0.5);
        assert_eq!(app.lat_rad, geo.lat_rad);
    }

    #[test]
    fn invalid_constants_fail_even_for_stars() {
        let site = ObserverSite::sea_level(0.0, 0.0);
        let star = SphericalCoords::<Equatorial>::direction(0.0, 0.0);
        let bad = PhysicalConstants {
            earth_axis_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            observe(star, &site, 1.0, &bad, RefractionMode::Standard),
            Err(TopoError::Core(CoreError::InvalidConstants(_)))
        ));
    }

    #[test]
    fn moon_is_lowered_by_parallax() {
        let site = ObserverSite::sea_level(0.0, 0.0);
        let moon = SphericalCoords::<Equatorial>::new(0.0, 0.0, Distance::km(384_400.0));
        let c = PhysicalConstants::default();
        let gst = 1.0;
        let with = observe(moon, &site, gst, &c, RefractionMode::None).expect("ok");
        let without = observe(
            SphericalCoords::<Equatorial>::direction(0.0, 0.0),
            &site,
            gst,
            &c,
            RefractionMode::None,
        )
        .expect("ok");
        let drop = without.lat_rad - with.lat_rad;
        // Everything lies in the equatorial plane: tan p = ρ sin z / (1 − ρ cos z).
        let rho = 6378.1366_f64 / 384_400.0;
        let z = FRAC_PI_2 - without.lat_rad;
        let expected = (rho * z.sin() / (1.0 - rho * z.cos())).atan();
        assert!((drop - expected).abs() < 1e-9, "drop {drop} expected {expected}");
    }
}
