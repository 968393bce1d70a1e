//! Atmospheric refraction (standard atmosphere, altitudes in radians).
//!
//! Both formulas have a pole just below the horizon. Near it the tangent
//! argument passes π/2 and the correction stops meaning anything; such
//! altitudes are reported as [`TopoError::RefractionUndefined`].

use std::f64::consts::FRAC_PI_2;

use crate::error::TopoError;

/// Largest correction accepted as physical (2°).
pub const MAX_REFRACTION_RAD: f64 = 2.0 * std::f64::consts::PI / 180.0;

/// Pole of [`refraction_from_true`].
const TRUE_POLE: f64 = -0.089_19;

/// Pole of [`refraction_from_apparent`].
const APPARENT_POLE: f64 = -0.076_79;

/// `coeff / tan(h + k / (h - pole))`, rejected where it stops being physical.
fn evaluate(h: f64, coeff: f64, k: f64, pole: f64) -> Result<f64, TopoError> {
    let undefined = || TopoError::RefractionUndefined { altitude_rad: h };
    if !(h > pole) {
        return Err(undefined());
    }
    let arg = h + k / (h - pole);
    // below the horizon the argument reaches π/2 only near the pole
    if h < 0.0 && arg >= FRAC_PI_2 {
        return Err(undefined());
    }
    let r = coeff / arg.tan();
    if !r.is_finite() || r.abs() > MAX_REFRACTION_RAD {
        return Err(undefined());
    }
    Ok(r)
}

/// Refraction to add to a true (geometric) altitude `h`.
pub fn refraction_from_true(h: f64) -> Result<f64, TopoError> {
    evaluate(h, 0.000_296_7, 0.003_138, TRUE_POLE)
}

/// Correction to add to an apparent (observed) altitude `h0`; negative.
pub fn refraction_from_apparent(h0: f64) -> Result<f64, TopoError> {
    evaluate(h0, -0.000_290_9, 0.002_227, APPARENT_POLE)
}

/// Apparent altitude of a body at true altitude `h`.
pub fn apparent_altitude(h: f64) -> Result<f64, TopoError> {
    Ok(h + refraction_from_true(h)?)
}

/// True altitude of a body observed at apparent altitude `h0`.
pub fn true_altitude(h0: f64) -> Result<f64, TopoError> {
    Ok(h0 + refraction_from_apparent(h0)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arcmin(x: f64) -> f64 {
        x.to_degrees() * 60.0
    }

    #[test]
    fn horizon_values() {
        let r = refraction_from_true(0.0).expect("defined");
        assert!((arcmin(r) - 29.0).abs() < 0.5, "R(0) = {}′", arcmin(r));
        let r0 = refraction_from_apparent(0.0).expect("defined");
        assert!((arcmin(r0) + 34.5).abs() < 0.5, "R0(0) = {}′", arcmin(r0));
    }

    #[test]
    fn small_near_zenith() {
        let r = refraction_from_true(1.55).expect("defined");
        assert!(r.abs() < 1e-5);
    }

    #[test]
    fn forty_five_degrees_is_about_one_arcminute() {
        let r = refraction_from_true(std::f64::consts::FRAC_PI_4).expect("defined");
        assert!((arcmin(r) - 1.0).abs() < 0.1, "R(45°) = {}′", arcmin(r));
    }

    #[test]
    fn inverse_pair_roughly_cancels() {
        let h = 0.2;
        let h_app = apparent_altitude(h).expect("defined");
        let back = true_altitude(h_app).expect("defined");
        assert!((back - h).abs() < 5e-5, "h={h} back={back}");
    }

    #[test]
    fn undefined_at_and_below_pole() {
        assert_eq!(
            refraction_from_true(-0.089_19),
            Err(TopoError::RefractionUndefined { altitude_rad: -0.089_19 })
        );
        assert!(refraction_from_true(-0.5).is_err());
        assert!(refraction_from_apparent(-0.076_79).is_err());
        assert!(refraction_from_true(f64::NAN).is_err());
    }

    #[test]
    fn undefined_where_tangent_wraps() {
        // Just above the pole the tangent argument passes π/2.
        assert!(refraction_from_true(-0.0891).is_err());
    }

    #[test]
    fn slightly_below_horizon_is_defined() {
        let r = refraction_from_true(-0.01).expect("defined");
        assert!(r > 0.0 && r < MAX_REFRACTION_RAD);
    }
}
