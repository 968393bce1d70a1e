//! Precession between the J2000.0 frame and the mean equinox of date.
//!
//! Equatorial coordinates go through the three angles `ζ, z, θ`; ecliptic
//! coordinates through the four-rotation chain `ψ, ω, χ, ε` (rotate the
//! J2000 ecliptic onto the equator of date, then down onto the ecliptic
//! of date). Both chains come from the same model and agree to well under
//! a milliarcsecond for P03.

use taiyin_frames::{
    Ecliptic, Equatorial, SphericalCoords, arcsec_to_rad, normalize_mrad, rotate_lon_lat,
};

/// Precession model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrecessionModel {
    /// Lieske et al. (1977), cubic polynomials.
    Iau1976,
    /// Capitaine et al. (2003), adopted as IAU 2006.
    #[default]
    P03,
}

/// Precession angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecessionAngle {
    /// `ψ_A`, luni-solar precession in longitude.
    Psi,
    /// `ω_A`, inclination of the equator of date on the J2000 ecliptic.
    Omega,
    /// `χ_A`, planetary precession along the equator.
    Chi,
    /// `ε_A`, mean obliquity of date.
    Epsilon,
    /// `ζ_A`, first equatorial rotation.
    Zeta,
    /// `z_A`, last equatorial rotation.
    Z,
    /// `θ_A`, inclination between the equators.
    Theta,
}

impl PrecessionAngle {
    const fn row(self) -> usize {
        match self {
            Self::Psi => 0,
            Self::Omega => 1,
            Self::Chi => 2,
            Self::Epsilon => 3,
            Self::Zeta => 4,
            Self::Z => 5,
            Self::Theta => 6,
        }
    }
}

/// Polynomial coefficients in arcseconds, `t⁰ … t⁵`.
#[rustfmt::skip]
static IAU1976: [[f64; 6]; 7] = [
    [0.0,        5038.7784,  -1.07259,   -0.001147,   0.0, 0.0],
    [84_381.448,    0.0,      0.05127,   -0.007726,   0.0, 0.0],
    [0.0,          10.5526,  -2.38064,   -0.001125,   0.0, 0.0],
    [84_381.448,  -46.8150,  -0.00059,    0.001813,   0.0, 0.0],
    [0.0,        2306.2181,   0.30188,    0.017998,   0.0, 0.0],
    [0.0,        2306.2181,   1.09468,    0.018203,   0.0, 0.0],
    [0.0,        2004.3109,  -0.42665,   -0.041833,   0.0, 0.0],
];

#[rustfmt::skip]
static P03: [[f64; 6]; 7] = [
    [0.0,         5038.481_507, -1.079_006_9, -0.001_140_45,  0.000_132_851, -9.51e-8],
    [84_381.406,    -0.025_754,  0.051_262_3, -0.007_725_03, -4.67e-7,        3.337e-7],
    [0.0,           10.556_403, -2.381_429_2, -0.001_211_97,  0.000_170_663, -5.60e-8],
    [84_381.406,   -46.836_769, -0.000_183_1,  0.002_003_40, -5.76e-7,       -4.34e-8],
    [2.650_545,   2306.083_227,  0.298_849_9,  0.018_018_28, -0.000_005_971, -3.173e-7],
    [-2.650_545,  2306.077_181,  1.092_734_8,  0.018_268_37, -0.000_028_596, -2.904e-7],
    [0.0,         2004.191_903, -0.429_493_4, -0.041_822_64, -0.000_007_089, -1.274e-7],
];

/// Precession angle at `t` centuries TT, radians.
pub fn precession_angle(t: f64, angle: PrecessionAngle, model: PrecessionModel) -> f64 {
    let coeffs = match model {
        PrecessionModel::Iau1976 => &IAU1976[angle.row()],
        PrecessionModel::P03 => &P03[angle.row()],
    };
    let arcsec = coeffs.iter().rev().fold(0.0, |acc, c| acc * t + c);
    arcsec_to_rad(arcsec)
}

/// Rotate `(α, δ)` through `ζ`, `θ` and `z`.
fn rotate_equator(lon_rad: f64, lat_rad: f64, zeta: f64, theta: f64, z: f64) -> (f64, f64) {
    let a = lon_rad + zeta;
    let (sin_d, cos_d) = lat_rad.sin_cos();
    let (sin_h, cos_h) = theta.sin_cos();
    let x = cos_h * cos_d * a.cos() - sin_h * sin_d;
    let y = cos_d * a.sin();
    let s = (sin_h * cos_d * a.cos() + cos_h * sin_d).clamp(-1.0, 1.0);
    (normalize_mrad(y.atan2(x) + z), s.asin())
}

/// Mean equatorial coordinates of J2000.0 → mean equator and equinox of date.
pub fn precess_equatorial_from_j2000(
    coord: SphericalCoords<Equatorial>,
    t: f64,
    model: PrecessionModel,
) -> SphericalCoords<Equatorial> {
    let (lon, lat) = rotate_equator(
        coord.lon_rad,
        coord.lat_rad,
        precession_angle(t, PrecessionAngle::Zeta, model),
        precession_angle(t, PrecessionAngle::Theta, model),
        precession_angle(t, PrecessionAngle::Z, model),
    );
    SphericalCoords::new(lon, lat, coord.distance)
}

/// Mean equator and equinox of date → J2000.0.
pub fn precess_equatorial_to_j2000(
    coord: SphericalCoords<Equatorial>,
    t: f64,
    model: PrecessionModel,
) -> SphericalCoords<Equatorial> {
    let (lon, lat) = rotate_equator(
        coord.lon_rad,
        coord.lat_rad,
        -precession_angle(t, PrecessionAngle::Z, model),
        -precession_angle(t, PrecessionAngle::Theta, model),
        -precession_angle(t, PrecessionAngle::Zeta, model),
    );
    SphericalCoords::new(lon, lat, coord.distance)
}

/// Ecliptic coordinates of J2000.0 → mean ecliptic and equinox of date.
pub fn precess_ecliptic_from_j2000(
    coord: SphericalCoords<Ecliptic>,
    t: f64,
    model: PrecessionModel,
) -> SphericalCoords<Ecliptic> {
    let angle = |a| precession_angle(t, a, model);
    let (lon, lat) = rotate_lon_lat(
        coord.lon_rad + angle(PrecessionAngle::Psi),
        coord.lat_rad,
        angle(PrecessionAngle::Omega),
    );
    let (lon, lat) = rotate_lon_lat(
        lon - angle(PrecessionAngle::Chi),
        lat,
        -angle(PrecessionAngle::Epsilon),
    );
    SphericalCoords::new(lon, lat, coord.distance)
}

/// Mean ecliptic and equinox of date → J2000.0.
pub fn precess_ecliptic_to_j2000(
    coord: SphericalCoords<Ecliptic>,
    t: f64,
    model: PrecessionModel,
) -> SphericalCoords<Ecliptic> {
    let angle = |a| precession_angle(t, a, model);
    let (lon, lat) = rotate_lon_lat(coord.lon_rad, coord.lat_rad, angle(PrecessionAngle::Epsilon));
    let (lon, lat) = rotate_lon_lat(
        lon + angle(PrecessionAngle::Chi),
        lat,
        -angle(PrecessionAngle::Omega),
    );
    SphericalCoords::new(
        normalize_mrad(lon - angle(PrecessionAngle::Psi)),
        lat,
        coord.distance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutation::mean_obliquity;
    use taiyin_frames::{ARCSEC_PER_RAD, ecliptic_to_equatorial, equatorial_to_ecliptic};

    #[test]
    fn angles_vanish_at_epoch() {
        for model in [PrecessionModel::Iau1976, PrecessionModel::P03] {
            for a in [PrecessionAngle::Psi, PrecessionAngle::Chi, PrecessionAngle::Theta] {
                assert_eq!(precession_angle(0.0, a, model), 0.0);
            }
            let zeta = precession_angle(0.0, PrecessionAngle::Zeta, model);
            let z = precession_angle(0.0, PrecessionAngle::Z, model);
            assert!((zeta + z).abs() < 1e-15);
        }
    }

    #[test]
    fn p03_obliquity_matches_mean_obliquity() {
        for t in [-2.0, -0.5, 0.0, 0.7, 3.0] {
            let eps = precession_angle(t, PrecessionAngle::Epsilon, PrecessionModel::P03);
            assert!((eps - mean_obliquity(t)).abs() < 1e-14);
        }
    }

    #[test]
    fn equatorial_round_trip() {
        let c = SphericalCoords::<Equatorial>::direction(5.9, -1.1);
        for model in [PrecessionModel::Iau1976, PrecessionModel::P03] {
            let there = precess_equatorial_from_j2000(c, 1.7, model);
            let back = precess_equatorial_to_j2000(there, 1.7, model);
            assert!((back.lon_rad - c.lon_rad).abs() < 1e-12);
            assert!((back.lat_rad - c.lat_rad).abs() < 1e-12);
        }
    }

    #[test]
    fn ecliptic_round_trip_keeps_distance() {
        let c = SphericalCoords::<Ecliptic>::new(2.2, 0.05, taiyin_frames::Distance::au(1.4));
        let there = precess_ecliptic_from_j2000(c, -0.8, PrecessionModel::P03);
        let back = precess_ecliptic_to_j2000(there, -0.8, PrecessionModel::P03);
        assert!((back.lon_rad - c.lon_rad).abs() < 1e-12);
        assert!((back.lat_rad - c.lat_rad).abs() < 1e-12);
        assert_eq!(back.distance, c.distance);
    }

    #[test]
    fn ecliptic_and_equatorial_chains_agree() {
        let t = 0.9;
        let eps0 = mean_obliquity(0.0);
        for (lon, lat) in [(0.3, 0.1), (2.0, -0.4), (4.5, 0.9)] {
            let ecl = SphericalCoords::<Ecliptic>::direction(lon, lat);
            let direct = precess_ecliptic_from_j2000(ecl, t, PrecessionModel::P03);
            let eq = precess_equatorial_from_j2000(
                ecliptic_to_equatorial(ecl, eps0),
                t,
                PrecessionModel::P03,
            );
            let via = equatorial_to_ecliptic(eq, mean_obliquity(t));
            let dlon = (direct.lon_rad - via.lon_rad) * lat.cos();
            assert!(dlon.abs() < 1e-7, "Δλ cos β = {}″", dlon * ARCSEC_PER_RAD);
            assert!((direct.lat_rad - via.lat_rad).abs() < 1e-7);
        }
    }

    #[test]
    fn general_precession_on_the_ecliptic() {
        let c = SphericalCoords::<Ecliptic>::direction(0.0, 0.0);
        let moved = precess_ecliptic_from_j2000(c, 1.0, PrecessionModel::P03);
        let arcsec = moved.lon_rad * ARCSEC_PER_RAD;
        assert!((arcsec - 5028.8).abs() < 5.0, "p = {arcsec}″");
        assert!(moved.lat_rad.abs() * ARCSEC_PER_RAD < 50.0);
    }
}
