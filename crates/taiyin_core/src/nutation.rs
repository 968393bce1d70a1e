//! Nutation and obliquity of the ecliptic.
//!
//! Nutation uses the twenty largest lunisolar terms of IAU 2000B, good to
//! a few milliarcseconds over the centuries the lunar tables cover.

use taiyin_frames::{Equatorial, SphericalCoords, arcsec_to_rad, normalize_mrad};

/// Delaunay arguments `[l, l′, F, D, Ω]` in radians at `t` centuries TT.
///
/// Polynomials from IERS Conventions 2010, Table 5.2e (arcseconds).
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = 485_868.249_036 + 1_717_915_923.217_8 * t + 31.8792 * t2 + 0.051_635 * t3
        - 0.000_244_70 * t4;
    let lp = 1_287_104.793_05 + 129_596_581.048_1 * t - 0.5532 * t2 + 0.000_136 * t3
        - 0.000_011_49 * t4;
    let f = 335_779.526_232 + 1_739_527_262.847_8 * t - 12.7512 * t2 - 0.001_037 * t3
        + 0.000_004_17 * t4;
    let d = 1_072_260.703_69 + 1_602_961_601.209_0 * t - 6.3706 * t2 + 0.006_593 * t3
        - 0.000_031_69 * t4;
    let om = 450_160.398_036 - 6_962_890.543_1 * t + 7.4722 * t2 + 0.007_702 * t3
        - 0.000_059_39 * t4;

    [l, lp, f, d, om].map(arcsec_to_rad)
}

/// Rows `[nl, nl′, nF, nD, nΩ, S, S′, C, C′]`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static TERMS: [[i64; 9]; 20] = [
    [ 0,  0,  0,  0,  1, -172_064_161, -174_666, 92_052_331,  9086],
    [ 0,  0,  2, -2,  2,  -13_170_906,   -1675,   5_730_336, -3015],
    [ 0,  0,  2,  0,  2,   -2_276_413,    -234,     978_459,  -485],
    [ 0,  0,  0,  0,  2,    2_074_554,     207,    -897_492,   470],
    [ 0,  1,  0,  0,  0,    1_475_877,   -3633,      73_871,  -184],
    [ 0,  1,  2, -2,  2,     -516_821,    1226,     224_386,  -677],
    [ 1,  0,  0,  0,  0,      711_159,      73,      -6750,     0],
    [ 0,  0,  2,  0,  1,     -387_298,    -367,     200_728,    18],
    [ 1,  0,  2,  0,  2,     -301_461,     -36,     129_025,   -63],
    [ 0, -1,  2, -2,  2,      215_829,    -494,     -95_929,   299],
    [ 0,  0,  2, -2,  1,      128_227,     137,     -68_982,    -9],
    [-1,  0,  2,  0,  2,      123_457,      11,     -53_311,    32],
    [-1,  0,  0,  2,  0,      156_994,      10,      -1235,     0],
    [ 1,  0,  0,  0,  1,       63_110,      63,     -33_228,     0],
    [-1,  0,  0,  0,  1,      -57_976,     -63,      31_429,     0],
    [-1,  0,  2,  2,  2,      -59_641,     -11,      25_543,   -11],
    [ 1,  0,  2,  0,  1,      -51_613,     -42,      26_366,     0],
    [-2,  0,  2,  0,  1,       45_893,      50,     -24_236,   -10],
    [ 0,  0,  0,  2,  0,       63_384,      11,      -1220,     0],
    [ 0,  0,  2,  2,  2,      -38_571,      -1,      16_452,   -11],
];

/// Nutation `(Δψ, Δε)` in radians at `t` centuries TT.
pub fn nutation(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &TERMS {
        let arg: f64 = (0..5).map(|i| row[i] as f64 * args[i]).sum();
        let (sin_arg, cos_arg) = arg.sin_cos();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * sin_arg;
        deps += (row[7] as f64 + row[8] as f64 * t) * cos_arg;
    }
    // 0.1 μas → arcsec
    (arcsec_to_rad(dpsi * 1e-7), arcsec_to_rad(deps * 1e-7))
}

/// Nutation in longitude Δψ in radians.
pub fn nutation_in_longitude(t: f64) -> f64 {
    nutation(t).0
}

/// Mean obliquity of the ecliptic (IAU 2006) in radians.
pub fn mean_obliquity(t: f64) -> f64 {
    let arcsec = 84_381.406 - 46.836_769 * t - 0.000_183_1 * t.powi(2) + 0.002_003_40 * t.powi(3)
        - 5.76e-7 * t.powi(4)
        - 4.34e-8 * t.powi(5);
    arcsec_to_rad(arcsec)
}

/// True obliquity ε₀ + Δε in radians.
pub fn true_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + nutation(t).1
}

/// Apply nutation `(Δψ, Δε)` to mean equatorial coordinates of date.
///
/// First-order in the nutation angles; `eps_rad` is the obliquity. Close
/// to the celestial poles `tan δ` grows without bound and the correction
/// stops being meaningful.
pub fn nutate_equatorial(
    coord: SphericalCoords<Equatorial>,
    eps_rad: f64,
    dpsi: f64,
    deps: f64,
) -> SphericalCoords<Equatorial> {
    let (sin_a, cos_a) = coord.lon_rad.sin_cos();
    let tan_d = coord.lat_rad.tan();
    let (sin_e, cos_e) = eps_rad.sin_cos();
    let ra = coord.lon_rad + (cos_e + sin_e * sin_a * tan_d) * dpsi - cos_a * tan_d * deps;
    let dec = coord.lat_rad + sin_e * cos_a * dpsi + sin_a * deps;
    SphericalCoords::new(normalize_mrad(ra), dec, coord.distance)
}

/// [`nutate_equatorial`] with this module's nutation and mean obliquity at `t`.
pub fn nutate_equatorial_at(
    coord: SphericalCoords<Equatorial>,
    t: f64,
) -> SphericalCoords<Equatorial> {
    let (dpsi, deps) = nutation(t);
    nutate_equatorial(coord, mean_obliquity(t), dpsi, deps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiyin_frames::ARCSEC_PER_RAD;

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788″, Δε = +9.443″.
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let (dpsi, deps) = nutation(t);
        assert!((dpsi * ARCSEC_PER_RAD + 3.788).abs() < 0.05, "Δψ = {}", dpsi * ARCSEC_PER_RAD);
        assert!((deps * ARCSEC_PER_RAD - 9.443).abs() < 0.05, "Δε = {}", deps * ARCSEC_PER_RAD);
    }

    #[test]
    fn amplitude_bounds() {
        for k in 0..100 {
            let t = -1.0 + 0.02 * k as f64;
            let (dpsi, deps) = nutation(t);
            assert!(dpsi.abs() * ARCSEC_PER_RAD < 20.0);
            assert!(deps.abs() * ARCSEC_PER_RAD < 10.5);
        }
    }

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity(0.0).to_degrees();
        assert!((eps - 23.439_279).abs() < 1e-5, "ε₀ = {eps}");
    }

    #[test]
    fn meeus_example_23a_nutation_of_a_star() {
        // θ Persei, 2028 Nov 13.19 TD: Δα₁ = +15.843″, Δδ₁ = +6.217″.
        let alpha = 41.547_214_f64.to_radians();
        let delta = 49.348_483_f64.to_radians();
        let eps = 23.436_f64.to_radians();
        let c = SphericalCoords::<Equatorial>::direction(alpha, delta);
        let n = nutate_equatorial(c, eps, arcsec_to_rad(14.861), arcsec_to_rad(2.705));
        let da = (n.lon_rad - alpha) * ARCSEC_PER_RAD;
        let dd = (n.lat_rad - delta) * ARCSEC_PER_RAD;
        assert!((da - 15.843).abs() < 0.01, "Δα = {da}″");
        assert!((dd - 6.217).abs() < 0.01, "Δδ = {dd}″");
    }

    #[test]
    fn nutation_of_equinox_point() {
        // At α = δ = 0 only the equation of the equinoxes remains.
        let t = 0.25;
        let n = nutate_equatorial_at(SphericalCoords::<Equatorial>::direction(0.0, 0.0), t);
        let (dpsi, _) = nutation(t);
        let expected = normalize_mrad(dpsi * mean_obliquity(t).cos());
        assert!((n.lon_rad - expected).abs() < 1e-15);
        assert!((n.lat_rad - dpsi * mean_obliquity(t).sin()).abs() < 1e-15);
    }

    #[test]
    fn true_obliquity_adds_nutation() {
        let t = 0.2;
        assert!((true_obliquity(t) - mean_obliquity(t) - nutation(t).1).abs() < 1e-15);
    }
}
