//! Geocentric Moon: the ELP-2000/82 derived periodic tables
//! (60 longitude/distance terms, 60 latitude terms), mean equinox of date.
//!
//! Rows are `[D, M, M′, F, Σl, Σr]` (longitude in 1e-6 degree, distance in
//! metres) and `[D, M, M′, F, Σb]` (latitude in 1e-6 degree). Terms with
//! `M ≠ 0` are scaled by the eccentricity factor `E^|M|`.

use crate::series::Terms;

#[rustfmt::skip]
const LR: [[i32; 6]; 60] = [
    [0, 0, 1, 0, 6_288_774, -20_905_355],
    [2, 0, -1, 0, 1_274_027, -3_699_111],
    [2, 0, 0, 0, 658_314, -2_955_968],
    [0, 0, 2, 0, 213_618, -569_925],
    [0, 1, 0, 0, -185_116, 48_888],
    [0, 0, 0, 2, -114_332, -3149],
    [2, 0, -2, 0, 58_793, 246_158],
    [2, -1, -1, 0, 57_066, -152_138],
    [2, 0, 1, 0, 53_322, -170_733],
    [2, -1, 0, 0, 45_758, -204_586],
    [0, 1, -1, 0, -40_923, -129_620],
    [1, 0, 0, 0, -34_720, 108_743],
    [0, 1, 1, 0, -30_383, 104_755],
    [2, 0, 0, -2, 15_327, 10_321],
    [0, 0, 1, 2, -12_528, 0],
    [0, 0, 1, -2, 10_980, 79_661],
    [4, 0, -1, 0, 10_675, -34_782],
    [0, 0, 3, 0, 10_034, -23_210],
    [4, 0, -2, 0, 8548, -21_636],
    [2, 1, -1, 0, -7888, 24_208],
    [2, 1, 0, 0, -6766, 30_824],
    [1, 0, -1, 0, -5163, -8379],
    [1, 1, 0, 0, 4987, -16_675],
    [2, -1, 1, 0, 4036, -12_831],
    [2, 0, 2, 0, 3994, -10_445],
    [4, 0, 0, 0, 3861, -11_650],
    [2, 0, -3, 0, 3665, 14_403],
    [0, 1, -2, 0, -2689, -7003],
    [2, 0, -1, 2, -2602, 0],
    [2, -1, -2, 0, 2390, 10_056],
    [1, 0, 1, 0, -2348, 6322],
    [2, -2, 0, 0, 2236, -9884],
    [0, 1, 2, 0, -2120, 5751],
    [0, 2, 0, 0, -2069, 0],
    [2, -2, -1, 0, 2048, -4950],
    [2, 0, 1, -2, -1773, 4130],
    [2, 0, 0, 2, -1595, 0],
    [4, -1, -1, 0, 1215, -3958],
    [0, 0, 2, 2, -1110, 0],
    [3, 0, -1, 0, -892, 3258],
    [2, 1, 1, 0, -810, 2616],
    [4, -1, -2, 0, 759, -1897],
    [0, 2, -1, 0, -713, -2117],
    [2, 2, -1, 0, -700, 2354],
    [2, 1, -2, 0, 691, 0],
    [2, -1, 0, -2, 596, 0],
    [4, 0, 1, 0, 549, -1423],
    [0, 0, 4, 0, 537, -1117],
    [4, -1, 0, 0, 520, -1571],
    [1, 0, -2, 0, -487, -1739],
    [2, 1, 0, -2, -399, 0],
    [0, 0, 2, -2, -381, -4421],
    [1, 1, 1, 0, 351, 0],
    [3, 0, -2, 0, -340, 0],
    [4, 0, -3, 0, 330, 0],
    [2, -1, 2, 0, 327, 0],
    [0, 2, 1, 0, -323, 1165],
    [1, 1, -1, 0, 299, 0],
    [2, 0, 3, 0, 294, 0],
    [2, 0, -1, -2, 0, 8752],
];

#[rustfmt::skip]
const B: [[i32; 5]; 60] = [
    [0, 0, 0, 1, 5_128_122],
    [0, 0, 1, 1, 280_602],
    [0, 0, 1, -1, 277_693],
    [2, 0, 0, -1, 173_237],
    [2, 0, -1, 1, 55_413],
    [2, 0, -1, -1, 46_271],
    [2, 0, 0, 1, 32_573],
    [0, 0, 2, 1, 17_198],
    [2, 0, 1, -1, 9266],
    [0, 0, 2, -1, 8822],
    [2, -1, 0, -1, 8216],
    [2, 0, -2, -1, 4324],
    [2, 0, 1, 1, 4200],
    [2, 1, 0, -1, -3359],
    [2, -1, -1, 1, 2463],
    [2, -1, 0, 1, 2211],
    [2, -1, -1, -1, 2065],
    [0, 1, -1, -1, -1870],
    [4, 0, -1, -1, 1828],
    [0, 1, 0, 1, -1794],
    [0, 0, 0, 3, -1749],
    [0, 1, -1, 1, -1565],
    [1, 0, 0, 1, -1491],
    [0, 1, 1, 1, -1475],
    [0, 1, 1, -1, -1410],
    [0, 1, 0, -1, -1344],
    [1, 0, 0, -1, -1335],
    [0, 0, 3, 1, 1107],
    [4, 0, 0, -1, 1021],
    [4, 0, -1, 1, 833],
    [0, 0, 1, -3, 777],
    [4, 0, -2, 1, 671],
    [2, 0, 0, -3, 607],
    [2, 0, 2, -1, 596],
    [2, -1, 1, -1, 491],
    [2, 0, -2, 1, -451],
    [0, 0, 3, -1, 439],
    [2, 0, 2, 1, 422],
    [2, 0, -3, -1, 421],
    [2, 1, -1, 1, -366],
    [2, 1, 0, 1, -351],
    [4, 0, 0, 1, 331],
    [2, -1, 1, 1, 315],
    [2, -2, 0, -1, 302],
    [0, 0, 1, 3, -283],
    [2, 1, 1, -1, -229],
    [1, 1, 0, -1, 223],
    [1, 1, 0, 1, 223],
    [0, 1, -2, -1, -220],
    [2, 1, -1, -1, -220],
    [1, 0, 1, 1, -185],
    [2, -1, -2, -1, 181],
    [0, 1, 2, 1, -177],
    [4, 0, -2, -1, 176],
    [4, -1, -1, -1, 166],
    [1, 0, 1, -1, -164],
    [4, 0, 1, -1, 132],
    [1, 0, -1, -1, -119],
    [4, -1, 0, -1, 115],
    [2, -2, 0, 1, 107],
];

/// Mean distance of the Moon in km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Mean arguments of the lunar theory, all in radians except `e`.
struct Arguments {
    /// Mean longitude L′ (cumulative).
    lp: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    /// Eccentricity factor of the Earth's orbit.
    e: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        let deg = |x: f64| x.to_radians();
        Self {
            lp: deg(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0),
            d: deg(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0),
            m: deg(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0),
            mp: deg(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0),
            f: deg(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0),
            a1: deg(119.75 + 131.849 * t),
            a2: deg(53.09 + 479_264.290 * t),
            a3: deg(313.45 + 481_266.484 * t),
            e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    fn phase(&self, d: i32, m: i32, mp: i32, f: i32) -> f64 {
        f64::from(d) * self.d + f64::from(m) * self.m + f64::from(mp) * self.mp + f64::from(f) * self.f
    }

    fn eccentricity(&self, m: i32) -> f64 {
        match m.abs() {
            0 => 1.0,
            1 => self.e,
            _ => self.e * self.e,
        }
    }
}

/// Geocentric longitude in radians (cumulative).
pub fn longitude(t: f64, terms: Terms) -> f64 {
    let a = Arguments::at(t);
    let n = terms.take(LR.len(), LR.len());
    let mut sum_l: f64 = LR[..n]
        .iter()
        .map(|&[d, m, mp, f, l, _]| f64::from(l) * a.eccentricity(m) * a.phase(d, m, mp, f).sin())
        .sum();
    if terms == Terms::Full {
        sum_l += 3958.0 * a.a1.sin() + 1962.0 * (a.lp - a.f).sin() + 318.0 * a.a2.sin();
    }
    a.lp + (sum_l * 1e-6).to_radians()
}

/// Geocentric latitude in radians.
pub fn latitude(t: f64, terms: Terms) -> f64 {
    let a = Arguments::at(t);
    let n = terms.take(B.len(), B.len());
    let mut sum_b: f64 = B[..n]
        .iter()
        .map(|&[d, m, mp, f, b]| f64::from(b) * a.eccentricity(m) * a.phase(d, m, mp, f).sin())
        .sum();
    if terms == Terms::Full {
        sum_b += -2235.0 * a.lp.sin()
            + 382.0 * a.a3.sin()
            + 175.0 * (a.a1 - a.f).sin()
            + 175.0 * (a.a1 + a.f).sin()
            + 127.0 * (a.lp - a.mp).sin()
            - 115.0 * (a.lp + a.mp).sin();
    }
    (sum_b * 1e-6).to_radians()
}

/// Earth–Moon distance (centre to centre) in km.
pub fn radius(t: f64, terms: Terms) -> f64 {
    let a = Arguments::at(t);
    let n = terms.take(LR.len(), LR.len());
    let sum_r: f64 = LR[..n]
        .iter()
        .map(|&[d, m, mp, f, _, r]| f64::from(r) * a.eccentricity(m) * a.phase(d, m, mp, f).cos())
        .sum();
    MEAN_DISTANCE_KM + sum_r / 1000.0
}
