//! Heliocentric Earth: leading terms of VSOP87D (ecliptic and equinox of date).
//!
//! Each row is `[A, B, C]` contributing `A·cos(B + C·τ)`, τ in Julian
//! millennia TT from J2000.0, amplitudes in 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::Terms;

#[rustfmt::skip]
const L0: &[[f64; 3]] = &[
    [175_347_046.0, 0.0, 0.0],
    [3_341_656.0, 4.669_256_8, 6283.075_85],
    [34_894.0, 4.626_10, 12_566.151_70],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77_713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11_506.7698],
    [1273.0, 2.0371, 529.6910],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18_849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.920, 0.067],
    [317.0, 5.849, 11_790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10_977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.980],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15_720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161_000.69],
    [85.0, 1.30, 6275.96],
    [85.0, 3.67, 71_430.70],
    [80.0, 1.81, 17_260.15],
    [79.0, 3.04, 12_036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.50, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.90],
    [57.0, 2.78, 6286.60],
    [56.0, 4.39, 14_143.50],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12_139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.40, 19_651.05],
    [39.0, 6.17, 10_447.39],
    [37.0, 6.04, 10_213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17_789.85],
    [30.0, 0.44, 83_996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];

#[rustfmt::skip]
const L1: &[[f64; 3]] = &[
    [628_331_966_747.0, 0.0, 0.0],
    [206_059.0, 2.678_235, 6283.075_85],
    [4303.0, 2.6351, 12_566.1517],
    [425.0, 1.590, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18_849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.40, 796.30],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.30],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10_977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.00],
    [11.0, 0.77, 553.57],
    [10.0, 1.30, 6286.60],
    [10.0, 4.24, 1349.87],
    [9.0, 2.70, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.30, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];

#[rustfmt::skip]
const L2: &[[f64; 3]] = &[
    [52_919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12_566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.30],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18_849.23],
    [9.0, 2.06, 77_713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.30],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];

#[rustfmt::skip]
const L3: &[[f64; 3]] = &[
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12_566.15],
    [3.0, 5.20, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.30, 18_849.23],
    [1.0, 5.97, 242.73],
];

#[rustfmt::skip]
const L4: &[[f64; 3]] = &[
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12_566.15],
];

const L5: &[[f64; 3]] = &[[1.0, 3.14, 0.0]];

#[rustfmt::skip]
const B0: &[[f64; 3]] = &[
    [280.0, 3.199, 84_334.662],
    [102.0, 5.422, 5507.553],
    [80.0, 3.88, 5223.69],
    [44.0, 3.70, 2352.87],
    [32.0, 4.00, 1577.34],
];

const B1: &[[f64; 3]] = &[[9.0, 3.90, 5507.55], [6.0, 1.73, 5223.69]];

#[rustfmt::skip]
const R0: &[[f64; 3]] = &[
    [100_013_989.0, 0.0, 0.0],
    [1_670_700.0, 3.098_463_5, 6283.075_85],
    [13_956.0, 3.055_25, 12_566.151_70],
    [3084.0, 5.1985, 77_713.7715],
    [1628.0, 1.1739, 5753.3849],
    [1576.0, 2.8469, 7860.4194],
    [925.0, 5.453, 11_506.770],
    [542.0, 4.564, 3930.210],
    [472.0, 3.661, 5884.927],
    [346.0, 0.964, 5507.553],
    [329.0, 5.900, 5223.694],
    [307.0, 0.299, 5573.143],
    [243.0, 4.273, 11_790.629],
    [212.0, 5.847, 1577.344],
    [186.0, 5.022, 10_977.079],
    [175.0, 3.012, 18_849.228],
    [110.0, 5.055, 5486.778],
    [98.0, 0.89, 6069.78],
    [86.0, 5.69, 15_720.84],
    [86.0, 1.27, 161_000.69],
    [65.0, 0.27, 17_260.15],
    [63.0, 0.92, 529.69],
    [57.0, 2.01, 83_996.85],
    [56.0, 5.24, 71_430.70],
    [49.0, 3.25, 2544.31],
    [47.0, 2.58, 775.52],
    [45.0, 5.54, 9437.76],
    [43.0, 6.01, 6275.96],
    [39.0, 5.36, 4694.00],
    [38.0, 2.39, 8827.39],
    [37.0, 0.83, 19_651.05],
    [37.0, 4.90, 12_139.55],
    [36.0, 1.67, 12_036.46],
    [35.0, 1.84, 2942.46],
    [33.0, 0.24, 7084.90],
    [32.0, 0.18, 5088.63],
    [32.0, 1.78, 398.15],
    [28.0, 1.21, 6286.60],
    [28.0, 1.90, 6279.55],
    [26.0, 4.59, 10_447.39],
];

#[rustfmt::skip]
const R1: &[[f64; 3]] = &[
    [103_019.0, 1.107_490, 6283.075_850],
    [1721.0, 1.0644, 12_566.1517],
    [702.0, 3.142, 0.0],
    [32.0, 1.02, 18_849.23],
    [31.0, 2.84, 5507.55],
    [25.0, 1.32, 5223.69],
    [18.0, 1.42, 1577.34],
    [10.0, 5.91, 10_977.08],
    [9.0, 1.42, 6275.96],
    [9.0, 0.27, 5486.78],
];

#[rustfmt::skip]
const R2: &[[f64; 3]] = &[
    [4359.0, 5.7846, 6283.0758],
    [124.0, 5.579, 12_566.152],
    [12.0, 3.14, 0.0],
    [9.0, 3.63, 77_713.77],
    [6.0, 1.87, 5573.14],
    [3.0, 5.47, 18_849.23],
];

const R3: &[[f64; 3]] = &[[145.0, 4.273, 6283.076], [7.0, 3.92, 12_566.15]];

const R4: &[[f64; 3]] = &[[4.0, 2.56, 6283.08]];

const LONGITUDE: &[&[[f64; 3]]] = &[L0, L1, L2, L3, L4, L5];
const LATITUDE: &[&[[f64; 3]]] = &[B0, B1];
const RADIUS: &[&[[f64; 3]]] = &[R0, R1, R2, R3, R4];

fn sum_table(rows: &[[f64; 3]], tau: f64) -> f64 {
    rows.iter().map(|[a, b, c]| a * (b + c * tau).cos()).sum()
}

/// Σ_k τ^k · Σ rows of table k, scaled from 1e-8 units.
fn evaluate(tables: &[&[[f64; 3]]], t: f64, terms: Terms) -> f64 {
    let tau = t / 10.0;
    let primary_len = tables[0].len();
    let mut total = 0.0;
    let mut power = 1.0;
    for table in tables {
        let n = terms.take(table.len(), primary_len);
        total += sum_table(&table[..n], tau) * power;
        power *= tau;
    }
    total / 1e8
}

/// Heliocentric longitude of the Earth in radians (cumulative).
pub fn longitude(t: f64, terms: Terms) -> f64 {
    evaluate(LONGITUDE, t, terms)
}

/// Heliocentric latitude of the Earth in radians.
pub fn latitude(t: f64, terms: Terms) -> f64 {
    evaluate(LATITUDE, t, terms)
}

/// Sun–Earth distance in AU.
pub fn radius(t: f64, terms: Terms) -> f64 {
    evaluate(RADIUS, t, terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25b() {
        // 1992 Oct 13.0 TD: L = -43.63484796 rad, B = -0.00000312 rad, R = 0.99760775 AU.
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let l = longitude(t, Terms::Full);
        let b = latitude(t, Terms::Full);
        let r = radius(t, Terms::Full);
        assert!((l + 43.634_847_96).abs() < 2e-6, "L = {l}");
        assert!((b + 0.000_003_12).abs() < 1e-6, "B = {b}");
        assert!((r - 0.997_607_75).abs() < 1e-6, "R = {r}");
    }

    #[test]
    fn longitude_is_cumulative() {
        let a = longitude(0.0, Terms::Full);
        let b = longitude(1.0, Terms::Full);
        // One century of mean motion is about 628.33 rad.
        assert!((b - a - 628.33).abs() < 0.1, "Δ = {}", b - a);
    }

    #[test]
    fn truncation_stays_close() {
        let t = 0.24;
        let full = longitude(t, Terms::Full);
        let lead = longitude(t, Terms::Leading(10));
        assert!((full - lead).abs() < 2e-4, "full {full} lead {lead}");
        assert!(full != lead);
    }
}
