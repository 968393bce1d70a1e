//! Illuminated fraction of the lunar disk.

use std::f64::consts::PI;

/// Fraction of the Moon's disk lit by the Sun at `t`, in `[0, 1]`.
///
/// Low-precision phase angle from the mean elongation and anomalies.
pub fn moon_illuminated_fraction(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let d = (297.850_204_2 + 445_267.111_516_8 * t - 0.001_630_0 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0)
        .to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0)
        .to_radians();
    let mp = (134.963_411_4 + 477_198.867_631_3 * t + 0.008_997_0 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0)
        .to_radians();
    let phase_angle = PI - d
        + (-6.289 * mp.sin() + 2.100 * m.sin()
            - 1.274 * (2.0 * d - mp).sin()
            - 0.658 * (2.0 * d).sin()
            - 0.214 * (2.0 * mp).sin()
            - 0.110 * d.sin())
        .to_radians();
    ((1.0 + phase_angle.cos()) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_48a() {
        // 1992 April 12, 0h TD: k = 0.6786.
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let k = moon_illuminated_fraction(t);
        assert!((k - 0.6786).abs() < 0.01, "k = {k}");
    }

    #[test]
    fn cycles_through_new_and_full() {
        let (mut lo, mut hi) = (1.0_f64, 0.0_f64);
        for i in 0..300 {
            let t = 0.24 + i as f64 * 0.1 / 36_525.0;
            let k = moon_illuminated_fraction(t);
            lo = lo.min(k);
            hi = hi.max(k);
        }
        assert!(lo < 0.01 && hi > 0.99, "lo {lo} hi {hi}");
    }
}
