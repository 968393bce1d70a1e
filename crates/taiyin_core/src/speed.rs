//! Mean angular speeds of the Earth and the Moon, radians per century.
//!
//! Used as Newton slopes by the inverse-time solvers; accurate to a few
//! parts in a thousand, which is all a slope needs.

/// Heliocentric longitude speed of the Earth at `t`.
pub fn earth_speed(t: f64) -> f64 {
    let f = 628.307_585 * t;
    628.332 + 21.0 * (1.527 + f).sin() + 0.44 * (1.48 + f * 2.0).sin()
        + 0.129 * (5.82 + f).sin() * t
        + 0.000_55 * (4.21 + f).sin() * t * t
}

/// `(amplitude, phase, rate)` of the periodic corrections to the Moon's speed.
const MOON_SPEED_TERMS: [(f64, f64, f64); 11] = [
    (179.0, 2.543, 15_542.754_3),
    (160.0, 0.1874, 7214.0629),
    (62.0, 3.14, 16_657.382_8),
    (34.0, 4.827, 16_866.932_3),
    (22.0, 4.9, 23_871.445_7),
    (12.0, 2.59, 14_914.452_3),
    (7.0, 0.23, 6585.7609),
    (5.0, 0.9, 25_195.624),
    (5.0, 2.32, -7700.3895),
    (5.0, 3.88, 8956.9934),
    (5.0, 0.49, 7771.3771),
];

/// Geocentric longitude speed of the Moon at `t`.
pub fn moon_speed(t: f64) -> f64 {
    let main = 8399.71 - 914.0 * (0.7848 + 8328.691_425 * t + 0.000_152_3 * t * t).sin();
    MOON_SPEED_TERMS
        .iter()
        .fold(main, |v, &(amp, phase, rate)| v - amp * (phase + rate * t).sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Terms;
    use crate::theory::{earth, moon};

    fn numeric_speed(f: impl Fn(f64) -> f64, t: f64) -> f64 {
        let h = 0.01 / 36_525.0;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn earth_speed_tracks_series() {
        for k in 0..10 {
            let t = 0.03 * k as f64;
            let n = numeric_speed(|x| earth::longitude(x, Terms::Full), t);
            let v = earth_speed(t);
            assert!((n - v).abs() / n < 0.002, "t={t} numeric {n} formula {v}");
        }
    }

    #[test]
    fn moon_speed_tracks_series() {
        for k in 0..10 {
            let t = 0.031 * k as f64;
            let n = numeric_speed(|x| moon::longitude(x, Terms::Full), t);
            let v = moon_speed(t);
            assert!((n - v).abs() / n < 0.01, "t={t} numeric {n} formula {v}");
        }
    }
}
