use std::f64::consts::FRAC_PI_2;

use proptest::prelude::*;
use taiyin_topo::{refraction_from_apparent, refraction_from_true};

proptest! {
    #[test]
    fn true_refraction_strictly_decreasing(h in 1e-4f64..(FRAC_PI_2 - 2e-3), dh in 1e-4f64..1e-2) {
        let h2 = (h + dh).min(FRAC_PI_2 - 1e-4);
        prop_assume!(h2 > h);
        let r1 = refraction_from_true(h).expect("defined above horizon");
        let r2 = refraction_from_true(h2).expect("defined above horizon");
        prop_assert!(r1 > r2, "R({}) = {} !> R({}) = {}", h, r1, h2, r2);
    }

    #[test]
    fn apparent_correction_strictly_increasing(h in 1e-4f64..(FRAC_PI_2 - 2e-3), dh in 1e-4f64..1e-2) {
        let h2 = (h + dh).min(FRAC_PI_2 - 1e-4);
        prop_assume!(h2 > h);
        let r1 = refraction_from_apparent(h).expect("defined above horizon");
        let r2 = refraction_from_apparent(h2).expect("defined above horizon");
        prop_assert!(r1 < r2);
    }

    #[test]
    fn below_pole_always_undefined(h in -3.0f64..-0.0892) {
        prop_assert!(refraction_from_true(h).is_err());
    }
}
