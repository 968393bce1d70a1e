use proptest::prelude::*;
use taiyin_core::{
    Terms, centuries_to_jd, delta_t_seconds, jd_to_centuries, moon_illuminated_fraction,
};

proptest! {
    #[test]
    fn take_never_exceeds_table(n in 0u32..200, len in 1usize..100, primary in 1usize..100) {
        let k = Terms::Leading(n).take(len, primary);
        prop_assert!(k <= len);
        prop_assert_eq!(Terms::Full.take(len, primary), len);
    }

    #[test]
    fn illuminated_fraction_in_unit_interval(t in -5.0f64..5.0) {
        let k = moon_illuminated_fraction(t);
        prop_assert!((0.0..=1.0).contains(&k));
    }

    #[test]
    fn centuries_roundtrip(jd in 0.0f64..5_000_000.0) {
        prop_assert!((centuries_to_jd(jd_to_centuries(jd)) - jd).abs() < 1e-6);
    }

    #[test]
    fn delta_t_is_finite(year in -4000.0f64..4000.0) {
        prop_assert!(delta_t_seconds(year).is_finite());
    }
}
