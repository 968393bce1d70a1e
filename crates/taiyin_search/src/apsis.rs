//! Lunar perigee/apogee and solar perihelion/aphelion.
//!
//! The lunar search runs on the Moon's geocentric distance (km), the
//! solar one on the Earth's heliocentric distance (AU).

use log::debug;
use taiyin_core::{Body, Quantity, SeriesProvider, Terms};

use crate::apsis_types::{ApsisEvent, ApsisKind};
use crate::error::SearchError;
use crate::finder::{SearchPass, SearchPlan, check_epoch, find_extremum};

const ANOMALISTIC_MONTH_DAYS: f64 = 27.554_549_88;
const ANOMALISTIC_YEAR_DAYS: f64 = 365.259_635_86;

const LUNAR_PASSES: [SearchPass; 3] = [
    SearchPass::secant(1.0, Terms::Leading(10)),
    SearchPass::secant(0.5, Terms::Leading(20)),
    SearchPass::secant(1200.0 / 86_400.0, Terms::Full),
];

const SOLAR_PASSES: [SearchPass; 3] = [
    SearchPass::secant(3.0, Terms::Leading(10)),
    SearchPass::secant(0.2, Terms::Leading(80)),
    SearchPass::secant(0.01, Terms::Full),
];

pub const PERIGEE_PLAN: SearchPlan = SearchPlan {
    period_days: ANOMALISTIC_MONTH_DAYS,
    phase_days: -10.3302,
    passes: LUNAR_PASSES,
};

pub const APOGEE_PLAN: SearchPlan = SearchPlan {
    period_days: ANOMALISTIC_MONTH_DAYS,
    phase_days: 3.4471,
    passes: LUNAR_PASSES,
};

pub const PERIHELION_PLAN: SearchPlan = SearchPlan {
    period_days: ANOMALISTIC_YEAR_DAYS,
    phase_days: 1.7,
    passes: SOLAR_PASSES,
};

pub const APHELION_PLAN: SearchPlan = SearchPlan {
    period_days: ANOMALISTIC_YEAR_DAYS,
    phase_days: 184.5,
    passes: SOLAR_PASSES,
};

/// Schedule used for `kind`.
pub fn apsis_plan(kind: ApsisKind) -> &'static SearchPlan {
    match kind {
        ApsisKind::Perigee => &PERIGEE_PLAN,
        ApsisKind::Apogee => &APOGEE_PLAN,
        ApsisKind::Perihelion => &PERIHELION_PLAN,
        ApsisKind::Aphelion => &APHELION_PLAN,
    }
}

/// Run the apsis search for `kind` starting from the mean cycle nearest `t`.
pub(crate) fn search_apsis<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    kind: ApsisKind,
) -> Result<ApsisEvent, SearchError> {
    let (body, stage) = if kind.is_lunar() {
        (Body::Moon, "lunar apsis")
    } else {
        (Body::Earth, "solar apsis")
    };
    let ext = find_extremum(apsis_plan(kind), t, stage, |t, terms| {
        p.evaluate(body, Quantity::Radius, t, terms)
    })?;
    debug!("{kind:?} at t={:.10} value={}", ext.t, ext.value);
    Ok(ApsisEvent { t_tt: ext.t, value: ext.value, kind })
}

/// Lunar perigee or apogee nearest `t` (centuries TT).
pub fn lunar_apsis<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    kind: ApsisKind,
) -> Result<ApsisEvent, SearchError> {
    if !kind.is_lunar() {
        return Err(SearchError::InvalidConfig("lunar apsis must be Perigee or Apogee"));
    }
    check_epoch(t)?;
    search_apsis(p, t, kind)
}

/// Solar perihelion or aphelion nearest `t` (centuries TT).
pub fn solar_apsis<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    kind: ApsisKind,
) -> Result<ApsisEvent, SearchError> {
    if kind.is_lunar() {
        return Err(SearchError::InvalidConfig("solar apsis must be Perihelion or Aphelion"));
    }
    check_epoch(t)?;
    search_apsis(p, t, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taiyin_core::{J2000_JD, TruncatedTheory, jd_to_centuries};

    #[test]
    fn plans_are_valid() {
        for kind in [
            ApsisKind::Perigee,
            ApsisKind::Apogee,
            ApsisKind::Perihelion,
            ApsisKind::Aphelion,
        ] {
            assert!(apsis_plan(kind).validate().is_ok(), "{kind:?}");
        }
    }

    #[test]
    fn wrong_kind_rejected() {
        let p = TruncatedTheory::new();
        assert!(matches!(
            lunar_apsis(&p, 0.0, ApsisKind::Aphelion),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            solar_apsis(&p, 0.0, ApsisKind::Apogee),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn perigee_is_closer_than_apogee() {
        let p = TruncatedTheory::new();
        let t = jd_to_centuries(2_460_310.5);
        let near = lunar_apsis(&p, t, ApsisKind::Perigee).expect("perigee");
        let far = lunar_apsis(&p, t, ApsisKind::Apogee).expect("apogee");
        assert!(near.value > 355_000.0 && near.value < 371_000.0, "{}", near.value);
        assert!(far.value > 403_000.0 && far.value < 407_000.0, "{}", far.value);
        // The two passages sit about half an anomalistic month apart.
        let gap = ((far.t_tt - near.t_tt) * 36_525.0).abs();
        assert!(gap > 10.0 && gap < 18.0, "gap {gap} d");
    }

    #[test]
    fn perihelion_2000() {
        let p = TruncatedTheory::new();
        let ev = solar_apsis(&p, 0.0, ApsisKind::Perihelion).expect("perihelion");
        let jd = J2000_JD + ev.t_tt * 36_525.0;
        // 2000-01-03 05:18 UT.
        assert!((jd - 2_451_546.72).abs() < 1.0, "JD {jd}");
        assert!((ev.value - 0.983_32).abs() < 1e-4, "R {}", ev.value);
    }
}
