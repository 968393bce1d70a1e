//! Solar terms: the Sun's apparent longitude crossing a multiple of 15°.

use log::debug;
use taiyin_core::{SeriesProvider, Terms, ensure_finite, sun_apparent_lon};

use crate::error::SearchError;
use crate::finder::check_epoch;
use crate::inverse::solar_term_time;
use crate::solar_term_types::{SOLAR_TERM_STEP_RAD, SOLAR_TERMS_PER_YEAR, SolarTermEvent};

/// Count of whole solar-term steps in the cumulative longitude `w`.
fn step_count(w: f64) -> f64 {
    (w / SOLAR_TERM_STEP_RAD).floor()
}

/// Refine solar term number `k`, counted on the cumulative longitude.
pub(crate) fn solar_term_event<P: SeriesProvider + ?Sized>(
    p: &P,
    k: i64,
) -> Result<SolarTermEvent, SearchError> {
    let w = k as f64 * SOLAR_TERM_STEP_RAD;
    let t_tt = solar_term_time(p, w)?;
    let index = k.rem_euclid(i64::from(SOLAR_TERMS_PER_YEAR)) as u8;
    debug!("solar term {index} at t={t_tt:.10}");
    Ok(SolarTermEvent { t_tt, index, longitude_rad: f64::from(index) * SOLAR_TERM_STEP_RAD })
}

/// Cumulative solar-term number at or before `t`.
pub(crate) fn solar_term_number<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
) -> Result<i64, SearchError> {
    let lon = ensure_finite(sun_apparent_lon(p, t, Terms::Leading(10)), "solar longitude")?;
    Ok(step_count(lon) as i64)
}

/// First solar term strictly after `t` (centuries TT).
pub fn next_solar_term<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
) -> Result<SolarTermEvent, SearchError> {
    check_epoch(t)?;
    let mut k = solar_term_number(p, t)? + 1;
    // The seed uses a truncated series; step past a boundary it misjudged.
    loop {
        let ev = solar_term_event(p, k)?;
        if ev.t_tt > t {
            let prev = solar_term_event(p, k - 1)?;
            return Ok(if prev.t_tt > t { prev } else { ev });
        }
        k += 1;
    }
}

/// Last solar term at or before `t` (centuries TT).
pub fn prev_solar_term<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
) -> Result<SolarTermEvent, SearchError> {
    check_epoch(t)?;
    let mut k = solar_term_number(p, t)?;
    loop {
        let ev = solar_term_event(p, k)?;
        if ev.t_tt <= t {
            let next = solar_term_event(p, k + 1)?;
            return Ok(if next.t_tt <= t { next } else { ev });
        }
        k -= 1;
    }
}
