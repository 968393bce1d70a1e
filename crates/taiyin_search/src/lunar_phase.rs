//! Principal lunar phases: Moon − Sun apparent elongation at a multiple
//! of 90°.

use std::f64::consts::TAU;

use log::debug;
use taiyin_core::{SeriesProvider, Terms, ensure_finite, moon_sun_elongation};

use crate::error::SearchError;
use crate::finder::check_epoch;
use crate::inverse::syzygy_time;
use crate::lunar_phase_types::{LunarPhase, LunarPhaseEvent};

/// Refine lunation `n` of `phase`, counted on the cumulative elongation.
pub(crate) fn lunar_phase_event<P: SeriesProvider + ?Sized>(
    p: &P,
    n: i64,
    phase: LunarPhase,
) -> Result<LunarPhaseEvent, SearchError> {
    let w = n as f64 * TAU + phase.elongation_rad();
    let t_tt = syzygy_time(p, w)?;
    debug!("{phase:?} at t={t_tt:.10}");
    Ok(LunarPhaseEvent { t_tt, phase })
}

/// Lunation number whose `phase` is at or before `t` by the truncated
/// elongation.
pub(crate) fn lunation_number<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    phase: LunarPhase,
) -> Result<i64, SearchError> {
    let e = moon_sun_elongation(p, t, Terms::Leading(20), Terms::Leading(10));
    let e = ensure_finite(e, "elongation")?;
    Ok(((e - phase.elongation_rad()) / TAU).floor() as i64)
}

/// First `phase` strictly after `t` (centuries TT).
pub fn next_lunar_phase<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    phase: LunarPhase,
) -> Result<LunarPhaseEvent, SearchError> {
    check_epoch(t)?;
    let mut n = lunation_number(p, t, phase)? + 1;
    loop {
        let ev = lunar_phase_event(p, n, phase)?;
        if ev.t_tt > t {
            let prev = lunar_phase_event(p, n - 1, phase)?;
            return Ok(if prev.t_tt > t { prev } else { ev });
        }
        n += 1;
    }
}

/// Last `phase` at or before `t` (centuries TT).
pub fn prev_lunar_phase<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    phase: LunarPhase,
) -> Result<LunarPhaseEvent, SearchError> {
    check_epoch(t)?;
    let mut n = lunation_number(p, t, phase)?;
    loop {
        let ev = lunar_phase_event(p, n, phase)?;
        if ev.t_tt <= t {
            let next = lunar_phase_event(p, n + 1, phase)?;
            return Ok(if next.t_tt <= t { next } else { ev });
        }
        n -= 1;
    }
}
