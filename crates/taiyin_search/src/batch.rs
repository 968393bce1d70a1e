//! Range searches: every event of a kind inside `[t_start, t_end)`.
//!
//! Candidate events are enumerated by cycle number, refined in parallel
//! on the rayon pool, then filtered to the range and sorted by time.

use rayon::prelude::*;
use taiyin_core::SeriesProvider;

use crate::apsis::{apsis_plan, search_apsis};
use crate::apsis_types::{ApsisEvent, ApsisKind};
use crate::error::SearchError;
use crate::finder::check_epoch;
use crate::lunar_phase::{lunar_phase_event, lunation_number};
use crate::lunar_phase_types::{LunarPhase, LunarPhaseEvent};
use crate::node::{node_plan, search_node};
use crate::node_types::{NodeEvent, NodeKind};
use crate::solar_term::{solar_term_event, solar_term_number};
use crate::solar_term_types::SolarTermEvent;

/// Longest range accepted by a batch search, in Julian centuries.
pub const MAX_SPAN_CENTURIES: f64 = 100.0;

fn check_range(t_start: f64, t_end: f64) -> Result<(), SearchError> {
    if !t_start.is_finite() || !t_end.is_finite() {
        return Err(SearchError::InvalidConfig("range bounds must be finite"));
    }
    check_epoch(t_start)?;
    check_epoch(t_end)?;
    if t_end <= t_start {
        return Err(SearchError::InvalidConfig("t_end must be after t_start"));
    }
    if t_end - t_start > MAX_SPAN_CENTURIES {
        return Err(SearchError::InvalidConfig("range exceeds MAX_SPAN_CENTURIES"));
    }
    Ok(())
}

fn in_range(t: f64, t_start: f64, t_end: f64) -> bool {
    t >= t_start && t < t_end
}

/// All solar terms in `[t_start, t_end)`.
pub fn search_solar_terms<P: SeriesProvider + ?Sized>(
    p: &P,
    t_start: f64,
    t_end: f64,
) -> Result<Vec<SolarTermEvent>, SearchError> {
    check_range(t_start, t_end)?;
    let first = solar_term_number(p, t_start)? - 1;
    let last = solar_term_number(p, t_end)? + 1;

    let mut events = (first..=last)
        .into_par_iter()
        .map(|k| solar_term_event(p, k))
        .collect::<Result<Vec<_>, _>>()?;
    events.retain(|e| in_range(e.t_tt, t_start, t_end));
    events.sort_by(|a, b| a.t_tt.total_cmp(&b.t_tt));
    Ok(events)
}

/// All principal lunar phases in `[t_start, t_end)`.
pub fn search_lunar_phases<P: SeriesProvider + ?Sized>(
    p: &P,
    t_start: f64,
    t_end: f64,
) -> Result<Vec<LunarPhaseEvent>, SearchError> {
    check_range(t_start, t_end)?;
    let first = lunation_number(p, t_start, LunarPhase::NewMoon)? - 1;
    let last = lunation_number(p, t_end, LunarPhase::NewMoon)? + 1;
    let jobs: Vec<(i64, LunarPhase)> = (first..=last)
        .flat_map(|n| LunarPhase::ALL.into_iter().map(move |ph| (n, ph)))
        .collect();

    let mut events = jobs
        .par_iter()
        .map(|&(n, phase)| lunar_phase_event(p, n, phase))
        .collect::<Result<Vec<_>, _>>()?;
    events.retain(|e| in_range(e.t_tt, t_start, t_end));
    events.sort_by(|a, b| a.t_tt.total_cmp(&b.t_tt));
    Ok(events)
}

/// All lunar perigees and apogees in `[t_start, t_end)`.
pub fn search_lunar_apsides<P: SeriesProvider + ?Sized>(
    p: &P,
    t_start: f64,
    t_end: f64,
) -> Result<Vec<ApsisEvent>, SearchError> {
    check_range(t_start, t_end)?;
    let jobs: Vec<(f64, ApsisKind)> = [ApsisKind::Perigee, ApsisKind::Apogee]
        .into_iter()
        .flat_map(|kind| {
            let plan = apsis_plan(kind);
            plan.cycles_between(t_start, t_end)
                .map(move |k| (plan.cycle(k), kind))
        })
        .collect();

    let mut events = jobs
        .par_iter()
        .map(|&(seed, kind)| search_apsis(p, seed, kind))
        .collect::<Result<Vec<_>, _>>()?;
    events.retain(|e| in_range(e.t_tt, t_start, t_end));
    events.sort_by(|a, b| a.t_tt.total_cmp(&b.t_tt));
    Ok(events)
}

/// All lunar ascending and descending nodes in `[t_start, t_end)`.
pub fn search_lunar_nodes<P: SeriesProvider + ?Sized>(
    p: &P,
    t_start: f64,
    t_end: f64,
) -> Result<Vec<NodeEvent>, SearchError> {
    check_range(t_start, t_end)?;
    let jobs: Vec<(f64, NodeKind)> = [NodeKind::Ascending, NodeKind::Descending]
        .into_iter()
        .flat_map(|kind| {
            let plan = node_plan(kind);
            plan.cycles_between(t_start, t_end)
                .map(move |k| (plan.cycle(k), kind))
        })
        .collect();

    let mut events = jobs
        .par_iter()
        .map(|&(seed, kind)| search_node(p, seed, kind))
        .collect::<Result<Vec<_>, _>>()?;
    events.retain(|e| in_range(e.t_tt, t_start, t_end));
    events.sort_by(|a, b| a.t_tt.total_cmp(&b.t_tt));
    Ok(events)
}
