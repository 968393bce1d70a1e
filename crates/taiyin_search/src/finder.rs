//! Fixed-schedule extremum and zero-crossing finders.
//!
//! Both finders start from a mean-cycle seed and run exactly three
//! refinement passes, each with its own sample step and series truncation.
//! There is no tolerance loop: precision comes from the schedule.
//!
//! **Extremum**: three samples `t − dt, t, t + dt`, parabolic vertex step
//! `t += (r1 − r3) / (r1 + r3 − 2 r2) · dt / 2`. The last pass also
//! corrects the middle sample to the vertex value.
//!
//! **Zero crossing**: secant slope over `[t, t + dt]`, Newton step
//! `t −= w / v`. A pass may reuse the previous slope instead of sampling
//! again.

use log::{trace, warn};
use taiyin_core::{DAYS_PER_CENTURY, Terms};

use crate::error::SearchError;

/// Largest `|t|` (centuries from J2000.0) an event search accepts.
///
/// Beyond it the truncated lunar tables and the mean-cycle seeds drift
/// far enough that the fixed schedules no longer land on the event.
pub const MAX_EPOCH_CENTURIES: f64 = 50.0;

/// Reject search instants that are non-finite or outside
/// [`MAX_EPOCH_CENTURIES`].
pub fn check_epoch(t: f64) -> Result<(), SearchError> {
    if !t.is_finite() {
        return Err(SearchError::InvalidConfig("search time must be finite"));
    }
    if t.abs() > MAX_EPOCH_CENTURIES {
        return Err(SearchError::InvalidConfig("search time outside MAX_EPOCH_CENTURIES"));
    }
    Ok(())
}

/// How a zero-crossing pass obtains its slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slope {
    /// Fresh two-point secant over the pass step.
    Secant,
    /// Slope of the previous pass.
    Reuse,
}

/// One refinement pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchPass {
    /// Sample spacing in days. Ignored by [`Slope::Reuse`] passes.
    pub step_days: f64,
    /// Series truncation for this pass.
    pub terms: Terms,
    pub slope: Slope,
}

impl SearchPass {
    pub const fn secant(step_days: f64, terms: Terms) -> Self {
        Self { step_days, terms, slope: Slope::Secant }
    }

    pub const fn reuse(terms: Terms) -> Self {
        Self { step_days: 0.0, terms, slope: Slope::Reuse }
    }

    fn step_centuries(&self) -> f64 {
        self.step_days / DAYS_PER_CENTURY
    }
}

/// Seed cycle and refinement schedule of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchPlan {
    /// Mean period of the searched event in days.
    pub period_days: f64,
    /// Epoch offset of the mean event from J2000.0 in days.
    pub phase_days: f64,
    pub passes: [SearchPass; 3],
}

impl SearchPlan {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.period_days.is_finite() || self.period_days <= 0.0 {
            return Err("period_days must be positive and finite");
        }
        if !self.phase_days.is_finite() {
            return Err("phase_days must be finite");
        }
        if self.passes[0].slope == Slope::Reuse {
            return Err("first pass has no slope to reuse");
        }
        for pass in &self.passes {
            if pass.slope == Slope::Secant
                && (!pass.step_days.is_finite() || pass.step_days <= 0.0)
            {
                return Err("step_days must be positive and finite");
            }
        }
        Ok(())
    }

    /// Mean event nearest to `t` (centuries TT).
    pub fn seed(&self, t: f64) -> f64 {
        let a = self.period_days / DAYS_PER_CENTURY;
        let b = self.phase_days / DAYS_PER_CENTURY;
        b + a * ((t - b) / a + 0.5).floor()
    }

    /// Seed of mean cycle number `k` (cycle 0 is the one at the phase epoch).
    pub fn cycle(&self, k: i64) -> f64 {
        (self.phase_days + self.period_days * k as f64) / DAYS_PER_CENTURY
    }

    /// Cycle numbers whose mean events fall inside `[t_start, t_end]`, padded
    /// by one cycle on each side.
    pub fn cycles_between(&self, t_start: f64, t_end: f64) -> std::ops::RangeInclusive<i64> {
        let a = self.period_days / DAYS_PER_CENTURY;
        let b = self.phase_days / DAYS_PER_CENTURY;
        let first = ((t_start - b) / a).floor() as i64 - 1;
        let last = ((t_end - b) / a).ceil() as i64 + 1;
        first..=last
    }
}

/// Refined extremum of a scalar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Time of the extremum, centuries TT.
    pub t: f64,
    /// Interpolated extremal value.
    pub value: f64,
}

fn diverged(stage: &'static str, pass: usize) -> SearchError {
    warn!("{stage}: divergence guard fired on pass {pass}");
    SearchError::NumericDivergence { stage, pass }
}

/// Find the extremum of `f` in the mean cycle nearest `t`.
///
/// `f(t, terms)` evaluates the series at `t` with the given truncation.
/// `stage` names the search in errors and log records.
pub fn find_extremum<F>(
    plan: &SearchPlan,
    t: f64,
    stage: &'static str,
    f: F,
) -> Result<Extremum, SearchError>
where
    F: Fn(f64, Terms) -> f64,
{
    plan.validate().map_err(SearchError::InvalidConfig)?;
    if plan.passes.iter().any(|p| p.slope == Slope::Reuse) {
        return Err(SearchError::InvalidConfig("extremum passes need fresh samples"));
    }

    let mut t = plan.seed(t);
    let mut value = f64::NAN;
    for (i, pass) in plan.passes.iter().enumerate() {
        let n = i + 1;
        let dt = pass.step_centuries();
        let r1 = f(t - dt, pass.terms);
        let r2 = f(t, pass.terms);
        let r3 = f(t + dt, pass.terms);
        let den = r1 + r3 - 2.0 * r2;
        let scale = r1.abs().max(r2.abs()).max(r3.abs());
        if !den.is_finite() || den.abs() <= 4.0 * f64::EPSILON * scale {
            return Err(diverged(stage, n));
        }
        let q = (r1 - r3) / den;
        t += q * dt / 2.0;
        value = r2 + q * (r3 - r1) / 8.0;
        if !t.is_finite() {
            return Err(diverged(stage, n));
        }
        trace!("{stage} pass {n}: t={t:.10} step={:.6} d terms={:?}", pass.step_days, pass.terms);
    }
    Ok(Extremum { t, value })
}

/// Find the zero crossing of `f` in the mean cycle nearest `t`.
pub fn find_zero<F>(plan: &SearchPlan, t: f64, stage: &'static str, f: F) -> Result<f64, SearchError>
where
    F: Fn(f64, Terms) -> f64,
{
    plan.validate().map_err(SearchError::InvalidConfig)?;

    let mut t = plan.seed(t);
    let mut v = f64::NAN;
    for (i, pass) in plan.passes.iter().enumerate() {
        let n = i + 1;
        let w = f(t, pass.terms);
        if pass.slope == Slope::Secant {
            let dt = pass.step_centuries();
            let w2 = f(t + dt, pass.terms);
            let dw = w2 - w;
            if !dw.is_finite() || dw.abs() <= 4.0 * f64::EPSILON * w.abs().max(w2.abs()) {
                return Err(diverged(stage, n));
            }
            v = dw / dt;
        }
        if !v.is_finite() {
            return Err(diverged(stage, n));
        }
        t -= w / v;
        if !t.is_finite() {
            return Err(diverged(stage, n));
        }
        trace!("{stage} pass {n}: t={t:.10} residual={w:.3e} terms={:?}", pass.terms);
    }
    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const PLAN: SearchPlan = SearchPlan {
        period_days: 30.0,
        phase_days: 5.0,
        passes: [
            SearchPass::secant(1.0, Terms::Leading(5)),
            SearchPass::secant(0.1, Terms::Leading(10)),
            SearchPass::secant(0.01, Terms::Full),
        ],
    };

    #[test]
    fn epoch_bounds() {
        assert!(check_epoch(0.0).is_ok());
        assert!(check_epoch(-MAX_EPOCH_CENTURIES).is_ok());
        assert!(matches!(check_epoch(1e4), Err(SearchError::InvalidConfig(_))));
        assert!(matches!(check_epoch(f64::NAN), Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn seed_snaps_to_nearest_cycle() {
        let a = 30.0 / DAYS_PER_CENTURY;
        let b = 5.0 / DAYS_PER_CENTURY;
        assert!((PLAN.seed(b + 0.4 * a) - b).abs() < 1e-15);
        assert!((PLAN.seed(b + 0.6 * a) - (b + a)).abs() < 1e-15);
        assert!((PLAN.seed(b - 3.2 * a) - (b - 3.0 * a)).abs() < 1e-15);
        assert!((PLAN.cycle(-3) - (b - 3.0 * a)).abs() < 1e-15);
    }

    #[test]
    fn cycles_cover_range() {
        let r = PLAN.cycles_between(PLAN.cycle(2), PLAN.cycle(5));
        assert!(*r.start() <= 2 && *r.end() >= 5);
    }

    #[test]
    fn quadratic_is_exact_in_one_pass() {
        let t0 = 7.0 / DAYS_PER_CENTURY;
        let ext = find_extremum(&PLAN, 0.0, "quadratic", |t, _| 3.0 + 1e6 * (t - t0).powi(2))
            .expect("converges");
        assert!((ext.t - t0).abs() < 1e-12);
        assert!((ext.value - 3.0).abs() < 1e-9);
    }

    #[test]
    fn sine_zero_crossing() {
        let t0 = 6.0 / DAYS_PER_CENTURY;
        let k = TAU / (30.0 / DAYS_PER_CENTURY);
        let t = find_zero(&PLAN, 0.0, "sine", |t, _| (k * (t - t0)).sin()).expect("converges");
        assert!((t - t0).abs() < 1e-10);
    }

    #[test]
    fn flat_series_diverges() {
        assert_eq!(
            find_extremum(&PLAN, 0.0, "flat", |_, _| 42.0),
            Err(SearchError::NumericDivergence { stage: "flat", pass: 1 })
        );
        assert_eq!(
            find_zero(&PLAN, 0.0, "flat", |_, _| 1.0),
            Err(SearchError::NumericDivergence { stage: "flat", pass: 1 })
        );
    }

    #[test]
    fn invalid_plans_rejected() {
        let mut bad = PLAN;
        bad.period_days = 0.0;
        assert!(matches!(
            find_zero(&bad, 0.0, "x", |t, _| t),
            Err(SearchError::InvalidConfig(_))
        ));
        let mut reuse_first = PLAN;
        reuse_first.passes[0] = SearchPass::reuse(Terms::Full);
        assert_eq!(reuse_first.validate(), Err("first pass has no slope to reuse"));
        let mut reuse_last = PLAN;
        reuse_last.passes[2] = SearchPass::reuse(Terms::Full);
        assert!(reuse_last.validate().is_ok());
        assert!(matches!(
            find_extremum(&reuse_last, 0.0, "x", |t, _| t * t),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn reuse_pass_keeps_previous_slope() {
        let mut plan = PLAN;
        plan.passes[2] = SearchPass::reuse(Terms::Full);
        let t0 = 4.0 / DAYS_PER_CENTURY;
        // Linear series: any pass lands exactly.
        let t = find_zero(&plan, 0.0, "line", |t, _| 2.0 * (t - t0)).expect("converges");
        assert!((t - t0).abs() < 1e-15);
    }
}
