//! Lunar nodal crossings: zeros of the Moon's ecliptic latitude.

use log::debug;
use taiyin_core::{Body, Quantity, SeriesProvider, Terms};

use crate::error::SearchError;
use crate::finder::{SearchPass, SearchPlan, check_epoch, find_zero};
use crate::node_types::{NodeEvent, NodeKind};

const DRACONIC_MONTH_DAYS: f64 = 27.212_220_82;

const NODE_PASSES: [SearchPass; 3] = [
    SearchPass::secant(0.5, Terms::Leading(10)),
    SearchPass::secant(0.05, Terms::Leading(40)),
    SearchPass::reuse(Terms::Full),
];

pub const ASCENDING_NODE_PLAN: SearchPlan = SearchPlan {
    period_days: DRACONIC_MONTH_DAYS,
    phase_days: 21.0,
    passes: NODE_PASSES,
};

pub const DESCENDING_NODE_PLAN: SearchPlan = SearchPlan {
    period_days: DRACONIC_MONTH_DAYS,
    phase_days: 35.0,
    passes: NODE_PASSES,
};

/// Schedule used for `kind`.
pub fn node_plan(kind: NodeKind) -> &'static SearchPlan {
    match kind {
        NodeKind::Ascending => &ASCENDING_NODE_PLAN,
        NodeKind::Descending => &DESCENDING_NODE_PLAN,
    }
}

/// Run the node search for `kind` starting from the mean cycle nearest `t`.
pub(crate) fn search_node<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    kind: NodeKind,
) -> Result<NodeEvent, SearchError> {
    let t_tt = find_zero(node_plan(kind), t, "lunar node", |t, terms| {
        p.evaluate(Body::Moon, Quantity::Latitude, t, terms)
    })?;
    debug!("{kind:?} node at t={t_tt:.10}");
    Ok(NodeEvent { t_tt, kind })
}

/// Lunar node crossing of `kind` nearest `t` (centuries TT).
pub fn lunar_node<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    kind: NodeKind,
) -> Result<NodeEvent, SearchError> {
    check_epoch(t)?;
    search_node(p, t, kind)
}
