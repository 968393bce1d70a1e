//! Types for lunar node searches.

/// Direction of the crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Moon crosses the ecliptic northwards.
    Ascending,
    /// Moon crosses the ecliptic southwards.
    Descending,
}

/// A refined nodal crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEvent {
    /// Event time, Julian centuries TT since J2000.0.
    pub t_tt: f64,
    pub kind: NodeKind,
}
