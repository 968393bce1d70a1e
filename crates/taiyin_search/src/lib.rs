//! Event searches over the truncated Sun/Moon series.
//!
//! This crate provides:
//! - Fixed-schedule extremum and zero-crossing finders ([`finder`])
//! - Lunar perigee/apogee and solar perihelion/aphelion
//! - Lunar ascending/descending nodes
//! - Longitude → time solvers for the Earth, the Moon, solar terms and syzygies
//! - Next/previous solar terms and principal lunar phases
//! - Parallel range searches over all of the above
//!
//! All times are Julian centuries of TT since J2000.0, within
//! ±[`MAX_EPOCH_CENTURIES`] for the event searches.

pub mod apsis;
pub mod apsis_types;
pub mod batch;
pub mod error;
pub mod finder;
pub mod inverse;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod node;
pub mod node_types;
pub mod solar_term;
pub mod solar_term_types;

pub use apsis::{
    APHELION_PLAN, APOGEE_PLAN, PERIGEE_PLAN, PERIHELION_PLAN, apsis_plan, lunar_apsis,
    solar_apsis,
};
pub use apsis_types::{ApsisEvent, ApsisKind};
pub use batch::{
    MAX_SPAN_CENTURIES, search_lunar_apsides, search_lunar_nodes, search_lunar_phases,
    search_solar_terms,
};
pub use error::SearchError;
pub use finder::{
    Extremum, MAX_EPOCH_CENTURIES, SearchPass, SearchPlan, Slope, check_epoch, find_extremum,
    find_zero,
};
pub use inverse::{
    earth_lon_time, moon_lon_time, solar_term_time, solar_term_time_fast, syzygy_time,
    syzygy_time_fast,
};
pub use lunar_phase::{next_lunar_phase, prev_lunar_phase};
pub use lunar_phase_types::{LunarPhase, LunarPhaseEvent};
pub use node::{ASCENDING_NODE_PLAN, DESCENDING_NODE_PLAN, lunar_node, node_plan};
pub use node_types::{NodeEvent, NodeKind};
pub use solar_term::{next_solar_term, prev_solar_term};
pub use solar_term_types::{SOLAR_TERM_STEP_RAD, SOLAR_TERMS_PER_YEAR, SolarTermEvent};
