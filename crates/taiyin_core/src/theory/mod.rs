//! Built-in truncated theories for the Earth and the Moon.

pub mod earth;
pub mod moon;

use log::trace;

use crate::series::{Body, Quantity, SeriesProvider, Terms};

/// VSOP87D leading terms for the Earth plus the ELP-derived lunar tables.
///
/// Stateless; a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruncatedTheory;

impl TruncatedTheory {
    pub const fn new() -> Self {
        Self
    }
}

impl SeriesProvider for TruncatedTheory {
    fn evaluate(&self, body: Body, quantity: Quantity, t: f64, terms: Terms) -> f64 {
        let value = match (body, quantity) {
            (Body::Earth, Quantity::Longitude) => earth::longitude(t, terms),
            (Body::Earth, Quantity::Latitude) => earth::latitude(t, terms),
            (Body::Earth, Quantity::Radius) => earth::radius(t, terms),
            (Body::Moon, Quantity::Longitude) => moon::longitude(t, terms),
            (Body::Moon, Quantity::Latitude) => moon::latitude(t, terms),
            (Body::Moon, Quantity::Radius) => moon::radius(t, terms),
        };
        trace!("series {body:?}/{quantity:?} t={t:.9} terms={terms:?} -> {value}");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_per_body() {
        let p = TruncatedTheory::new();
        let r_earth = p.evaluate(Body::Earth, Quantity::Radius, 0.0, Terms::Full);
        let r_moon = p.evaluate(Body::Moon, Quantity::Radius, 0.0, Terms::Full);
        assert!((r_earth - 0.9833).abs() < 0.001, "R⊕ = {r_earth}");
        assert!(r_moon > 350_000.0 && r_moon < 410_000.0);
    }

    #[test]
    fn usable_as_trait_object() {
        let p: &dyn SeriesProvider = &TruncatedTheory;
        let b = p.evaluate(Body::Moon, Quantity::Latitude, 0.1, Terms::Leading(10));
        assert!(b.abs() < 0.1);
    }
}
