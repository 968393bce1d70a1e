//! The series provider seam.
//!
//! Everything above this layer asks a [`SeriesProvider`] for one scalar:
//! a body, a quantity, a time and a truncation level. The built-in
//! [`TruncatedTheory`](crate::theory::TruncatedTheory) implements it;
//! tests plug in synthetic providers.

/// Body whose series is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    /// The Earth, heliocentric.
    Earth,
    /// The Moon, geocentric.
    Moon,
}

/// Coordinate produced by a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Ecliptic longitude of date, radians, unwrapped (cumulative).
    Longitude,
    /// Ecliptic latitude of date, radians.
    Latitude,
    /// Distance: AU for the Earth, km for the Moon.
    Radius,
}

/// Truncation level of a series evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terms {
    /// Every term the provider has.
    Full,
    /// Only the leading `n` terms of the primary table.
    Leading(u32),
}

impl Terms {
    /// Map the raw count convention: any negative number means all terms.
    pub const fn from_raw(n: i32) -> Self {
        if n < 0 { Self::Full } else { Self::Leading(n as u32) }
    }

    /// Number of terms to take from a table of `len` rows.
    ///
    /// `primary_len` is the length of the table `Leading(n)` refers to;
    /// shorter secondary tables are cut in proportion, keeping at least
    /// one row.
    pub fn take(self, len: usize, primary_len: usize) -> usize {
        match self {
            Self::Full => len,
            Self::Leading(n) => {
                let n = n as usize;
                if len >= primary_len {
                    return n.min(len);
                }
                if n == 0 {
                    return 0;
                }
                let scaled = (n * len).div_ceil(primary_len.max(1));
                scaled.clamp(1, len)
            }
        }
    }
}

/// Source of periodic-series values.
pub trait SeriesProvider: Send + Sync {
    /// Evaluate `quantity` of `body` at `t` (Julian centuries TT since
    /// J2000.0) with the given truncation.
    fn evaluate(&self, body: Body, quantity: Quantity, t: f64, terms: Terms) -> f64;
}

impl<P: SeriesProvider + ?Sized> SeriesProvider for &P {
    fn evaluate(&self, body: Body, quantity: Quantity, t: f64, terms: Terms) -> f64 {
        (**self).evaluate(body, quantity, t, terms)
    }
}

impl<P: SeriesProvider + ?Sized> SeriesProvider for Box<P> {
    fn evaluate(&self, body: Body, quantity: Quantity, t: f64, terms: Terms) -> f64 {
        (**self).evaluate(body, quantity, t, terms)
    }
}
