//! Types for apsis searches.

/// Kind of apsis passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApsisKind {
    /// Moon closest to the Earth.
    Perigee,
    /// Moon farthest from the Earth.
    Apogee,
    /// Earth closest to the Sun.
    Perihelion,
    /// Earth farthest from the Sun.
    Aphelion,
}

impl ApsisKind {
    pub fn is_lunar(self) -> bool {
        matches!(self, Self::Perigee | Self::Apogee)
    }
}

/// A refined apsis passage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsisEvent {
    /// Event time, Julian centuries TT since J2000.0.
    pub t_tt: f64,
    /// Extremal distance: km for lunar apsides, AU for solar ones.
    pub value: f64,
    pub kind: ApsisKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_kinds() {
        assert!(ApsisKind::Perigee.is_lunar());
        assert!(ApsisKind::Apogee.is_lunar());
        assert!(!ApsisKind::Perihelion.is_lunar());
        assert!(!ApsisKind::Aphelion.is_lunar());
    }
}
