//! Whole-coordinate queries: longitude, latitude and distance in one call.

use taiyin_frames::{Distance, Ecliptic, SphericalCoords, normalize_mrad};

use crate::series::{Body, Quantity, SeriesProvider, Terms};

fn ecliptic_coords<P: SeriesProvider + ?Sized>(
    p: &P,
    body: Body,
    t: f64,
    terms: [Terms; 3],
    distance: fn(f64) -> Distance,
) -> SphericalCoords<Ecliptic> {
    let [lon_terms, lat_terms, r_terms] = terms;
    SphericalCoords::new(
        normalize_mrad(p.evaluate(body, Quantity::Longitude, t, lon_terms)),
        p.evaluate(body, Quantity::Latitude, t, lat_terms),
        distance(p.evaluate(body, Quantity::Radius, t, r_terms)),
    )
}

/// Heliocentric ecliptic coordinates of the Earth (distance in AU).
///
/// `terms` gives the truncation for longitude, latitude and radius.
pub fn earth_coords<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    terms: [Terms; 3],
) -> SphericalCoords<Ecliptic> {
    ecliptic_coords(p, Body::Earth, t, terms, Distance::au)
}

/// Geocentric ecliptic coordinates of the Moon (distance in km).
pub fn moon_coords<P: SeriesProvider + ?Sized>(
    p: &P,
    t: f64,
    terms: [Terms; 3],
) -> SphericalCoords<Ecliptic> {
    ecliptic_coords(p, Body::Moon, t, terms, Distance::km)
}
