//! Sunrise and sunset.
//!
//! Two fixed corrections from local noon towards the instant the Sun's
//! centre reaches the standard altitude of −50′ (34′ refraction plus 16′
//! semidiameter). Good to about a minute away from the polar circles.

use std::f64::consts::{PI, TAU};

use taiyin_core::{
    DAYS_PER_CENTURY, J2000_JD, SeriesProvider, Terms, delta_t_days, mean_sidereal_time,
    sun_apparent_lon, true_obliquity,
};
use taiyin_frames::normalize_rrad;

use crate::error::TopoError;
use crate::site::ObserverSite;

/// Standard altitude of the Sun's centre at rise and set.
const STANDARD_ALTITUDE_RAD: f64 = -50.0 / 60.0 * PI / 180.0;

/// Truncation of the Earth series used for the Sun's position.
const SUN_TERMS: Terms = Terms::Leading(3);

/// Which horizon crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetKind {
    Rise,
    Set,
}

impl RiseSetKind {
    fn sign(self) -> f64 {
        match self {
            Self::Rise => -1.0,
            Self::Set => 1.0,
        }
    }
}

/// Outcome of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSet {
    /// Event time in days of UT since J2000.0.
    Event(f64),
    /// The Sun stays below the standard altitude all day.
    NeverRises,
    /// The Sun stays above the standard altitude all day.
    NeverSets,
}

/// Sun's apparent right ascension and declination at `t` centuries TT.
fn sun_ra_dec<P: SeriesProvider + ?Sized>(p: &P, t: f64) -> (f64, f64) {
    let lon = sun_apparent_lon(p, t, SUN_TERMS);
    let eps = true_obliquity(t);
    let (sin_l, cos_l) = lon.sin_cos();
    let ra = (sin_l * eps.cos()).atan2(cos_l);
    let dec = (eps.sin() * sin_l).asin();
    (ra, dec)
}

/// Sunrise or sunset on the civil day containing `days_ut` (days of UT
/// since J2000.0) at `site`.
pub fn sun_rise_set<P: SeriesProvider + ?Sized>(
    p: &P,
    days_ut: f64,
    site: &ObserverSite,
    kind: RiseSetKind,
) -> Result<RiseSet, TopoError> {
    site.check()?;
    let phi = site.lat_rad;
    let mut jd = (days_ut + 0.5).floor() - site.lon_rad / TAU;

    for _ in 0..2 {
        let dt = delta_t_days(jd + J2000_JD);
        let t = (jd + dt) / DAYS_PER_CENTURY;
        let (ra, dec) = sun_ra_dec(p, t);
        let gst = mean_sidereal_time(jd, dt);

        let cos_h0 = (STANDARD_ALTITUDE_RAD.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h0 >= 1.0 {
            return Ok(RiseSet::NeverRises);
        }
        if cos_h0 <= -1.0 {
            return Ok(RiseSet::NeverSets);
        }
        let h0 = kind.sign() * cos_h0.acos();
        jd += normalize_rrad(h0 - (gst + site.lon_rad - ra)) / TAU;
    }
    Ok(RiseSet::Event(jd))
}
