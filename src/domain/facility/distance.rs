//! Great-circle distance on a spherical earth.

use crate::domain::foundation::GeoPoint;

/// Mean earth radius used by the haversine formula, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters.
pub fn haversine_m(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let d_phi = (to.lat() - from.lat()).to_radians();
    let d_lambda = (to.lon() - from.lon()).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    EARTH_RADIUS_M * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance rounded down to whole meters.
pub fn distance_m(from: &GeoPoint, to: &GeoPoint) -> u64 {
    haversine_m(from, to).floor() as u64
}
