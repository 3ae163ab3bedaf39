//! Facility - nearby care locations, distances and opening hours.

mod distance;
mod facility;
mod opening_hours;

pub use distance::{distance_m, haversine_m, EARTH_RADIUS_M};
pub use facility::{rank_by_proximity, wants_nearby_facility, Facility, FacilityCategory};
pub use opening_hours::{OpeningHours, OpeningStatus};
