//! Facility handlers - nearby care and pharmacy searches.

mod find_nearby_facilities;
mod find_pharmacies;
mod locator;

pub use find_nearby_facilities::{
    require_location, resolve_radius, FindNearbyFacilitiesHandler, FindNearbyFacilitiesQuery,
    NearbyError,
};
pub use find_pharmacies::{
    FindPharmaciesForMedicineHandler, FindPharmaciesQuery, PharmaciesForMedicine,
    PharmacyListing, PharmacySearchError, AVAILABILITY_NOTE, ESTIMATED_PRICE,
};
pub use locator::{FacilityLocator, NearbyFacilities, SearchProfile};
