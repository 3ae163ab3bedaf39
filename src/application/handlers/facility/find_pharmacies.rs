//! FindPharmaciesForMedicineHandler - Nearby pharmacies annotated for a medicine.
//!
//! Stock is not queried anywhere; each pharmacy carries fixed "call to
//! confirm" guidance and a typical price band.

use chrono::Utc;
use thiserror::Error;

use super::find_nearby_facilities::{require_location, resolve_radius, NearbyError};
use super::locator::{FacilityLocator, NearbyFacilities, SearchProfile};
use crate::domain::facility::{Facility, FacilityCategory};

pub const AVAILABILITY_NOTE: &str = "Call to confirm";
pub const ESTIMATED_PRICE: &str = "₹40-60";

#[derive(Debug, Clone, Default)]
pub struct FindPharmaciesQuery {
    pub medicine: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius_m: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PharmacySearchError {
    #[error("Medicine name required")]
    MissingMedicine,

    #[error("Location required")]
    MissingLocation,

    #[error(transparent)]
    Invalid(NearbyError),
}

impl From<NearbyError> for PharmacySearchError {
    fn from(err: NearbyError) -> Self {
        match err {
            NearbyError::MissingLocation => PharmacySearchError::MissingLocation,
            other => PharmacySearchError::Invalid(other),
        }
    }
}

/// A pharmacy together with the medicine it was searched for.
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyListing {
    pub facility: Facility,
    pub medicine_query: String,
    pub availability: &'static str,
    pub estimated_price: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PharmaciesForMedicine {
    Found {
        medicine: String,
        pharmacies: Vec<PharmacyListing>,
    },
    Unavailable {
        error: String,
    },
}

pub struct FindPharmaciesForMedicineHandler {
    locator: FacilityLocator,
    defaults: SearchProfile,
}

impl FindPharmaciesForMedicineHandler {
    pub fn new(locator: FacilityLocator, defaults: SearchProfile) -> Self {
        Self { locator, defaults }
    }

    pub async fn handle(
        &self,
        query: FindPharmaciesQuery,
    ) -> Result<PharmaciesForMedicine, PharmacySearchError> {
        let medicine = query.medicine.trim();
        if medicine.is_empty() {
            return Err(PharmacySearchError::MissingMedicine);
        }
        let center = require_location(query.lat, query.lon)?;
        let profile = SearchProfile::new(
            resolve_radius(query.radius_m, self.defaults.radius_m)?,
            self.defaults.limit,
        );

        // The limit applies before filtering, so fewer than `limit`
        // pharmacies may come back even when more exist further out.
        let places = match self.locator.locate(center, profile, Utc::now()).await {
            NearbyFacilities::Found(places) => places,
            NearbyFacilities::Unavailable { error } => {
                return Ok(PharmaciesForMedicine::Unavailable { error })
            }
        };

        let pharmacies = places
            .into_iter()
            .filter(|f| f.category == FacilityCategory::Pharmacy)
            .map(|facility| PharmacyListing {
                facility,
                medicine_query: medicine.to_string(),
                availability: AVAILABILITY_NOTE,
                estimated_price: ESTIMATED_PRICE,
            })
            .collect();

        Ok(PharmaciesForMedicine::Found {
            medicine: medicine.to_string(),
            pharmacies,
        })
    }
}
