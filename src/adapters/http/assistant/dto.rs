//! HTTP DTOs for assistant endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Field names follow the JSON contract the web client already consumes.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ChatReply, PharmacyListing};
use crate::domain::facility::{Facility, OpeningStatus};
use crate::domain::medicine::{PriceComparison, PriceQuote, PriceSummary};
use crate::ports::ConversationLogEntry;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Radius and limit arrive as JSON numbers; fractions are truncated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
    pub limit: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicinePricesRequest {
    #[serde(default)]
    pub medicine: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicineNearbyRequest {
    #[serde(default)]
    pub medicine: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}

pub(super) fn whole_number(value: Option<f64>) -> Option<i64> {
    value.map(|v| v.trunc() as i64)
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error body for rejected input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// One facility as shown on the map view.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    pub osm_id: i64,
    pub name: String,
    pub amenity: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub distance_m: u64,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours_raw: Option<String>,
    pub opening_status: OpeningStatus,
    pub opening_note: Option<String>,
    pub google_maps: String,
}

impl From<Facility> for PlaceResponse {
    fn from(f: Facility) -> Self {
        Self {
            osm_id: f.source_id,
            name: f.name,
            amenity: f.category.as_str(),
            lat: f.location.lat(),
            lon: f.location.lon(),
            distance_m: f.distance_m,
            phone: f.phone,
            website: f.website,
            opening_hours_raw: f.opening_hours.raw,
            opening_status: f.opening_hours.status,
            opening_note: f.opening_hours.note,
            google_maps: f.map_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NearbyResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub places: Vec<PlaceResponse>,
}

impl NearbyResponse {
    pub fn found(places: Vec<Facility>) -> Self {
        Self {
            ok: true,
            error: None,
            places: places.into_iter().map(PlaceResponse::from).collect(),
        }
    }

    pub fn unavailable(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
            places: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PharmacyResponse {
    #[serde(flatten)]
    pub place: PlaceResponse,
    pub medicine_query: String,
    pub availability: &'static str,
    pub estimated_price: &'static str,
}

impl From<PharmacyListing> for PharmacyResponse {
    fn from(listing: PharmacyListing) -> Self {
        Self {
            place: listing.facility.into(),
            medicine_query: listing.medicine_query,
            availability: listing.availability,
            estimated_price: listing.estimated_price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicineNearbyResponse {
    pub ok: bool,
    pub medicine: String,
    pub pharmacies: Vec<PharmacyResponse>,
    pub total_found: usize,
}

/// Price comparison as returned by `/medicine/prices` and inside chat replies.
#[derive(Debug, Clone, Serialize)]
pub struct PriceComparisonResponse {
    pub medicine: String,
    pub results: Vec<PriceQuote>,
    pub summary: Option<PriceSummary>,
    pub placeholder: bool,
}

impl From<PriceComparison> for PriceComparisonResponse {
    fn from(c: PriceComparison) -> Self {
        Self {
            medicine: c.medicine,
            results: c.results,
            summary: c.summary,
            placeholder: c.placeholder,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MedicinePricesResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub comparison: PriceComparisonResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub audio: Option<String>,
    pub state: &'static str,
    pub confidence: f64,
    pub escalate: bool,
    pub recommended_action: String,
    pub nearest: Option<PlaceResponse>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub need_location: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medicine_data: Option<PriceComparisonResponse>,
}

impl From<ChatReply> for ChatResponse {
    fn from(r: ChatReply) -> Self {
        Self {
            reply: r.reply,
            audio: r.audio,
            state: r.state.as_str(),
            confidence: r.confidence,
            escalate: r.escalate,
            recommended_action: r.recommended_action,
            nearest: r.nearest.map(PlaceResponse::from),
            need_location: r.need_location,
            medicine_data: r.medicine_data.map(PriceComparisonResponse::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeakResponse {
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub ok: bool,
    pub history: Vec<ConversationLogEntry>,
}
