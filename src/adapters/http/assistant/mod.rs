//! HTTP adapter for assistant endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChatRequest, ChatResponse, ErrorResponse, HealthResponse, HistoryResponse,
    MedicineNearbyRequest, MedicineNearbyResponse, MedicinePricesRequest, MedicinePricesResponse,
    NearbyRequest, NearbyResponse, PharmacyResponse, PlaceResponse, PriceComparisonResponse,
    SpeakRequest, SpeakResponse,
};
pub use handlers::{AssistantApiError, AssistantAppState, AssistantPorts, HEALTH_STATUS};
pub use routes::{assistant_router, assistant_routes};
