//! Axum router configuration for assistant endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    chat, health, history, medicine_nearby, medicine_prices, nearby, speak, AssistantAppState,
};

/// Create the assistant API router.
///
/// # Routes
///
/// - `GET /` - Health check
/// - `POST /chat` - Chat pipeline
/// - `POST /nearby` - Nearby hospitals, clinics and pharmacies
/// - `POST /medicine/prices` - Retail price comparison
/// - `POST /medicine/nearby` - Nearby pharmacies for a medicine
/// - `POST /speak` - Text to speech
/// - `GET /history` - Recent conversation entries
pub fn assistant_routes() -> Router<AssistantAppState> {
    Router::new()
        .route("/", get(health))
        .route("/chat", post(chat))
        .route("/nearby", post(nearby))
        .route("/medicine/prices", post(medicine_prices))
        .route("/medicine/nearby", post(medicine_nearby))
        .route("/speak", post(speak))
        .route("/history", get(history))
}

/// Create the complete assistant router with state applied.
pub fn assistant_router(state: AssistantAppState) -> Router {
    assistant_routes().with_state(state)
}
