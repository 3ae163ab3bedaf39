//! HTTP adapters - REST API implementations.
//!
//! `build_router` wraps the assistant routes in the shared middleware stack.

pub mod assistant;

pub use assistant::{assistant_router, AssistantAppState, AssistantPorts};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Assistant router with tracing, request timeout and CORS.
///
/// With no configured origins any origin is allowed.
pub fn build_router(state: AssistantAppState, server: &ServerConfig) -> Router {
    assistant_router(state)
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
