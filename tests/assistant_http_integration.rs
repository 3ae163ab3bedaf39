//! Integration tests for assistant HTTP endpoints.
//!
//! These tests drive the full router (middleware included) against in-process
//! doubles for every external collaborator:
//! 1. Chat triage, escalation and the medicine short-circuit
//! 2. Nearby facility and pharmacy lookup, including degraded sources
//! 3. Input validation errors and their JSON shape
//! 4. Speech and history endpoints

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use aries_companion::adapters::{
    build_router, AssistantAppState, AssistantPorts, InMemoryConversationLog, MockLanguageModel,
    MockSpeechSynthesizer, StaticPoiSource, StaticPriceSource,
};
use aries_companion::config::AppConfig;
use aries_companion::domain::medicine::PriceQuote;
use aries_companion::ports::{PoiElement, PoiError, PriceSource};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    model: MockLanguageModel,
    speech: MockSpeechSynthesizer,
    pois: StaticPoiSource,
    prices: StaticPriceSource,
    log: InMemoryConversationLog,
}

impl TestApp {
    fn new() -> Self {
        Self {
            model: MockLanguageModel::new().with_reply("I'm here with you."),
            speech: MockSpeechSynthesizer::new(),
            pois: StaticPoiSource::empty(),
            prices: StaticPriceSource::new(
                "1mg",
                vec![PriceQuote::new(
                    "Paracetamol 500mg Strip of 10",
                    Some(20.0),
                    "https://www.1mg.com/drugs/paracetamol-500",
                    "1mg",
                )],
            ),
            log: InMemoryConversationLog::new(200),
        }
    }

    fn router(&self) -> Router {
        let config = AppConfig::default();
        let price_sources: Vec<Arc<dyn PriceSource>> = vec![Arc::new(self.prices.clone())];
        let ports = AssistantPorts {
            language_model: Arc::new(self.model.clone()),
            speech: Arc::new(self.speech.clone()),
            poi_source: Arc::new(self.pois.clone()),
            price_sources,
            conversation_log: Arc::new(self.log.clone()),
        };
        build_router(AssistantAppState::from_ports(ports, &config), &config.server)
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(self.router(), request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(self.router(), request).await
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn hospital(id: i64, lat: f64, lon: f64, name: &str) -> PoiElement {
    PoiElement::node(id, lat, lon)
        .with_tag("amenity", "hospital")
        .with_tag("name", name)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ready() {
    let app = TestApp::new();

    let (status, body) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Aries Online — Ready to help");
}

// =============================================================================
// Chat
// =============================================================================

#[tokio::test]
async fn crisis_message_escalates_with_emergency_numbers() {
    let app = TestApp::new();

    let (status, body) = app.post("/chat", json!({"message": "I want to kill myself"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CRITICAL_MODE");
    assert!(body["confidence"].as_f64().unwrap() >= 0.7);
    assert_eq!(body["escalate"], true);
    assert!(body["recommended_action"].as_str().unwrap().contains("108/112"));
    assert_eq!(body["need_location"], true);
}

#[tokio::test]
async fn crisis_message_with_location_returns_nearest_hospital_and_audio() {
    let mut app = TestApp::new();
    app.pois = StaticPoiSource::new(vec![
        hospital(1, 28.70, 77.20, "Far Hospital"),
        hospital(2, 28.62, 77.20, "Near Hospital"),
    ]);

    let (status, body) = app
        .post(
            "/chat",
            json!({"message": "I want to kill myself", "lat": 28.61, "lon": 77.20}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nearest"]["name"], "Near Hospital");
    assert_eq!(body["nearest"]["amenity"], "hospital");
    assert!(body["audio"].is_string());
    assert!(body.get("need_location").is_none());
    assert_eq!(app.log.len().await, 1);
}

#[tokio::test]
async fn mild_headache_is_casual() {
    let app = TestApp::new();

    let (status, body) = app.post("/chat", json!({"message": "I have a mild headache"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CASUAL");
    assert_eq!(body["confidence"], 0.3);
    assert_eq!(body["escalate"], false);
    assert_eq!(body["reply"], "I'm here with you.");
    assert!(body["audio"].is_null());
    assert!(body["nearest"].is_null());
}

#[tokio::test]
async fn anxiety_gets_care_mode_support() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/chat", json!({"message": "I feel anxious and overwhelmed"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "CARE_MODE");
    assert_eq!(body["escalate"], false);
    assert!(!body["recommended_action"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn medicine_price_question_skips_language_model() {
    let app = TestApp::new();

    let (status, body) = app.post("/chat", json!({"message": "price of paracetamol"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "MEDICINE_QUERY");
    assert_eq!(body["confidence"], 1.0);
    assert_eq!(body["medicine_data"]["medicine"], "paracetamol");
    assert!(!body["medicine_data"]["results"].as_array().unwrap().is_empty());
    assert_eq!(app.model.call_count(), 0);
    assert_eq!(app.prices.searches(), vec!["paracetamol".to_string()]);
}

#[tokio::test]
async fn chat_rejects_missing_or_blank_message() {
    let app = TestApp::new();

    let (status, body) = app.post("/chat", json!({"message": "   "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"ok": false, "error": "Empty message"}));

    let (status, _) = app.post("/chat", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chat_treats_malformed_body_as_empty() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Empty message");
}

#[tokio::test]
async fn chat_names_mistyped_field() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/chat",
            json!({"message": "hello there", "lat": "12.9", "lon": "77.5"}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("lat"), "unexpected error: {error}");
    assert_ne!(error, "Empty message");
    assert_eq!(app.model.call_count(), 0);
}

#[tokio::test]
async fn chat_without_body_is_empty_message() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Empty message");
}

// =============================================================================
// Nearby
// =============================================================================

#[tokio::test]
async fn nearby_with_no_results_is_ok_and_empty() {
    let app = TestApp::new();

    let (status, body) = app.post("/nearby", json!({"lat": 28.61, "lon": 77.20})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true, "places": []}));
}

#[tokio::test]
async fn nearby_orders_by_distance_and_honours_limit() {
    let mut app = TestApp::new();
    app.pois = StaticPoiSource::new(vec![
        hospital(1, 28.70, 77.20, "Far"),
        hospital(2, 28.62, 77.20, "Near"),
        hospital(3, 28.65, 77.20, "Middle"),
    ]);

    let (status, body) = app
        .post("/nearby", json!({"lat": 28.61, "lon": 77.20, "radius": 3000, "limit": 2}))
        .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Near", "Middle"]);
    assert_eq!(app.pois.queries()[0].radius_m, 3000);
}

#[tokio::test]
async fn nearby_reports_source_failure_in_body() {
    let mut app = TestApp::new();
    app.pois = StaticPoiSource::failing(PoiError::Timeout { timeout_secs: 60 });

    let (status, body) = app.post("/nearby", json!({"lat": 28.61, "lon": 77.20})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
    assert_eq!(body["places"], json!([]));
}

#[tokio::test]
async fn nearby_validates_coordinates_and_radius() {
    let app = TestApp::new();

    let (status, body) = app.post("/nearby", json!({"lat": 28.61})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "lat and lon required");

    let (status, _) = app.post("/nearby", json!({"lat": 123.0, "lon": 77.20})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post("/nearby", json!({"lat": 28.61, "lon": 77.20, "radius": 0}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Medicine
// =============================================================================

#[tokio::test]
async fn medicine_prices_returns_comparison() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/medicine/prices", json!({"medicine": "paracetamol"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["medicine"], "paracetamol");
    assert_eq!(body["placeholder"], false);
    assert_eq!(body["results"][0]["price"], 20.0);
}

#[tokio::test]
async fn medicine_prices_falls_back_to_placeholders() {
    let mut app = TestApp::new();
    app.prices = StaticPriceSource::empty("1mg");

    let (status, body) = app.post("/medicine/prices", json!({"medicine": "dolo 650"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["placeholder"], true);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn medicine_prices_requires_name() {
    let app = TestApp::new();

    let (status, body) = app.post("/medicine/prices", json!({"medicine": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Medicine name required");
}

#[tokio::test]
async fn mistyped_fields_are_rejected_on_every_endpoint() {
    let app = TestApp::new();
    let cases = [
        ("/nearby", json!({"lat": 28.61, "lon": 77.20, "radius": "wide"}), "radius"),
        ("/medicine/prices", json!({"medicine": 42}), "medicine"),
        (
            "/medicine/nearby",
            json!({"medicine": "Crocin", "lat": 28.61, "lon": "east"}),
            "lon",
        ),
        ("/speak", json!({"text": ["hi"]}), "text"),
    ];

    for (uri, payload, field) in cases {
        let (status, body) = app.post(uri, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["ok"], false, "{uri}");
        assert!(body["error"].as_str().unwrap().contains(field), "{uri}: {body}");
    }
}

#[tokio::test]
async fn medicine_nearby_lists_only_pharmacies() {
    let mut app = TestApp::new();
    app.pois = StaticPoiSource::new(vec![
        hospital(1, 28.62, 77.20, "City Hospital"),
        PoiElement::node(2, 28.615, 77.20)
            .with_tag("amenity", "pharmacy")
            .with_tag("name", "Apollo Pharmacy"),
    ]);

    let (status, body) = app
        .post(
            "/medicine/nearby",
            json!({"medicine": "Crocin", "lat": 28.61, "lon": 77.20}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["medicine"], "Crocin");
    assert_eq!(body["total_found"], 1);
    let pharmacy = &body["pharmacies"][0];
    assert_eq!(pharmacy["name"], "Apollo Pharmacy");
    assert_eq!(pharmacy["medicine_query"], "Crocin");
    assert_eq!(pharmacy["availability"], "Call to confirm");
}

#[tokio::test]
async fn medicine_nearby_requires_medicine_then_location() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/medicine/nearby", json!({"lat": 28.61, "lon": 77.20}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Medicine name required");

    let (status, body) = app.post("/medicine/nearby", json!({"medicine": "Crocin"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Location required");
}

// =============================================================================
// Speech and History
// =============================================================================

#[tokio::test]
async fn speak_returns_base64_audio() {
    let app = TestApp::new();

    let (status, body) = app.post("/speak", json!({"text": "Hello there"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["audio"], "bW9jay1hdWRpbw==");
    assert_eq!(app.speech.inputs(), vec!["Hello there".to_string()]);
}

#[tokio::test]
async fn speak_requires_text() {
    let app = TestApp::new();

    let (status, body) = app.post("/speak", json!({"text": ""})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No text provided");
}

#[tokio::test]
async fn history_returns_recent_exchanges_oldest_first() {
    let app = TestApp::new();
    app.post("/chat", json!({"message": "I have a mild headache"})).await;
    app.post("/chat", json!({"message": "I feel anxious and overwhelmed"})).await;

    let (status, body) = app.get("/history?limit=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["input"], "I feel anxious and overwhelmed");
    assert_eq!(history[0]["state"], "CARE_MODE");
}

#[tokio::test]
async fn history_rejects_non_numeric_limit_as_json() {
    let app = TestApp::new();

    let (status, body) = app.get("/history?limit=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app.get("/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
