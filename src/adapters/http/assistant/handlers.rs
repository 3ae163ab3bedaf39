//! HTTP handlers for assistant endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.
//! Bodies are parsed leniently: a missing or syntactically broken JSON body is
//! treated as an empty request, so the caller gets the specific "required"
//! error. A well-formed body with a mistyped field is rejected, naming the field.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::{
    ChatError, ChatSettings, ComparePricesHandler, ComparePricesQuery, FacilityLocator,
    FindNearbyFacilitiesHandler, FindNearbyFacilitiesQuery, FindPharmaciesForMedicineHandler,
    FindPharmaciesQuery, GetConversationHistoryHandler, GetConversationHistoryQuery,
    NearbyError, NearbyFacilities, PharmaciesForMedicine, PharmacySearchError, PriceQueryError,
    SearchProfile, SendChatMessageCommand, SendChatMessageHandler, SpeechRequestError,
    SynthesizeSpeechCommand, SynthesizeSpeechHandler,
};
use crate::config::AppConfig;
use crate::ports::{ConversationLog, LanguageModel, PoiSource, PriceSource, SpeechSynthesizer};

use super::dto::{
    whole_number, ChatRequest, ChatResponse, ErrorResponse, HealthResponse, HistoryParams,
    HistoryResponse, MedicineNearbyRequest, MedicineNearbyResponse, MedicinePricesRequest,
    MedicinePricesResponse, NearbyRequest, NearbyResponse, SpeakRequest, SpeakResponse,
};

pub const HEALTH_STATUS: &str = "Aries Online — Ready to help";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// External collaborators the assistant is wired against.
#[derive(Clone)]
pub struct AssistantPorts {
    pub language_model: Arc<dyn LanguageModel>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub poi_source: Arc<dyn PoiSource>,
    pub price_sources: Vec<Arc<dyn PriceSource>>,
    pub conversation_log: Arc<dyn ConversationLog>,
}

/// Shared application state containing all handlers.
///
/// Cloned for each request; every handler is behind an `Arc`.
#[derive(Clone)]
pub struct AssistantAppState {
    pub chat: Arc<SendChatMessageHandler>,
    pub nearby: Arc<FindNearbyFacilitiesHandler>,
    pub prices: Arc<ComparePricesHandler>,
    pub pharmacies: Arc<FindPharmaciesForMedicineHandler>,
    pub speech: Arc<SynthesizeSpeechHandler>,
    pub history: Arc<GetConversationHistoryHandler>,
}

impl AssistantAppState {
    /// Builds every handler from the ports and immutable configuration.
    pub fn from_ports(ports: AssistantPorts, config: &AppConfig) -> Self {
        let geo = &config.geo;
        let locator = FacilityLocator::new(ports.poi_source);
        let prices = Arc::new(ComparePricesHandler::new(
            ports.price_sources,
            config.pricing.per_source_cap,
        ));
        let speech = Arc::new(SynthesizeSpeechHandler::new(ports.speech));

        let chat = SendChatMessageHandler::new(
            ports.language_model,
            locator.clone(),
            prices.clone(),
            speech.clone(),
            ports.conversation_log.clone(),
            ChatSettings {
                composer: config.persona.composer(),
                fallback_reply: config.llm.fallback_reply.clone(),
                nearby: SearchProfile::new(geo.chat_radius_m, geo.chat_limit),
            },
        );

        Self {
            chat: Arc::new(chat),
            nearby: Arc::new(FindNearbyFacilitiesHandler::new(
                locator.clone(),
                SearchProfile::new(geo.default_radius_m, geo.default_limit),
            )),
            prices,
            pharmacies: Arc::new(FindPharmaciesForMedicineHandler::new(
                locator,
                SearchProfile::new(geo.pharmacy_radius_m, geo.pharmacy_limit),
            )),
            speech,
            history: Arc::new(GetConversationHistoryHandler::new(
                ports.conversation_log,
                config.storage.history_default_limit,
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: HEALTH_STATUS,
    })
}

/// POST /chat - Run one message through the chat pipeline
pub async fn chat(
    State(state): State<AssistantAppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let req = lenient_body(body)?;
    let cmd = SendChatMessageCommand {
        message: req.message.unwrap_or_default(),
        lat: req.lat,
        lon: req.lon,
    };

    let reply = state.chat.handle(cmd).await?;
    Ok(Json(ChatResponse::from(reply)))
}

/// POST /nearby - Hospitals, clinics and pharmacies around a coordinate
pub async fn nearby(
    State(state): State<AssistantAppState>,
    body: Result<Json<NearbyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let req = lenient_body(body)?;
    let query = FindNearbyFacilitiesQuery {
        lat: req.lat,
        lon: req.lon,
        radius_m: whole_number(req.radius),
        limit: whole_number(req.limit),
    };

    let response = match state.nearby.handle(query).await? {
        NearbyFacilities::Found(places) => NearbyResponse::found(places),
        NearbyFacilities::Unavailable { error } => NearbyResponse::unavailable(error),
    };
    Ok(Json(response))
}

/// POST /medicine/prices - Compare retail prices for a medicine
pub async fn medicine_prices(
    State(state): State<AssistantAppState>,
    body: Result<Json<MedicinePricesRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let req = lenient_body(body)?;
    let comparison = state
        .prices
        .handle(ComparePricesQuery {
            medicine: req.medicine,
        })
        .await?;

    Ok(Json(MedicinePricesResponse {
        ok: true,
        comparison: comparison.into(),
    }))
}

/// POST /medicine/nearby - Pharmacies near a coordinate for a medicine
pub async fn medicine_nearby(
    State(state): State<AssistantAppState>,
    body: Result<Json<MedicineNearbyRequest>, JsonRejection>,
) -> Result<Response, AssistantApiError> {
    let req = lenient_body(body)?;
    let query = FindPharmaciesQuery {
        medicine: req.medicine,
        lat: req.lat,
        lon: req.lon,
        radius_m: whole_number(req.radius),
    };

    let response = match state.pharmacies.handle(query).await? {
        PharmaciesForMedicine::Found {
            medicine,
            pharmacies,
        } => Json(MedicineNearbyResponse {
            ok: true,
            medicine,
            total_found: pharmacies.len(),
            pharmacies: pharmacies.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        PharmaciesForMedicine::Unavailable { error } => {
            Json(NearbyResponse::unavailable(error)).into_response()
        }
    };
    Ok(response)
}

/// POST /speak - Synthesize speech for arbitrary text
pub async fn speak(
    State(state): State<AssistantAppState>,
    body: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let req = lenient_body(body)?;
    let audio = state
        .speech
        .handle(SynthesizeSpeechCommand {
            text: req.text.unwrap_or_default(),
        })
        .await?;

    Ok(Json(SpeakResponse { audio }))
}

/// GET /history?limit=N - Most recent conversation entries
pub async fn history(
    State(state): State<AssistantAppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AssistantApiError> {
    let Query(params) = params?;
    let entries = state
        .history
        .handle(GetConversationHistoryQuery {
            limit: params.limit,
        })
        .await;

    Ok(Json(HistoryResponse {
        ok: true,
        history: entries,
    }))
}

/// Missing or unparseable bodies become the default request; type
/// mismatches surface as errors.
fn lenient_body<T: Default>(body: Result<Json<T>, JsonRejection>) -> Result<T, AssistantApiError> {
    match body {
        Ok(Json(req)) => Ok(req),
        Err(JsonRejection::JsonSyntaxError(_)) | Err(JsonRejection::MissingJsonContentType(_)) => {
            Ok(T::default())
        }
        Err(rejection) => Err(rejection.into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Rejected input. Collaborator failures never reach this type.
#[derive(Debug)]
pub struct AssistantApiError(String);

impl AssistantApiError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<ChatError> for AssistantApiError {
    fn from(err: ChatError) -> Self {
        Self(err.to_string())
    }
}

impl From<NearbyError> for AssistantApiError {
    fn from(err: NearbyError) -> Self {
        Self(err.to_string())
    }
}

impl From<PriceQueryError> for AssistantApiError {
    fn from(err: PriceQueryError) -> Self {
        Self(err.to_string())
    }
}

impl From<PharmacySearchError> for AssistantApiError {
    fn from(err: PharmacySearchError) -> Self {
        Self(err.to_string())
    }
}

impl From<SpeechRequestError> for AssistantApiError {
    fn from(err: SpeechRequestError) -> Self {
        Self(err.to_string())
    }
}

impl From<JsonRejection> for AssistantApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl From<QueryRejection> for AssistantApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(rejection.body_text())
    }
}

impl IntoResponse for AssistantApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "Rejected request");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.0))).into_response()
    }
}
