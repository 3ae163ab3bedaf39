//! SendChatMessageHandler - Command handler for the chat pipeline.
//!
//! Stages run in a fixed order:
//!
//! 1. Medicine intent: a recognisable medicine name short-circuits into a
//!    price summary reply.
//! 2. Classify, compose the prompt, generate the reply, decide escalation.
//! 3. Nearby help is wanted when escalating or when the text asks for it.
//!    Without a location the reply returns early flagged `need_location`.
//! 4. With a location, the nearest facility is attached if the search works.
//! 5. Escalations get synthesized audio.
//! 6. The exchange is appended to the conversation log.
//!
//! Only an empty message or an invalid coordinate fails the request. Every
//! collaborator failure degrades its own stage and the pipeline continues.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use super::synthesize_speech::SynthesizeSpeechHandler;
use crate::application::handlers::facility::{FacilityLocator, SearchProfile};
use crate::application::handlers::medicine::ComparePricesHandler;
use crate::domain::facility::{wants_nearby_facility, Facility};
use crate::domain::foundation::{GeoPoint, ValidationError};
use crate::domain::medicine::{MedicineExtractor, PriceComparison};
use crate::domain::triage::{
    Classification, EscalationDecision, EscalationPolicy, PromptComposer, UrgencyClassifier,
    UrgencyState,
};
use crate::ports::{ConversationLog, ConversationLogEntry, LanguageModel};

/// Command to process one chat message.
#[derive(Debug, Clone, Default)]
pub struct SendChatMessageCommand {
    pub message: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("Empty message")]
    EmptyMessage,

    #[error(transparent)]
    InvalidLocation(#[from] ValidationError),
}

/// Fixed inputs of the pipeline, resolved from configuration.
#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub composer: PromptComposer,
    /// Reply used when the language model fails.
    pub fallback_reply: String,
    /// Search used to find the nearest facility.
    pub nearby: SearchProfile,
}

/// State reported with a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Triage(UrgencyState),
    MedicineQuery,
}

impl ReplyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyState::Triage(state) => state.as_str(),
            ReplyState::MedicineQuery => "MEDICINE_QUERY",
        }
    }
}

/// Everything returned for one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    /// Base64 audio, present only for escalations that synthesized.
    pub audio: Option<String>,
    pub state: ReplyState,
    /// Rounded to two decimals.
    pub confidence: f64,
    pub escalate: bool,
    pub recommended_action: String,
    pub nearest: Option<Facility>,
    pub need_location: bool,
    pub medicine_data: Option<PriceComparison>,
}

impl ChatReply {
    fn triage(reply: String, classification: Classification, decision: EscalationDecision) -> Self {
        Self {
            reply,
            audio: None,
            state: ReplyState::Triage(classification.state),
            confidence: round2(classification.confidence),
            escalate: decision.escalate,
            recommended_action: decision.recommended_action,
            nearest: None,
            need_location: false,
            medicine_data: None,
        }
    }

    fn medicine(medicine: &str, comparison: PriceComparison) -> Self {
        Self {
            reply: medicine_reply_text(medicine, &comparison),
            audio: None,
            state: ReplyState::MedicineQuery,
            confidence: 1.0,
            escalate: false,
            recommended_action: String::new(),
            nearest: None,
            need_location: false,
            medicine_data: Some(comparison),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Human-readable summary of a price comparison.
pub fn medicine_reply_text(medicine: &str, comparison: &PriceComparison) -> String {
    let mut reply = match &comparison.summary {
        Some(summary) => format!(
            "I found {} options for {}.\n\n💰 Best Price: ₹{:.2} at {}\n📊 Price Range: ₹{:.2} - ₹{:.2}\n📈 Average: ₹{:.2}\n\n",
            summary.total_options,
            medicine,
            summary.min_price,
            summary.best_deal.pharmacy,
            summary.min_price,
            summary.max_price,
            summary.avg_price,
        ),
        None => format!(
            "I found {} options for {}.\n\n",
            comparison.results.len(),
            medicine
        ),
    };
    reply.push_str("Check the Medicine Prices tab for full comparison!");
    reply
}

pub struct SendChatMessageHandler {
    language_model: Arc<dyn LanguageModel>,
    locator: FacilityLocator,
    prices: Arc<ComparePricesHandler>,
    speech: Arc<SynthesizeSpeechHandler>,
    log: Arc<dyn ConversationLog>,
    settings: ChatSettings,
}

impl SendChatMessageHandler {
    pub fn new(
        language_model: Arc<dyn LanguageModel>,
        locator: FacilityLocator,
        prices: Arc<ComparePricesHandler>,
        speech: Arc<SynthesizeSpeechHandler>,
        log: Arc<dyn ConversationLog>,
        settings: ChatSettings,
    ) -> Self {
        Self {
            language_model,
            locator,
            prices,
            speech,
            log,
            settings,
        }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatReply, ChatError> {
        let text = cmd.message.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let location = GeoPoint::from_optional(cmd.lat, cmd.lon)?;

        tracing::info!(message = text, "Chat message received");

        if let Some(medicine) = Self::requested_medicine(text) {
            tracing::info!(medicine = %medicine, "Detected medicine query");
            let comparison = self.prices.compare(&medicine).await;
            return Ok(ChatReply::medicine(&medicine, comparison));
        }

        let classification = UrgencyClassifier::classify(text);
        tracing::info!(
            state = %classification.state,
            confidence = classification.confidence,
            "Detected state"
        );

        let prompt = self
            .settings
            .composer
            .compose(text, classification.state, classification.confidence);
        let reply = self.generate_reply(&prompt).await;

        let decision = EscalationPolicy::decide(classification.state, classification.confidence);
        let want_nearby = decision.escalate || wants_nearby_facility(text);
        let mut response = ChatReply::triage(reply, classification, decision);

        if want_nearby {
            match location {
                None => {
                    response.need_location = true;
                    return Ok(response);
                }
                Some(center) => {
                    response.nearest = self
                        .locator
                        .locate(center, self.settings.nearby, Utc::now())
                        .await
                        .nearest()
                        .cloned();
                }
            }
        }

        if response.escalate {
            response.audio = self.speech.speak(&response.reply).await;
        }

        self.remember(text, &response.reply, classification).await;

        Ok(response)
    }

    fn requested_medicine(text: &str) -> Option<String> {
        if MedicineExtractor::is_medicine_query(text) {
            MedicineExtractor::extract(text)
        } else {
            None
        }
    }

    async fn generate_reply(&self, prompt: &str) -> String {
        match self.language_model.generate(prompt).await {
            Ok(reply) => {
                tracing::debug!(model = self.language_model.model_name(), reply_chars = reply.len(), "Reply generated");
                reply
            }
            Err(e) => {
                tracing::warn!(error = %e, "Language model failed, using fallback reply");
                self.settings.fallback_reply.clone()
            }
        }
    }

    async fn remember(&self, input: &str, output: &str, classification: Classification) {
        let entry = ConversationLogEntry::now(
            input,
            output,
            classification.state,
            classification.confidence,
        );
        if let Err(e) = self.log.append(entry).await {
            tracing::warn!(error = %e, "Failed to persist conversation entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::geo::StaticPoiSource;
    use crate::adapters::llm::MockLanguageModel;
    use crate::adapters::pricing::StaticPriceSource;
    use crate::adapters::speech::MockSpeechSynthesizer;
    use crate::adapters::storage::InMemoryConversationLog;
    use crate::domain::medicine::PriceQuote;
    use crate::domain::triage::{EMERGENCY_ACTION, SUPPORT_ACTION};
    use crate::ports::{ConversationLogError, LlmError, PoiElement, PoiError, PriceSource};
    use async_trait::async_trait;

    struct Fixture {
        model: MockLanguageModel,
        speech: MockSpeechSynthesizer,
        log: InMemoryConversationLog,
        pois: StaticPoiSource,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                model: MockLanguageModel::new(),
                speech: MockSpeechSynthesizer::new(),
                log: InMemoryConversationLog::new(200),
                pois: StaticPoiSource::empty(),
            }
        }

        fn handler(&self) -> SendChatMessageHandler {
            self.handler_with_log(Arc::new(self.log.clone()))
        }

        fn handler_with_log(&self, log: Arc<dyn ConversationLog>) -> SendChatMessageHandler {
            let sources: Vec<Arc<dyn PriceSource>> = vec![Arc::new(StaticPriceSource::new(
                "1mg",
                vec![PriceQuote::new("Paracetamol 500", Some(20.0), "https://1mg.test/p", "1mg")],
            ))];
            SendChatMessageHandler::new(
                Arc::new(self.model.clone()),
                FacilityLocator::new(Arc::new(self.pois.clone())),
                Arc::new(ComparePricesHandler::new(sources, 5)),
                Arc::new(SynthesizeSpeechHandler::new(Arc::new(self.speech.clone()))),
                log,
                ChatSettings {
                    composer: PromptComposer::default(),
                    fallback_reply: "Sorry, try again.".to_string(),
                    nearby: SearchProfile::new(5000, 5),
                },
            )
        }
    }

    fn message(text: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            message: text.to_string(),
            ..Default::default()
        }
    }

    fn located(text: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            message: text.to_string(),
            lat: Some(28.61),
            lon: Some(77.20),
        }
    }

    struct BrokenLog;

    #[async_trait]
    impl ConversationLog for BrokenLog {
        async fn append(&self, _entry: ConversationLogEntry) -> Result<(), ConversationLogError> {
            Err(ConversationLogError::Io("disk full".into()))
        }

        async fn recent(&self, _limit: usize) -> Result<Vec<ConversationLogEntry>, ConversationLogError> {
            Err(ConversationLogError::Io("disk full".into()))
        }
    }

    #[tokio::test]
    async fn crisis_message_escalates_and_asks_for_location() {
        let fx = Fixture::new();

        let reply = fx.handler().handle(message("I want to kill myself")).await.unwrap();

        assert_eq!(reply.state, ReplyState::Triage(UrgencyState::CriticalMode));
        assert!(reply.confidence >= 0.7);
        assert!(reply.escalate);
        assert_eq!(reply.recommended_action, EMERGENCY_ACTION);
        assert!(reply.recommended_action.contains("108/112"));
        assert!(reply.need_location);
        assert_eq!(reply.audio, None);
        assert_eq!(fx.speech.call_count(), 0);
        assert!(fx.log.is_empty().await);
    }

    #[tokio::test]
    async fn crisis_message_with_location_gets_nearest_and_audio() {
        let mut fx = Fixture::new();
        fx.pois = StaticPoiSource::new(vec![
            PoiElement::node(7, 28.70, 77.20).with_tag("amenity", "hospital"),
            PoiElement::node(8, 28.62, 77.20)
                .with_tag("amenity", "hospital")
                .with_tag("name", "AIIMS"),
        ]);

        let reply = fx.handler().handle(located("I want to kill myself")).await.unwrap();

        assert!(!reply.need_location);
        assert_eq!(reply.nearest.map(|f| f.name), Some("AIIMS".to_string()));
        assert!(reply.audio.is_some());
        assert_eq!(fx.speech.inputs(), vec![reply.reply.clone()]);
        assert_eq!(fx.pois.queries()[0].radius_m, 5000);
        assert_eq!(fx.log.len().await, 1);
    }

    #[tokio::test]
    async fn mild_headache_stays_casual() {
        let fx = Fixture::new();

        let reply = fx.handler().handle(message("I have a mild headache")).await.unwrap();

        assert_eq!(reply.state, ReplyState::Triage(UrgencyState::Casual));
        assert_eq!(reply.confidence, 0.3);
        assert!(!reply.escalate);
        assert_eq!(reply.recommended_action, "");
        assert!(!reply.need_location);
        assert_eq!(fx.model.call_count(), 1);
        assert_eq!(fx.log.len().await, 1);
    }

    #[tokio::test]
    async fn distress_gets_support_without_escalation() {
        let fx = Fixture::new();

        let reply = fx
            .handler()
            .handle(message("I feel anxious and overwhelmed"))
            .await
            .unwrap();

        assert_eq!(reply.state, ReplyState::Triage(UrgencyState::CareMode));
        assert!(!reply.escalate);
        assert_eq!(reply.recommended_action, SUPPORT_ACTION);
        assert_eq!(reply.audio, None);
    }

    #[tokio::test]
    async fn medicine_query_short_circuits() {
        let fx = Fixture::new();

        let reply = fx.handler().handle(message("price of paracetamol")).await.unwrap();

        assert_eq!(reply.state, ReplyState::MedicineQuery);
        assert_eq!(reply.state.as_str(), "MEDICINE_QUERY");
        assert_eq!(reply.confidence, 1.0);
        assert!(!reply.escalate);
        let data = reply.medicine_data.unwrap();
        assert_eq!(data.medicine, "paracetamol");
        assert!(!data.results.is_empty());
        assert!(reply.reply.contains("₹20.00 at 1mg"));
        assert_eq!(fx.model.call_count(), 0);
        assert!(fx.log.is_empty().await);
    }

    #[tokio::test]
    async fn language_model_failure_uses_fallback() {
        let mut fx = Fixture::new();
        fx.model = MockLanguageModel::new().with_error(LlmError::Timeout { timeout_secs: 90 });

        let reply = fx.handler().handle(message("hello there")).await.unwrap();

        assert_eq!(reply.reply, "Sorry, try again.");
    }

    #[tokio::test]
    async fn prompt_carries_state_and_message() {
        let fx = Fixture::new();

        fx.handler().handle(message("I feel lonely")).await.unwrap();

        let prompt = &fx.model.prompts()[0];
        assert!(prompt.contains("User state=CARE_MODE"));
        assert!(prompt.ends_with("User: I feel lonely\nAries:"));
    }

    #[tokio::test]
    async fn nearby_request_without_escalation_uses_location() {
        let mut fx = Fixture::new();
        fx.pois = StaticPoiSource::new(vec![
            PoiElement::node(1, 28.611, 77.20).with_tag("amenity", "pharmacy"),
        ]);

        let reply = fx
            .handler()
            .handle(located("where is the nearest hospital"))
            .await
            .unwrap();

        assert!(!reply.escalate);
        assert_eq!(reply.nearest.map(|f| f.source_id), Some(1));
        assert_eq!(fx.speech.call_count(), 0);
    }

    #[tokio::test]
    async fn locator_failure_leaves_nearest_empty() {
        let mut fx = Fixture::new();
        fx.pois = StaticPoiSource::failing(PoiError::Network("down".into()));

        let reply = fx.handler().handle(located("nearest clinic please")).await.unwrap();

        assert!(reply.nearest.is_none());
        assert!(!reply.need_location);
    }

    #[tokio::test]
    async fn persistence_failure_is_swallowed() {
        let fx = Fixture::new();

        let reply = fx
            .handler_with_log(Arc::new(BrokenLog))
            .handle(message("good morning"))
            .await;

        assert!(reply.is_ok());
    }

    #[tokio::test]
    async fn rejects_empty_message_and_bad_coordinates() {
        let fx = Fixture::new();
        let handler = fx.handler();

        assert_eq!(handler.handle(message("   ")).await, Err(ChatError::EmptyMessage));

        let bad = SendChatMessageCommand {
            message: "hi".into(),
            lat: Some(123.0),
            lon: Some(0.0),
        };
        assert!(matches!(handler.handle(bad).await, Err(ChatError::InvalidLocation(_))));
        assert_eq!(fx.model.call_count(), 0);
    }

    #[test]
    fn reply_text_without_summary_still_counts_options() {
        let comparison = PriceComparison {
            medicine: "zincovit".into(),
            results: vec![PriceQuote::new("Zincovit", None, "u", "1mg")],
            summary: None,
            placeholder: false,
        };

        let text = medicine_reply_text("zincovit", &comparison);

        assert!(text.starts_with("I found 1 options for zincovit."));
        assert!(text.ends_with("Check the Medicine Prices tab for full comparison!"));
    }
}
