//! Triage - urgency classification, prompt policy and escalation.
//!
//! The three pieces are pure functions chained by the chat pipeline:
//! classify the text, compose the prompt for the resulting state, then
//! decide whether to escalate once the reply is in hand.

mod escalation;
mod prompt;
mod urgency;

pub use escalation::{
    EscalationDecision, EscalationPolicy, EMERGENCY_ACTION, SEEK_CARE_ACTION, SUPPORT_ACTION,
};
pub use prompt::{instructions_for, PromptComposer, DEFAULT_PERSONA};
pub use urgency::{
    is_mild_symptom, Classification, UrgencyClassifier, UrgencyScores, UrgencyState,
    CASUAL_CONFIDENCE,
};
