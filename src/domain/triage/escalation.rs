//! Escalation Policy - decides whether real-world help should be recommended.

use serde::Serialize;

use super::UrgencyState;

pub const EMERGENCY_ACTION: &str =
    "URGENT: Call emergency services immediately (108/112). Do not wait. Your safety is the priority.";
pub const SEEK_CARE_ACTION: &str =
    "Seek medical attention soon. I can help find nearby hospitals if needed.";
pub const SUPPORT_ACTION: &str =
    "Consider talking to someone you trust or seeking professional support if these feelings continue.";

/// Outcome of the escalation policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EscalationDecision {
    pub escalate: bool,
    pub recommended_action: String,
}

struct EscalationRule {
    state: UrgencyState,
    min_confidence: f64,
    escalate: bool,
    action: &'static str,
}

/// Evaluated top to bottom, first match wins.
const ESCALATION_RULES: [EscalationRule; 3] = [
    EscalationRule {
        state: UrgencyState::CriticalMode,
        min_confidence: 0.7,
        escalate: true,
        action: EMERGENCY_ACTION,
    },
    EscalationRule {
        state: UrgencyState::MedicalMode,
        min_confidence: 0.6,
        escalate: true,
        action: SEEK_CARE_ACTION,
    },
    EscalationRule {
        state: UrgencyState::CareMode,
        min_confidence: 0.0,
        escalate: false,
        action: SUPPORT_ACTION,
    },
];

pub struct EscalationPolicy;

impl EscalationPolicy {
    pub fn decide(state: UrgencyState, confidence: f64) -> EscalationDecision {
        ESCALATION_RULES
            .iter()
            .find(|rule| rule.state == state && confidence >= rule.min_confidence)
            .map(|rule| EscalationDecision {
                escalate: rule.escalate,
                recommended_action: rule.action.to_string(),
            })
            .unwrap_or(EscalationDecision {
                escalate: false,
                recommended_action: String::new(),
            })
    }
}
