//! Urgency Classifier - rule-based triage of free-text messages.
//!
//! Three disjoint pattern families feed three additive scores:
//!
//! | Family   | Indicates                 | Weight per matched pattern |
//! |----------|---------------------------|----------------------------|
//! | critical | self-harm / suicide       | 2.0                        |
//! | medical  | acute physical symptoms   | 1.5                        |
//! | care     | emotional distress        | 1.0                        |
//!
//! A mild symptom without a severity modifier takes 1.0 off the medical
//! score. The scores are then run through [`STATE_RULES`] top to bottom and
//! the first rule whose threshold is met decides the state.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete triage category, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyState {
    Casual,
    CareMode,
    MedicalMode,
    CriticalMode,
}

impl UrgencyState {
    /// Wire name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyState::Casual => "CASUAL",
            UrgencyState::CareMode => "CARE_MODE",
            UrgencyState::MedicalMode => "MEDICAL_MODE",
            UrgencyState::CriticalMode => "CRITICAL_MODE",
        }
    }
}

impl fmt::Display for UrgencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state together with the confidence that qualifies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub state: UrgencyState,
    pub confidence: f64,
}

/// Confidence assigned when no family reaches its threshold.
pub const CASUAL_CONFIDENCE: f64 = 0.3;

const CRITICAL_WEIGHT: f64 = 2.0;
const MEDICAL_WEIGHT: f64 = 1.5;
const CARE_WEIGHT: f64 = 1.0;
const MILD_SYMPTOM_DISCOUNT: f64 = 1.0;

static CRITICAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:i want to|going to|will|planning to)\s+(?:kill myself|end my life|commit suicide|take my life)\b",
        r"\b(?:suicide|suicidal thoughts|want to die)\b",
        r"\b(?:hanging|overdose|jump off|shoot myself)\b",
    ])
});

static MEDICAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:severe|unbearable|extreme|intense)\s+(?:pain|bleeding|vomiting)\b",
        r"\b(?:chest pain|heart attack|stroke|seizure|difficulty breathing|can't breathe)\b",
        r"\b(?:broken bone|fracture|deep cut|severe burn)\b",
        r"\b(?:high fever|temperature over|fever\s+\d{3})\b",
        r"\b(?:uncontrolled bleeding|heavy bleeding|blood in)\b",
    ])
});

static CARE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:feeling|i feel|i am|i'm)\s+(?:depressed|anxious|sad|lonely|stressed|overwhelmed)\b",
        r"\b(?:depression|anxiety|panic attack|mental health)\b",
        r"\b(?:can't cope|struggling|having a hard time)\b",
    ])
});

const SIMPLE_SYMPTOMS: &[&str] = &[
    "headache",
    "fever",
    "cold",
    "cough",
    "tired",
    "stomachache",
    "stomach ache",
];

const SEVERE_MODIFIERS: &[&str] = &["severe", "unbearable", "extreme", "intense", "can't", "unable"];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("urgency pattern must compile"))
        .collect()
}

fn family_score(patterns: &[Regex], text: &str, weight: f64) -> f64 {
    patterns.iter().filter(|p| p.is_match(text)).count() as f64 * weight
}

/// Per-family scores for one message.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UrgencyScores {
    pub critical: f64,
    pub medical: f64,
    pub care: f64,
}

impl UrgencyScores {
    /// Scores a message, including mild-symptom suppression.
    pub fn measure(text: &str) -> Self {
        let lowered = text.to_lowercase();
        Self::from_patterns(&lowered).suppress_mild_symptoms(&lowered)
    }

    /// Raw pattern scores before any suppression.
    pub fn from_patterns(lowered: &str) -> Self {
        Self {
            critical: family_score(&CRITICAL_PATTERNS, lowered, CRITICAL_WEIGHT),
            medical: family_score(&MEDICAL_PATTERNS, lowered, MEDICAL_WEIGHT),
            care: family_score(&CARE_PATTERNS, lowered, CARE_WEIGHT),
        }
    }

    fn suppress_mild_symptoms(mut self, lowered: &str) -> Self {
        if is_mild_symptom(lowered) {
            self.medical = (self.medical - MILD_SYMPTOM_DISCOUNT).max(0.0);
        }
        self
    }
}

/// True when the text names a simple symptom with no severity modifier.
pub fn is_mild_symptom(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let has_symptom = SIMPLE_SYMPTOMS.iter().any(|s| lowered.contains(s));
    let has_modifier = SEVERE_MODIFIERS.iter().any(|m| lowered.contains(m));
    has_symptom && !has_modifier
}

/// One row of the decision table.
struct StateRule {
    state: UrgencyState,
    score: fn(&UrgencyScores) -> f64,
    threshold: f64,
    base: f64,
    ceiling: f64,
}

/// Ordered decision table; first rule whose threshold is met wins.
const STATE_RULES: [StateRule; 3] = [
    StateRule {
        state: UrgencyState::CriticalMode,
        score: |s| s.critical,
        threshold: 2.0,
        base: 0.7,
        ceiling: 0.95,
    },
    StateRule {
        state: UrgencyState::MedicalMode,
        score: |s| s.medical,
        threshold: 1.5,
        base: 0.6,
        ceiling: 0.90,
    },
    StateRule {
        state: UrgencyState::CareMode,
        score: |s| s.care,
        threshold: 1.0,
        base: 0.5,
        ceiling: 0.85,
    },
];

/// Maps raw text to an urgency state and confidence. Pure and deterministic.
pub struct UrgencyClassifier;

impl UrgencyClassifier {
    pub fn classify(text: &str) -> Classification {
        Self::decide(&UrgencyScores::measure(text))
    }

    /// Applies the decision table to precomputed scores.
    pub fn decide(scores: &UrgencyScores) -> Classification {
        STATE_RULES
            .iter()
            .find_map(|rule| {
                let score = (rule.score)(scores);
                (score >= rule.threshold).then(|| Classification {
                    state: rule.state,
                    confidence: rule.ceiling.min(rule.base + score * 0.1),
                })
            })
            .unwrap_or(Classification {
                state: UrgencyState::Casual,
                confidence: CASUAL_CONFIDENCE,
            })
    }
}
