//! Prompt Composer - builds the instruction payload for the language model.

use super::UrgencyState;

/// Default persona directive used when none is configured.
pub const DEFAULT_PERSONA: &str = "You are Aries — a caring, protective, encouraging elder-sibling figure. \
You speak calmly and with firm reassurance. Be concise, clear, and supportive. ";

const CASUAL_INSTRUCTIONS: &str = "Respond in a friendly, concise way. Keep tone warm and casual. \
No medical diagnosis. For simple symptoms like headaches or minor issues, provide general wellness \
advice (rest, hydration, over-the-counter remedies) but always suggest seeing a doctor if symptoms \
persist or worsen.";

const CARE_INSTRUCTIONS: &str = "The user is showing emotional distress but not immediate danger. \
Respond with calm empathy. Use supportive language, encourage self-care (breathing, taking breaks, \
talking to someone), and suggest professional support if feelings persist. Keep it warm and \
non-clinical.";

const MEDICAL_INSTRUCTIONS: &str = "The user reports significant physical symptoms. Ask focused \
questions about severity, duration, and red flags. Provide conservative advice (rest, fluids) but \
STRONGLY recommend seeing a doctor soon. Offer to find nearby hospitals if appropriate.";

const CRITICAL_INSTRUCTIONS: &str = "HIGH-RISK situation indicating possible self-harm or imminent \
danger. Use calm, grounding language. IMMEDIATELY encourage calling emergency services (108/112). \
Ask if they are safe now and if anyone is with them. Keep reply short, stabilizing, and focused on \
immediate safety. Do not over-explain.";

/// Behavioral instruction block for a state.
pub fn instructions_for(state: UrgencyState) -> &'static str {
    match state {
        UrgencyState::Casual => CASUAL_INSTRUCTIONS,
        UrgencyState::CareMode => CARE_INSTRUCTIONS,
        UrgencyState::MedicalMode => MEDICAL_INSTRUCTIONS,
        UrgencyState::CriticalMode => CRITICAL_INSTRUCTIONS,
    }
}

/// Composes persona, triage context, policy and user text into one prompt.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    persona: String,
    assistant_name: String,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA, "Aries")
    }
}

impl PromptComposer {
    pub fn new(persona: impl Into<String>, assistant_name: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            assistant_name: assistant_name.into(),
        }
    }

    pub fn compose(&self, message: &str, state: UrgencyState, confidence: f64) -> String {
        format!(
            "{persona}\nCONTEXT: User state={state} (confidence={confidence:.2}).\n\
             INSTRUCTIONS: {instructions}\n\n\
             User: {message}\n{name}:",
            persona = self.persona,
            instructions = instructions_for(state),
            name = self.assistant_name,
        )
    }
}
