//! Assistant persona configuration

use serde::Deserialize;

use super::error::{require_non_empty, ValidationError};
use crate::domain::triage::{PromptComposer, DEFAULT_PERSONA};

#[derive(Debug, Clone, Deserialize)]
pub struct PersonaConfig {
    /// Name used as the reply cue at the end of each prompt
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Base persona directive that opens each prompt
    #[serde(default = "default_directive")]
    pub directive: String,
}

impl PersonaConfig {
    pub fn composer(&self) -> PromptComposer {
        PromptComposer::new(self.directive.clone(), self.assistant_name.clone())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.assistant_name, "persona.assistant_name")?;
        require_non_empty(&self.directive, "persona.directive")?;
        Ok(())
    }
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            directive: default_directive(),
        }
    }
}

fn default_assistant_name() -> String {
    "Aries".to_string()
}

fn default_directive() -> String {
    DEFAULT_PERSONA.to_string()
}
