//! SupportEngine: sequences classification, persona lookup, response
//! generation, and guidance composition into one combined result.
//!
//! The registry is built once at construction and never mutated afterwards;
//! the only shared mutable state is the bank sampler, held behind a mutex for
//! the duration of a single generation call.

use crate::classifier::{classify, Classification};
use crate::config::SupportConfig;
use crate::error::SupportError;
use crate::guidance::compose_guidance;
use crate::persona::{PersonaRegistry, PersonaResponse, SupportContext};
use crate::sampler::{BankSampler, RandomSampler};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Inbound `get_support` arguments. `situation` stays optional here so the
/// orchestrator can report its absence as an input error instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportRequest {
    #[serde(default)]
    pub situation: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub emotional_state: Option<String>,
}

impl SupportRequest {
    pub fn new(situation: &str) -> Self {
        Self {
            situation: Some(situation.to_string()),
            ..Default::default()
        }
    }
}

/// The assembled multi-part result of one support request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportReport {
    pub classification: Classification,
    pub response: PersonaResponse,
    pub guidance: String,
}

impl SupportReport {
    /// Renders the combined human-readable report: analysis, recommendation,
    /// persona response, and incorporation guidance, under fixed section
    /// markers.
    pub fn render(&self) -> String {
        let suggestion_block = self
            .response
            .suggestion
            .as_deref()
            .map(|s| format!("**Gentle suggestion:** {}", s))
            .unwrap_or_default();

        format!(
            "## 🤗 Comprehensive Emotional Support\n\n\
             ### Step 1: Situation Analysis & Persona Recommendation\n\
             {analysis}\n\n\
             **Recommended Persona:** {name} \n\
             **Reasoning:** {reasoning}\n\n\
             ---\n\n\
             ### Step 2: Persona Support Response\n\
             **{name} responds:**\n\n\
             {message}\n\n\
             **Affirmation:** {affirmation}\n\n\
             {suggestion_block}\n\n\
             ---\n\n\
             ### Step 3: Incorporating This Support\n\
             {guidance}\n\n\
             ---\n\n\
             *Remember: You are valued and capable. This support is here to help you move forward with confidence and self-compassion. 💙*",
            analysis = self.classification.analysis,
            name = self.classification.persona_name,
            reasoning = self.classification.reasoning,
            message = self.response.message,
            affirmation = self.response.affirmation,
            suggestion_block = suggestion_block,
            guidance = self.guidance,
        )
    }
}

/// Process-wide orchestrator: owns the resolved persona registry and the
/// random source for bank sampling.
pub struct SupportEngine {
    registry: PersonaRegistry,
    sampler: Mutex<Box<dyn BankSampler>>,
}

impl SupportEngine {
    pub fn new(registry: PersonaRegistry) -> Self {
        Self::with_sampler(registry, Box::new(RandomSampler::from_entropy()))
    }

    /// Engine with an injected sampler, for deterministic tests.
    pub fn with_sampler(registry: PersonaRegistry, sampler: Box<dyn BankSampler>) -> Self {
        Self {
            registry,
            sampler: Mutex::new(sampler),
        }
    }

    /// Built-in personas merged with the configuration's custom ones.
    pub fn from_config(config: &SupportConfig) -> Self {
        Self::new(PersonaRegistry::from_config(config))
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// The complete support workflow: classify → resolve persona → generate →
    /// compose guidance. An absent or empty `situation` is an input error; an
    /// unresolvable persona key is a lookup error.
    pub fn get_support(&self, request: &SupportRequest) -> Result<SupportReport, SupportError> {
        let situation = request
            .situation
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(SupportError::MissingSituation)?;

        let classification = classify(
            &self.registry,
            situation,
            request.context.as_deref(),
            request.emotional_state.as_deref(),
        );

        let persona = self
            .registry
            .get(&classification.persona_key)
            .ok_or_else(|| SupportError::PersonaNotFound(classification.persona_key.clone()))?;

        let ctx = SupportContext::new(
            situation,
            request.context.as_deref(),
            request.emotional_state.as_deref(),
        );

        let response = {
            let mut sampler = self.sampler.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            persona.generate(&ctx, sampler.as_mut())
        };

        let guidance = compose_guidance(&self.registry, &classification.persona_key, &response)?;

        tracing::debug!(
            target: "solace::engine",
            persona = %classification.persona_key,
            "support generated"
        );

        Ok(SupportReport {
            classification,
            response,
            guidance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::SequenceSampler;

    fn engine() -> SupportEngine {
        SupportEngine::with_sampler(
            PersonaRegistry::builtin(),
            Box::new(SequenceSampler::new(vec![0])),
        )
    }

    #[test]
    fn missing_situation_is_an_input_error() {
        let err = engine().get_support(&SupportRequest::default()).unwrap_err();
        assert_eq!(err.to_string(), "situation is required");
    }

    #[test]
    fn empty_situation_is_treated_as_missing() {
        let request = SupportRequest {
            situation: Some(String::new()),
            ..Default::default()
        };
        let err = engine().get_support(&request).unwrap_err();
        assert_eq!(err.to_string(), "situation is required");
    }

    #[test]
    fn unresolvable_persona_is_a_lookup_error() {
        let empty = SupportEngine::with_sampler(
            PersonaRegistry::new(),
            Box::new(SequenceSampler::new(vec![0])),
        );
        let err = empty
            .get_support(&SupportRequest::new("I just feel stuck today"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Persona friend not found");
    }

    #[test]
    fn report_contains_all_sections_in_order() {
        let report = engine()
            .get_support(&SupportRequest::new("I just feel stuck today"))
            .unwrap();
        let text = report.render();
        let step1 = text.find("### Step 1:").unwrap();
        let step2 = text.find("### Step 2:").unwrap();
        let step3 = text.find("### Step 3:").unwrap();
        assert!(text.starts_with("## 🤗 Comprehensive Emotional Support"));
        assert!(step1 < step2 && step2 < step3);
        assert!(text.contains("**Recommended Persona:** Friend"));
        assert!(text.contains("**Friend responds:**"));
        assert!(text.contains("**Gentle suggestion:**"));
    }

    #[test]
    fn report_omits_suggestion_line_when_absent() {
        let mut report = engine()
            .get_support(&SupportRequest::new("I just feel stuck today"))
            .unwrap();
        report.response.suggestion = None;
        assert!(!report.render().contains("**Gentle suggestion:**"));
    }

    #[test]
    fn seeded_engines_generate_identical_reports() {
        let request = SupportRequest::new("stuck on a gnarly algorithm");
        let a = SupportEngine::with_sampler(
            PersonaRegistry::builtin(),
            Box::new(crate::sampler::RandomSampler::with_seed(11)),
        );
        let b = SupportEngine::with_sampler(
            PersonaRegistry::builtin(),
            Box::new(crate::sampler::RandomSampler::with_seed(11)),
        );
        assert_eq!(
            a.get_support(&request).unwrap().render(),
            b.get_support(&request).unwrap().render()
        );
    }
}
