//! Configuration-driven personas.
//!
//! A `CustomPersona` wraps the banks supplied in the JSON configuration and
//! behaves exactly like a built-in, except that its suggestion bank may be
//! empty (in which case responses carry no suggestion at all).

use super::{Persona, PersonaResponse, SupportContext};
use crate::config::PersonaConfig;
use crate::sampler::BankSampler;

/// A persona built from externally supplied configuration.
pub struct CustomPersona {
    name: String,
    description: String,
    response_style: String,
    messages: Vec<String>,
    affirmations: Vec<String>,
    suggestions: Vec<String>,
}

impl CustomPersona {
    /// Builds a persona from its configuration entry. Returns `None` when the
    /// message or affirmation bank is empty; registered personas must be able
    /// to generate unconditionally.
    pub fn from_config(config: &PersonaConfig) -> Option<Self> {
        if config.messages.is_empty() || config.affirmations.is_empty() {
            return None;
        }
        Some(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            response_style: config.response_style.clone(),
            messages: config.messages.clone(),
            affirmations: config.affirmations.clone(),
            suggestions: config.suggestions.clone(),
        })
    }

    fn draw(bank: &[String], sampler: &mut dyn BankSampler) -> String {
        bank[sampler.pick(bank.len())].clone()
    }
}

impl Persona for CustomPersona {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn response_style(&self) -> &str {
        &self.response_style
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        let suggestion = if self.suggestions.is_empty() {
            None
        } else {
            Some(Self::draw(&self.suggestions, sampler))
        };
        PersonaResponse {
            message: Self::draw(&self.messages, sampler),
            affirmation: Self::draw(&self.affirmations, sampler),
            suggestion,
        }
    }
}
