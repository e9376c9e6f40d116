//! Persona capability and registry.
//!
//! A persona is a named support archetype with three fixed response banks
//! (messages, affirmations, suggestions). Five built-ins cover the
//! classifier's whole output space; custom personas from configuration are
//! merged over them by normalized key, last write winning.

mod builtin;
mod custom;

pub use builtin::{
    FatherFigurePersona, FriendPersona, MentorPersona, MotherlyPersona, TherapistPersona,
};
pub use custom::CustomPersona;

use crate::config::SupportConfig;
use crate::sampler::BankSampler;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Sentinel emotional state used when the request does not carry one.
pub const SEEKING_SUPPORT: &str = "seeking support";

/// The five built-in registry keys, in no significant order. These are fixed
/// literals, not normalized display names ("Father Figure" lives under
/// `fatherfigure`).
pub const BUILTIN_KEYS: &[&str] = &["motherly", "therapist", "friend", "mentor", "fatherfigure"];

/// Per-request context handed to every persona. Built-in personas do not
/// branch on it today; the parameter is structural, reserved for
/// content-sensitive generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportContext {
    /// The caller's situation text.
    pub frustration: String,
    /// Optional description of the surrounding task.
    pub task_type: Option<String>,
    /// Free-text feeling label; defaults to [`SEEKING_SUPPORT`].
    pub emotional_state: String,
    /// Informational only; always 1 in current scope.
    pub previous_attempts: u32,
}

impl SupportContext {
    pub fn new(situation: &str, context: Option<&str>, emotional_state: Option<&str>) -> Self {
        Self {
            frustration: situation.to_string(),
            task_type: context.map(str::to_string),
            emotional_state: emotional_state.unwrap_or(SEEKING_SUPPORT).to_string(),
            previous_attempts: 1,
        }
    }
}

/// A persona's generated support, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaResponse {
    pub message: String,
    pub affirmation: String,
    /// Absent (not empty) when the persona defines no suggestion bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// The single capability every persona exposes: generate a response from a
/// support-request context. Implemented by the five built-in archetypes and
/// by [`CustomPersona`] for configuration-supplied entries.
pub trait Persona: Send + Sync {
    /// Display name (e.g. "Father Figure"), shown in the rendered report.
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Documentation only; not used in selection logic.
    fn response_style(&self) -> &str;
    /// Draws one message and one affirmation from the persona's banks, plus
    /// one suggestion iff the suggestion bank is non-empty.
    fn generate(&self, ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse;
}

/// Normalizes a display name into a registry key: lowercase, whitespace runs
/// collapsed to single underscores. "Wise Owl" → `wise_owl`.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// Mapping from normalized key to persona. Built once at startup and never
/// mutated afterwards; lookups are exact-key only, no fuzzy matching.
pub struct PersonaRegistry {
    personas: HashMap<String, Arc<dyn Persona>>,
}

impl PersonaRegistry {
    /// Empty registry. Tests use this to exercise lookup failures; production
    /// code starts from [`PersonaRegistry::builtin`].
    pub fn new() -> Self {
        Self {
            personas: HashMap::new(),
        }
    }

    /// Registry holding exactly the five built-in archetypes.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert("motherly", Arc::new(MotherlyPersona));
        registry.insert("therapist", Arc::new(TherapistPersona));
        registry.insert("friend", Arc::new(FriendPersona));
        registry.insert("mentor", Arc::new(MentorPersona));
        registry.insert("fatherfigure", Arc::new(FatherFigurePersona));
        registry
    }

    /// Built-ins merged with the configuration's custom personas. Custom
    /// entries with a colliding normalized key overwrite the built-in entry;
    /// entries with an empty message or affirmation bank are rejected here
    /// (skipped with a warning) rather than failing at first generation.
    pub fn from_config(config: &SupportConfig) -> Self {
        let mut registry = Self::builtin();
        for persona_config in &config.custom_personas {
            let key = normalize_key(&persona_config.name);
            match CustomPersona::from_config(persona_config) {
                Some(persona) => registry.insert(&key, Arc::new(persona)),
                None => {
                    tracing::warn!(
                        target: "solace::persona",
                        name = %persona_config.name,
                        "custom persona rejected: empty message or affirmation bank"
                    );
                }
            }
        }
        registry
    }

    /// Inserts under `key`, overwriting any existing entry (built-in or
    /// custom) under that key.
    pub fn insert(&mut self, key: &str, persona: Arc<dyn Persona>) {
        if self.personas.contains_key(key) {
            tracing::debug!(target: "solace::persona", key, "persona overridden");
        }
        self.personas.insert(key.to_string(), persona);
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<Arc<dyn Persona>> {
        self.personas.get(key).cloned()
    }

    /// Display name for `key`, when registered.
    pub fn display_name(&self, key: &str) -> Option<String> {
        self.personas.get(key).map(|p| p.name().to_string())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.personas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PersonaConfig;

    fn custom_config(name: &str) -> PersonaConfig {
        PersonaConfig {
            name: name.to_string(),
            description: "test persona".to_string(),
            response_style: "terse".to_string(),
            messages: vec!["custom message".to_string()],
            affirmations: vec!["custom affirmation".to_string()],
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn normalize_key_collapses_whitespace() {
        assert_eq!(normalize_key("Wise Owl"), "wise_owl");
        assert_eq!(normalize_key("  Wise   Owl  "), "wise_owl");
        assert_eq!(normalize_key("Friend"), "friend");
    }

    #[test]
    fn builtin_registry_has_the_five_fixed_keys() {
        let registry = PersonaRegistry::builtin();
        assert_eq!(registry.len(), 5);
        for key in BUILTIN_KEYS {
            assert!(registry.get(key).is_some(), "missing built-in key {}", key);
        }
        assert_eq!(registry.display_name("fatherfigure").unwrap(), "Father Figure");
    }

    #[test]
    fn custom_persona_is_retrievable_under_its_normalized_key_only() {
        let config = SupportConfig {
            custom_personas: vec![custom_config("Wise Owl")],
            ..Default::default()
        };
        let registry = PersonaRegistry::from_config(&config);
        assert!(registry.get("wise_owl").is_some());
        assert!(registry.get("Wise Owl").is_none());
        assert!(registry.get("wiseowl").is_none());
    }

    #[test]
    fn custom_persona_overrides_builtin_with_same_key() {
        let config = SupportConfig {
            custom_personas: vec![custom_config("Friend")],
            ..Default::default()
        };
        let registry = PersonaRegistry::from_config(&config);
        assert_eq!(registry.len(), 5);
        let friend = registry.get("friend").unwrap();
        assert_eq!(friend.description(), "test persona");
    }

    #[test]
    fn empty_required_bank_is_rejected_at_load() {
        let mut bad = custom_config("Hollow");
        bad.messages.clear();
        let config = SupportConfig {
            custom_personas: vec![bad, custom_config("Wise Owl")],
            ..Default::default()
        };
        let registry = PersonaRegistry::from_config(&config);
        assert!(registry.get("hollow").is_none());
        assert!(registry.get("wise_owl").is_some());
    }
}
