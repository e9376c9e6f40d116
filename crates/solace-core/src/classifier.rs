//! Situation classifier: ordered keyword rules mapping a request to a persona.
//!
//! Pure and deterministic: case-insensitive substring matching over a fixed
//! rule list where the first match wins. The rules are mutually
//! non-exclusive; evaluation order is part of the contract.
//! Rule 5 is a catch-all; classification never fails.

use crate::persona::PersonaRegistry;
use serde::{Deserialize, Serialize};

/// Overwhelm/anxiety patterns (rule 1) → motherly.
const OVERWHELM_STATES: &[&str] = &["overwhelmed", "anxious"];
const OVERWHELM_SITUATIONS: &[&str] = &["too much", "can't handle"];

/// Technical/learning patterns (rule 2) → mentor.
const TECHNICAL_SITUATIONS: &[&str] = &["technical", "code", "algorithm", "debug", "learning"];
const TECHNICAL_CONTEXTS: &[&str] = &["programming"];

/// Professional/work patterns (rule 3) → fatherfigure.
const WORK_SITUATIONS: &[&str] = &["work", "professional", "career", "deadline"];
const WORK_CONTEXTS: &[&str] = &["project"];

/// Therapeutic-support patterns (rule 4) → therapist.
const THERAPY_STATES: &[&str] = &["depressed", "therapy"];
const THERAPY_SITUATIONS: &[&str] = &["cognitive", "mental health"];

const MOTHERLY_REASONING: &str = "You seem to be feeling overwhelmed. The motherly persona provides nurturing, unconditional support to help you feel grounded and cared for.";
const MENTOR_REASONING: &str = "This appears to be a technical or learning challenge. The mentor persona offers wise guidance focused on growth and skill development.";
const FATHER_FIGURE_REASONING: &str = "This seems like a professional or work-related challenge. The father figure persona provides steady, protective guidance with quiet confidence.";
const THERAPIST_REASONING: &str = "Your situation suggests you could benefit from professional therapeutic support. The therapist persona offers structured, empathetic guidance with cognitive reframing.";
const FRIEND_REASONING: &str = "For this general challenge, the friend persona will provide casual, encouraging support like talking to a close buddy.";

/// Outcome of classifying one request. Produced per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Registry key of the chosen persona (always a built-in key).
    pub persona_key: String,
    /// Display name resolved from the live registry, so a custom override
    /// changes the displayed name even though the rules are config-independent.
    pub persona_name: String,
    /// Fixed, rule-specific sentence explaining the choice.
    pub reasoning: String,
    /// Verbatim restatement of the inputs.
    pub analysis: String,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Maps (situation, context, emotional state) to a persona key plus
/// human-readable reasoning. Missing optional inputs are treated as empty
/// strings; all matching runs on lowercased copies.
pub fn classify(
    registry: &PersonaRegistry,
    situation: &str,
    context: Option<&str>,
    emotional_state: Option<&str>,
) -> Classification {
    let situation_lower = situation.to_lowercase();
    let context_lower = context.unwrap_or("").to_lowercase();
    let emotional_lower = emotional_state.unwrap_or("").to_lowercase();

    let (persona_key, reasoning) = if contains_any(&emotional_lower, OVERWHELM_STATES)
        || contains_any(&situation_lower, OVERWHELM_SITUATIONS)
    {
        ("motherly", MOTHERLY_REASONING)
    } else if contains_any(&situation_lower, TECHNICAL_SITUATIONS)
        || contains_any(&context_lower, TECHNICAL_CONTEXTS)
    {
        ("mentor", MENTOR_REASONING)
    } else if contains_any(&situation_lower, WORK_SITUATIONS)
        || contains_any(&context_lower, WORK_CONTEXTS)
    {
        ("fatherfigure", FATHER_FIGURE_REASONING)
    } else if contains_any(&emotional_lower, THERAPY_STATES)
        || contains_any(&situation_lower, THERAPY_SITUATIONS)
    {
        ("therapist", THERAPIST_REASONING)
    } else {
        ("friend", FRIEND_REASONING)
    };

    // Display name reflects current registry state (custom overrides included).
    let persona_name = registry
        .display_name(persona_key)
        .unwrap_or_else(|| persona_key.to_string());

    let mut analysis = format!("I've analyzed your situation: \"{}\"", situation);
    if let Some(context) = context.filter(|c| !c.is_empty()) {
        analysis.push_str(&format!(" in the context of: \"{}\"", context));
    }
    if let Some(state) = emotional_state.filter(|s| !s.is_empty()) {
        analysis.push_str(&format!(" while feeling: \"{}\"", state));
    }
    analysis.push('.');

    Classification {
        persona_key: persona_key.to_string(),
        persona_name,
        reasoning: reasoning.to_string(),
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PersonaConfig, SupportConfig};

    fn registry() -> PersonaRegistry {
        PersonaRegistry::builtin()
    }

    #[test]
    fn overwhelm_rule_wins_over_later_matches() {
        let c = classify(
            &registry(),
            "I feel like this is too much and I can't handle it",
            None,
            Some("overwhelmed"),
        );
        assert_eq!(c.persona_key, "motherly");
        assert_eq!(c.persona_name, "Motherly");
    }

    #[test]
    fn technical_rule_precedes_work_rule() {
        // "work" and "project" also match rule 3, but rule 2 fires first.
        let c = classify(
            &registry(),
            "I'm stuck debugging this algorithm for my project at work",
            Some("programming"),
            None,
        );
        assert_eq!(c.persona_key, "mentor");
    }

    #[test]
    fn work_rule_matches_on_context_project() {
        let c = classify(&registry(), "nothing is going right", Some("project"), None);
        assert_eq!(c.persona_key, "fatherfigure");
        assert_eq!(c.persona_name, "Father Figure");
    }

    #[test]
    fn therapy_rule_matches_emotional_state() {
        let c = classify(&registry(), "everything is gray lately", None, Some("depressed"));
        assert_eq!(c.persona_key, "therapist");
    }

    #[test]
    fn default_rule_covers_everything_else() {
        let c = classify(&registry(), "I just feel stuck today", None, None);
        assert_eq!(c.persona_key, "friend");
        assert_eq!(
            c.analysis,
            "I've analyzed your situation: \"I just feel stuck today\"."
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let c = classify(&registry(), "STUCK ON A TRICKY ALGORITHM", None, None);
        assert_eq!(c.persona_key, "mentor");
    }

    #[test]
    fn classification_is_deterministic() {
        let a = classify(&registry(), "deadline pressure", None, Some("tense"));
        for _ in 0..8 {
            let b = classify(&registry(), "deadline pressure", None, Some("tense"));
            assert_eq!(a.persona_key, b.persona_key);
            assert_eq!(a.reasoning, b.reasoning);
            assert_eq!(a.analysis, b.analysis);
        }
    }

    #[test]
    fn analysis_restates_all_present_inputs() {
        let c = classify(&registry(), "stuck", Some("side quest"), Some("meh"));
        assert_eq!(
            c.analysis,
            "I've analyzed your situation: \"stuck\" in the context of: \"side quest\" while feeling: \"meh\"."
        );
    }

    #[test]
    fn custom_override_changes_displayed_name_only() {
        let config = SupportConfig {
            custom_personas: vec![PersonaConfig {
                name: "Friend".to_string(),
                description: "replacement".to_string(),
                response_style: "blunt".to_string(),
                messages: vec!["m".to_string()],
                affirmations: vec!["a".to_string()],
                suggestions: Vec::new(),
            }],
            ..Default::default()
        };
        let registry = PersonaRegistry::from_config(&config);
        let c = classify(&registry, "I just feel stuck today", None, None);
        assert_eq!(c.persona_key, "friend");
        assert_eq!(c.persona_name, "Friend");
        assert_eq!(c.reasoning, FRIEND_REASONING);
    }
}
