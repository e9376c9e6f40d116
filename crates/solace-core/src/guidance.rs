//! Incorporation guidance: how to apply the persona's support.
//!
//! Deterministic template filling; the only variability is whether the
//! response carried a suggestion.

use crate::error::SupportError;
use crate::persona::{PersonaRegistry, PersonaResponse};

/// One-line behavioral tip per built-in persona key.
const PERSONA_TIPS: &[(&str, &str)] = &[
    ("motherly", "Let yourself feel nurtured and safe. It's okay to ask for help and take things one step at a time."),
    ("therapist", "Practice the cognitive reframing techniques suggested. Notice your thought patterns and gently challenge negative self-talk."),
    ("friend", "Remember that everyone struggles sometimes. Talk to yourself like you would encourage a good friend."),
    ("mentor", "Focus on the learning opportunity in this challenge. Each difficulty is building your skills and resilience."),
    ("fatherfigure", "Trust in your capabilities while staying grounded. Take steady, confident steps forward."),
];

const GENERIC_TIP: &str = "Apply the wisdom you've received with self-compassion.";

/// Behavioral tip for `key`; unknown and custom keys get the generic tip.
pub fn persona_tip(key: &str) -> &'static str {
    PERSONA_TIPS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, tip)| *tip)
        .unwrap_or(GENERIC_TIP)
}

/// Builds the "how to use this" follow-up text for a generated response.
/// Fails only when `persona_key` is absent from the registry.
pub fn compose_guidance(
    registry: &PersonaRegistry,
    persona_key: &str,
    response: &PersonaResponse,
) -> Result<String, SupportError> {
    let persona = registry
        .get(persona_key)
        .ok_or_else(|| SupportError::PersonaNotFound(persona_key.to_string()))?;

    let second_step = match &response.suggestion {
        Some(suggestion) => format!("Consider the suggestion: \"{}\"", suggestion),
        None => "Reflect on the supportive message you just received".to_string(),
    };

    Ok(format!(
        "Here's how to incorporate {}'s support:\n\n\
         **Immediate Steps:**\n\
         1. Take a moment to let the affirmation sink in: \"{}\"\n\
         2. {}\n\n\
         **Moving Forward:**\n\
         - Remember this support when similar challenges arise\n\
         - {}\n\
         - Be patient and compassionate with yourself as you apply this guidance\n\n\
         **If you need more support:** You can always return here when facing future challenges.",
        persona.name(),
        response.affirmation,
        second_step,
        persona_tip(persona_key),
    ))
}
