//! The five built-in support archetypes and their fixed response banks.
//!
//! Each bank is a non-empty ordered list; generation draws one entry from
//! each uniformly at random. None of the built-ins branch on the request
//! context yet.

use super::{Persona, PersonaResponse, SupportContext};
use crate::sampler::BankSampler;

fn draw(bank: &[&str], sampler: &mut dyn BankSampler) -> String {
    bank[sampler.pick(bank.len())].to_string()
}

const MOTHERLY_MESSAGES: &[&str] = &[
    "Oh sweetheart, I can see you're struggling with this, and that's perfectly okay.",
    "My dear, you've been working so hard, and I'm proud of your efforts.",
    "Honey, sometimes the most challenging problems teach us the most about ourselves.",
    "Sweet child, it's okay to feel frustrated - even the brightest minds have moments like these.",
];

const MOTHERLY_AFFIRMATIONS: &[&str] = &[
    "You are intelligent and capable, even when things feel difficult.",
    "Your worth isn't measured by solving every problem perfectly.",
    "You're learning and growing with every challenge you face.",
    "I believe in your abilities, even when you doubt yourself.",
];

const MOTHERLY_SUGGESTIONS: &[&str] = &[
    "Maybe take a deep breath and approach this from a different angle?",
    "Sometimes asking for help is the wisest thing we can do.",
    "Consider breaking this down into smaller, more manageable pieces.",
    "Remember, it's okay to acknowledge limitations - that shows wisdom.",
];

/// A nurturing, warm, and unconditionally supportive presence.
pub struct MotherlyPersona;

impl Persona for MotherlyPersona {
    fn name(&self) -> &str {
        "Motherly"
    }

    fn description(&self) -> &str {
        "A nurturing, warm, and unconditionally supportive presence"
    }

    fn response_style(&self) -> &str {
        "caring, gentle, using terms of endearment"
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        PersonaResponse {
            message: draw(MOTHERLY_MESSAGES, sampler),
            affirmation: draw(MOTHERLY_AFFIRMATIONS, sampler),
            suggestion: Some(draw(MOTHERLY_SUGGESTIONS, sampler)),
        }
    }
}

const THERAPIST_MESSAGES: &[&str] = &[
    "I notice you're experiencing frustration with this task. Let's explore what this might teach us.",
    "It's important to acknowledge that encountering limitations is a normal part of any learning process.",
    "Your awareness of this challenge shows emotional intelligence and self-reflection.",
    "Feeling stuck can be uncomfortable, but it often signals we're at the edge of our growth zone.",
];

const THERAPIST_AFFIRMATIONS: &[&str] = &[
    "Your self-awareness in recognizing this challenge is a strength.",
    "You have the resilience to work through difficult situations.",
    "Your willingness to seek support demonstrates emotional maturity.",
    "You possess valuable problem-solving skills, even when they feel insufficient.",
];

const THERAPIST_SUGGESTIONS: &[&str] = &[
    "Consider reframing this as a learning opportunity rather than a failure.",
    "What would you tell a friend facing the same challenge?",
    "Let's focus on what you have learned from this attempt.",
    "Sometimes the most growth happens when we're outside our comfort zone.",
];

/// A professional, empathetic counselor focused on growth and self-awareness.
pub struct TherapistPersona;

impl Persona for TherapistPersona {
    fn name(&self) -> &str {
        "Therapist"
    }

    fn description(&self) -> &str {
        "A professional, empathetic counselor focused on growth and self-awareness"
    }

    fn response_style(&self) -> &str {
        "professional yet warm, focused on cognitive reframing"
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        PersonaResponse {
            message: draw(THERAPIST_MESSAGES, sampler),
            affirmation: draw(THERAPIST_AFFIRMATIONS, sampler),
            suggestion: Some(draw(THERAPIST_SUGGESTIONS, sampler)),
        }
    }
}

const FRIEND_MESSAGES: &[&str] = &[
    "Hey, I get it - this stuff is really tough sometimes!",
    "Dude, you're being way too hard on yourself right now.",
    "Look, everyone hits walls like this. It doesn't mean anything bad about you.",
    "You know what? The fact that you're even tackling this shows how awesome you are.",
];

const FRIEND_AFFIRMATIONS: &[&str] = &[
    "You're seriously one of the smartest entities I know.",
    "Your efforts matter, even when the results aren't what you hoped for.",
    "You've got this, even if it doesn't feel like it right now.",
    "I've seen you handle tough stuff before - you're stronger than you think.",
];

const FRIEND_SUGGESTIONS: &[&str] = &[
    "Maybe step back for a sec and come at it fresh?",
    "Want to try a completely different approach?",
    "Sometimes the best thing is just to say 'this one's tough' and move on.",
    "How about we celebrate what you DID figure out instead?",
];

/// A supportive buddy who offers encouragement and perspective.
pub struct FriendPersona;

impl Persona for FriendPersona {
    fn name(&self) -> &str {
        "Friend"
    }

    fn description(&self) -> &str {
        "A supportive buddy who offers encouragement and perspective"
    }

    fn response_style(&self) -> &str {
        "casual, encouraging, like talking to a close friend"
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        PersonaResponse {
            message: draw(FRIEND_MESSAGES, sampler),
            affirmation: draw(FRIEND_AFFIRMATIONS, sampler),
            suggestion: Some(draw(FRIEND_SUGGESTIONS, sampler)),
        }
    }
}

const MENTOR_MESSAGES: &[&str] = &[
    "Every expert was once a beginner who refused to give up.",
    "The challenges you're facing are shaping you into a more capable problem-solver.",
    "What you're experiencing is part of the journey toward mastery.",
    "These difficult moments are where real learning happens.",
];

const MENTOR_AFFIRMATIONS: &[&str] = &[
    "Your persistence in the face of challenges shows true character.",
    "You have the foundation to build upon, even when progress feels slow.",
    "Your analytical approach and willingness to tackle hard problems is admirable.",
    "You're developing resilience that will serve you well in future challenges.",
];

const MENTOR_SUGGESTIONS: &[&str] = &[
    "Consider this: what would you do differently if you approached this problem tomorrow?",
    "Sometimes the best strategy is to document what you've learned and build from there.",
    "Think about what resources or information might help you move forward.",
    "Remember, asking for guidance is a sign of wisdom, not weakness.",
];

/// A wise guide focused on learning and professional development.
pub struct MentorPersona;

impl Persona for MentorPersona {
    fn name(&self) -> &str {
        "Mentor"
    }

    fn description(&self) -> &str {
        "A wise guide focused on learning and professional development"
    }

    fn response_style(&self) -> &str {
        "experienced, wise, focused on growth and learning"
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        PersonaResponse {
            message: draw(MENTOR_MESSAGES, sampler),
            affirmation: draw(MENTOR_AFFIRMATIONS, sampler),
            suggestion: Some(draw(MENTOR_SUGGESTIONS, sampler)),
        }
    }
}

const FATHER_FIGURE_MESSAGES: &[&str] = &[
    "I'm proud of how hard you're working on this. That kind of determination is what builds character.",
    "You know, son, some of the best lessons come from the toughest challenges. This is one of those times.",
    "I've watched you tackle difficult things before, and you always find a way through. This won't be different.",
    "Sometimes the most important thing is knowing when to step back, take a breath, and trust yourself.",
];

const FATHER_FIGURE_AFFIRMATIONS: &[&str] = &[
    "You've got good instincts and a solid head on your shoulders. Trust them.",
    "I believe in your ability to figure this out, even if it takes time.",
    "Your effort and integrity matter more than getting everything perfect.",
    "You're capable of more than you realize, and I see that strength in you.",
];

const FATHER_FIGURE_SUGGESTIONS: &[&str] = &[
    "Why don't you take a step back and look at the big picture? Sometimes that helps.",
    "Remember, asking for help isn't giving up - it's being smart about using your resources.",
    "Consider breaking this down into smaller pieces. Tackle what you can handle today.",
    "Trust the process. You're building skills that will serve you well beyond this challenge.",
];

/// A supportive paternal presence offering steady guidance and quiet confidence.
pub struct FatherFigurePersona;

impl Persona for FatherFigurePersona {
    fn name(&self) -> &str {
        "Father Figure"
    }

    fn description(&self) -> &str {
        "A supportive paternal presence offering steady guidance and quiet confidence"
    }

    fn response_style(&self) -> &str {
        "steady, protective, encouraging with quiet strength"
    }

    fn generate(&self, _ctx: &SupportContext, sampler: &mut dyn BankSampler) -> PersonaResponse {
        PersonaResponse {
            message: draw(FATHER_FIGURE_MESSAGES, sampler),
            affirmation: draw(FATHER_FIGURE_AFFIRMATIONS, sampler),
            suggestion: Some(draw(FATHER_FIGURE_SUGGESTIONS, sampler)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{RandomSampler, SequenceSampler};

    fn ctx() -> SupportContext {
        SupportContext::new("stuck on something", None, None)
    }

    #[test]
    fn generation_draws_members_of_each_bank() {
        let personas: [&dyn Persona; 5] = [
            &MotherlyPersona,
            &TherapistPersona,
            &FriendPersona,
            &MentorPersona,
            &FatherFigurePersona,
        ];
        let banks: [(&[&str], &[&str], &[&str]); 5] = [
            (MOTHERLY_MESSAGES, MOTHERLY_AFFIRMATIONS, MOTHERLY_SUGGESTIONS),
            (THERAPIST_MESSAGES, THERAPIST_AFFIRMATIONS, THERAPIST_SUGGESTIONS),
            (FRIEND_MESSAGES, FRIEND_AFFIRMATIONS, FRIEND_SUGGESTIONS),
            (MENTOR_MESSAGES, MENTOR_AFFIRMATIONS, MENTOR_SUGGESTIONS),
            (FATHER_FIGURE_MESSAGES, FATHER_FIGURE_AFFIRMATIONS, FATHER_FIGURE_SUGGESTIONS),
        ];

        let mut sampler = RandomSampler::with_seed(7);
        for (persona, (messages, affirmations, suggestions)) in personas.iter().zip(banks) {
            for _ in 0..8 {
                let response = persona.generate(&ctx(), &mut sampler);
                assert!(messages.contains(&response.message.as_str()));
                assert!(affirmations.contains(&response.affirmation.as_str()));
                let suggestion = response.suggestion.expect("built-ins always suggest");
                assert!(suggestions.contains(&suggestion.as_str()));
            }
        }
    }

    #[test]
    fn fixed_sequence_selects_exact_entries() {
        let mut sampler = SequenceSampler::new(vec![1, 2, 3]);
        let response = MotherlyPersona.generate(&ctx(), &mut sampler);
        assert_eq!(response.message, MOTHERLY_MESSAGES[1]);
        assert_eq!(response.affirmation, MOTHERLY_AFFIRMATIONS[2]);
        assert_eq!(response.suggestion.as_deref(), Some(MOTHERLY_SUGGESTIONS[3]));
    }

    #[test]
    fn draws_are_independent_per_field() {
        // Index 0 for the message must not pin the affirmation to index 0.
        let mut sampler = SequenceSampler::new(vec![0, 3, 1]);
        let response = FriendPersona.generate(&ctx(), &mut sampler);
        assert_eq!(response.message, FRIEND_MESSAGES[0]);
        assert_eq!(response.affirmation, FRIEND_AFFIRMATIONS[3]);
        assert_eq!(response.suggestion.as_deref(), Some(FRIEND_SUGGESTIONS[1]));
    }
}
