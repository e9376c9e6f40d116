//! solace-core: persona-based emotional support.
//!
//! The flow per request: the situation classifier picks a persona key, the
//! registry resolves it to a persona, the persona samples a response from its
//! banks, and the guidance composer explains how to apply it. The skill layer
//! wraps the whole workflow as the single `get_support` tool.

mod classifier;
mod config;
mod engine;
mod error;
mod guidance;
mod persona;
mod sampler;
mod skill;

// Classification
pub use classifier::{classify, Classification};

// Configuration (best-effort JSON, built-ins-only fallback)
pub use config::{PersonaConfig, SupportConfig};

// Orchestration
pub use engine::{SupportEngine, SupportReport, SupportRequest};

// Errors
pub use error::{ConfigError, SupportError};

// Guidance composition
pub use guidance::{compose_guidance, persona_tip};

// Personas & registry
pub use persona::{
    normalize_key, CustomPersona, FatherFigurePersona, FriendPersona, MentorPersona,
    MotherlyPersona, Persona, PersonaRegistry, PersonaResponse, SupportContext, TherapistPersona,
    BUILTIN_KEYS, SEEKING_SUPPORT,
};

// Bank sampling (injectable random source)
pub use sampler::{BankSampler, RandomSampler, SequenceSampler};

// Skill boundary (structured call → structured reply)
pub use skill::{text_reply, AgentSkill, GetSupportSkill, SkillRegistry};
