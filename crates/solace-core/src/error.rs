//! Error taxonomy for the support flow.
//!
//! Everything raised while handling `get_support` is converted into a textual
//! `Error: ...` reply at the skill boundary; nothing propagates to the
//! transport as a protocol-level fault.

use thiserror::Error;

/// Errors raised while handling a support request.
#[derive(Debug, Error)]
pub enum SupportError {
    /// The required `situation` field was absent (or empty) in the request.
    #[error("situation is required")]
    MissingSituation,

    /// A persona key could not be resolved in the registry. The classifier
    /// only emits built-in keys, so this indicates a misconfigured registry
    /// rather than a classification bug.
    #[error("Persona {0} not found")]
    PersonaNotFound(String),
}

/// Errors from loading the optional JSON configuration document.
///
/// Never fatal: the caller logs the failure and proceeds with the built-in
/// personas only.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
