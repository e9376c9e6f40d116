//! Optional JSON configuration: custom personas merged over the built-ins.
//!
//! Loading is best-effort by contract: a missing or unreadable document is
//! logged and treated as "no custom personas provided", never as a startup
//! failure. The parse step itself is a plain `Result` so the fallback stays
//! explicit and testable.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One custom persona entry. Wire names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaConfig {
    pub name: String,
    pub description: String,
    pub response_style: String,
    pub messages: Vec<String>,
    pub affirmations: Vec<String>,
    /// Optional; a persona without suggestions simply never suggests.
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// The whole configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportConfig {
    #[serde(default)]
    pub custom_personas: Vec<PersonaConfig>,
    /// Reserved configuration surface; accepted but not consumed yet.
    #[serde(default)]
    pub default_persona: Option<String>,
    /// Reserved configuration surface; accepted but not consumed yet.
    #[serde(default)]
    pub response_variation: Option<bool>,
}

impl SupportConfig {
    /// Parses the document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Loads from `path` when given, falling back to the empty configuration
    /// (built-in personas only) with a logged warning on any failure.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                tracing::info!(
                    target: "solace::config",
                    path = %path.display(),
                    custom_personas = config.custom_personas.len(),
                    "configuration loaded"
                );
                config
            }
            Err(e) => {
                tracing::warn!(
                    target: "solace::config",
                    path = %path.display(),
                    error = %e,
                    "configuration not loaded; using built-in personas only"
                );
                Self::default()
            }
        }
    }

    /// Resolves the config path from a `--config=<path>` argument, falling
    /// back to the `SOLACE_CONFIG` environment variable.
    pub fn resolve_path<I: Iterator<Item = String>>(args: I) -> Option<PathBuf> {
        args.into_iter()
            .find_map(|arg| arg.strip_prefix("--config=").map(PathBuf::from))
            .or_else(|| {
                std::env::var("SOLACE_CONFIG")
                    .ok()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
            })
    }
}
