//! Skill dispatch: the structured-call boundary the transport delivers into.
//!
//! The transport hands over a tool name plus JSON arguments and expects a
//! JSON reply whose content is a single text block. Request-content problems
//! (unknown tool, missing situation, unresolved persona) become textual
//! `Error: ...` replies here; they never surface as transport faults.

use crate::engine::{SupportEngine, SupportRequest};
use serde_json::{json, Value};
use std::sync::Arc;

const SKILL_NAME: &str = "get_support";

/// Wraps plain text in the reply envelope the transport expects.
pub fn text_reply(text: impl Into<String>) -> Value {
    json!({
        "content": [
            {
                "type": "text",
                "text": text.into(),
            }
        ]
    })
}

/// Trait implemented by all externally callable capabilities.
#[async_trait::async_trait]
pub trait AgentSkill: Send + Sync {
    /// Unique skill name for routing.
    fn name(&self) -> &str;

    /// Human-readable description, surfaced in tool listings.
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments.
    fn input_schema(&self) -> Value;

    /// Executes the skill with the given arguments.
    async fn execute(
        &self,
        args: Option<Value>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Registry of skills dispatched by name.
pub struct SkillRegistry {
    skills: Vec<Arc<dyn AgentSkill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self { skills: Vec::new() }
    }

    pub fn register(&mut self, skill: Arc<dyn AgentSkill>) {
        self.skills.push(skill);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn AgentSkill>> {
        self.skills.iter().find(|s| s.name() == name).cloned()
    }

    /// Tool descriptors for a `list_tools` reply.
    pub fn descriptors(&self) -> Value {
        let tools: Vec<Value> = self
            .skills
            .iter()
            .map(|s| {
                json!({
                    "name": s.name(),
                    "description": s.description(),
                    "inputSchema": s.input_schema(),
                })
            })
            .collect();
        Value::Array(tools)
    }

    /// Dispatches `name` with `args`. Every failure, unknown tool included,
    /// becomes a textual `Error: ...` reply.
    pub async fn dispatch(&self, name: &str, args: Option<Value>) -> Value {
        let Some(skill) = self.get(name) else {
            return text_reply(format!("Error: Unknown tool: {}", name));
        };
        match skill.execute(args).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(target: "solace::skill", skill = name, error = %e, "skill returned error reply");
                text_reply(format!("Error: {}", e))
            }
        }
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The single exposed operation: the complete support workflow.
pub struct GetSupportSkill {
    engine: Arc<SupportEngine>,
}

impl GetSupportSkill {
    pub fn new(engine: Arc<SupportEngine>) -> Self {
        Self { engine }
    }
}

#[async_trait::async_trait]
impl AgentSkill for GetSupportSkill {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    fn description(&self) -> &str {
        "Complete emotional support workflow: analyzes your situation, suggests the best persona, provides their support, and offers guidance on incorporating the feedback"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "situation": {
                    "type": "string",
                    "description": "Describe your current challenge, frustration, or situation where you need emotional support",
                },
                "context": {
                    "type": "string",
                    "description": "Additional context about what you're working on (optional)",
                },
                "emotional_state": {
                    "type": "string",
                    "description": "How you're feeling right now (optional - e.g., frustrated, overwhelmed, stuck, discouraged)",
                },
            },
            "required": ["situation"],
        })
    }

    async fn execute(
        &self,
        args: Option<Value>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let request: SupportRequest = match args {
            Some(value) => serde_json::from_value(value)?,
            None => SupportRequest::default(),
        };
        let report = self.engine.get_support(&request)?;
        tracing::info!(
            target: "solace::skill",
            persona = %report.classification.persona_key,
            "support reply generated"
        );
        Ok(text_reply(report.render()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::PersonaRegistry;
    use crate::sampler::SequenceSampler;

    fn registry_with_engine() -> SkillRegistry {
        let engine = Arc::new(SupportEngine::with_sampler(
            PersonaRegistry::builtin(),
            Box::new(SequenceSampler::new(vec![0])),
        ));
        let mut skills = SkillRegistry::new();
        skills.register(Arc::new(GetSupportSkill::new(engine)));
        skills
    }

    fn reply_text(reply: &Value) -> &str {
        reply["content"][0]["text"].as_str().unwrap()
    }

    #[tokio::test]
    async fn unknown_tool_becomes_text_error() {
        let skills = registry_with_engine();
        let reply = skills.dispatch("get_hugs", None).await;
        assert_eq!(reply_text(&reply), "Error: Unknown tool: get_hugs");
    }

    #[tokio::test]
    async fn missing_situation_becomes_text_error() {
        let skills = registry_with_engine();
        let reply = skills.dispatch(SKILL_NAME, Some(json!({}))).await;
        assert_eq!(reply_text(&reply), "Error: situation is required");
    }

    #[tokio::test]
    async fn happy_path_returns_full_report() {
        let skills = registry_with_engine();
        let reply = skills
            .dispatch(SKILL_NAME, Some(json!({"situation": "I just feel stuck today"})))
            .await;
        let text = reply_text(&reply);
        assert!(text.starts_with("## 🤗 Comprehensive Emotional Support"));
        assert!(text.contains("**Recommended Persona:** Friend"));
    }

    #[test]
    fn descriptors_list_the_single_tool() {
        let skills = registry_with_engine();
        let tools = skills.descriptors();
        let tools = tools.as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], SKILL_NAME);
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["situation"]));
    }
}
