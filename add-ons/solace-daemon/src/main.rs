//! Solace support daemon: newline-delimited JSON tool server on stdio.
//!
//! Reads one request per line (`{"tool": "...", "arguments": {...}}` or
//! `{"op": "list_tools"}`) and writes one JSON reply per line. Logs go to
//! stderr; stdout carries only replies. Request-content problems come back
//! as textual `Error: ...` replies, never as transport faults.

use solace_core::{GetSupportSkill, SkillRegistry, SupportConfig, SupportEngine};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[solace-daemon] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = SupportConfig::resolve_path(std::env::args().skip(1));
    let config = SupportConfig::load_or_default(config_path.as_deref());
    let engine = Arc::new(SupportEngine::from_config(&config));

    let mut skills = SkillRegistry::new();
    skills.register(Arc::new(GetSupportSkill::new(Arc::clone(&engine))));
    let skills = Arc::new(skills);

    tracing::info!(
        personas = engine.registry().len(),
        "Solace support daemon running on stdio"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if line.trim().is_empty() {
                            continue;
                        }
                        let reply = handle_request(&skills, &line).await;
                        let mut out = reply.to_string();
                        out.push('\n');
                        if let Err(e) = stdout.write_all(out.as_bytes()).await {
                            tracing::error!(error = %e, "stdout write failed; shutting down");
                            break;
                        }
                        let _ = stdout.flush().await;
                    }
                    Ok(None) => break, // EOF: transport closed
                    Err(e) => {
                        tracing::error!(error = %e, "stdin read failed; shutting down");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("CTRL-C received; shutting down daemon");
                break;
            }
        }
    }
}

async fn handle_request(skills: &SkillRegistry, line: &str) -> serde_json::Value {
    let request: serde_json::Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(target: "solace::daemon", error = %e, "unparseable request line");
            return solace_core::text_reply(format!("Error: invalid request: {}", e));
        }
    };

    if request.get("op").and_then(|v| v.as_str()) == Some("list_tools") {
        return serde_json::json!({ "tools": skills.descriptors() });
    }

    let tool = request.get("tool").and_then(|v| v.as_str()).unwrap_or_default();
    let args = request.get("arguments").cloned();
    skills.dispatch(tool, args).await
}
