use anyhow::Result;
use reqwest::Client;
use std::env;

pub mod agent;
pub mod agents;
pub mod prompt;
pub mod tool;
pub mod utils;

#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
    pub client: Client,
}

impl ClaudeConfig {
    pub fn new() -> Result<Self> {
        let api_key = env::var("CLAUDE_API_KEY")
            .map_err(|_| anyhow::anyhow!("CLAUDE_API_KEY environment variable not set"))?;
        let api_url = env::var("CLAUDE_API_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com/v1/messages".to_string());
        let model =
            env::var("CLAUDE_MODEL").unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());
        let max_tokens = env::var("CLAUDE_MAX_TOKENS")
            .unwrap_or_else(|_| "8192".to_string())
            .parse()
            .unwrap_or(8192);
        let temperature = env::var("CLAUDE_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".to_string())
            .parse()
            .unwrap_or(0.7);
        let timeout_seconds = env::var("CLAUDE_TIMEOUT")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            api_key,
            api_url,
            model,
            max_tokens,
            temperature,
            timeout_seconds,
            client,
        })
    }
}

// Re-export main agents for external use
use agent::Agent;
pub use agents::{CoordinatorAgent, FinancialAgent, SearchAgent};

/// The agent exposed to the hosting caller as the entry point.
/// Reassigning the root means changing the type constructed here.
pub fn root_agent() -> Result<CoordinatorAgent> {
    CoordinatorAgent::new()
}

/// Process message handler for host integration
pub async fn process_message(query: &str) -> Result<String> {
    // Clear the message archive for the new query
    if let Err(e) = utils::clear_message_archive() {
        log::warn!("Failed to clear message archive: {}", e);
    }

    let root = root_agent()?;

    match root.call(query).await {
        Ok(result) => {
            log::info!("Query completed successfully");
            Ok(result)
        }
        Err(e) => {
            log::error!("Query failed: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_config() {
        std::env::set_var("CLAUDE_API_KEY", "test-key");
    }

    #[test]
    fn root_binding_selects_the_coordinator() {
        set_test_config();
        let root = root_agent().unwrap();
        assert_eq!(root.name(), "coordinator");
        assert_eq!(root.tool_names().len(), 2);
    }

    #[test]
    fn config_defaults_apply_without_overrides() {
        set_test_config();
        let config = ClaudeConfig::new().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert!(config.api_url.starts_with("https://"));
        assert!(!config.model.is_empty());
        assert!(config.max_tokens > 0);
        assert!(config.timeout_seconds > 0);
    }

    #[test]
    fn descriptor_graph_is_idempotent() {
        set_test_config();
        let first = root_agent().unwrap();
        let second = root_agent().unwrap();
        assert_eq!(first.name(), second.name());
        assert_eq!(first.model(), second.model());
        assert_eq!(first.instruction(), second.instruction());
        assert_eq!(first.tool_names(), second.tool_names());
    }
}
