use crate::prompt;
use crate::utils;
use crate::ClaudeConfig;
use anyhow::Result;
use serde_json::{json, Value};

pub struct FinancialClaude {
    config: ClaudeConfig,
}

impl FinancialClaude {
    pub fn new() -> Result<Self> {
        let config = ClaudeConfig::new()?;
        Ok(Self { config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Single messages request, no tools. The financial agent answers from
    /// the model alone, so there is no tool-use loop to run.
    pub async fn execute_query(&self, query: &str) -> Result<String> {
        let request_payload = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "system": prompt::FINANCIAL_AGENT_PROMPT,
            "messages": [{
                "role": "user",
                "content": query
            }]
        });

        log::debug!("FinancialAgent calling Claude API");

        let response = self
            .config
            .client
            .post(&self.config.api_url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request_payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Claude API error: {}", error_text));
        }

        let claude_response: Value = response.json().await?;

        // Store the Claude response for debugging/analysis
        utils::store_claude_message("financial_agent", &claude_response)?;

        let answer = claude_response
            .get("content")
            .and_then(|content| content.as_array())
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))
                    .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        if answer.trim().is_empty() {
            Ok("Query completed successfully".to_string())
        } else {
            Ok(answer)
        }
    }
}
