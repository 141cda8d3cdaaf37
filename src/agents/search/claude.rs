use super::context::ContextManager;
use crate::prompt;
use crate::tool::{tools_to_json, Tool};
use crate::utils;
use crate::ClaudeConfig;
use anyhow::Result;
use serde_json::{json, Value};

/// A tool invocation extracted from a tool_use content block
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub name: String,
    pub arguments: String,
    pub tool_use_id: String,
}

pub struct SearchClaude {
    config: ClaudeConfig,
    context_manager: ContextManager,
}

impl SearchClaude {
    pub fn new() -> Result<Self> {
        let config = ClaudeConfig::new()?;
        let context_manager = ContextManager::new();

        Ok(Self {
            config,
            context_manager,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// The timeout-configured HTTP client, shared with the agent's tools
    pub fn client(&self) -> reqwest::Client {
        self.config.client.clone()
    }

    /// Execute query with web search available
    pub async fn execute_query(&self, query: &str, tools: &[Box<dyn Tool>]) -> Result<String> {
        self.call_claude_api(query, tools).await
    }

    async fn run_tool(&self, call: &ToolCall, tools: &[Box<dyn Tool>]) -> Result<String> {
        let tool = match tools.iter().find(|tool| tool.name() == call.name) {
            Some(tool) => tool,
            None => return Ok(format!("Tool not found: {}", call.name)),
        };

        match tool.execute(&call.arguments).await {
            Ok(result) => {
                // Archive the tool invocation alongside the model messages
                let tool_message = json!({
                    "tool": call.name,
                    "arguments": call.arguments,
                    "result": result.clone(),
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                });
                utils::store_claude_message("search_agent", &tool_message)?;

                Ok(result)
            }
            Err(e) => Ok(format!("Tool execution failed: {}", e)),
        }
    }

    /// Call Claude API with the search tools advertised
    async fn call_claude_api(&self, query: &str, tools: &[Box<dyn Tool>]) -> Result<String> {
        let tools_json: Vec<Value> = tools_to_json(tools);

        let mut messages = vec![json!({
            "role": "user",
            "content": query
        })];

        let mut round = 0;
        let max_rounds = 100;

        loop {
            round += 1;
            if round > max_rounds {
                log::warn!("SearchAgent reached maximum rounds: {}", max_rounds);
                break;
            }

            let request_payload = json!({
                "model": self.config.model,
                "max_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
                "system": prompt::SEARCH_AGENT_PROMPT,
                "messages": messages,
                "tools": tools_json
            });

            log::debug!("SearchAgent calling Claude API - Round {}", round);

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
            utils::store_claude_message("search_agent", &claude_response)?;

            let content = match claude_response.get("content").and_then(|c| c.as_array()) {
                Some(array) => array.clone(),
                None => break,
            };

            let mut tool_calls = Vec::new();
            let mut text_response = String::new();

            for block in &content {
                match block.get("type").and_then(|t| t.as_str()) {
                    Some("tool_use") => {
                        let id = block.get("id").and_then(|id| id.as_str());
                        let name = block.get("name").and_then(|n| n.as_str());
                        let input = block.get("input");
                        if let (Some(id), Some(name), Some(input)) = (id, name, input) {
                            tool_calls.push(ToolCall {
                                name: name.to_string(),
                                arguments: input.to_string(),
                                tool_use_id: id.to_string(),
                            });
                        }
                    }
                    Some("text") => {
                        if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                            text_response = text.to_string();
                        }
                    }
                    _ => {}
                }
            }

            if tool_calls.is_empty() {
                if !text_response.is_empty() {
                    return Ok(text_response);
                }
                break;
            }

            // Echo the assistant turn, then answer each tool_use with its
            // (truncated) result
            messages.push(json!({
                "role": "assistant",
                "content": content
            }));

            for call in &tool_calls {
                let result = self.run_tool(call, tools).await?;
                messages.push(json!({
                    "role": "user",
                    "content": [{
                        "type": "tool_result",
                        "tool_use_id": call.tool_use_id,
                        "content": self.context_manager.truncate_content(&result)
                    }]
                }));
            }
        }

        Ok("Query completed successfully".to_string())
    }
}
