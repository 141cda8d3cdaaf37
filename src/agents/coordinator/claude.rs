use crate::agent::Agent;
use crate::prompt;
use crate::utils;
use crate::ClaudeConfig;
use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;

/// A delegation request extracted from a tool_use content block
#[derive(Debug, Clone)]
struct Delegation {
    agent_name: String,
    query: Option<String>,
    tool_use_id: String,
}

pub struct CoordinatorClaude {
    config: ClaudeConfig,
}

impl CoordinatorClaude {
    pub fn new() -> Result<Self> {
        let config = ClaudeConfig::new()?;
        Ok(Self { config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Call Claude API with the sub-agents advertised as tools.
    /// Each tool_use block is dispatched to the matching sub-agent and the
    /// result is fed back to the model as a tool_result message.
    pub async fn call_claude_api(
        &self,
        query: &str,
        agents_json: &[Value],
        agent_map: &HashMap<String, &dyn Agent>,
    ) -> Result<String> {
        let mut messages = vec![json!({
            "role": "user",
            "content": query
        })];

        let mut round = 0;
        let max_rounds = 100;
        let mut last_message = String::new();

        loop {
            round += 1;
            if round > max_rounds {
                log::warn!("Coordinator reached maximum rounds: {}", max_rounds);
                break;
            }

            let request_payload = json!({
                "model": self.config.model,
                "max_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
                "system": prompt::COORDINATOR_PROMPT,
                "messages": messages,
                "tools": agents_json
            });

            log::debug!("Coordinator calling Claude API - Round {}", round);

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

            // Store the full Claude response
            utils::store_claude_message("coordinator", &claude_response)?;

            let content = match claude_response.get("content").and_then(|c| c.as_array()) {
                Some(array) => array.clone(),
                None => break,
            };

            let mut delegations = Vec::new();
            for block in &content {
                match block.get("type").and_then(|t| t.as_str()) {
                    Some("tool_use") => {
                        let id = block.get("id").and_then(|id| id.as_str());
                        let name = block.get("name").and_then(|n| n.as_str());
                        if let (Some(id), Some(name)) = (id, name) {
                            delegations.push(Delegation {
                                agent_name: name.to_string(),
                                query: block
                                    .get("input")
                                    .and_then(|i| i.get("query"))
                                    .and_then(|q| q.as_str())
                                    .map(str::to_string),
                                tool_use_id: id.to_string(),
                            });
                        }
                    }
                    Some("text") => {
                        if let Some(text) = block.get("text").and_then(|t| t.as_str()) {
                            last_message = text.to_string();
                        }
                    }
                    _ => {}
                }
            }

            if delegations.is_empty() {
                // No delegation requested, conversation complete
                break;
            }

            // Echo the assistant turn, then answer each tool_use
            messages.push(json!({
                "role": "assistant",
                "content": content
            }));

            for delegation in delegations {
                let result = self.dispatch(&delegation, agent_map).await;
                messages.push(json!({
                    "role": "user",
                    "content": [{
                        "type": "tool_result",
                        "tool_use_id": delegation.tool_use_id,
                        "content": result
                    }]
                }));
            }
        }

        if last_message.trim().is_empty() {
            Ok("Query completed successfully".to_string())
        } else {
            Ok(last_message)
        }
    }

    /// Run one delegation against its sub-agent. Failures are reported back
    /// to the model as result text rather than raised, so it can recover.
    async fn dispatch(
        &self,
        delegation: &Delegation,
        agent_map: &HashMap<String, &dyn Agent>,
    ) -> String {
        let agent = match agent_map.get(delegation.agent_name.as_str()) {
            Some(agent) => *agent,
            None => return format!("Agent not found: {}", delegation.agent_name),
        };

        let query = match delegation.query.as_deref() {
            Some(query) => query,
            None => return "No query provided to agent".to_string(),
        };

        log::info!("Coordinator delegating to agent: {}", delegation.agent_name);

        match agent.execute(query).await {
            Ok(result) => {
                log::info!("Agent {} completed successfully", delegation.agent_name);
                result
            }
            Err(e) => {
                log::error!("Agent {} failed: {}", delegation.agent_name, e);
                format!("Agent execution failed: {}", e)
            }
        }
    }
}
