use anyhow::Result;
use serde_json::Value;

/// Trait for the concrete capabilities a leaf agent can advertise to the
/// model. Today only the search agent carries one (web search); the
/// coordinator's "tools" are whole sub-agents and go through `Agent` instead.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the name of the tool
    fn name(&self) -> &str;

    /// Get the description of the tool
    fn description(&self) -> &str;

    /// Get the parameters schema for the tool
    fn parameters(&self) -> Value;

    /// Entry point for tool execution with logging
    async fn call(&self, arguments: &str) -> Result<String> {
        log::info!("Tool invoked: {} - args: {}", self.name(), arguments);

        let result = self.execute(arguments).await;

        match &result {
            Ok(response) => log::info!(
                "Tool finished: {} - result: {}",
                self.name(),
                response
            ),
            Err(e) => log::error!("Tool failed: {} - error: {}", self.name(), e),
        }

        result
    }

    /// Actual implementation of the tool execution
    async fn execute(&self, arguments: &str) -> Result<String>;
}

/// Convert a tool rack to the tool-definition JSON the messages API expects
pub fn tools_to_json(tools: &[Box<dyn Tool>]) -> Vec<Value> {
    tools
        .iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name(),
                "description": tool.description(),
                "input_schema": tool.parameters()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::search::tools::WebSearchTool;

    #[test]
    fn tools_to_json_carries_name_and_schema() {
        let tools: Vec<Box<dyn Tool>> =
            vec![Box::new(WebSearchTool::new(reqwest::Client::new()))];
        let json = tools_to_json(&tools);
        assert_eq!(json.len(), 1);
        assert_eq!(json[0]["name"], "web_search");
        assert!(json[0]["input_schema"]["properties"].get("query").is_some());
    }
}
