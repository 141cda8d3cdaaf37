use crate::agent::{agents_to_json, Agent};
use crate::agents::financial::FinancialAgent;
use crate::agents::search::SearchAgent;
use crate::prompt;
use anyhow::Result;
use serde_json::{json, Value};
use std::collections::HashMap;

mod claude;
use claude::CoordinatorClaude;

/// Composite agent that routes queries to the specialized sub-agents.
/// Its tool list is the two wrapped sub-agents; the routing decision itself
/// is made by the model from the coordinator instruction text.
pub struct CoordinatorAgent {
    claude: CoordinatorClaude,
    sub_agents: Vec<Box<dyn Agent>>,
}

impl CoordinatorAgent {
    pub fn new() -> Result<Self> {
        let claude = CoordinatorClaude::new()?;
        let sub_agents: Vec<Box<dyn Agent>> = vec![
            Box::new(SearchAgent::new()?),
            Box::new(FinancialAgent::new()?),
        ];
        log::info!("Coordinator initialized with {} sub-agents", sub_agents.len());
        Ok(Self { claude, sub_agents })
    }
}

#[async_trait::async_trait]
impl Agent for CoordinatorAgent {
    fn name(&self) -> &str {
        "coordinator"
    }

    fn description(&self) -> &str {
        "Coordinates user queries by routing them to the search and financial agents"
    }

    fn model(&self) -> &str {
        self.claude.model()
    }

    fn instruction(&self) -> &str {
        prompt::COORDINATOR_PROMPT
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The query to analyze and route to an appropriate sub-agent"
                }
            },
            "required": ["query"]
        })
    }

    fn tool_names(&self) -> Vec<String> {
        self.sub_agents
            .iter()
            .map(|agent| agent.name().to_string())
            .collect()
    }

    async fn execute(&self, query: &str) -> Result<String> {
        log::info!("Coordinator processing query: {}", query);

        let agent_refs: Vec<&dyn Agent> = self.sub_agents.iter().map(|a| a.as_ref()).collect();

        // Advertise sub-agents to the model as tools
        let agents_json = agents_to_json(&agent_refs);

        // Lookup map for dispatching tool_use blocks
        let agent_map: HashMap<String, &dyn Agent> = agent_refs
            .iter()
            .map(|agent| (agent.name().to_string(), *agent))
            .collect();

        let response = self
            .claude
            .call_claude_api(query, &agents_json, &agent_map)
            .await?;

        log::info!("Coordinator query completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_config() {
        std::env::set_var("CLAUDE_API_KEY", "test-key");
    }

    #[test]
    fn coordinator_wraps_both_sub_agents() {
        set_test_config();
        let coordinator = CoordinatorAgent::new().unwrap();
        let mut tools = coordinator.tool_names();
        tools.sort();
        assert_eq!(tools, vec!["financial_agent", "search_agent"]);
    }

    #[test]
    fn coordinator_descriptor_shape() {
        set_test_config();
        let coordinator = CoordinatorAgent::new().unwrap();
        assert_eq!(coordinator.name(), "coordinator");
        assert!(!coordinator.instruction().is_empty());
        assert!(!coordinator.model().is_empty());
        assert_eq!(coordinator.tool_names().len(), 2);
    }

    #[test]
    fn construction_is_idempotent() {
        set_test_config();
        let first = CoordinatorAgent::new().unwrap();
        let second = CoordinatorAgent::new().unwrap();
        assert_eq!(first.name(), second.name());
        assert_eq!(first.model(), second.model());
        assert_eq!(first.instruction(), second.instruction());
        assert_eq!(first.tool_names(), second.tool_names());
    }
}
