use crate::agent::Agent;
use crate::prompt;
use crate::tool::Tool;
use anyhow::Result;
use serde_json::{json, Value};

mod claude;
mod context;
pub mod tools;

use claude::SearchClaude;
use tools::WebSearchTool;

/// Leaf agent that answers questions from live web search results
pub struct SearchAgent {
    claude: SearchClaude,
    tools: Vec<Box<dyn Tool>>,
}

impl SearchAgent {
    pub fn new() -> Result<Self> {
        let claude = SearchClaude::new()?;
        // Tools reuse the agent's client so CLAUDE_TIMEOUT bounds searches too
        let tools: Vec<Box<dyn Tool>> = vec![Box::new(WebSearchTool::new(claude.client()))];

        Ok(Self { claude, tools })
    }
}

#[async_trait::async_trait]
impl Agent for SearchAgent {
    fn name(&self) -> &str {
        "search_agent"
    }

    fn description(&self) -> &str {
        "Searches the web for current information and answers questions with cited sources"
    }

    fn model(&self) -> &str {
        self.claude.model()
    }

    fn instruction(&self) -> &str {
        prompt::SEARCH_AGENT_PROMPT
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The question to answer using web search"
                }
            },
            "required": ["query"]
        })
    }

    fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|tool| tool.name().to_string()).collect()
    }

    async fn execute(&self, query: &str) -> Result<String> {
        log::info!("SearchAgent executing query: {}", query);

        self.claude.execute_query(query, &self.tools).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_config() {
        std::env::set_var("CLAUDE_API_KEY", "test-key");
    }

    #[test]
    fn search_agent_has_a_search_tool() {
        set_test_config();
        let agent = SearchAgent::new().unwrap();
        assert_eq!(agent.name(), "search_agent");
        let tools = agent.tool_names();
        assert!(!tools.is_empty());
        assert!(tools.iter().any(|name| name.contains("search")));
    }

    #[test]
    fn search_agent_descriptor_shape() {
        set_test_config();
        let agent = SearchAgent::new().unwrap();
        assert!(!agent.instruction().is_empty());
        assert!(!agent.model().is_empty());
        assert!(agent.input_schema()["required"]
            .as_array()
            .unwrap()
            .contains(&json!("query")));
    }
}
