use crate::agent::Agent;
use crate::prompt;
use anyhow::Result;
use serde_json::{json, Value};

mod claude;
use claude::FinancialClaude;

/// Leaf agent that answers financial questions from the model alone.
/// It carries no tools; its whole behavior is the instruction text.
pub struct FinancialAgent {
    claude: FinancialClaude,
}

impl FinancialAgent {
    pub fn new() -> Result<Self> {
        let claude = FinancialClaude::new()?;
        Ok(Self { claude })
    }
}

#[async_trait::async_trait]
impl Agent for FinancialAgent {
    fn name(&self) -> &str {
        "financial_agent"
    }

    fn description(&self) -> &str {
        "Provides financial analysis, insights, and recommendations for financial questions"
    }

    fn model(&self) -> &str {
        self.claude.model()
    }

    fn instruction(&self) -> &str {
        prompt::FINANCIAL_AGENT_PROMPT
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The financial question to analyze"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, query: &str) -> Result<String> {
        log::info!("FinancialAgent executing query: {}", query);

        self.claude.execute_query(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_test_config() {
        std::env::set_var("CLAUDE_API_KEY", "test-key");
    }

    #[test]
    fn financial_agent_has_no_tools() {
        set_test_config();
        let agent = FinancialAgent::new().unwrap();
        assert_eq!(agent.name(), "financial_agent");
        assert!(agent.tool_names().is_empty());
    }

    #[test]
    fn financial_agent_descriptor_shape() {
        set_test_config();
        let agent = FinancialAgent::new().unwrap();
        assert!(!agent.instruction().is_empty());
        assert!(!agent.model().is_empty());
    }
}
