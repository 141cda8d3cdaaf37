// Re-export Agent trait and helper functions from main agent module
pub use crate::agent::{agents_to_json, Agent};

// Agent implementation modules
pub mod coordinator;
pub mod financial;
pub mod search;

// Re-export main agents
pub use coordinator::CoordinatorAgent;
pub use financial::FinancialAgent;
pub use search::SearchAgent;
