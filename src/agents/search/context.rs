/// Upper bound on tool output echoed back to the model
pub const TOOL_OUTPUT_LIMIT: usize = 30000;

/// Result lines beyond this are summarized instead of echoed verbatim
pub const SEARCH_TRUNCATE_THRESHOLD: usize = 100;

/// Manages context window optimization for search results
pub struct ContextManager;

impl ContextManager {
    pub fn new() -> Self {
        Self
    }

    /// Summarize oversized search output, keeping the head and tail
    pub fn process_search_result(&self, result: String) -> String {
        let lines: Vec<&str> = result.lines().collect();

        if lines.len() <= SEARCH_TRUNCATE_THRESHOLD {
            return result;
        }

        format!(
            "Large search output ({} lines):\n\nFirst 50 lines:\n{}\n\n... [TRUNCATED] ...\n\nLast 10 lines:\n{}",
            lines.len(),
            lines.iter().take(50).cloned().collect::<Vec<_>>().join("\n"),
            lines.iter().skip(lines.len() - 10).cloned().collect::<Vec<_>>().join("\n")
        )
    }

    /// Truncate content to stay within limits.
    /// Web content is arbitrary UTF-8, so the cut must land on a char
    /// boundary or the slice panics mid-codepoint.
    pub fn truncate_content(&self, content: &str) -> String {
        let summarized = self.process_search_result(content.to_string());

        if summarized.len() <= TOOL_OUTPUT_LIMIT {
            summarized
        } else {
            let mut end = TOOL_OUTPUT_LIMIT;
            while !summarized.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... [TRUNCATED - {} total chars]",
                &summarized[..end],
                summarized.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_results_pass_through() {
        let manager = ContextManager::new();
        let result = "1. Example - https://example.com".to_string();
        assert_eq!(manager.truncate_content(&result), result);
    }

    #[test]
    fn long_results_are_summarized() {
        let manager = ContextManager::new();
        let result = (0..500)
            .map(|i| format!("{}. result line", i))
            .collect::<Vec<_>>()
            .join("\n");
        let processed = manager.process_search_result(result);
        assert!(processed.contains("[TRUNCATED]"));
        assert!(processed.contains("500 lines"));
    }

    #[test]
    fn truncation_lands_on_char_boundaries() {
        let manager = ContextManager::new();
        // One giant line; the byte limit falls inside a 3-byte codepoint
        let content = format!("x{}", "€".repeat(TOOL_OUTPUT_LIMIT));
        let truncated = manager.truncate_content(&content);
        assert!(truncated.contains("total chars"));
        assert!(truncated.len() < content.len());
    }

    #[test]
    fn oversized_content_is_capped() {
        let manager = ContextManager::new();
        // One giant line so the line-based summarizer passes it through
        let content = "x".repeat(TOOL_OUTPUT_LIMIT + 1000);
        let truncated = manager.truncate_content(&content);
        assert!(truncated.len() < content.len());
        assert!(truncated.contains("total chars"));
    }
}
