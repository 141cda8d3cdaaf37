use crate::tool::Tool;
use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use url::Url;

const SEARCH_ENDPOINT: &str = "https://html.duckduckgo.com/html/";
const DEFAULT_MAX_RESULTS: usize = 8;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; research-agent/0.1)";

// The DuckDuckGo HTML endpoint marks result links with class="result__a"
static RESULT_ANCHOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)<a([^>]*class="result__a"[^>]*)>(.*?)</a>"#).unwrap()
});
static HREF_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"href="([^"]+)""#).unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Web search over the DuckDuckGo HTML endpoint.
/// Shares the agent's HTTP client so the configured timeout applies to
/// search requests too.
pub struct WebSearchTool {
    client: reqwest::Client,
}

#[derive(serde::Deserialize)]
struct WebSearchParams {
    query: String,
    #[serde(default)]
    max_results: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

impl WebSearchTool {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Extract up to `max_results` results from a search results page
    pub fn parse_results(html: &str, max_results: usize) -> Vec<SearchResult> {
        let mut results = Vec::new();

        for capture in RESULT_ANCHOR.captures_iter(html) {
            if results.len() >= max_results {
                break;
            }

            let attrs = &capture[1];
            let href = match HREF_ATTR.captures(attrs) {
                Some(href) => href[1].to_string(),
                None => continue,
            };

            let url = match Self::resolve_href(&href) {
                Some(url) => url,
                None => continue,
            };

            let title = decode_entities(&HTML_TAG.replace_all(&capture[2], ""))
                .trim()
                .to_string();
            if title.is_empty() {
                continue;
            }

            results.push(SearchResult { title, url });
        }

        results
    }

    /// Unwrap DuckDuckGo redirect links (/l/?uddg=<encoded-url>&...) and
    /// drop anything that is not an external http(s) URL
    fn resolve_href(href: &str) -> Option<String> {
        let absolute = if href.starts_with("//") {
            format!("https:{}", href)
        } else if href.starts_with('/') {
            format!("https://duckduckgo.com{}", href)
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&absolute).ok()?;

        if parsed.path().starts_with("/l/") {
            let target = parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.to_string())?;
            return Url::parse(&target).ok().map(|u| u.to_string());
        }

        match parsed.scheme() {
            "http" | "https" => {}
            _ => return None,
        }

        // Skip DuckDuckGo internal links
        if parsed
            .host_str()
            .map(|host| host.ends_with("duckduckgo.com"))
            .unwrap_or(true)
        {
            return None;
        }

        Some(parsed.to_string())
    }

    fn format_results(query: &str, results: &[SearchResult]) -> String {
        let mut output = format!("Search results for '{}':\n\n", query);
        for (index, result) in results.iter().enumerate() {
            output.push_str(&format!("{}. {}\n   {}\n", index + 1, result.title, result.url));
        }
        output
    }
}

#[async_trait::async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Searches the web and returns a numbered list of result titles with their URLs."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "max_results": {
                    "type": "integer",
                    "description": "Maximum number of results to return (default 8)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, arguments: &str) -> Result<String> {
        let params: WebSearchParams = serde_json::from_str(arguments)?;
        let max_results = params.max_results.unwrap_or(DEFAULT_MAX_RESULTS);

        log::info!("Web search: {}", params.query);

        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&[("q", params.query.as_str())])
            .header("user-agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Search request failed with status: {}",
                response.status()
            ));
        }

        let html = response.text().await?;
        let results = Self::parse_results(&html, max_results);

        if results.is_empty() {
            return Ok(format!("No search results found for: {}", params.query));
        }

        Ok(Self::format_results(&params.query, &results))
    }
}

/// Minimal entity decoding for result titles
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"
        <div class="result">
            <a rel="nofollow" class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&amp;rut=abc">Example <b>Page</b></a>
        </div>
        <div class="result">
            <a rel="nofollow" class="result__a" href="https://rust-lang.org/">Rust &amp; Friends</a>
        </div>
        <div class="result">
            <a class="result__a" href="https://duckduckgo.com/settings">Settings</a>
        </div>
    "#;

    #[test]
    fn parses_titles_and_unwraps_redirects() {
        let results = WebSearchTool::parse_results(SAMPLE_PAGE, 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Example Page");
        assert_eq!(results[0].url, "https://example.com/page");
        assert_eq!(results[1].title, "Rust & Friends");
        assert_eq!(results[1].url, "https://rust-lang.org/");
    }

    #[test]
    fn respects_max_results() {
        let results = WebSearchTool::parse_results(SAMPLE_PAGE, 1);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn skips_internal_links() {
        let results = WebSearchTool::parse_results(SAMPLE_PAGE, 10);
        assert!(results.iter().all(|r| !r.url.contains("duckduckgo.com")));
    }

    #[test]
    fn empty_page_yields_no_results() {
        assert!(WebSearchTool::parse_results("<html></html>", 10).is_empty());
    }

    #[test]
    fn formats_numbered_list() {
        let results = vec![SearchResult {
            title: "Example".to_string(),
            url: "https://example.com/".to_string(),
        }];
        let output = WebSearchTool::format_results("test", &results);
        assert!(output.starts_with("Search results for 'test':"));
        assert!(output.contains("1. Example"));
        assert!(output.contains("https://example.com/"));
    }

    #[test]
    fn accepts_the_shared_agent_client() {
        std::env::set_var("CLAUDE_API_KEY", "test-key");
        let config = crate::ClaudeConfig::new().unwrap();
        let tool = WebSearchTool::new(config.client);
        assert_eq!(tool.name(), "web_search");
    }

    #[test]
    fn parameter_schema_requires_query() {
        let tool = WebSearchTool::new(reqwest::Client::new());
        assert_eq!(tool.name(), "web_search");
        let schema = tool.parameters();
        assert_eq!(schema["required"][0], "query");
    }
}
