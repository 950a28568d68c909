//! `search_web` against the DuckDuckGo Instant Answer API.
//!
//! No API key is needed. The API returns abstracts, instant answers and
//! related topics rather than full result listings; the model can follow up
//! with `scrape_website` on a URL it finds here.
//!
//! | Name | Required | Description |
//! |------|:---:|-------------|
//! | `search_query` | Yes | What to search for |
//! | `website` | No | Restrict to one site (sent as `site:<host>`) |

use super::WebToolSettings;
use crew_domain::{SEARCH_WEB, ToolCall, ToolError, ToolResult, ToolResultMetadata};
use std::time::Instant;

const DDG_API_URL: &str = "https://api.duckduckgo.com/";

pub async fn execute_search(
    client: &reqwest::Client,
    _settings: &WebToolSettings,
    call: &ToolCall,
) -> ToolResult {
    let start = Instant::now();

    let query = match call.require_string("search_query") {
        Ok(q) => q,
        Err(e) => return ToolResult::failure(SEARCH_WEB, ToolError::invalid_argument(e)),
    };
    let query = scoped_query(query, call.get_string("website"));

    let response = match client
        .get(DDG_API_URL)
        .query(&[
            ("q", query.as_str()),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) if e.is_timeout() => {
            return ToolResult::failure(SEARCH_WEB, ToolError::timeout("web search"));
        }
        Err(e) => {
            return ToolResult::failure(
                SEARCH_WEB,
                ToolError::execution_failed(format!("Search request failed: {}", e)),
            );
        }
    };

    let status = response.status();
    if !status.is_success() {
        return ToolResult::failure(
            SEARCH_WEB,
            ToolError::execution_failed(format!("Search API returned error: {}", status)),
        );
    }

    let body: serde_json::Value = match response.json().await {
        Ok(j) => j,
        Err(e) => {
            return ToolResult::failure(
                SEARCH_WEB,
                ToolError::execution_failed(format!("Failed to parse search results: {}", e)),
            );
        }
    };

    ToolResult::success(SEARCH_WEB, format_search_results(&query, &body)).with_metadata(
        ToolResultMetadata {
            duration_ms: Some(start.elapsed().as_millis() as u64),
            status_code: Some(status.as_u16()),
            ..Default::default()
        },
    )
}

/// Prefix the query with `site:<host>` when a website is given
fn scoped_query(query: &str, website: Option<&str>) -> String {
    let host = website
        .map(|w| w.trim())
        .map(|w| w.trim_start_matches("https://").trim_start_matches("http://"))
        .map(|w| w.split('/').next().unwrap_or(w))
        .filter(|h| !h.is_empty());

    match host {
        Some(host) => format!("site:{} {}", host, query),
        None => query.to_string(),
    }
}

/// Render an Instant Answer payload as markdown.
pub fn format_search_results(query: &str, data: &serde_json::Value) -> String {
    let mut sections: Vec<String> = vec![format!("## Search Results for: {}", query)];

    if let Some(abstract_text) = data["AbstractText"].as_str()
        && !abstract_text.is_empty()
    {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "### Summary ({})\n{}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = data["Answer"].as_str()
        && !answer.is_empty()
    {
        sections.push(format!("### Instant Answer\n{}", answer));
    }

    if let Some(definition) = data["Definition"].as_str()
        && !definition.is_empty()
    {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("### Definition ({})\n{}", source, definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        // nested topic groups have no "Text" and are skipped
        let topic_texts: Vec<String> = topics
            .iter()
            .filter_map(|t| {
                let text = t["Text"].as_str().filter(|s| !s.is_empty())?;
                Some(format!("- {} ({})", text, t["FirstURL"].as_str().unwrap_or("")))
            })
            .take(10)
            .collect();

        if !topic_texts.is_empty() {
            sections.push(format!("### Related Topics\n{}", topic_texts.join("\n")));
        }
    }

    if sections.len() == 1 {
        sections.push(
            "No instant answer available. Try `scrape_website` on a specific URL for more detail."
                .to_string(),
        );
    }

    sections.join("\n\n")
}
