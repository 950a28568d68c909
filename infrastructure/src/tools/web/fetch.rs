//! Page fetching for `scrape_website` and `read_company_docs`

use super::WebToolSettings;
use crew_domain::{ToolError, ToolResult, ToolResultMetadata};
use std::time::Instant;
use tracing::debug;

/// GET `url` and return its readable text as a tool result.
///
/// HTML is reduced to text; other content types pass through unchanged.
/// `tool_name` labels the result.
pub async fn fetch_page(
    client: &reqwest::Client,
    settings: &WebToolSettings,
    tool_name: &str,
    url: &str,
) -> ToolResult {
    let start = Instant::now();

    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return ToolResult::failure(
            tool_name,
            ToolError::invalid_argument(format!("Not an http(s) URL: {}", url)),
        );
    }

    debug!("Fetching {} for {}", url, tool_name);
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) if e.is_timeout() => {
            return ToolResult::failure(tool_name, ToolError::timeout(format!("GET {}", url)));
        }
        Err(e) => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to fetch URL: {}", e)),
            );
        }
    };

    let status = response.status();
    if !status.is_success() {
        return ToolResult::failure(
            tool_name,
            ToolError::execution_failed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ))
            .with_details(url.to_string()),
        );
    }

    let content_length = response.content_length().unwrap_or(0);
    if content_length > settings.max_body_bytes as u64 {
        return ToolResult::failure(
            tool_name,
            ToolError::execution_failed(format!(
                "Response too large: {} bytes (max: {} bytes)",
                content_length, settings.max_body_bytes
            )),
        );
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = match response.bytes().await {
        Ok(b) if b.len() > settings.max_body_bytes => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Response too large: {} bytes", b.len())),
            );
        }
        Ok(b) => b,
        Err(e) => {
            return ToolResult::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to read response body: {}", e)),
            );
        }
    };

    let body_str = String::from_utf8_lossy(&body);
    let text = if content_type.contains("text/html") || content_type.contains("application/xhtml")
    {
        html_to_text(&body_str)
    } else {
        body_str.to_string()
    };

    let output = format!(
        "## Content of {}\n\n{}",
        url,
        truncate_text(&text, settings.max_text_bytes)
    );

    ToolResult::success(tool_name, output).with_metadata(ToolResultMetadata {
        duration_ms: Some(start.elapsed().as_millis() as u64),
        bytes: Some(body.len()),
        url: Some(url.to_string()),
        status_code: Some(status.as_u16()),
    })
}

fn truncate_text(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!(
        "{}\n\n[... truncated at {} bytes, total: {} bytes]",
        &text[..end],
        max_bytes,
        text.len()
    )
}

/// Extract readable text from HTML, skipping scripts, styles and inline SVG.
pub fn html_to_text(html: &str) -> String {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);
    let skip_tags = ["script", "style", "noscript", "svg"];

    let root = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
        .unwrap_or_else(|| document.root_element());

    clean_whitespace(&collect_element_text(root, &skip_tags).join(" "))
}

fn collect_element_text(element: scraper::ElementRef, skip_tags: &[&str]) -> Vec<String> {
    if skip_tags.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_el) = scraper::ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el, skip_tags));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse runs of spaces; keep at most one blank line.
fn clean_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_whitespace = false;
    let mut newline_count = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
            prev_was_whitespace = true;
        } else if ch.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
            }
            prev_was_whitespace = true;
            newline_count = 0;
        } else {
            result.push(ch);
            prev_was_whitespace = false;
            newline_count = 0;
        }
    }

    result.trim().to_string()
}
