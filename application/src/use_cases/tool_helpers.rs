//! Shared helpers for the tool-use loop.

use crew_domain::ToolCall;

/// Short preview of a call's arguments for progress output.
///
/// Prefers the URL or query a web tool was given, then any string value.
pub(crate) fn tool_args_preview(call: &ToolCall) -> String {
    let keys = ["website_url", "search_query", "website", "url", "query"];
    keys.iter()
        .find_map(|key| call.get_string(key))
        .or_else(|| call.arguments.values().find_map(|v| v.as_str()))
        .map(|s| truncate_preview(s, 60))
        .unwrap_or_default()
}

fn truncate_preview(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
