//! HTML pages for the inquiry form

use crate::output::status::{QUICK_STATS, SystemStatus};
use crew_application::InquiryReport;
use crew_domain::{CUSTOM_OPTION, CompanySelection};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; color: #222; }
h1 { color: #1f77b4; text-align: center; }
.sub { color: #666; text-align: center; margin-bottom: 2rem; }
.card { background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 10px; padding: 1.5rem; margin-bottom: 1.5rem; }
label { display: block; font-weight: 600; margin-top: 1rem; }
input, select, textarea { width: 100%; padding: .5rem; box-sizing: border-box; }
button { margin-top: 1.5rem; background: linear-gradient(90deg, #1f77b4, #ff7f0e); color: #fff; border: 0; border-radius: 25px; padding: .75rem 2rem; font-weight: 600; }
.response { white-space: pre-wrap; background: #fff; border: 1px solid #e9ecef; border-radius: 10px; padding: 1.5rem; }
.meta { display: flex; gap: 2rem; margin-top: 1rem; }
.error { color: #b00020; }
.warning { color: #8a6d00; }
"#;

/// Escape text for HTML element and attribute content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<h1>Multi-Agent Customer Support</h1>\n<p class=\"sub\">Intelligent AI agents working together to provide exceptional customer support</p>\n{}\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn status_panel(status: &SystemStatus) -> String {
    let rows: String = status
        .rows()
        .into_iter()
        .map(|(label, value)| format!("<li><strong>{}:</strong> {}</li>", label, escape_html(&value)))
        .collect();
    let stats: String = QUICK_STATS
        .iter()
        .map(|(label, value)| format!("<li><strong>{}:</strong> {}</li>", label, value))
        .collect();

    format!(
        "<div class=\"card\"><h3>System Status</h3><ul>{}</ul><h3>Quick Stats</h3><ul>{}</ul></div>",
        rows, stats
    )
}

/// The inquiry form with the status panel
pub fn form_page(default_company: &str, status: &SystemStatus) -> String {
    let options: String = CompanySelection::options()
        .into_iter()
        .map(|option| {
            let selected = if option == default_company { " selected" } else { "" };
            format!("<option value=\"{0}\"{1}>{0}</option>", option, selected)
        })
        .collect();

    let api_hint = if status.api_configured {
        "Optional: the server key is used when left blank."
    } else {
        "No server key is configured; enter your API key."
    };

    let body = format!(
        r#"<form class="card" method="post" action="/inquiry">
<h3>Configuration</h3>
<label for="company">Select Company</label>
<select id="company" name="company">{options}</select>
<label for="custom_company">Custom company name (when "{custom}" is selected)</label>
<input id="custom_company" name="custom_company" placeholder="e.g., TechCorp Inc.">
<label for="api_key">OpenAI API Key</label>
<input id="api_key" name="api_key" type="password" placeholder="sk-...">
<small>{api_hint}</small>
<h3>Customer Inquiry</h3>
<label for="customer">Customer/Company Name</label>
<input id="customer" name="customer" placeholder="e.g., DeepLearningAI, TechCorp Inc.">
<label for="person">Contact Person</label>
<input id="person" name="person" placeholder="e.g., John Doe, Sarah Smith">
<label for="inquiry">Customer Inquiry</label>
<textarea id="inquiry" name="inquiry" rows="6" placeholder="Describe your issue or question here..."></textarea>
<button type="submit">Process Inquiry</button>
</form>
{status}"#,
        options = options,
        custom = CUSTOM_OPTION,
        api_hint = api_hint,
        status = status_panel(status),
    );

    layout("Multi-Agent Customer Support", &body)
}

pub fn result_page(report: &InquiryReport) -> String {
    let body = format!(
        r#"<div class="card">
<h3>Response</h3>
<div class="response">{}</div>
<div class="meta"><span><strong>Customer:</strong> {}</span><span><strong>Contact:</strong> {}</span><span><strong>Company:</strong> {}</span></div>
</div>
<p><a href="/">New inquiry</a></p>"#,
        escape_html(report.result.trim()),
        escape_html(&report.customer),
        escape_html(&report.person),
        escape_html(&report.company),
    );
    layout("Response", &body)
}

/// Blank-field refusal
pub fn refusal_page() -> String {
    layout(
        "Missing fields",
        "<p class=\"warning\">Please fill in all fields before processing.</p>\n<p><a href=\"/\">Back to the form</a></p>",
    )
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<p class=\"error\">Error processing inquiry: {}</p>\n<p><a href=\"/\">Back to the form</a></p>",
        escape_html(message)
    );
    layout("Error", &body)
}

pub fn setup_error_page(message: &str) -> String {
    let body = format!(
        "<p class=\"error\">OpenAI API not configured: {}</p>\n<p>Enter an API key in the form or set it in the server environment.</p>\n<p><a href=\"/\">Back to the form</a></p>",
        escape_html(message)
    );
    layout("Setup required", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(api_configured: bool) -> SystemStatus {
        SystemStatus {
            agents: 2,
            tools: 3,
            memory: true,
            api_configured,
            model: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_form_page_preselects_default() {
        let page = form_page("Google", &status(true));
        assert!(page.contains(r#"<option value="Google" selected>Google</option>"#));
        assert!(page.contains(r#"<option value="Custom">Custom</option>"#));
        assert!(page.contains("2 Active"));
        assert!(page.contains("Connected"));
    }

    #[test]
    fn test_form_page_without_key() {
        let page = form_page("CrewAI", &status(false));
        assert!(page.contains("Not configured"));
        assert!(page.contains("enter your API key"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = error_page("<b>boom</b>");
        assert!(page.contains("Error processing inquiry: &lt;b&gt;boom&lt;/b&gt;"));
    }
}
