//! **Web Tools**: the HTTP side of `search_web`, `scrape_website` and
//! `read_company_docs`
//!
//! | Tool | Backend | Key Dependency |
//! |------|---------|----------------|
//! | `search_web` | DuckDuckGo Instant Answer API | `reqwest` |
//! | `scrape_website` | GET + HTML→text | `reqwest` + `scraper` |
//! | `read_company_docs` | same as scrape, fixed URL | `reqwest` + `scraper` |
//!
//! All three share one [`reqwest::Client`] built from [`WebToolSettings`].

mod fetch;
mod search;

pub use fetch::{fetch_page, html_to_text};
pub use search::{execute_search, format_search_results};

use std::time::Duration;

/// Limits and identity for outgoing tool requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebToolSettings {
    pub timeout: Duration,
    /// Largest response body accepted
    pub max_body_bytes: usize,
    /// Extracted text beyond this is truncated before it reaches the model
    pub max_text_bytes: usize,
    pub user_agent: String,
}

impl Default for WebToolSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            max_body_bytes: 5 * 1024 * 1024,
            max_text_bytes: 50 * 1024,
            user_agent: concat!("support-crew/", env!("CARGO_PKG_VERSION"), " (Agent Tool)")
                .to_string(),
        }
    }
}

impl WebToolSettings {
    /// HTTP client honoring the timeout and user agent
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
    }
}
