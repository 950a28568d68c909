//! Tool handles and the per-company tool factory

use super::entities::{ToolDefinition, ToolParameter, ToolSpec};
use crate::company::CompanyProfile;
use serde::{Deserialize, Serialize};

/// Tool name for generic web search
pub const SEARCH_WEB: &str = "search_web";
/// Tool name for reading an arbitrary page
pub const SCRAPE_WEBSITE: &str = "scrape_website";
/// Tool name for reading the company documentation page
pub const READ_COMPANY_DOCS: &str = "read_company_docs";

/// Capability a handle stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Web search, optionally scoped to one site
    Search,
    /// Read any page the model names
    Scrape,
    /// Read one fixed page (the bound URL)
    ScopedScrape,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Search => "search",
            ToolKind::Scrape => "scrape",
            ToolKind::ScopedScrape => "scoped-scrape",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A capability reference attached to a task (Value Object)
///
/// Handles own no state; the executor in the infrastructure layer turns
/// them into HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolHandle {
    pub kind: ToolKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_url: Option<String>,
}

impl ToolHandle {
    pub fn search() -> Self {
        Self {
            kind: ToolKind::Search,
            bound_url: None,
        }
    }

    pub fn scrape() -> Self {
        Self {
            kind: ToolKind::Scrape,
            bound_url: None,
        }
    }

    pub fn scoped_scrape(url: impl Into<String>) -> Self {
        Self {
            kind: ToolKind::ScopedScrape,
            bound_url: Some(url.into()),
        }
    }

    /// Name the model uses to call this tool
    pub fn name(&self) -> &'static str {
        match self.kind {
            ToolKind::Search => SEARCH_WEB,
            ToolKind::Scrape => SCRAPE_WEBSITE,
            ToolKind::ScopedScrape => READ_COMPANY_DOCS,
        }
    }

    /// Definition presented to the model
    pub fn definition(&self) -> ToolDefinition {
        match self.kind {
            ToolKind::Search => ToolDefinition::new(
                SEARCH_WEB,
                "Search the web for information relevant to the customer's question. \
                 Returns summaries and related links.",
            )
            .with_parameter(ToolParameter::new("search_query", "What to search for", true))
            .with_parameter(
                ToolParameter::new(
                    "website",
                    "Optional website to restrict the search to (e.g. https://docs.example.com)",
                    false,
                )
                .with_type("url"),
            ),
            ToolKind::Scrape => ToolDefinition::new(
                SCRAPE_WEBSITE,
                "Read the text content of a web page.",
            )
            .with_parameter(
                ToolParameter::new("website_url", "Full URL of the page to read", true)
                    .with_type("url"),
            ),
            ToolKind::ScopedScrape => ToolDefinition::new(
                READ_COMPANY_DOCS,
                format!(
                    "Read the text content of the company documentation at {}. Takes no arguments.",
                    self.bound_url.as_deref().unwrap_or("the configured URL")
                ),
            ),
        }
    }
}

/// The three tools built for a company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentTools {
    pub search: ToolHandle,
    pub scrape: ToolHandle,
    pub docs_scrape: ToolHandle,
}

impl AgentTools {
    /// All three handles, in factory order
    pub fn all(&self) -> [&ToolHandle; 3] {
        [&self.search, &self.scrape, &self.docs_scrape]
    }
}

/// Build the tool handles for `company`.
///
/// The docs scraper is bound to the company's documentation URL (curated,
/// or derived from the name for unknown companies).
pub fn agent_tools(company: &str) -> AgentTools {
    AgentTools {
        search: ToolHandle::search(),
        scrape: ToolHandle::scrape(),
        docs_scrape: ToolHandle::scoped_scrape(CompanyProfile::docs_url_for(company)),
    }
}

/// Build a [`ToolSpec`] for a set of handles, with the short aliases models
/// tend to use
pub fn tool_spec_for(handles: &[ToolHandle]) -> ToolSpec {
    handles
        .iter()
        .fold(ToolSpec::new(), |spec, handle| spec.register(handle.definition()))
        .register_alias("search", SEARCH_WEB)
        .register_alias("web_search", SEARCH_WEB)
        .register_alias("scrape", SCRAPE_WEBSITE)
        .register_alias("read_website_content", SCRAPE_WEBSITE)
        .register_alias("docs", READ_COMPANY_DOCS)
}
