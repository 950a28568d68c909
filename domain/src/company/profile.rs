//! Company profile resolution

use crate::core::string::slugify_company;
use serde::{Deserialize, Serialize};

/// Company used when none is chosen
pub const DEFAULT_COMPANY: &str = "CrewAI";

/// Curated companies, in selector order
pub const KNOWN_COMPANIES: [&str; 5] = ["CrewAI", "OpenAI", "Microsoft", "Google", "Amazon"];

/// (name, website, docs_url, description)
const CURATED: [(&str, &str, &str, &str); 5] = [
    (
        "CrewAI",
        "https://crewai.com",
        "https://crewai.com/docs/introduction",
        "AI agent framework for building multi-agent systems",
    ),
    (
        "OpenAI",
        "https://openai.com",
        "https://platform.openai.com/docs",
        "Leading AI research and deployment company",
    ),
    (
        "Microsoft",
        "https://microsoft.com",
        "https://docs.microsoft.com",
        "Global technology company",
    ),
    (
        "Google",
        "https://google.com",
        "https://developers.google.com/docs",
        "Technology and internet services company",
    ),
    (
        "Amazon",
        "https://amazon.com",
        "https://docs.aws.amazon.com",
        "E-commerce and cloud computing company",
    ),
];

/// Public-facing data about the company the agents work for (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub website: String,
    pub docs_url: String,
    pub description: String,
}

impl CompanyProfile {
    /// Resolve a profile for `name`. Never fails.
    ///
    /// Lookup is exact and case-sensitive; `"openai"` is not `"OpenAI"` and
    /// gets a derived profile.
    pub fn resolve(name: &str) -> Self {
        match CURATED.iter().find(|(known, ..)| *known == name) {
            Some((known, website, docs_url, description)) => Self {
                name: known.to_string(),
                website: website.to_string(),
                docs_url: docs_url.to_string(),
                description: description.to_string(),
            },
            None => Self::derived(name),
        }
    }

    /// Best-effort profile for a company outside the curated set
    pub fn derived(name: &str) -> Self {
        let slug = slugify_company(name);
        Self {
            name: name.to_string(),
            website: format!("https://{}.com", slug),
            docs_url: format!("https://{}.com/docs", slug),
            description: format!("Technology company: {}", name),
        }
    }

    /// Docs URL for `name`, following the same fallback as [`resolve`](Self::resolve)
    pub fn docs_url_for(name: &str) -> String {
        Self::resolve(name).docs_url
    }

    /// Whether `name` is one of the curated companies
    pub fn is_known(name: &str) -> bool {
        KNOWN_COMPANIES.contains(&name)
    }
}
