//! System status panel data

use serde::Serialize;

/// Snapshot shown by `--status`, the form page and `GET /api/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub agents: usize,
    pub tools: usize,
    pub memory: bool,
    pub api_configured: bool,
    pub model: String,
}

impl SystemStatus {
    pub fn agents_label(&self) -> String {
        format!("{} Active", self.agents)
    }

    pub fn tools_label(&self) -> String {
        format!("{} Available", self.tools)
    }

    pub fn memory_label(&self) -> &'static str {
        if self.memory { "Enabled" } else { "Disabled" }
    }

    pub fn api_label(&self) -> &'static str {
        if self.api_configured {
            "Connected"
        } else {
            "Not configured"
        }
    }

    /// `(label, value)` rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Agents", self.agents_label()),
            ("Tools", self.tools_label()),
            ("Memory", self.memory_label().to_string()),
            ("API", self.api_label().to_string()),
        ]
    }
}

/// Static quick-stats lines
pub const QUICK_STATS: [(&str, &str); 3] = [
    ("Response Time", "~30-60 seconds"),
    ("Accuracy", "High (QA reviewed)"),
    ("Sources", "Web + Documentation"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let status = SystemStatus {
            agents: 2,
            tools: 3,
            memory: true,
            api_configured: false,
            model: "gpt-4o-mini".to_string(),
        };

        let rows = status.rows();
        assert_eq!(rows[0], ("Agents", "2 Active".to_string()));
        assert_eq!(rows[1], ("Tools", "3 Available".to_string()));
        assert_eq!(rows[2], ("Memory", "Enabled".to_string()));
        assert_eq!(rows[3], ("API", "Not configured".to_string()));
    }
}
