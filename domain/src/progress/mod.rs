//! Fixed progress milestones of an inquiry run.

use serde::{Deserialize, Serialize};

/// Stage of the inquiry pipeline, with its progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    InitializingAgents,
    CreatingTasks,
    SettingUpCrew,
    ProcessingInquiry,
    Complete,
}

/// Label shown when a run fails and the indicator resets to 0
pub const ERROR_LABEL: &str = "Error occurred";

impl ProgressStage {
    pub const ALL: [ProgressStage; 5] = [
        ProgressStage::InitializingAgents,
        ProgressStage::CreatingTasks,
        ProgressStage::SettingUpCrew,
        ProgressStage::ProcessingInquiry,
        ProgressStage::Complete,
    ];

    pub fn percent(&self) -> u8 {
        match self {
            ProgressStage::InitializingAgents => 20,
            ProgressStage::CreatingTasks => 40,
            ProgressStage::SettingUpCrew => 60,
            ProgressStage::ProcessingInquiry => 80,
            ProgressStage::Complete => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressStage::InitializingAgents => "Initializing agents...",
            ProgressStage::CreatingTasks => "Creating tasks...",
            ProgressStage::SettingUpCrew => "Setting up crew...",
            ProgressStage::ProcessingInquiry => "Processing inquiry...",
            ProgressStage::Complete => "Complete!",
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, ProgressStage::Complete)
    }
}

impl std::fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_increase_to_100() {
        let percents: Vec<u8> = ProgressStage::ALL.iter().map(|s| s.percent()).collect();
        assert_eq!(percents, vec![20, 40, 60, 80, 100]);
        assert!(ProgressStage::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProgressStage::InitializingAgents.label(), "Initializing agents...");
        assert_eq!(ProgressStage::SettingUpCrew.to_string(), "Setting up crew...");
        assert_eq!(ProgressStage::Complete.label(), "Complete!");
        assert!(ProgressStage::Complete.is_final());
        assert!(!ProgressStage::ProcessingInquiry.is_final());
    }
}
