//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat-completions models the crew can run on (Value Object)
///
/// Known identifiers get their own variant; anything else an
/// OpenAI-compatible endpoint serves is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    Gpt41Mini,
    Gpt41Nano,
    Gpt4Turbo,
    Gpt35Turbo,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41Nano => "gpt-4.1-nano",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Custom(s) => s,
        }
    }

    /// All models with a dedicated variant
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gpt4o,
            Model::Gpt4oMini,
            Model::Gpt41,
            Model::Gpt41Mini,
            Model::Gpt41Nano,
            Model::Gpt4Turbo,
            Model::Gpt35Turbo,
        ]
    }

    /// Whether the model identifier is empty (only possible for `Custom`)
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1-nano" => Model::Gpt41Nano,
            "gpt-4-turbo" => Model::Gpt4Turbo,
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
