//! API credential value object

/// A language-model API key (Value Object)
///
/// The key is never printed: `Debug` and `Display` render a redacted form
/// so it can travel through logs and error messages safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Try to create a key, returning None if it is blank
    pub fn try_new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// The raw key, for the `Authorization` header only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key has the usual `sk-` prefix
    pub fn looks_like_openai_key(&self) -> bool {
        self.0.starts_with("sk-")
    }

    /// Redacted form: first three characters and the last four
    pub fn redacted(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.redacted()).finish()
    }
}

impl std::fmt::Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_rejected() {
        assert!(ApiKey::try_new("").is_none());
        assert!(ApiKey::try_new("   ").is_none());
    }

    #[test]
    fn test_key_is_trimmed() {
        let key = ApiKey::try_new("  sk-abcdef123456  ").unwrap();
        assert_eq!(key.expose(), "sk-abcdef123456");
        assert!(key.looks_like_openai_key());
    }

    #[test]
    fn test_debug_and_display_are_redacted() {
        let key = ApiKey::try_new("sk-verysecretvalue9876").unwrap();
        let debug = format!("{:?}", key);
        let display = key.to_string();
        assert!(!debug.contains("verysecret"));
        assert!(!display.contains("verysecret"));
        assert_eq!(display, "sk-...9876");
    }

    #[test]
    fn test_short_key_fully_masked() {
        let key = ApiKey::try_new("abc").unwrap();
        assert_eq!(key.redacted(), "****");
        assert!(!key.looks_like_openai_key());
    }
}
