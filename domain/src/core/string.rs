//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Lower-case a name and drop every space character.
///
/// `"Foo Bar"` becomes `"foobar"`. Only `' '` is removed; tabs and other
/// whitespace are kept as-is.
pub fn slugify_company(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "é" is 2 bytes; cutting inside it must back off to a boundary
        assert_eq!(truncate("café au lait", 7), "caf...");
        assert_eq!(truncate("naïve", 20), "naïve");
    }

    #[test]
    fn test_slugify_company() {
        assert_eq!(slugify_company("Foo Bar"), "foobar");
        assert_eq!(slugify_company("TechCorp Inc."), "techcorpinc.");
        assert_eq!(slugify_company("acme"), "acme");
    }
}
