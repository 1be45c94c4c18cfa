//! Word pair value object

use serde::{Deserialize, Serialize};

/// Separator between the two words of a pair in the pool files.
pub const DEFAULT_SEPARATOR: char = ',';

/// Lines starting with this character are comments.
pub const COMMENT_PREFIX: char = '#';

/// Two related words (Value Object)
///
/// The pair is unordered at rest: which word becomes the majority word is
/// decided per round, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    first: String,
    second: String,
}

impl WordPair {
    /// Create a pair from two words, trimming both.
    ///
    /// Returns `None` if either word is empty after trimming.
    pub fn new(first: impl AsRef<str>, second: impl AsRef<str>) -> Option<Self> {
        let first = first.as_ref().trim();
        let second = second.as_ref().trim();
        if first.is_empty() || second.is_empty() {
            return None;
        }
        Some(Self {
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Parse one line of a pool file.
    ///
    /// Empty fields (from repeated separators) are dropped before counting, so
    /// `a,,b` is the pair `(a, b)` while `a,b,c` and `a` are rejected.
    pub fn parse_line(line: &str, separator: char) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return None;
        }

        let fields: Vec<&str> = line
            .split(separator)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();

        match fields.as_slice() {
            [first, second] => Self::new(first, second),
            _ => None,
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// The line written to the pool files for this pair.
    pub fn canonical_line(&self, separator: char) -> String {
        format!("{}{}{}", self.first, separator, self.second)
    }

    /// Whether a stored line holds this pair.
    ///
    /// A line matches when it is the canonical line after trimming, or when it
    /// parses to the same pair with different spacing.
    pub fn matches_line(&self, line: &str, separator: char) -> bool {
        line.trim() == self.canonical_line(separator)
            || Self::parse_line(line, separator).as_ref() == Some(self)
    }

    /// Split into `(first, second)`, or `(second, first)` when `swap` is set.
    pub fn into_ordered(self, swap: bool) -> (String, String) {
        if swap {
            (self.second, self.first)
        } else {
            (self.first, self.second)
        }
    }
}

impl std::fmt::Display for WordPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> WordPair {
        WordPair::new(a, b).unwrap()
    }

    #[test]
    fn test_new_trims_words() {
        let p = pair("  猫 ", "狗\t");
        assert_eq!(p.first(), "猫");
        assert_eq!(p.second(), "狗");
    }

    #[test]
    fn test_new_rejects_blank_word() {
        assert!(WordPair::new("猫", "  ").is_none());
        assert!(WordPair::new("", "狗").is_none());
    }

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(WordPair::parse_line("猫,狗", ','), Some(pair("猫", "狗")));
        assert_eq!(
            WordPair::parse_line("  苹果 ,  香蕉  ", ','),
            Some(pair("苹果", "香蕉"))
        );
    }

    #[test]
    fn test_parse_line_skips_blank_and_comment() {
        assert_eq!(WordPair::parse_line("", ','), None);
        assert_eq!(WordPair::parse_line("   ", ','), None);
        assert_eq!(WordPair::parse_line("# 猫,狗", ','), None);
        assert_eq!(WordPair::parse_line("   #猫,狗", ','), None);
    }

    #[test]
    fn test_parse_line_requires_two_fields() {
        assert_eq!(WordPair::parse_line("猫", ','), None);
        assert_eq!(WordPair::parse_line("猫,狗,鸟", ','), None);
        assert_eq!(WordPair::parse_line("猫,", ','), None);
        assert_eq!(WordPair::parse_line(",", ','), None);
    }

    #[test]
    fn test_parse_line_drops_empty_fields() {
        assert_eq!(WordPair::parse_line("猫,,狗", ','), Some(pair("猫", "狗")));
        assert_eq!(WordPair::parse_line(",猫, ,狗,", ','), Some(pair("猫", "狗")));
    }

    #[test]
    fn test_parse_line_custom_separator() {
        assert_eq!(WordPair::parse_line("猫|狗", '|'), Some(pair("猫", "狗")));
        assert_eq!(WordPair::parse_line("猫,狗", '|'), None);
    }

    #[test]
    fn test_canonical_line() {
        assert_eq!(pair("猫", "狗").canonical_line(','), "猫,狗");
        assert_eq!(pair("猫", "狗").canonical_line('|'), "猫|狗");
    }

    #[test]
    fn test_matches_line() {
        let p = pair("猫", "狗");
        assert!(p.matches_line("猫,狗", ','));
        assert!(p.matches_line("  猫,狗  ", ','));
        assert!(p.matches_line("猫 , 狗", ','));
        assert!(!p.matches_line("狗,猫", ','));
        assert!(!p.matches_line("# 猫,狗", ','));
        assert!(!p.matches_line("猫,狗,鸟", ','));
    }

    #[test]
    fn test_into_ordered() {
        assert_eq!(
            pair("猫", "狗").into_ordered(false),
            ("猫".to_string(), "狗".to_string())
        );
        assert_eq!(
            pair("猫", "狗").into_ordered(true),
            ("狗".to_string(), "猫".to_string())
        );
    }
}
