//! Glob-style path patterns.
//!
//! The syntax is deliberately small:
//!
//! | glob   | meaning                                      |
//! |--------|----------------------------------------------|
//! | `**`   | any run of characters, including `/`         |
//! | `*`    | any run of characters except `/`             |
//! | `x/`   | folder prefix, same as `x/**`                |
//!
//! Everything else is literal. Matching is anchored at both ends, so a
//! pattern must describe the whole vault-relative path.
//!
//! ```rust
//! use cardprep_core::PathMatcher;
//!
//! let matcher = PathMatcher::compile("Notes/").unwrap();
//! assert!(matcher.matches("Notes/deep/card.md"));
//! assert!(!matcher.matches("Other/Notes/card.md"));
//! ```

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled glob pattern.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: String,
    regex: Regex,
}

impl PathMatcher {
    /// Compile a glob into an anchored matcher.
    pub fn compile(pattern: &str) -> Result<Self> {
        let source = glob_to_regex(pattern);
        let regex = Regex::new(&source).map_err(|e| Error::pattern(pattern, e))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Full-path match against `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The glob this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// Translate a glob into anchored regex source.
///
/// ```rust
/// use cardprep_core::scope::glob_to_regex;
///
/// assert_eq!(glob_to_regex("*.md"), r"^[^/]*\.md$");
/// assert_eq!(glob_to_regex("Notes/"), "^Notes/.*$");
/// ```
pub fn glob_to_regex(pattern: &str) -> String {
    let expanded = if pattern.ends_with('/') {
        format!("{pattern}**")
    } else {
        pattern.to_string()
    };

    let mut source = String::with_capacity(expanded.len() + 8);
    source.push('^');

    let mut literal = String::new();
    let mut chars = expanded.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '*' {
            literal.push(c);
            continue;
        }

        source.push_str(&regex::escape(&literal));
        literal.clear();

        if chars.peek() == Some(&'*') {
            chars.next();
            source.push_str(".*");
        } else {
            source.push_str("[^/]*");
        }
    }
    source.push_str(&regex::escape(&literal));
    source.push('$');

    source
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn matches(pattern: &str, path: &str) -> bool {
        PathMatcher::compile(pattern).unwrap().matches(path)
    }

    // ------------------------------------------------------------------------
    // Translation
    // ------------------------------------------------------------------------

    #[test]
    fn test_translate_double_star() {
        assert_eq!(glob_to_regex("a/**"), "^a/.*$");
    }

    #[test]
    fn test_translate_single_star() {
        assert_eq!(glob_to_regex("a/*"), "^a/[^/]*$");
    }

    #[test]
    fn test_translate_escapes_metacharacters() {
        assert_eq!(glob_to_regex("a+b (1).md"), r"^a\+b \(1\)\.md$");
    }

    #[test]
    fn test_translate_folder_prefix() {
        assert_eq!(glob_to_regex("Notes/"), "^Notes/.*$");
    }

    // ------------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------------

    #[test]
    fn test_single_star_stops_at_separator() {
        assert!(matches("Notes/*.md", "Notes/card.md"));
        assert!(!matches("Notes/*.md", "Notes/sub/card.md"));
    }

    #[test]
    fn test_double_star_crosses_separators() {
        assert!(matches("Notes/**.md", "Notes/sub/deeper/card.md"));
        assert!(matches("**/draft.md", "a/b/draft.md"));
    }

    #[test]
    fn test_folder_prefix_matches_descendants() {
        assert!(matches("Archive/", "Archive/x.md"));
        assert!(matches("Archive/", "Archive/2020/x.md"));
        assert!(!matches("Archive/", "Notes/x.md"));
        assert!(!matches("Archive/", "Archive"));
    }

    #[test]
    fn test_anchored_not_substring() {
        assert!(!matches("card.md", "Notes/card.md"));
        assert!(!matches("Notes", "Notes/card.md"));
        assert!(!matches("Notes/card", "Notes/card.md"));
    }

    #[test]
    fn test_no_separator_pattern_is_top_level_only() {
        assert!(matches("*.md", "card.md"));
        assert!(!matches("*.md", "Notes/card.md"));
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_path() {
        assert!(matches("", ""));
        assert!(!matches("", "card.md"));
    }

    #[test]
    fn test_literal_dot_is_not_wildcard() {
        assert!(!matches("card.md", "cardxmd"));
    }

    #[test]
    fn test_pattern_accessor() {
        let matcher = PathMatcher::compile("Notes/").unwrap();
        assert_eq!(matcher.pattern(), "Notes/");
    }

    proptest! {
        #[test]
        fn test_literal_pattern_matches_itself(path in "[a-zA-Z0-9 ._()+/-]{0,40}") {
            prop_assume!(!path.ends_with('/'));
            prop_assert!(matches(&path, &path));
        }

        #[test]
        fn test_double_star_matches_everything(path in "[^\n]{0,40}") {
            prop_assert!(matches("**", &path));
        }
    }
}
