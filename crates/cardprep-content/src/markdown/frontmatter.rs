//! Locating YAML front matter.
//!
//! Front matter is a leading block delimited by lines that are exactly `---`:
//!
//! ```markdown
//! ---
//! title: Cells
//! tags: [biology]
//! ---
//!
//! #### What is a cell
//! ```
//!
//! Only the position matters here; the YAML itself is never parsed. The
//! delimiter comparison is exact, so `--- ` or `----` do not count.

/// Line that opens and closes a front-matter block.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Index of the first line after the front matter, or `0` if there is none.
///
/// An opening delimiter without a closing one is treated as no front matter
/// at all and logged as a warning.
///
/// ```rust
/// use cardprep_content::markdown::frontmatter::yaml_end;
///
/// let lines = ["---", "title: x", "---", "body"];
/// assert_eq!(yaml_end(&lines), 3);
///
/// let lines = ["body", "---"];
/// assert_eq!(yaml_end(&lines), 0);
/// ```
pub fn yaml_end<S: AsRef<str>>(lines: &[S]) -> usize {
    match lines.first() {
        Some(first) if first.as_ref() == FRONT_MATTER_DELIMITER => {}
        _ => return 0,
    }

    match lines[1..]
        .iter()
        .position(|line| line.as_ref() == FRONT_MATTER_DELIMITER)
    {
        Some(offset) => offset + 2,
        None => {
            log::warn!("Front matter opening delimiter found but no closing delimiter");
            0
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_matter_end() {
        let lines = ["---", "title: x", "---", "#### Q"];
        assert_eq!(yaml_end(&lines), 3);
    }

    #[test]
    fn test_empty_front_matter() {
        let lines = ["---", "---", "body"];
        assert_eq!(yaml_end(&lines), 2);
    }

    #[test]
    fn test_no_front_matter() {
        let lines = ["# Title", "---", "body"];
        assert_eq!(yaml_end(&lines), 0);
    }

    #[test]
    fn test_unterminated_front_matter() {
        let lines = ["---", "title: x", "body"];
        assert_eq!(yaml_end(&lines), 0);
    }

    #[test]
    fn test_only_opening_delimiter() {
        let lines = ["---"];
        assert_eq!(yaml_end(&lines), 0);
    }

    #[test]
    fn test_empty_document() {
        let lines: [&str; 0] = [];
        assert_eq!(yaml_end(&lines), 0);
    }

    #[test]
    fn test_delimiter_must_be_exact() {
        assert_eq!(yaml_end(&["--- ", "a", "---"]), 0);
        assert_eq!(yaml_end(&["---", "a", "--- "]), 0);
        assert_eq!(yaml_end(&["---", "a", "----"]), 0);
        assert_eq!(yaml_end(&["---", "a", "---\r"]), 0);
    }

    #[test]
    fn test_first_closing_delimiter_wins() {
        let lines = ["---", "a: 1", "---", "text", "---"];
        assert_eq!(yaml_end(&lines), 3);
    }
}
