//! List cleanup.
//!
//! A list block is a maximal run of consecutive list lines. Inside a block,
//! items with no text are removed. After a block, if the next line is
//! ordinary content, a separator line holding a single space is inserted:
//! the exporter would otherwise read the paragraph as part of the last item.

use std::sync::LazyLock;

use regex::Regex;

use super::frontmatter::yaml_end;
use super::lines::is_blank;

/// Optional indent, a `-`/`+`/`*` or `N.` marker, then anything.
static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-+*]|\d+\.)\s*.*$").expect("Invalid list line regex"));

/// A list marker with nothing but whitespace after it.
static EMPTY_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-+*]|\d+\.)\s*$").expect("Invalid empty item regex"));

/// Line inserted between a list block and following content.
pub const SEPARATOR: &str = " ";

/// `true` if the line starts with a list marker.
///
/// The grammar is flat: any line whose first non-whitespace character is a
/// marker counts, whether or not a space follows.
pub fn is_list_line(line: &str) -> bool {
    LIST_LINE.is_match(line)
}

/// `true` for a list marker with no item text.
pub fn is_empty_item(line: &str) -> bool {
    EMPTY_ITEM.is_match(line)
}

/// `true` if the trimmed line opens an HTML comment.
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with("<!--")
}

/// Remove empty list items and separate list blocks from following content.
///
/// Returns `true` if any line was removed or inserted.
///
/// ```rust
/// use cardprep_content::markdown::list::tidy_lists;
///
/// let mut lines: Vec<String> = ["- a", "- b", "Some text"].map(String::from).to_vec();
/// assert!(tidy_lists(&mut lines));
/// assert_eq!(lines, ["- a", "- b", " ", "Some text"]);
/// ```
pub fn tidy_lists(lines: &mut Vec<String>) -> bool {
    let mut changed = false;

    let mut i = yaml_end(lines);
    while i < lines.len() {
        if !is_list_line(&lines[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = start;
        while end < lines.len() && is_list_line(&lines[end]) {
            end += 1;
        }

        // Back to front so the indices still ahead stay valid.
        for k in (start..end).rev() {
            if is_empty_item(&lines[k]) {
                lines.remove(k);
                end -= 1;
                changed = true;
            }
        }

        if end > start
            && let Some(next) = lines.get(end)
            && !(is_blank(next) || is_list_line(next) || is_comment(next))
        {
            lines.insert(end, SEPARATOR.to_string());
            changed = true;
        }

        i = end;
    }

    changed
}

// ============================================================================
// Tests
// ============================================================================
