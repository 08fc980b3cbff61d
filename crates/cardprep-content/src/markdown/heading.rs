//! Question heading cleanup and backlinks.
//!
//! Headings at the configured level are flashcard questions. The exporter
//! chokes on inline code and HTML in them, and each card needs a link back to
//! its heading, so every question heading ends up as:
//!
//! ```markdown
//! #### What is a cell
//! [[Cells#What is a cell]]
//! ```

use std::sync::LazyLock;

use regex::Regex;

use super::frontmatter::yaml_end;
use super::lines::is_blank;

/// Inline code spans, HTML-ish tags, and any stray backtick or angle bracket.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`|<[^>]*>|[`<>]").expect("Invalid disallowed-text regex"));

/// Two-bracket wiki link with a `#` section anchor.
static SECTION_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[.*#.*\]\]$").expect("Invalid section link regex"));

/// `level` hashes followed by one space.
///
/// ```rust
/// use cardprep_content::markdown::heading::heading_prefix;
///
/// assert_eq!(heading_prefix(4), "#### ");
/// ```
pub fn heading_prefix(level: u8) -> String {
    format!("{} ", "#".repeat(usize::from(level)))
}

/// Strip inline code, tags, and stray `` ` ``/`<`/`>` from heading text, then trim.
///
/// Internal whitespace is left alone, so removing a span between two spaces
/// leaves both spaces behind.
///
/// ```rust
/// use cardprep_content::markdown::heading::clean_heading_text;
///
/// assert_eq!(clean_heading_text("Question with `code` and <tag>"), "Question with  and");
/// assert_eq!(clean_heading_text(" a > b "), "a  b");
/// ```
pub fn clean_heading_text(raw: &str) -> String {
    DISALLOWED.replace_all(raw, "").trim().to_string()
}

/// Self-link to `heading` in the note named `basename`.
pub fn backlink(basename: &str, heading: &str) -> String {
    format!("[[{basename}#{heading}]]")
}

/// `true` if the trimmed line is a `[[...#...]]` link.
pub fn is_section_link(line: &str) -> bool {
    SECTION_LINK.is_match(line.trim())
}

/// Clean question headings and keep a backlink line under each one.
///
/// The backlink belongs on the first non-blank line after the heading. If
/// that slot holds some other section link it is overwritten; if it holds
/// anything else the backlink is inserted in front of it; if the heading is
/// the last content line the backlink is appended.
///
/// Returns `true` if any line was rewritten or inserted.
pub fn rewrite_headings(lines: &mut Vec<String>, level: u8, basename: &str) -> bool {
    let prefix = heading_prefix(level);
    let mut changed = false;

    let mut i = yaml_end(lines);
    while i < lines.len() {
        let Some(raw) = lines[i].strip_prefix(prefix.as_str()).map(str::to_owned) else {
            i += 1;
            continue;
        };

        let cleaned = clean_heading_text(&raw);
        if cleaned != raw {
            lines[i] = format!("{prefix}{cleaned}");
            changed = true;
        }

        let expected = backlink(basename, &cleaned);
        match (i + 1..lines.len()).find(|&j| !is_blank(&lines[j])) {
            None => {
                lines.push(expected);
                changed = true;
            }
            Some(j) if !is_section_link(&lines[j]) => {
                lines.insert(j, expected);
                changed = true;
            }
            Some(j) if lines[j].trim() != expected => {
                lines[j] = expected;
                changed = true;
            }
            Some(_) => {}
        }

        // Anything inserted sits after `i` and never starts with the prefix,
        // so stepping one line keeps later headings in view.
        i += 1;
    }

    changed
}

// ============================================================================
// Tests
// ============================================================================
