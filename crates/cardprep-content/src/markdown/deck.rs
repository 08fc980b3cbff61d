//! `TARGET DECK` header insertion.
//!
//! The flashcard exporter reads the deck for a note from a two-line block:
//!
//! ```markdown
//! TARGET DECK
//! Biology::Cells
//! ```
//!
//! The block goes right after the front matter, or before the first heading
//! when there is no front matter, or at the very top otherwise.

use cardprep_core::config::FILENAME_PLACEHOLDER;

use super::frontmatter::{FRONT_MATTER_DELIMITER, yaml_end};

/// Marker line; its presence anywhere means the header already exists.
pub const DECK_MARKER: &str = "TARGET DECK";

/// Replace every literal `filename` in `template` with `basename`.
///
/// ```rust
/// use cardprep_content::markdown::deck::render_deck_template;
///
/// assert_eq!(render_deck_template("[[Deck]]::[[filename]]", "Card1"), "[[Deck]]::[[Card1]]");
/// assert_eq!(render_deck_template("filename/filename", "a"), "a/a");
/// ```
pub fn render_deck_template(template: &str, basename: &str) -> String {
    template.replace(FILENAME_PLACEHOLDER, basename)
}

/// Insert the deck header unless a line already contains [`DECK_MARKER`].
///
/// Returns `true` if the header was inserted.
pub fn ensure_deck_header(lines: &mut Vec<String>, template: &str, basename: &str) -> bool {
    if lines.iter().any(|line| line.contains(DECK_MARKER)) {
        return false;
    }

    let mut at = match yaml_end(lines) {
        0 => lines
            .iter()
            .position(|line| line.trim().starts_with('#'))
            .unwrap_or(0),
        end => end,
    };

    // Keep the header off the closing delimiter.
    if at > 0 && lines[at - 1] == FRONT_MATTER_DELIMITER {
        lines.insert(at, String::new());
        at += 1;
    }

    lines.splice(
        at..at,
        [
            DECK_MARKER.to_string(),
            render_deck_template(template, basename),
            String::new(),
        ],
    );
    true
}

// ============================================================================
// Tests
// ============================================================================
