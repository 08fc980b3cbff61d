//! Line-oriented Markdown rewrites.
//!
//! Each rewrite takes `&mut Vec<String>`, mutates it in place, and returns
//! `true` if anything changed. All of them skip YAML front matter by starting
//! at [`yaml_end`], and all of them are idempotent: a second call on their
//! own output returns `false`.
//!
//! ```rust
//! use cardprep_content::markdown::{split_lines, tidy_lists, join_lines};
//!
//! let mut lines = split_lines("- a\n- \n- b\nSome text");
//! assert!(tidy_lists(&mut lines));
//! assert_eq!(join_lines(&lines), "- a\n- b\n \nSome text");
//! assert!(!tidy_lists(&mut lines));
//! ```

pub mod deck;
pub mod frontmatter;
pub mod heading;
pub mod lines;
pub mod list;

// Re-export key types and functions
pub use deck::{DECK_MARKER, ensure_deck_header, render_deck_template};
pub use frontmatter::{FRONT_MATTER_DELIMITER, yaml_end};
pub use heading::{backlink, clean_heading_text, heading_prefix, is_section_link, rewrite_headings};
pub use lines::{is_blank, join_lines, split_lines};
pub use list::{is_comment, is_empty_item, is_list_line, tidy_lists};
