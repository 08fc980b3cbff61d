//! Markdown normalization for flashcard extraction.
//!
//! This crate rewrites a note, line by line, into the shape a flashcard
//! exporter expects. It never builds a Markdown AST; every component works on
//! an owned `Vec<String>` and reports whether it changed anything.
//!
//! # Modules
//!
//! - [`markdown`]: The individual line rewrites
//!   - [`markdown::lines`]: Splitting, joining, blank detection
//!   - [`markdown::frontmatter`]: Locating the end of YAML front matter
//!   - [`markdown::deck`]: `TARGET DECK` header insertion
//!   - [`markdown::heading`]: Question heading cleanup and backlinks
//!   - [`markdown::list`]: Empty-item removal and list/paragraph spacing
//! - [`pipeline`]: Scope gate plus the components, in order
//! - [`store`]: Document source/sink trait with filesystem and in-memory stores
//!
//! # Example
//!
//! ```rust
//! use cardprep_content::{Pipeline, RunOutcome};
//! use cardprep_core::Configuration;
//!
//! let config = Configuration {
//!     deck_template: "Biology::filename".to_string(),
//!     ..Configuration::default()
//! };
//! let pipeline = Pipeline::new(config).unwrap();
//!
//! let (outcome, text) = pipeline.preview("#### What is a cell\nThe unit of life.", "Cells.md", "Cells");
//! assert!(matches!(outcome, RunOutcome::Modified(_)));
//! assert_eq!(
//!     text,
//!     "TARGET DECK\nBiology::Cells\n\n#### What is a cell\n[[Cells#What is a cell]]\nThe unit of life."
//! );
//! ```

pub mod markdown;
pub mod pipeline;
pub mod store;

// Re-export commonly used types
pub use markdown::{
    DECK_MARKER, ensure_deck_header, join_lines, rewrite_headings, split_lines, tidy_lists,
    yaml_end,
};
pub use pipeline::{Changes, Pipeline, RunOutcome};
pub use store::{DocumentStore, FsStore, MemoryStore};
