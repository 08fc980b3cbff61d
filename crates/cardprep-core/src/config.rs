//! Per-run configuration.
//!
//! [`Configuration`] is an immutable snapshot handed to the pipeline for each
//! run. It is loaded and persisted by the host; every field has a default, so
//! a partial configuration file merges over [`Configuration::default`].
//!
//! ```rust
//! use cardprep_core::{Configuration, ScopeMode};
//!
//! let config = Configuration::default();
//! assert_eq!(config.heading_level, 4);
//! assert_eq!(config.scope.mode, ScopeMode::All);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Placeholder replaced by the document basename in the deck template.
pub const FILENAME_PLACEHOLDER: &str = "filename";

/// Default heading depth for question headings.
pub const DEFAULT_HEADING_LEVEL: u8 = 4;

/// Default deck-name template.
pub const DEFAULT_DECK_TEMPLATE: &str = "Obsidian::filename";

/// Which documents the pipeline is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeMode {
    /// Every document is in scope.
    #[default]
    All,
    /// Only documents matching an include pattern are in scope.
    Include,
    /// Documents matching an exclude pattern are out of scope.
    Exclude,
}

/// Scope mode plus the raw glob lists for both modes.
///
/// Both lists are kept regardless of mode so switching modes does not lose
/// the other list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Active scope mode.
    #[serde(default)]
    pub mode: ScopeMode,

    /// Globs consulted in [`ScopeMode::Include`].
    #[serde(default)]
    pub include: Vec<String>,

    /// Globs consulted in [`ScopeMode::Exclude`].
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Configuration snapshot for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Heading depth (1–6) treated as a flashcard question.
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,

    /// Deck name written under the `TARGET DECK` marker; every `filename`
    /// is replaced with the document basename.
    #[serde(default = "default_deck_template")]
    pub deck_template: String,

    /// Insert the deck header.
    #[serde(default = "default_true")]
    pub enable_target_deck: bool,

    /// Clean question headings and maintain their backlinks.
    #[serde(default = "default_true")]
    pub enable_heading_ops: bool,

    /// Remove empty list items and separate lists from paragraphs.
    #[serde(default = "default_true")]
    pub enable_list_tidy: bool,

    /// Path scoping.
    #[serde(default)]
    pub scope: ScopeConfig,
}

fn default_heading_level() -> u8 {
    DEFAULT_HEADING_LEVEL
}

fn default_deck_template() -> String {
    DEFAULT_DECK_TEMPLATE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            heading_level: default_heading_level(),
            deck_template: default_deck_template(),
            enable_target_deck: default_true(),
            enable_heading_ops: default_true(),
            enable_list_tidy: default_true(),
            scope: ScopeConfig::default(),
        }
    }
}

impl Configuration {
    /// Check the invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.heading_level) {
            return Err(Error::InvalidHeadingLevel(self.heading_level));
        }
        if !self.deck_template.contains(FILENAME_PLACEHOLDER) {
            log::warn!(
                "Deck template '{}' has no '{FILENAME_PLACEHOLDER}' placeholder; every document gets the same deck",
                self.deck_template
            );
        }
        Ok(())
    }

    /// `true` when at least one pipeline component is enabled.
    pub fn any_enabled(&self) -> bool {
        self.enable_target_deck || self.enable_heading_ops || self.enable_list_tidy
    }
}

// ============================================================================
// Tests
// ============================================================================
