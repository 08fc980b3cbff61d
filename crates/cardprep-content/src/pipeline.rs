//! The transformation pipeline.
//!
//! A [`Pipeline`] owns a validated [`Configuration`] and the [`ScopeGate`]
//! compiled from it. Per document it checks scope, splits the text into
//! lines, runs the enabled components in a fixed order, and reports what
//! happened:
//!
//! 1. deck header ([`ensure_deck_header`])
//! 2. question headings ([`rewrite_headings`])
//! 3. lists ([`tidy_lists`])
//!
//! Disabled components are not run at all. The document is written back only
//! when something changed.

use std::fmt;

use cardprep_core::{Configuration, Result, ScopeConfig, ScopeGate};

use crate::markdown::{ensure_deck_header, join_lines, rewrite_headings, split_lines, tidy_lists};
use crate::store::DocumentStore;

/// Which components changed a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    /// Deck header inserted.
    pub deck: bool,
    /// Question headings cleaned or backlinks maintained.
    pub headings: bool,
    /// Empty list items removed or separators inserted.
    pub lists: bool,
}

impl Changes {
    /// `true` if any component changed the document.
    pub fn any(&self) -> bool {
        self.deck || self.headings || self.lists
    }
}

impl fmt::Display for Changes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.deck, "deck"),
            (self.headings, "headings"),
            (self.lists, "lists"),
        ]
        .into_iter()
        .filter_map(|(hit, name)| hit.then_some(name))
        .collect();

        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

/// Result of running the pipeline on one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The path is out of scope; nothing was read or written.
    Skipped,
    /// Every enabled component left the document alone; nothing was written.
    Unchanged,
    /// The document was rewritten.
    Modified(Changes),
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skipped => write!(f, "skipped (out of scope)"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Modified(changes) => write!(f, "modified: {changes}"),
        }
    }
}

/// Scope gate plus the enabled components.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Configuration,
    gate: ScopeGate,
}

impl Pipeline {
    /// Validate `config` and compile its scope patterns.
    pub fn new(config: Configuration) -> Result<Self> {
        config.validate()?;
        let gate = ScopeGate::new(&config.scope)?;
        Ok(Self { config, gate })
    }

    /// The configuration snapshot in use.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Replace the scope configuration and recompile its patterns.
    ///
    /// On error the previous scope stays in effect.
    pub fn set_scope(&mut self, scope: ScopeConfig) -> Result<()> {
        self.gate = ScopeGate::new(&scope)?;
        self.config.scope = scope;
        Ok(())
    }

    /// `true` if the pipeline would run on `path`.
    pub fn in_scope(&self, path: &str) -> bool {
        self.gate.in_scope(path)
    }

    /// Run the enabled components over `lines`, in order.
    pub fn transform(&self, lines: &mut Vec<String>, basename: &str) -> Changes {
        let mut changes = Changes::default();

        if self.config.enable_target_deck {
            changes.deck = ensure_deck_header(lines, &self.config.deck_template, basename);
        }
        if self.config.enable_heading_ops {
            changes.headings = rewrite_headings(lines, self.config.heading_level, basename);
        }
        if self.config.enable_list_tidy {
            changes.lists = tidy_lists(lines);
        }

        log::debug!("{basename}: {changes}");
        changes
    }

    /// Run on in-memory text.
    ///
    /// Returns the outcome and the resulting text. For
    /// [`RunOutcome::Skipped`] and [`RunOutcome::Unchanged`] the text is
    /// returned exactly as given, line endings included.
    pub fn preview(&self, text: &str, path: &str, basename: &str) -> (RunOutcome, String) {
        if !self.in_scope(path) {
            return (RunOutcome::Skipped, text.to_string());
        }

        let mut lines = split_lines(text);
        let changes = self.transform(&mut lines, basename);
        if changes.any() {
            (RunOutcome::Modified(changes), join_lines(&lines))
        } else {
            (RunOutcome::Unchanged, text.to_string())
        }
    }

    /// Read `path` from `store`, transform it, and write it back if changed.
    ///
    /// Out-of-scope documents are not read.
    pub fn run<S: DocumentStore + ?Sized>(
        &self,
        store: &S,
        path: &str,
        basename: &str,
    ) -> Result<RunOutcome> {
        if !self.in_scope(path) {
            log::info!("{path}: skipped (out of scope)");
            return Ok(RunOutcome::Skipped);
        }

        let text = store.read(path)?;
        let (outcome, updated) = self.preview(&text, path, basename);
        if let RunOutcome::Modified(_) = outcome {
            store.write(path, &updated)?;
        }

        log::info!("{path}: {outcome}");
        Ok(outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================
