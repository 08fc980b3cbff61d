//! Per-document scope decision.

use crate::config::{ScopeConfig, ScopeMode};
use crate::error::Result;
use crate::scope::pattern::PathMatcher;

/// Decides whether a document path is eligible for the pipeline.
///
/// Both pattern lists are compiled up front. The setters recompile the list
/// they replace, so the gate never matches against stale patterns.
#[derive(Debug, Clone, Default)]
pub struct ScopeGate {
    mode: ScopeMode,
    include: Vec<PathMatcher>,
    exclude: Vec<PathMatcher>,
}

impl ScopeGate {
    /// Build a gate from scope configuration.
    pub fn new(config: &ScopeConfig) -> Result<Self> {
        Ok(Self {
            mode: config.mode,
            include: compile_all(&config.include)?,
            exclude: compile_all(&config.exclude)?,
        })
    }

    /// Active scope mode.
    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    /// Switch the scope mode. Compiled lists are kept.
    pub fn set_mode(&mut self, mode: ScopeMode) {
        self.mode = mode;
    }

    /// Replace and recompile the include list.
    ///
    /// On error the previous list stays in effect.
    pub fn set_include<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<()> {
        self.include = compile_all(patterns)?;
        Ok(())
    }

    /// Replace and recompile the exclude list.
    ///
    /// On error the previous list stays in effect.
    pub fn set_exclude<S: AsRef<str>>(&mut self, patterns: &[S]) -> Result<()> {
        self.exclude = compile_all(patterns)?;
        Ok(())
    }

    /// `true` if the pipeline may run on `path`.
    ///
    /// An include-mode gate with no include patterns admits nothing.
    pub fn in_scope(&self, path: &str) -> bool {
        match self.mode {
            ScopeMode::All => true,
            ScopeMode::Include => self.include.iter().any(|m| m.matches(path)),
            ScopeMode::Exclude => !self.exclude.iter().any(|m| m.matches(path)),
        }
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathMatcher>> {
    let compiled = patterns
        .iter()
        .map(|p| PathMatcher::compile(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("Compiled {} scope pattern(s)", compiled.len());
    Ok(compiled)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gate(mode: ScopeMode, include: &[&str], exclude: &[&str]) -> ScopeGate {
        ScopeGate::new(&ScopeConfig {
            mode,
            include: include.iter().map(|s| s.to_string()).collect(),
            exclude: exclude.iter().map(|s| s.to_string()).collect(),
        })
        .unwrap()
    }

    // ------------------------------------------------------------------------
    // Truth table
    // ------------------------------------------------------------------------

    #[test]
    fn test_mode_all_admits_everything() {
        let gate = gate(ScopeMode::All, &[], &["**"]);
        assert!(gate.in_scope("Archive/x.md"));
        assert!(gate.in_scope(""));
    }

    #[test]
    fn test_mode_include_requires_a_match() {
        let gate = gate(ScopeMode::Include, &["Cards/", "*.md"], &[]);
        assert!(gate.in_scope("Cards/deep/x.md"));
        assert!(gate.in_scope("top.md"));
        assert!(!gate.in_scope("Notes/x.md"));
    }

    #[test]
    fn test_mode_include_with_empty_list_admits_nothing() {
        let gate = gate(ScopeMode::Include, &[], &[]);
        assert!(!gate.in_scope("x.md"));
        assert!(!gate.in_scope(""));
    }

    #[test]
    fn test_mode_exclude_rejects_matches() {
        let gate = gate(ScopeMode::Exclude, &[], &["Archive/"]);
        assert!(!gate.in_scope("Archive/x.md"));
        assert!(gate.in_scope("Notes/x.md"));
    }

    #[test]
    fn test_mode_exclude_with_empty_list_admits_everything() {
        let gate = gate(ScopeMode::Exclude, &[], &[]);
        assert!(gate.in_scope("Archive/x.md"));
    }

    #[test]
    fn test_inactive_list_is_ignored() {
        let gate = gate(ScopeMode::Exclude, &["Notes/"], &["Archive/"]);
        assert!(gate.in_scope("Other/x.md"));
    }

    // ------------------------------------------------------------------------
    // Recompilation
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_include_recompiles() {
        let mut gate = gate(ScopeMode::Include, &["Old/"], &[]);
        assert!(gate.in_scope("Old/x.md"));

        gate.set_include(&["New/"]).unwrap();
        assert!(!gate.in_scope("Old/x.md"));
        assert!(gate.in_scope("New/x.md"));
    }

    #[test]
    fn test_set_exclude_recompiles() {
        let mut gate = gate(ScopeMode::Exclude, &[], &["Old/"]);
        gate.set_exclude(&["New/"]).unwrap();
        assert!(gate.in_scope("Old/x.md"));
        assert!(!gate.in_scope("New/x.md"));
    }

    #[test]
    fn test_set_mode_keeps_lists() {
        let mut gate = gate(ScopeMode::All, &["Cards/"], &["Archive/"]);
        gate.set_mode(ScopeMode::Include);
        assert_eq!(gate.mode(), ScopeMode::Include);
        assert!(gate.in_scope("Cards/x.md"));
        assert!(!gate.in_scope("Archive/x.md"));

        gate.set_mode(ScopeMode::Exclude);
        assert!(gate.in_scope("Cards/x.md"));
        assert!(!gate.in_scope("Archive/x.md"));
    }

    #[test]
    fn test_default_gate_is_all() {
        let gate = ScopeGate::default();
        assert_eq!(gate.mode(), ScopeMode::All);
        assert!(gate.in_scope("anything.md"));
    }
}
