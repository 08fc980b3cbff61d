//! `run` and `scope` command handlers.
//!
//! Notes are processed one at a time, in the order given. A failure on one
//! note is logged and counted; the remaining notes still run.

use std::path::{Path, PathBuf};

use cardprep_content::{DocumentStore, FsStore, Pipeline, RunOutcome};
use cardprep_core::{Error, Result};

/// Options for [`run_documents`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Vault root for scope matching; defaults to each note's own directory.
    pub vault: Option<PathBuf>,
    /// Print transformed text instead of writing.
    pub dry_run: bool,
    /// Write nothing; the caller fails if anything would change.
    pub check: bool,
}

impl RunOptions {
    fn writes(&self) -> bool {
        !(self.dry_run || self.check)
    }
}

/// Per-outcome counts for a batch of notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Out of scope.
    pub skipped: usize,
    /// In scope, nothing to do.
    pub unchanged: usize,
    /// Rewritten (or would be, for dry runs and checks).
    pub modified: usize,
    /// Could not be read, written, or located in the vault.
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: RunOutcome) {
        match outcome {
            RunOutcome::Skipped => self.skipped += 1,
            RunOutcome::Unchanged => self.unchanged += 1,
            RunOutcome::Modified(_) => self.modified += 1,
        }
    }
}

/// A note located inside a vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Store rooted at the vault.
    pub store_root: PathBuf,
    /// Vault-relative `/`-separated path.
    pub path: String,
    /// File stem used for deck names and backlinks.
    pub basename: String,
}

/// Work out the vault-relative path and basename of `file`.
pub fn locate_note(file: &Path, vault: Option<&Path>) -> Result<Note> {
    let basename = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Error::config(format!("{} has no file name", file.display())))?;

    let store_root = match vault {
        Some(vault) => vault.to_path_buf(),
        None => file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let store = FsStore::new(&store_root);
    let path = match store.relative_path(file) {
        Some(path) => path,
        None => {
            // Mixed relative/absolute spellings: compare canonical forms.
            let root = store_root
                .canonicalize()
                .map_err(|e| Error::io_with_path(e, &store_root))?;
            let canonical = file
                .canonicalize()
                .map_err(|e| Error::io_with_path(e, file))?;
            FsStore::new(&root).relative_path(&canonical).ok_or_else(|| {
                Error::config(format!(
                    "{} is not inside vault {}",
                    file.display(),
                    store_root.display()
                ))
            })?
        }
    };

    Ok(Note {
        store_root,
        path,
        basename,
    })
}

/// Run the pipeline over `files`.
pub fn run_documents(pipeline: &Pipeline, files: &[PathBuf], options: &RunOptions) -> RunSummary {
    let mut summary = RunSummary::default();

    for file in files {
        match run_one(pipeline, file, options) {
            Ok(outcome) => {
                println!("{}: {outcome}", file.display());
                summary.record(outcome);
            }
            Err(e) => {
                tracing::error!(file = %file.display(), "{e}");
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        skipped = summary.skipped,
        unchanged = summary.unchanged,
        modified = summary.modified,
        failed = summary.failed,
        "Run complete"
    );
    summary
}

fn run_one(pipeline: &Pipeline, file: &Path, options: &RunOptions) -> Result<RunOutcome> {
    let note = locate_note(file, options.vault.as_deref())?;
    let store = FsStore::new(&note.store_root);

    if options.writes() {
        return pipeline.run(&store, &note.path, &note.basename);
    }

    if !pipeline.in_scope(&note.path) {
        return Ok(RunOutcome::Skipped);
    }
    let text = store.read(&note.path)?;
    let (outcome, updated) = pipeline.preview(&text, &note.path, &note.basename);
    if options.dry_run && matches!(outcome, RunOutcome::Modified(_)) {
        println!("{updated}");
    }
    Ok(outcome)
}

/// Print whether each of `files` is in scope. Returns the number of notes
/// that could not be located.
pub fn scope_documents(pipeline: &Pipeline, files: &[PathBuf], vault: Option<&Path>) -> usize {
    let mut failed = 0;
    for file in files {
        match locate_note(file, vault) {
            Ok(note) => {
                let verdict = if pipeline.in_scope(&note.path) {
                    "in scope"
                } else {
                    "out of scope"
                };
                println!("{}: {verdict}", note.path);
            }
            Err(e) => {
                tracing::error!(file = %file.display(), "{e}");
                failed += 1;
            }
        }
    }
    failed
}

// ============================================================================
// Tests
// ============================================================================
