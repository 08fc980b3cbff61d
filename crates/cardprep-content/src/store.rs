//! Document source/sink.
//!
//! The pipeline reads a whole document, transforms it in memory, and writes
//! the whole document back. [`DocumentStore`] is that boundary. Paths are
//! vault-relative strings with `/` separators, the same strings the scope
//! patterns are matched against.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use cardprep_core::{Error, Result};

/// Whole-document read and write.
pub trait DocumentStore {
    /// Read the full text of `path`.
    fn read(&self, path: &str) -> Result<String>;

    /// Replace the full text of `path`.
    fn write(&self, path: &str, text: &str) -> Result<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn read(&self, path: &str) -> Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &str, text: &str) -> Result<()> {
        (**self).write(path, text)
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// Documents stored as files under a vault root.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a vault-relative path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    /// Vault-relative `/`-separated form of `file`, or `None` if `file` is
    /// not under the root.
    ///
    /// ```rust
    /// use cardprep_content::FsStore;
    /// use std::path::Path;
    ///
    /// let store = FsStore::new("/vault");
    /// assert_eq!(
    ///     store.relative_path(Path::new("/vault/Cards/Cells.md")),
    ///     Some("Cards/Cells.md".to_string())
    /// );
    /// assert_eq!(store.relative_path(Path::new("/elsewhere/x.md")), None);
    /// ```
    pub fn relative_path(&self, file: &Path) -> Option<String> {
        let relative = file.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }
}

impl DocumentStore for FsStore {
    fn read(&self, path: &str) -> Result<String> {
        let file = self.resolve(path);
        std::fs::read_to_string(&file).map_err(|e| Error::io_with_path(e, &file))
    }

    fn write(&self, path: &str, text: &str) -> Result<()> {
        let file = self.resolve(path);
        std::fs::write(&file, text).map_err(|e| Error::io_with_path(e, &file))
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Documents held in memory. Counts writes so callers can tell a no-op run
/// from one that persisted changes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document without counting it as a write.
    pub fn insert(&self, path: impl Into<String>, text: impl Into<String>) {
        self.documents.borrow_mut().insert(path.into(), text.into());
    }

    /// Current text of `path`.
    pub fn get(&self, path: &str) -> Option<String> {
        self.documents.borrow().get(path).cloned()
    }

    /// Number of [`DocumentStore::write`] calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, path: &str) -> Result<String> {
        self.get(path).ok_or_else(|| {
            Error::io_with_path(
                std::io::Error::new(std::io::ErrorKind::NotFound, "document not found"),
                path,
            )
        })
    }

    fn write(&self, path: &str, text: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.insert(path, text);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
