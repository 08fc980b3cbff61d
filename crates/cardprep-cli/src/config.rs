//! TOML configuration store.
//!
//! The configuration lives in one TOML file. Resolution order:
//!
//! 1. `--config <PATH>` (or the `CARDPREP_CONFIG` environment variable,
//!    which clap folds into the same flag)
//! 2. `<platform config dir>/cardprep/config.toml`
//!
//! A missing file is not an error: [`ConfigStore::load`] returns
//! [`Configuration::default`], and any keys the file leaves out fall back to
//! their defaults.

use std::path::{Path, PathBuf};

use cardprep_core::{Configuration, Error, Result};

/// Directory name under the platform config dir.
pub const PROJECT_NAME: &str = "cardprep";

/// File name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Platform default location of the configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
}

/// Explicit path if given, platform default otherwise.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => default_config_path(),
    }
}

/// Serialize a configuration as pretty TOML.
pub fn to_toml_string(config: &Configuration) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| Error::config(e.to_string()))
}

/// Load and save a [`Configuration`] at one file path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved config path.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        resolve_config_path(explicit)
            .map(Self::new)
            .ok_or_else(|| Error::config("Could not determine config directory for this platform"))
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `true` if the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the file merged over defaults, or defaults if there is no file.
    pub fn load(&self) -> Result<Configuration> {
        if !self.exists() {
            tracing::debug!(path = %self.path.display(), "No config file; using defaults");
            return Ok(Configuration::default());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| Error::io_with_path(e, &self.path))?;
        let config: Configuration = toml::from_str(&content).map_err(|e| {
            Error::config(format!("Failed to parse {}: {e}", self.path.display()))
        })?;
        config.validate()?;

        tracing::debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }

    /// Validate and write `config`, creating parent directories.
    pub fn save(&self, config: &Configuration) -> Result<()> {
        config.validate()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }

        let toml_str = to_toml_string(config)?;
        std::fs::write(&self.path, toml_str).map_err(|e| Error::io_with_path(e, &self.path))?;

        tracing::debug!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cardprep_core::ScopeMode;

    #[test]
    fn test_resolve_explicit_path() {
        assert_eq!(
            resolve_config_path(Some("/explicit/config.toml")),
            Some(PathBuf::from("/explicit/config.toml"))
        );
    }

    #[test]
    fn test_default_path_ends_with_project_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("cardprep/config.toml"));
        }
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("none.toml"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), Configuration::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("nested").join("config.toml"));

        let mut config = Configuration::default();
        config.heading_level = 2;
        config.scope.mode = ScopeMode::Include;
        config.scope.include = vec!["Cards/".to_string()];
        store.save(&config).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "enable_list_tidy = false\n").unwrap();

        let config = ConfigStore::new(&path).load().unwrap();
        assert!(!config.enable_list_tidy);
        assert_eq!(config.heading_level, 4);
    }

    #[test]
    fn test_load_rejects_invalid_heading_level() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "heading_level = 9\n").unwrap();

        let result = ConfigStore::new(&path).load();
        assert!(matches!(result, Err(Error::InvalidHeadingLevel(9))));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "heading_level = \"four\"\n").unwrap();

        let err = ConfigStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("config.toml"));
        let config = Configuration {
            heading_level: 0,
            ..Configuration::default()
        };
        assert!(store.save(&config).is_err());
        assert!(!store.exists());
    }
}
