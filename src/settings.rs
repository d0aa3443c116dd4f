//! Credential storage behind a narrow capability interface.
//!
//! The test-lookup workflow only ever *reads* the stored token; writes happen
//! through the separate `configure` path. Modeling the store as a trait keeps
//! the command layer testable with in-memory fakes and leaves the persistence
//! mechanism (here: the TOML config file) swappable.

use std::path::PathBuf;
#[cfg(test)]
use std::sync::Mutex;

use crate::config::{self, ConfigError};

/// Errors from settings storage
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("No config directory available for settings storage")]
    NoStorePath,

    #[error(transparent)]
    Persist(#[from] ConfigError),
}

/// Get/set access to the stored provider credentials.
pub trait SettingsStore: Send + Sync {
    /// Currently stored provider API token, if any.
    fn api_token(&self) -> Option<String>;

    /// Replace the stored provider API token.
    fn set_api_token(&self, token: String) -> Result<(), SettingsError>;
}

/// Settings store backed by the TOML config file.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Open the store at the OS-standard config location.
    pub fn open() -> Result<Self, SettingsError> {
        config::config_path()
            .map(|path| Self { path })
            .ok_or(SettingsError::NoStorePath)
    }

    /// Open the store at a specific file path, for tests.
    #[cfg(test)]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettings {
    fn api_token(&self) -> Option<String> {
        config::load_from(&self.path).credentials.api_token
    }

    fn set_api_token(&self, token: String) -> Result<(), SettingsError> {
        let mut cfg = config::load_from(&self.path);
        cfg.credentials.api_token = Some(token);
        config::save_to(&self.path, &cfg)?;
        Ok(())
    }
}

/// In-memory settings store for tests.
#[cfg(test)]
pub struct MemorySettings {
    token: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemorySettings {
    pub fn empty() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl SettingsStore for MemorySettings {
    fn api_token(&self) -> Option<String> {
        self.token.lock().expect("settings mutex poisoned").clone()
    }

    fn set_api_token(&self, token: String) -> Result<(), SettingsError> {
        *self.token.lock().expect("settings mutex poisoned") = Some(token);
        Ok(())
    }
}
