//! Persisted bearer token.
//!
//! The session file is a small YAML mapping. Two keys may carry a token:
//! `token` (written by older clients) and `access_token`; when both are set,
//! `access_token` wins. The file is read on every request, nothing is cached.

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Older key, consulted first.
pub const LEGACY_TOKEN_KEY: &str = "token";
/// Current key, takes precedence over [`LEGACY_TOKEN_KEY`].
pub const TOKEN_KEY: &str = "access_token";

/// Supplies the bearer token attached to each API request.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token, or none at all for anonymous access.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to read session file '{}': {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse session file '{}': {}", .0.display(), .1)]
    Parse(PathBuf, serde_yaml::Error),

    #[error("Failed to write session file '{}': {}", .0.display(), .1)]
    Write(PathBuf, std::io::Error),

    #[error("Failed to encode session: {0}")]
    Encode(serde_yaml::Error),

    #[error("Session file '{}' is not a mapping", .0.display())]
    InvalidFormat(PathBuf),
}

/// File-backed token storage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current token, honoring key precedence.
    pub fn read_token(&self) -> Result<Option<String>, SessionError> {
        let mapping = self.load()?;
        let lookup = |key: &str| {
            mapping
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        };
        Ok(lookup(TOKEN_KEY).or_else(|| lookup(LEGACY_TOKEN_KEY)))
    }

    /// Stores `token` under the current key, keeping any other entries.
    pub fn save_token(&self, token: &str) -> Result<(), SessionError> {
        let mut mapping = self.load()?;
        mapping.insert(
            Value::String(TOKEN_KEY.to_string()),
            Value::String(token.to_string()),
        );
        self.write(&mapping)
    }

    /// Removes both token keys. Returns whether a token was present.
    pub fn clear(&self) -> Result<bool, SessionError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let mut mapping = self.load()?;
        let had_current = mapping.remove(TOKEN_KEY).is_some();
        let had_legacy = mapping.remove(LEGACY_TOKEN_KEY).is_some();
        self.write(&mapping)?;
        Ok(had_current || had_legacy)
    }

    fn load(&self) -> Result<Mapping, SessionError> {
        if !self.path.exists() {
            return Ok(Mapping::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SessionError::Read(self.path.clone(), e))?;
        if contents.trim().is_empty() {
            return Ok(Mapping::new());
        }
        let value: Value = serde_yaml::from_str(&contents)
            .map_err(|e| SessionError::Parse(self.path.clone(), e))?;
        match value {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            _ => Err(SessionError::InvalidFormat(self.path.clone())),
        }
    }

    fn write(&self, mapping: &Mapping) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SessionError::Write(self.path.clone(), e))?;
        }
        let yaml = serde_yaml::to_string(mapping).map_err(SessionError::Encode)?;
        std::fs::write(&self.path, yaml).map_err(|e| SessionError::Write(self.path.clone(), e))
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        match self.read_token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session: {}", e);
                None
            }
        }
    }
}
