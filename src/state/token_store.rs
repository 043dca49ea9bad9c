//! Durable storage for the bearer token.
//!
//! DESIGN
//! ======
//! Mirrors browser local storage: a flat string-to-string map persisted as a
//! JSON object, with the token under the fixed key [`TOKEN_KEY`]. Other keys
//! in the file are left untouched. `MemoryTokenStore` backs tests and
//! ephemeral sessions.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("storage file {path} is not a JSON string map: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistence seam for the session store.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `token`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => return Err(StorageError::Io { path: self.path.clone(), source }),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|source| StorageError::Json { path: self.path.clone(), source })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
        }
        let content = serde_json::to_string_pretty(map)
            .map_err(|source| StorageError::Json { path: self.path.clone(), source })?;
        fs::write(&self.path, content).map_err(|source| StorageError::Io { path: self.path.clone(), source })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(TOKEN_KEY))
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(TOKEN_KEY.to_owned(), token.to_owned());
        self.write_map(&map)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        if map.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new(token: Option<&str>) -> Self {
        Self { token: Mutex::new(token.map(ToOwned::to_owned)) }
    }

    /// Current value without going through the trait's `Result`.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.token.lock().map(|guard| guard.clone()).unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn set(&self, value: Option<String>) {
        match self.token.lock() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.get())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.set(Some(token.to_owned()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.set(None);
        Ok(())
    }
}

#[cfg(test)]
#[path = "token_store_test.rs"]
mod tests;
