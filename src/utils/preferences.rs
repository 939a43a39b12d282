//! Preferences - Local Key/Value Storage
//!
//! The page persists a couple of string preferences (language, theme). The
//! desktop app keeps them in a TOML file; tests and exports use memory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{error, info, warn};

use crate::constants::PREFERENCES_FILE;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;

/// Synchronous key/value storage for user preferences
pub trait PreferenceStorage {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Storage handle shared by everything on a page
pub type SharedStorage = Rc<dyn PreferenceStorage>;

/// In-memory storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a value
    pub fn with(self, key: &str, value: &str) -> Self {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that fails every access, as when the platform refuses persistence
#[derive(Debug, Default)]
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable {
            message: "storage is disabled".to_string(),
        })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable {
            message: "storage is disabled".to_string(),
        })
    }
}

/// TOML file storage: a flat table of string values
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage backed by `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage in the platform config directory
    pub fn in_config_dir() -> Result<Self> {
        let path = get_or_create_config_dir()?.join(PREFERENCES_FILE);
        info!(path = ?path, "Using preferences file");
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let value = fs::read_to_string(&self.path)?;
        if value.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?self.path, "Failed to parse preferences file");
            Error::from(e)
        })
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(Error::TomlDe { .. }) => {
                warn!(path = ?self.path, "Replacing unreadable preferences file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, toml::to_string(&values)?)?;
        Ok(())
    }
}
