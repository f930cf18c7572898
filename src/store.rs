//! Typed key-value persistence
//!
//! Parsed resumes and generated job lists survive across CLI invocations as
//! JSON files under a data directory, behind an explicit typed interface so
//! the backend is swappable without touching parsing or matching logic.

use crate::error::{JobPilotError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let root = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-pilot");
        Ok(Self::new(root))
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.record_path(key)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Absent keys are not errors.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.record_path(key)?;

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path)?;
        Ok(true)
    }

    fn record_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(JobPilotError::Storage(format!(
                "Invalid record key '{}': use letters, digits, '-' or '_'",
                key
            )));
        }

        Ok(self.root.join(format!("{}.json", key)))
    }
}
