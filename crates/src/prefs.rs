//! Preference storage: a tiny string key/value store.
//!
//! The terminal build keeps preferences in a flat JSON object under the OS
//! config directory (e.g. `~/.config/ptable/prefs.json`). Tests and
//! `--no-persist` runs use the in-memory store.

use crate::error::PrefsError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// `Send` so the store can live inside the terminal program's model.
pub trait FlagStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A value as found in the preference file. Hand-edited files may hold
/// plain JSON booleans; anything else is kept verbatim and written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Text(String),
    Flag(bool),
    Other(serde_json::Value),
}

impl StoredValue {
    fn as_text(&self) -> Option<String> {
        match self {
            StoredValue::Text(s) => Some(s.clone()),
            StoredValue::Flag(b) => Some(b.to_string()),
            StoredValue::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, StoredValue>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values: BTreeMap<String, StoredValue> = match File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                PrefsError::Json {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(PrefsError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "opened preference file");
        Ok(JsonFileStore { path, values })
    }

    pub fn open_default() -> Result<Self, PrefsError> {
        Self::open(default_path()?)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PrefsError> {
        let io_err = |source| PrefsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let file = File::create(&self.path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.values).map_err(|source| {
            PrefsError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)
    }
}

impl FlagStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).and_then(StoredValue::as_text)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), StoredValue::Text(value.to_string()));
        self.flush()
    }
}

pub fn default_path() -> Result<PathBuf, PrefsError> {
    ProjectDirs::from("", "", "ptable")
        .map(|dirs| dirs.config_dir().join("prefs.json"))
        .ok_or(PrefsError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("darkMode"), None);
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
        store.set("darkMode", "false").unwrap();
        assert_eq!(store.get("darkMode").as_deref(), Some("false"));
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("darkMode"), None);
    }

    #[test]
    fn set_persists_across_reopen_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("darkMode", "true").unwrap();
        assert!(path.exists());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("darkMode").as_deref(), Some("true"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn hand_edited_values_are_read_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"darkMode": true, "window": {"w": 80}}"#).unwrap();
        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
        assert_eq!(store.get("window"), None);

        store.set("darkMode", "false").unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["darkMode"], "false");
        assert_eq!(written["window"]["w"], 80);
    }

    #[test]
    fn failed_write_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("ptable");
        let mut store = JsonFileStore::open(blocked.join("prefs.json")).unwrap();
        // the config directory turns out to be a regular file
        fs::write(&blocked, "not a directory").unwrap();
        let err = store.set("darkMode", "true").unwrap_err();
        assert!(
            matches!(err, PrefsError::Io { ref path, .. } if path == &blocked.join("prefs.json"))
        );
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, PrefsError::Json { .. }));
    }
}
