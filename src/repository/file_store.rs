use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::preference_store::{PreferenceKey, PreferenceStore};
use crate::services::error_handling::{DashboardError, Result};

/// Durable store for the desktop build: one JSON object, one string per slot.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl FilePreferenceStore {
    /// Opens the store at `path`. A missing or unreadable file starts empty;
    /// it is only replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = Self::read_slots(&path);
        debug!(path = %path.display(), slots = slots.len(), "Opened preference file");
        Self {
            path,
            slots: Mutex::new(slots),
        }
    }

    fn read_slots(path: &Path) -> HashMap<String, String> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read preference file");
                return HashMap::new();
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(object) => object
                .into_iter()
                .filter_map(|(key, value)| match value {
                    Value::String(text) => Some((key, text)),
                    _ => None,
                })
                .collect(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Preference file is not a JSON object");
                HashMap::new()
            }
        }
    }

    fn write_slots(&self, slots: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(slots)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.slots.lock().get(key.as_str()).cloned()
    }

    fn set(&self, key: PreferenceKey, value: &str) -> Result<()> {
        let mut slots = self.slots.lock();
        let mut updated = slots.clone();
        updated.insert(key.as_str().to_string(), value.to_string());
        self.write_slots(&updated).map_err(|e| DashboardError::Preference {
            key: key.as_str().to_string(),
            message: e.to_string(),
        })?;
        *slots = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let store = FilePreferenceStore::open(&path);
        store.set(PreferenceKey::PageSize, "20").unwrap();
        store.set(PreferenceKey::SearchQuery, "smith").unwrap();
        drop(store);

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(PreferenceKey::PageSize).as_deref(), Some("20"));
        assert_eq!(reopened.get(PreferenceKey::SearchQuery).as_deref(), Some("smith"));
        assert_eq!(reopened.get(PreferenceKey::CurrentPage), None);
    }

    #[test]
    fn test_garbage_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json at all").unwrap();

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get(PreferenceKey::PageSize), None);

        store.set(PreferenceKey::PageSize, "5").unwrap();
        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(PreferenceKey::PageSize).as_deref(), Some("5"));
    }

    #[test]
    fn test_failed_write_leaves_slots_unchanged() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let store = FilePreferenceStore::open(blocker.join("preferences.json"));
        let err = store.set(PreferenceKey::SearchQuery, "lost").unwrap_err();

        assert!(matches!(err, DashboardError::Preference { .. }));
        assert_eq!(store.get(PreferenceKey::SearchQuery), None);
    }

    #[test]
    fn test_non_string_slots_are_skipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"pageSize": 20, "searchQuery": "ann"}"#).unwrap();

        let store = FilePreferenceStore::open(&path);
        assert_eq!(store.get(PreferenceKey::PageSize), None);
        assert_eq!(store.get(PreferenceKey::SearchQuery).as_deref(), Some("ann"));
    }
}
