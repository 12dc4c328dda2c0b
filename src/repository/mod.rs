pub mod file_store;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory_store;
pub mod preference_repository;
pub mod preference_store;

pub use file_store::FilePreferenceStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory_store::MemoryPreferenceStore;
pub use preference_repository::PreferenceRepository;
pub use preference_store::{MockPreferenceStore, PreferenceKey, PreferenceStore};

use std::rc::Rc;
use tracing::info;

use crate::config::DashboardConfig;

/// Picks the durable store for the current platform: `localStorage` in the
/// browser, a preference file on desktop. Falls back to memory when neither
/// is available, so preferences then last for the session only.
#[cfg(target_arch = "wasm32")]
pub fn open_preference_store(_config: &DashboardConfig) -> Rc<dyn PreferenceStore> {
    info!("Using browser localStorage for preferences");
    Rc::new(LocalStorageStore::new())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_preference_store(config: &DashboardConfig) -> Rc<dyn PreferenceStore> {
    match config.resolved_preferences_path() {
        Some(path) => {
            info!(path = %path.display(), "Using preference file");
            Rc::new(FilePreferenceStore::open(path))
        }
        None => {
            tracing::warn!("No data directory available, preferences will not persist");
            Rc::new(MemoryPreferenceStore::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_configured_path_is_used() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let config = DashboardConfig {
            preferences_path: Some(path.clone()),
            ..Default::default()
        };

        let store = open_preference_store(&config);
        store.set(PreferenceKey::SearchQuery, "kept").unwrap();

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(PreferenceKey::SearchQuery).as_deref(), Some("kept"));
    }
}
