use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::preference_store::{PreferenceKey, PreferenceStore};
use crate::services::error_handling::{DashboardError, Result};

/// Browser `localStorage`, the durable store for the web build.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Storage can be unavailable (private mode, sandboxed frames); the store
    /// then behaves as permanently empty and rejects writes.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                warn!(error = ?e, "localStorage is not accessible");
                None
            }
        });
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %js_message(e), "localStorage read failed");
                None
            }
        }
    }

    fn set(&self, key: PreferenceKey, value: &str) -> Result<()> {
        let storage = self.storage.as_ref().ok_or_else(|| DashboardError::Preference {
            key: key.as_str().to_string(),
            message: "localStorage is not available".to_string(),
        })?;
        storage
            .set_item(key.as_str(), value)
            .map_err(|e| DashboardError::Preference {
                key: key.as_str().to_string(),
                message: js_message(e),
            })
    }
}
