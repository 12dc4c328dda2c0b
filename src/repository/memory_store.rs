use parking_lot::Mutex;
use std::collections::HashMap;

use super::preference_store::{PreferenceKey, PreferenceStore};
use crate::services::error_handling::Result;

/// Process-local store, used by tests and when no durable location exists.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    slots: Mutex<HashMap<PreferenceKey, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots<'a>(slots: impl IntoIterator<Item = (PreferenceKey, &'a str)>) -> Self {
        Self {
            slots: Mutex::new(
                slots
                    .into_iter()
                    .map(|(key, value)| (key, value.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn snapshot(&self) -> HashMap<PreferenceKey, String> {
        self.slots.lock().clone()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String> {
        self.slots.lock().get(&key).cloned()
    }

    fn set(&self, key: PreferenceKey, value: &str) -> Result<()> {
        self.slots.lock().insert(key, value.to_string());
        Ok(())
    }
}
