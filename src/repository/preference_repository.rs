use std::rc::Rc;

use super::preference_store::{PreferenceKey, PreferenceStore};
use crate::domain::{PageState, Preferences, SortSpec};
use crate::services::error_handling::{DashboardError, LogHelper};

/// Typed access to the preference slots.
///
/// Every slot is decoded on its own; an unreadable slot falls back to its
/// default without affecting the others.
#[derive(Clone)]
pub struct PreferenceRepository {
    store: Rc<dyn PreferenceStore>,
}

impl PreferenceRepository {
    pub fn new(store: Rc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Reads all four slots. `default_page_size` is used when the stored page
    /// size is missing or not a positive integer.
    pub fn load(&self, default_page_size: usize) -> Preferences {
        let defaults = Preferences::with_page_size(default_page_size);

        let query = self
            .store
            .get(PreferenceKey::SearchQuery)
            .unwrap_or(defaults.query);

        let page_size = self
            .read_with(PreferenceKey::PageSize, parse_positive)
            .unwrap_or(defaults.page.page_size);

        let current_page = self
            .read_with(PreferenceKey::CurrentPage, parse_positive)
            .unwrap_or(defaults.page.current_page);

        let sort = self
            .read_with(PreferenceKey::SortConfig, |raw| {
                serde_json::from_str::<SortSpec>(raw).ok()
            })
            .unwrap_or(defaults.sort);

        Preferences {
            query,
            sort,
            page: PageState::new(page_size, current_page),
        }
    }

    // Writers log a failed write and carry on; the in-session state stays
    // authoritative until the next successful write.

    pub fn save_query(&self, query: &str) {
        self.write(PreferenceKey::SearchQuery, query);
    }

    pub fn save_current_page(&self, page: usize) {
        self.write(PreferenceKey::CurrentPage, &page.to_string());
    }

    pub fn save_page_size(&self, page_size: usize) {
        self.write(PreferenceKey::PageSize, &page_size.to_string());
    }

    pub fn save_sort(&self, sort: SortSpec) {
        match serde_json::to_string(&sort) {
            Ok(json) => self.write(PreferenceKey::SortConfig, &json),
            Err(e) => LogHelper::log_preference_write_failed(
                PreferenceKey::SortConfig.as_str(),
                &DashboardError::from(e),
            ),
        }
    }

    fn read_with<T>(&self, key: PreferenceKey, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let raw = self.store.get(key)?;
        let parsed = parse(&raw);
        if parsed.is_none() {
            LogHelper::log_preference_fallback(key.as_str(), &raw);
        }
        parsed
    }

    fn write(&self, key: PreferenceKey, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            LogHelper::log_preference_write_failed(key.as_str(), &e);
        }
    }
}

fn parse_positive(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|value| *value > 0)
}
