use mockall::automock;
use std::fmt;

use crate::services::error_handling::Result;

/// Fixed slot names in the durable key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    CurrentPage,
    PageSize,
    SearchQuery,
    SortConfig,
}

impl PreferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreferenceKey::CurrentPage => "currentPage",
            PreferenceKey::PageSize => "pageSize",
            PreferenceKey::SearchQuery => "searchQuery",
            PreferenceKey::SortConfig => "sortConfig",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow read/write access to the four preference slots.
///
/// Reads never fail: an unavailable backend reads as an empty slot. Writes
/// are synchronous and replace one slot only.
#[automock]
pub trait PreferenceStore {
    fn get(&self, key: PreferenceKey) -> Option<String>;

    fn set(&self, key: PreferenceKey, value: &str) -> Result<()>;
}
