pub mod config;
pub mod domain;
pub mod repository;
pub mod services;
pub mod ui_dioxus;

// Make test_helpers available for integration tests
pub mod test_helpers;

pub use config::DashboardConfig;
pub use domain::{PageState, Record, SortDirection, SortField, SortSpec};
pub use repository::{MemoryPreferenceStore, PreferenceKey, PreferenceStore};
pub use services::{DashboardError, FetchError, FetchState, ListView, PageView, RecordSource};
