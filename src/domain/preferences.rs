use serde::{Deserialize, Serialize};

use super::page::PageState;
use super::sort::SortSpec;

/// The list view state that survives restarts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    pub query: String,
    pub sort: SortSpec,
    pub page: PageState,
}

impl Preferences {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: PageState::new(page_size, 1),
            ..Default::default()
        }
    }
}
