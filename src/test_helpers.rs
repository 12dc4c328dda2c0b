// Test helpers for integration testing

use std::rc::Rc;

use crate::domain::{Record, DEFAULT_PAGE_SIZE};
use crate::repository::{MemoryPreferenceStore, PreferenceKey};
use crate::services::ListView;

/// `n` records with ids `1..=n`, in fetch order.
pub fn sample_records(n: usize) -> Vec<Record> {
    (1..=n as i64)
        .map(|i| {
            Record::new(
                (i - 1) / 5 + 1,
                i,
                format!("comment {i}"),
                format!("author{i}@example.com"),
                format!("body of comment {i}"),
            )
        })
        .collect()
}

pub struct TestContext {
    pub store: Rc<MemoryPreferenceStore>,
}

impl TestContext {
    pub fn new_for_test() -> Self {
        Self {
            store: Rc::new(MemoryPreferenceStore::new()),
        }
    }

    pub fn with_slots(slots: &[(PreferenceKey, &str)]) -> Self {
        Self {
            store: Rc::new(MemoryPreferenceStore::with_slots(slots.iter().copied())),
        }
    }

    /// A fresh list view over this context's store, still loading.
    pub fn list_view(&self) -> ListView {
        ListView::rehydrate(self.store.clone(), DEFAULT_PAGE_SIZE)
    }

    /// A list view that already received `records`.
    pub fn ready_list_view(&self, records: Vec<Record>) -> ListView {
        let mut view = self.list_view();
        view.finish_fetch(Ok(records));
        view
    }
}
