use std::rc::Rc;
use tracing::debug;

use crate::domain::{PageState, Record, SortField, SortSpec};
use crate::repository::{PreferenceRepository, PreferenceStore};
use crate::services::error_handling::FetchError;
use crate::services::list_pipeline::{compute_page, filter_records, PageView};
use crate::services::record_source::RecordSource;

/// Lifecycle of the one-shot record fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Record>),
    Failed(FetchError),
}

/// State behind the dashboard table.
///
/// Holds the fetched collection plus the query, sort and page settings, and
/// mirrors each setting into its preference slot the moment it changes. The
/// visible rows are never stored; [`page`](Self::page) recomputes them.
pub struct ListView {
    prefs: PreferenceRepository,
    fetch: FetchState,
    query: String,
    sort: SortSpec,
    page: PageState,
}

impl ListView {
    /// Restores the last session's settings. The stored page is kept as-is
    /// until records arrive, since its valid range is unknown before that.
    pub fn rehydrate(store: Rc<dyn PreferenceStore>, default_page_size: usize) -> Self {
        let prefs = PreferenceRepository::new(store);
        let stored = prefs.load(default_page_size);
        debug!(
            query = %stored.query,
            page = stored.page.current_page,
            page_size = stored.page.page_size,
            "Rehydrated list preferences"
        );

        Self {
            prefs,
            fetch: FetchState::Loading,
            query: stored.query,
            sort: stored.sort,
            page: stored.page,
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.fetch {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn records(&self) -> &[Record] {
        match &self.fetch {
            FetchState::Ready(records) => records,
            _ => &[],
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Re-enters `Loading`, used before a manual retry.
    pub fn begin_fetch(&mut self) {
        self.fetch = FetchState::Loading;
    }

    /// Stores the fetch outcome. A failure leaves the collection empty but is
    /// kept distinct from an empty result; the stored page is left untouched
    /// so a later retry can still land on it.
    pub fn finish_fetch(&mut self, outcome: Result<Vec<Record>, FetchError>) {
        match outcome {
            Ok(records) => {
                self.fetch = FetchState::Ready(records);
                self.reconcile_page();
            }
            Err(error) => {
                self.fetch = FetchState::Failed(error);
            }
        }
    }

    /// Runs one fetch against `source` and applies the result.
    pub async fn load(&mut self, source: &dyn RecordSource) {
        self.begin_fetch();
        let outcome = source.fetch_all().await;
        self.finish_fetch(outcome);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.prefs.save_query(&self.query);
        self.reset_to_first_page();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
        self.prefs.save_sort(self.sort);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.page_size = page_size.max(1);
        self.prefs.save_page_size(self.page.page_size);
        self.reset_to_first_page();
    }

    /// Moves to page `n`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, n: usize) {
        let target = PageState {
            current_page: n,
            ..self.page
        }
        .clamped(self.matching_count())
        .current_page;
        self.set_current_page(target);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.page.current_page.saturating_sub(1).max(1));
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages(self.matching_count())
    }

    /// The rows to render. Empty while loading or after a failed fetch.
    pub fn page(&self) -> PageView {
        match &self.fetch {
            FetchState::Ready(records) => compute_page(records, &self.query, self.sort, self.page),
            FetchState::Loading | FetchState::Failed(_) => PageView::empty(self.page.page_size),
        }
    }

    fn matching_count(&self) -> usize {
        filter_records(self.records(), &self.query).len()
    }

    fn reset_to_first_page(&mut self) {
        self.set_current_page(1);
    }

    fn set_current_page(&mut self, page: usize) {
        self.page.current_page = page;
        self.prefs.save_current_page(page);
    }

    /// Pulls a rehydrated page back into range once the row count is known.
    fn reconcile_page(&mut self) {
        let clamped = self.page.clamped(self.matching_count());
        if clamped.current_page != self.page.current_page {
            debug!(
                stored = self.page.current_page,
                clamped = clamped.current_page,
                "Stored page out of range"
            );
            self.set_current_page(clamped.current_page);
        }
    }
}
