//! Pure stages of the dashboard table: filter, then sort, then paginate.
//!
//! Every stage takes the output of the previous one and nothing else, so the
//! whole table can be recomputed from `(records, query, sort, page)` at any
//! time.

use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use tracing::warn;

use crate::domain::{PageState, Record, SortDirection, SortField, SortSpec};

/// Keeps records whose name or email contains `query`, ignoring case.
pub fn filter_records<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record.display_name.to_lowercase().contains(&needle)
                || record.contact_email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Orders `records` by `spec`. `Unsorted` keeps the incoming order, and equal
/// keys keep their relative order in both directions.
pub fn sort_records<'a>(mut records: Vec<&'a Record>, spec: SortSpec) -> Vec<&'a Record> {
    if let SortSpec::Sorted { field, direction } = spec {
        records.sort_by(|a, b| {
            let ordering = compare_by(field, a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    records
}

fn compare_by(field: SortField, a: &Record, b: &Record) -> Ordering {
    match field {
        SortField::GroupId => a.group_id.cmp(&b.group_id),
        SortField::DisplayName => locale_compare(&a.display_name, &b.display_name),
        SortField::ContactEmail => locale_compare(&a.contact_email, &b.contact_email),
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new())
            .inspect_err(|e| warn!(error = ?e, "Root collator unavailable, using code point order"))
            .ok();
}

/// Unicode collation with the root locale at tertiary strength: accents and
/// case only break ties, lowercase sorts before uppercase.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub rows: Vec<Record>,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Rows matching the query, across all pages.
    pub matching_count: usize,
}

impl PageView {
    pub fn empty(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            current_page: 1,
            total_pages: 1,
            page_size: page_size.max(1),
            matching_count: 0,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.total_pages
    }

    /// 1-based row numbers shown on this page, `None` when it is empty.
    pub fn row_span(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

/// Cuts the page described by `state` out of the ordered rows. The page
/// number is clamped into range first.
pub fn paginate(ordered: &[&Record], state: PageState) -> PageView {
    let len = ordered.len();
    let state = state.clamped(len);
    let rows = ordered[state.range(len)]
        .iter()
        .map(|record| (*record).clone())
        .collect();

    PageView {
        rows,
        current_page: state.current_page,
        total_pages: state.total_pages(len),
        page_size: state.page_size,
        matching_count: len,
    }
}

/// Runs all three stages over the full collection.
pub fn compute_page(records: &[Record], query: &str, sort: SortSpec, state: PageState) -> PageView {
    let filtered = filter_records(records, query);
    let ordered = sort_records(filtered, sort);
    paginate(&ordered, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn records() -> Vec<Record> {
        vec![
            Record::new(2, 1, "carol", "carol@example.com", "c"),
            Record::new(1, 2, "Alice Smith", "alice@example.com", "a"),
            Record::new(3, 3, "bob", "Smith@Example.com", "b"),
            Record::new(1, 4, "Dave", "dave@example.org", "d"),
        ]
    }

    fn ids(rows: &[&Record]) -> Vec<i64> {
        rows.iter().map(|record| record.id).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let data = records();
        assert_eq!(ids(&filter_records(&data, "")), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case("smith", vec![2, 3])]
    #[case("SMITH", vec![2, 3])]
    #[case("example.org", vec![4])]
    #[case("zzz", vec![])]
    #[case("a", vec![1, 2, 3, 4])]
    fn test_filter_matches_name_or_email(#[case] query: &str, #[case] expected: Vec<i64>) {
        let data = records();
        assert_eq!(ids(&filter_records(&data, query)), expected);
    }

    #[test]
    fn test_filter_ignores_body() {
        let data = vec![Record::new(1, 1, "x", "y@z", "needle")];
        assert!(filter_records(&data, "needle").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = records();
        for query in ["", "smith", "EXAMPLE", "o", "nothing"] {
            let once = filter_records(&data, query);
            let twice = filter_records(once.iter().copied(), query);
            assert_eq!(ids(&once), ids(&twice), "query {query:?}");
        }
    }

    #[test]
    fn test_unsorted_passes_through() {
        let data = records();
        let rows = sort_records(data.iter().collect(), SortSpec::Unsorted);
        assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let data = records();
        let rows = sort_records(data.iter().collect(), SortSpec::ascending(SortField::DisplayName));
        assert_eq!(ids(&rows), vec![2, 3, 1, 4]);

        let rows = sort_records(data.iter().collect(), SortSpec::descending(SortField::DisplayName));
        assert_eq!(ids(&rows), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_sort_by_group_is_numeric_and_stable() {
        let data = records();
        let rows = sort_records(data.iter().collect(), SortSpec::ascending(SortField::GroupId));
        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);

        let rows = sort_records(data.iter().collect(), SortSpec::descending(SortField::GroupId));
        assert_eq!(ids(&rows), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_by_numeric_group_beyond_single_digits() {
        let data = vec![
            Record::new(10, 1, "a", "a", ""),
            Record::new(9, 2, "b", "b", ""),
            Record::new(100, 3, "c", "c", ""),
        ];
        let rows = sort_records(data.iter().collect(), SortSpec::ascending(SortField::GroupId));
        assert_eq!(ids(&rows), vec![2, 1, 3]);
    }

    #[rstest]
    #[case("apple", "Banana", Ordering::Less)]
    #[case("Zed", "alpha", Ordering::Greater)]
    #[case("a", "A", Ordering::Less)]
    #[case("A", "a", Ordering::Greater)]
    #[case("same", "same", Ordering::Equal)]
    #[case("ab", "abc", Ordering::Less)]
    #[case("éclair", "zebra", Ordering::Less)]
    #[case("resume", "résumé", Ordering::Less)]
    #[case("Zoë", "Zoey", Ordering::Less)]
    #[case("a_c", "a.c", Ordering::Less)]
    #[case("john_doe@x.com", "john.doe@x.com", Ordering::Less)]
    #[case("9lives", "apple", Ordering::Less)]
    fn test_locale_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(locale_compare(a, b), expected);
    }

    #[test]
    fn test_paginate_clamps_page_and_reports_totals() {
        let data: Vec<Record> = (1..=15)
            .map(|i| Record::new(1, i, format!("n{i}"), format!("e{i}"), ""))
            .collect();
        let ordered: Vec<&Record> = data.iter().collect();

        let view = paginate(&ordered, PageState::new(10, 5));
        assert_eq!(view.current_page, 2);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.row_span(), Some((11, 15)));
        assert!(view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_paginate_empty_input_has_one_page() {
        let view = paginate(&[], PageState::new(10, 3));
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.rows.is_empty());
        assert_eq!(view.row_span(), None);
        assert!(!view.has_prev());
        assert!(!view.has_next());
    }

    #[test]
    fn test_compute_page_filters_before_sorting_before_slicing() {
        let data = records();
        let view = compute_page(
            &data,
            "example.com",
            SortSpec::ascending(SortField::DisplayName),
            PageState::new(2, 1),
        );
        assert_eq!(view.matching_count, 3);
        assert_eq!(view.total_pages, 2);
        let names: Vec<&str> = view.rows.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alice Smith", "bob"]);
    }
}
