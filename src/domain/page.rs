use serde::{Deserialize, Serialize};

/// Page sizes offered by every page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which slice of the ordered rows is visible. Pages are 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}

impl PageState {
    /// Builds a state, lifting zero values to the smallest legal ones.
    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: current_page.max(1),
        }
    }

    /// `max(1, ceil(len / page_size))`
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.max(1)).max(1)
    }

    /// Same page size, current page pulled into `[1, total_pages(len)]`.
    pub fn clamped(self, len: usize) -> Self {
        Self {
            page_size: self.page_size.max(1),
            current_page: self.current_page.clamp(1, self.total_pages(len)),
        }
    }

    /// Half-open row range of the current page, bounded by `len`.
    pub fn range(&self, len: usize) -> std::ops::Range<usize> {
        let size = self.page_size.max(1);
        let start = (self.current_page.max(1) - 1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}

pub fn is_offered_page_size(size: usize) -> bool {
    PAGE_SIZE_OPTIONS.contains(&size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 1)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 10, 3)]
    #[case(500, 50, 10)]
    #[case(7, 5, 2)]
    fn test_total_pages(#[case] len: usize, #[case] size: usize, #[case] expected: usize) {
        assert_eq!(PageState::new(size, 1).total_pages(len), expected);
    }

    #[test]
    fn test_clamp_pulls_page_into_range() {
        assert_eq!(PageState::new(10, 5).clamped(15).current_page, 2);
        assert_eq!(PageState::new(10, 3).clamped(0).current_page, 1);
        assert_eq!(PageState::new(10, 2).clamped(15).current_page, 2);
    }

    #[test]
    fn test_new_lifts_zero_values() {
        let state = PageState::new(0, 0);
        assert_eq!(state.page_size, 1);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_range_is_bounded_by_len() {
        assert_eq!(PageState::new(10, 1).range(25), 0..10);
        assert_eq!(PageState::new(10, 3).range(25), 20..25);
        assert_eq!(PageState::new(10, 4).range(25), 25..25);
    }

    #[test]
    fn test_offered_sizes() {
        assert!(is_offered_page_size(DEFAULT_PAGE_SIZE));
        assert!(!is_offered_page_size(100));
    }
}
