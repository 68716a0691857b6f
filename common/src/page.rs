//! Page cursor and report page maths.

use serde::{Deserialize, Serialize};

/// `(page, page size)` pair identifying one slice of a filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// 1-based page number.
    pub page: u64,
    pub page_size: u64,
}

impl PageCursor {
    pub fn first(page_size: u64) -> Self {
        Self { page: 1, page_size }
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Clamped, not wrapped; page 1 stays valid even with zero matches.
    pub fn clamped_to(&self, total_count: u64) -> Self {
        let last = total_pages(total_count, self.page_size).max(1);
        Self {
            page: self.page.clamp(1, last),
            page_size: self.page_size,
        }
    }
}

pub fn total_pages(total_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// One resolved slice of a filtered report plus the total count under the
/// same facet snapshot. Superseded pages are discarded, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage<T> {
    pub records: Vec<T>,
    pub total_count: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl<T> ReportPage<T> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_count: 0,
            page: 1,
            total_pages: 0,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.total_pages > 1 && self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > 1 && self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 5), 2);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(0, 5), 0);
    }

    #[test]
    fn offset_is_zero_based_from_one_based_page() {
        let cursor = PageCursor { page: 3, page_size: 5 };
        assert_eq!(cursor.offset(), 10);
        assert_eq!(cursor.limit(), 5);
        assert_eq!(PageCursor::first(5).offset(), 0);
    }

    #[test]
    fn cursor_clamps_instead_of_wrapping() {
        let cursor = PageCursor { page: 9, page_size: 5 };
        assert_eq!(cursor.clamped_to(12).page, 3);
        assert_eq!(cursor.clamped_to(0).page, 1);
        let cursor = PageCursor { page: 2, page_size: 5 };
        assert_eq!(cursor.clamped_to(12).page, 2);
    }

    #[test]
    fn last_partial_page_controls() {
        // 12 records, page size 5, page 3: two records, next disabled,
        // previous enabled.
        let page = ReportPage {
            records: vec![(); 2],
            total_count: 12,
            page: 3,
            total_pages: total_pages(12, 5),
        };
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn empty_report_disables_both_controls() {
        let page = ReportPage::<()>::empty();
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn single_page_disables_both_controls() {
        let page = ReportPage {
            records: vec![(); 4],
            total_count: 4,
            page: 1,
            total_pages: total_pages(4, 5),
        };
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }
}
