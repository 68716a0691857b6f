//! Report query snapshot carried in the page URL.

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetSet, FacetValue};
use crate::page::PageCursor;
use crate::report_const::REPORT_PAGE_SIZE;

/// Full facet snapshot plus the 1-based page, serializable so a report view
/// is reconstructible from its route alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportQuery {
    pub facets: FacetSet,
    pub page: u64,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            facets: FacetSet::new(),
            page: 1,
        }
    }
}

impl ReportQuery {
    /// Any facet mutation resets the cursor to the first page.
    pub fn with_facet(&self, facet: Facet) -> Self {
        let mut facets = self.facets.clone();
        facets.set(facet);
        Self { facets, page: 1 }
    }

    pub fn with_toggled_membership(&self, field: &str, value: FacetValue) -> Self {
        let mut facets = self.facets.clone();
        facets.toggle_membership(field, value);
        Self { facets, page: 1 }
    }

    pub fn with_cleared_facet(&self, field: &str) -> Self {
        let mut facets = self.facets.clone();
        facets.clear(field);
        Self { facets, page: 1 }
    }

    /// Page navigation leaves the facet set untouched.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            facets: self.facets.clone(),
            page: page.max(1),
        }
    }

    pub fn cursor(&self) -> PageCursor {
        PageCursor {
            page: self.page.max(1),
            page_size: REPORT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn facet_change_resets_page() {
        let query = ReportQuery::default().with_page(4);
        assert_eq!(query.page, 4);

        let query = query.with_facet(Facet::Equality {
            field: "customer_id".to_string(),
            value: FacetValue::Int(3),
        });
        assert_eq!(query.page, 1);

        let query = query.with_page(2).with_toggled_membership(
            "status",
            FacetValue::Str("open".to_string()),
        );
        assert_eq!(query.page, 1);

        let query = query.with_page(2).with_cleared_facet("status");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn page_change_leaves_facets_untouched() {
        let query = ReportQuery::default().with_facet(Facet::Range {
            field: "visited_at".to_string(),
            start: Some("2024-01-01".to_string()),
            end: None,
        });
        let paged = query.with_page(3);
        assert_eq!(paged.facets, query.facets);
        assert_eq!(paged.page, 3);
    }

    #[test]
    fn page_floor_is_one() {
        assert_eq!(ReportQuery::default().with_page(0).page, 1);
        assert_eq!(ReportQuery::default().cursor().page, 1);
    }
}
