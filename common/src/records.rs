//! Typed row mirrors of the backend report tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: u64,
    pub name: String,
    pub short_code: String,
    pub city: String,
}

/// Candidate row returned by the incremental customer search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerHit {
    pub customer_id: u64,
    pub name: String,
    pub short_code: String,
}

impl CustomerHit {
    /// Label committed into the search box when this candidate is chosen.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.short_code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: u64,
    pub name: String,
    pub short_code: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRow {
    pub visit_id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub visited_at: String,
    pub purpose: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRow {
    pub placement_id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub product_id: u64,
    pub product_name: String,
    pub kind: String,
    pub photo_path: String,
    pub reported_at: String,
}

impl PlacementRow {
    pub fn has_photo(&self) -> bool {
        !self.photo_path.is_empty()
    }

    pub fn photo_src(&self) -> String {
        format!("{}/{}", crate::report_const::MEDIA_ROUTE_PREFIX, self.photo_path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysisRow {
    pub analysis_id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub analyzed_at: String,
    pub notes: String,
    pub items: Vec<PriceAnalysisItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAnalysisItem {
    pub item_id: u64,
    pub analysis_id: u64,
    pub product_id: u64,
    pub product_name: String,
    pub competitor_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemReportRow {
    pub report_id: u64,
    pub customer_id: u64,
    pub customer_name: String,
    pub category: String,
    pub status: String,
    pub description: String,
    pub photo_path: String,
    pub reported_at: String,
}

impl ProblemReportRow {
    pub fn has_photo(&self) -> bool {
        !self.photo_path.is_empty()
    }

    pub fn photo_src(&self) -> String {
        format!("{}/{}", crate::report_const::MEDIA_ROUTE_PREFIX, self.photo_path)
    }
}
