//! Tuning constants for the report and search surfaces.

use serde::{Deserialize, Serialize};

/// Rows per report page.
pub const REPORT_PAGE_SIZE: u64 = 20;

/// Candidate cap for the incremental customer search.
pub const SEARCH_RESULT_LIMIT: u64 = 10;

/// Idle time after the last keystroke before a search is dispatched.
pub const SEARCH_QUIET_PERIOD_MS: u32 = 300;

/// Route prefix under which uploaded photos are served.
pub const MEDIA_ROUTE_PREFIX: &str = "/_media";

/// What a report view shows when a page load fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadErrorPolicy {
    /// Drop the stale page and show the error in its place.
    ClearPage,
    /// Keep the last loaded page visible under an error banner.
    KeepLastPage,
}
