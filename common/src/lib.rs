//! Common library exports shared between frontend and backend.

pub mod facet;
pub mod page;
pub mod records;
pub mod report_const;
pub mod report_query;
pub mod search_session;
