pub mod lookup_api;
pub mod report_api;
