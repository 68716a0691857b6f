pub mod home_page;
pub mod placement_report_page;
pub mod price_analysis_page;
pub mod problem_report_page;
pub mod visit_report_page;
