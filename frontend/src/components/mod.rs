pub mod error_boundary;
pub mod hover_card;
pub mod navbar;
pub mod report_components;
pub mod suspend_boundary;
