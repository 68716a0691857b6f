pub mod customer_search_box;
pub mod report_filter_bar;
pub mod report_loader;
pub mod report_pagination;
