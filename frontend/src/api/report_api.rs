//! Client API calls for the paginated report loaders.

use common::page::ReportPage;
use common::records::{PlacementRow, PriceAnalysisRow, ProblemReportRow, VisitRow};
use common::report_query::ReportQuery;
use dioxus::prelude::*;

#[server]
pub async fn load_visit_report(query: ReportQuery) -> Result<ReportPage<VisitRow>, ServerFnError> {
    let x = backend::api::visits::load_visit_report(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_placement_report(query: ReportQuery) -> Result<ReportPage<PlacementRow>, ServerFnError> {
    let x = backend::api::placements::load_placement_report(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_price_analysis_report(query: ReportQuery) -> Result<ReportPage<PriceAnalysisRow>, ServerFnError> {
    let x = backend::api::price_analysis::load_price_analysis_report(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn load_problem_report(query: ReportQuery) -> Result<ReportPage<ProblemReportRow>, ServerFnError> {
    let x = backend::api::problems::load_problem_report(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
