//! Competitor price analysis report. The product facet is resolved
//! server-side against the analysis line items; a failed reload keeps the
//! last good page on screen next to the error.

use common::page::ReportPage;
use common::records::PriceAnalysisRow;
use common::report_const::LoadErrorPolicy;
use common::report_query::ReportQuery;
use dioxus::prelude::*;

use crate::api::report_api::load_price_analysis_report;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::report_components::report_filter_bar::{
    CustomerSearchFacetControl, DateRangeFacetControl, ProductFacetControl, ReportFilterBar,
};
use crate::components::report_components::report_loader::{use_report_loader, ReportView};
use crate::components::report_components::report_pagination::ReportPagination;
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

/// Competitor prices page
#[component]
pub fn PriceAnalysisReportPage(query: UrlParam<ReportQuery>) -> Element {
    rsx! {
        Title { "FieldTrack - Competitor Prices" }
        PriceAnalysisReportRoot { query: query.0.clone() }
    }
}

#[component]
fn PriceAnalysisReportRoot(query: ReadSignal<ReportQuery>) -> Element {
    let navigate = Callback::new(move |next: ReportQuery| {
        navigator().push(Route::PriceAnalysisReportPage {
            query: UrlParam::from(next),
        });
    });

    let view = use_report_loader(
        query,
        LoadErrorPolicy::KeepLastPage,
        load_price_analysis_report,
    );

    rsx! {
        div {
            class: "x-report-page",
            h1 { class: "x-report-title", "Competitor Prices" }
            ReportFilterBar {
                CustomerSearchFacetControl {
                    query,
                    field: "price_analyses.customer_id".to_string(),
                    navigate,
                }
                DateRangeFacetControl {
                    query,
                    field: "analyzed_at".to_string(),
                    navigate,
                }
                SuspendWrapper {
                    ProductFacetControl {
                        query,
                        field: "product_id".to_string(),
                        navigate,
                    }
                }
            }
            match view() {
                ReportView::Loading => rsx! { LoadingIndicator {} },
                ReportView::Failed(error_txt) => rsx! {
                    ComponentErrorDisplay { error_txt }
                },
                ReportView::FailedWithStale(error_txt, page) => rsx! {
                    div {
                        class: "x-report-stale-banner",
                        "Reload failed, showing the last loaded page."
                    }
                    ComponentErrorDisplay { error_txt }
                    PriceAnalysisList { page, query, navigate }
                },
                ReportView::Ready(page) => rsx! {
                    PriceAnalysisList { page, query, navigate }
                },
            }
        }
    }
}

#[component]
fn PriceAnalysisList(
    page: ReadSignal<ReportPage<PriceAnalysisRow>>,
    query: ReadSignal<ReportQuery>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let page = page.read();
    rsx! {
        div {
            class: "x-price-analysis-list",
            for analysis in page.records.iter() {
                div {
                    key: "{analysis.analysis_id}",
                    class: "x-price-analysis-card",
                    div {
                        class: "x-price-analysis-card-header",
                        span { "{analysis.analyzed_at}" }
                        span { "{analysis.customer_name}" }
                        span { "{analysis.notes}" }
                    }
                    table {
                        class: "x-report-table",
                        thead {
                            tr {
                                th { "Product" }
                                th { "Competitor" }
                                th { "Price" }
                            }
                        }
                        tbody {
                            for item in analysis.items.iter() {
                                tr {
                                    key: "{item.item_id}",
                                    td { "{item.product_name}" }
                                    td { "{item.competitor_name}" }
                                    td { "{item.price:.2}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        ReportPagination {
            page: page.page,
            total_pages: page.total_pages,
            total_count: page.total_count,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            on_page: Callback::new(move |next_page: u64| {
                navigate(query.read().with_page(next_page));
            }),
        }
    }
}
