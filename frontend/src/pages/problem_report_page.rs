//! Problem report view: status, category, customer and date facets.

use common::facet::FacetValue;
use common::page::ReportPage;
use common::records::ProblemReportRow;
use common::report_const::LoadErrorPolicy;
use common::report_query::ReportQuery;
use dioxus::prelude::*;

use crate::api::report_api::load_problem_report;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::report_components::report_filter_bar::{
    CustomerFacetControl, DateRangeFacetControl, MembershipFacetControl, ReportFilterBar,
};
use crate::components::report_components::report_loader::{use_report_loader, ReportView};
use crate::components::report_components::report_pagination::ReportPagination;
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

fn status_options() -> Vec<(FacetValue, String)> {
    [
        ("open", "Open"),
        ("in_progress", "In progress"),
        ("resolved", "Resolved"),
    ]
    .iter()
    .map(|(value, label)| (FacetValue::Str(value.to_string()), label.to_string()))
    .collect()
}

fn category_options() -> Vec<(FacetValue, String)> {
    [
        ("damage", "Damage"),
        ("stockout", "Stockout"),
        ("pricing", "Pricing"),
        ("equipment", "Equipment"),
    ]
    .iter()
    .map(|(value, label)| (FacetValue::Str(value.to_string()), label.to_string()))
    .collect()
}

/// Problem reports page
#[component]
pub fn ProblemReportPage(query: UrlParam<ReportQuery>) -> Element {
    rsx! {
        Title { "FieldTrack - Problem Reports" }
        ProblemReportRoot { query: query.0.clone() }
    }
}

#[component]
fn ProblemReportRoot(query: ReadSignal<ReportQuery>) -> Element {
    let navigate = Callback::new(move |next: ReportQuery| {
        navigator().push(Route::ProblemReportPage {
            query: UrlParam::from(next),
        });
    });

    let view = use_report_loader(query, LoadErrorPolicy::ClearPage, load_problem_report);

    rsx! {
        div {
            class: "x-report-page",
            h1 { class: "x-report-title", "Problem Reports" }
            ReportFilterBar {
                SuspendWrapper {
                    CustomerFacetControl {
                        query,
                        field: "problem_reports.customer_id".to_string(),
                        navigate,
                    }
                }
                DateRangeFacetControl {
                    query,
                    field: "reported_at".to_string(),
                    navigate,
                }
                MembershipFacetControl {
                    query,
                    field: "status".to_string(),
                    options: status_options(),
                    navigate,
                }
                MembershipFacetControl {
                    query,
                    field: "category".to_string(),
                    options: category_options(),
                    navigate,
                }
            }
            match view() {
                ReportView::Loading => rsx! { LoadingIndicator {} },
                ReportView::Failed(error_txt) => rsx! {
                    ComponentErrorDisplay { error_txt }
                },
                ReportView::FailedWithStale(error_txt, page) => rsx! {
                    ComponentErrorDisplay { error_txt }
                    ProblemTable { page, query, navigate }
                },
                ReportView::Ready(page) => rsx! {
                    ProblemTable { page, query, navigate }
                },
            }
        }
    }
}

#[component]
fn ProblemTable(
    page: ReadSignal<ReportPage<ProblemReportRow>>,
    query: ReadSignal<ReportQuery>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let page = page.read();
    rsx! {
        table {
            class: "x-report-table",
            thead {
                tr {
                    th { "Reported" }
                    th { "Customer" }
                    th { "Category" }
                    th { "Status" }
                    th { "Description" }
                    th { "Photo" }
                }
            }
            tbody {
                for row in page.records.iter() {
                    tr {
                        key: "{row.report_id}",
                        td { "{row.reported_at}" }
                        td { "{row.customer_name}" }
                        td { "{row.category}" }
                        td { "{row.status}" }
                        td { "{row.description}" }
                        td {
                            if row.has_photo() {
                                img {
                                    class: "x-report-photo-thumbnail",
                                    src: "{row.photo_src()}",
                                    alt: "problem photo",
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
