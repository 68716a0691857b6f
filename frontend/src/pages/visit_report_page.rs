//! Customer visit report: date range, visit purpose and customer facets
//! over a paginated table.

use common::facet::FacetValue;
use common::page::ReportPage;
use common::records::VisitRow;
use common::report_const::LoadErrorPolicy;
use common::report_query::ReportQuery;
use dioxus::prelude::*;

use crate::api::report_api::load_visit_report;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::report_components::report_filter_bar::{
    CustomerSearchFacetControl, DateRangeFacetControl, MembershipFacetControl, ReportFilterBar,
};
use crate::components::report_components::report_loader::{use_report_loader, ReportView};
use crate::components::report_components::report_pagination::ReportPagination;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

fn purpose_options() -> Vec<(FacetValue, String)> {
    [
        ("sales_call", "Sales call"),
        ("delivery", "Delivery"),
        ("merchandising", "Merchandising"),
        ("audit", "Audit"),
    ]
    .iter()
    .map(|(value, label)| (FacetValue::Str(value.to_string()), label.to_string()))
    .collect()
}

/// Customer visits page
#[component]
pub fn VisitReportPage(query: UrlParam<ReportQuery>) -> Element {
    rsx! {
        Title { "FieldTrack - Customer Visits" }
        VisitReportRoot { query: query.0.clone() }
    }
}

#[component]
fn VisitReportRoot(query: ReadSignal<ReportQuery>) -> Element {
    let navigate = Callback::new(move |next: ReportQuery| {
        navigator().push(Route::VisitReportPage {
            query: UrlParam::from(next),
        });
    });

    let view = use_report_loader(query, LoadErrorPolicy::ClearPage, load_visit_report);

    rsx! {
        div {
            class: "x-report-page",
            h1 { class: "x-report-title", "Customer Visits" }
            ReportFilterBar {
                CustomerSearchFacetControl {
                    query,
                    field: "visits.customer_id".to_string(),
                    navigate,
                }
                DateRangeFacetControl {
                    query,
                    field: "visited_at".to_string(),
                    navigate,
                }
                MembershipFacetControl {
                    query,
                    field: "purpose".to_string(),
                    options: purpose_options(),
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
                    VisitTable { page, query, navigate }
                },
                ReportView::Ready(page) => rsx! {
                    VisitTable { page, query, navigate }
                },
            }
        }
    }
}

#[component]
fn VisitTable(
    page: ReadSignal<ReportPage<VisitRow>>,
    query: ReadSignal<ReportQuery>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let page = page.read();
    rsx! {
        table {
            class: "x-report-table",
            thead {
                tr {
                    th { "Visited" }
                    th { "Customer" }
                    th { "Purpose" }
                    th { "Notes" }
                }
            }
            tbody {
                for row in page.records.iter() {
                    tr {
                        key: "{row.visit_id}",
                        td { "{row.visited_at}" }
                        td { "{row.customer_name}" }
                        td { "{row.purpose}" }
                        td { "{row.notes}" }
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
