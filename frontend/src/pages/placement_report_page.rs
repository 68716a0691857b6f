//! Product placement report: customer, placement kind and report date
//! facets, with photo thumbnails streamed from object storage.

use common::facet::FacetValue;
use common::page::ReportPage;
use common::records::PlacementRow;
use common::report_const::LoadErrorPolicy;
use common::report_query::ReportQuery;
use dioxus::prelude::*;

use crate::api::report_api::load_placement_report;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::report_components::report_filter_bar::{
    CustomerFacetControl, DateRangeFacetControl, MembershipFacetControl, ReportFilterBar,
};
use crate::components::report_components::report_loader::{use_report_loader, ReportView};
use crate::components::report_components::report_pagination::ReportPagination;
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

fn kind_options() -> Vec<(FacetValue, String)> {
    [
        ("shelf", "Shelf"),
        ("end_cap", "End cap"),
        ("cooler", "Cooler"),
        ("counter_display", "Counter display"),
    ]
    .iter()
    .map(|(value, label)| (FacetValue::Str(value.to_string()), label.to_string()))
    .collect()
}

/// Placements page
#[component]
pub fn PlacementReportPage(query: UrlParam<ReportQuery>) -> Element {
    rsx! {
        Title { "FieldTrack - Placements" }
        PlacementReportRoot { query: query.0.clone() }
    }
}

#[component]
fn PlacementReportRoot(query: ReadSignal<ReportQuery>) -> Element {
    let navigate = Callback::new(move |next: ReportQuery| {
        navigator().push(Route::PlacementReportPage {
            query: UrlParam::from(next),
        });
    });

    let view = use_report_loader(query, LoadErrorPolicy::ClearPage, load_placement_report);

    rsx! {
        div {
            class: "x-report-page",
            h1 { class: "x-report-title", "Placements" }
            ReportFilterBar {
                SuspendWrapper {
                    CustomerFacetControl {
                        query,
                        field: "placements.customer_id".to_string(),
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
                    field: "kind".to_string(),
                    options: kind_options(),
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
                    PlacementTable { page, query, navigate }
                },
                ReportView::Ready(page) => rsx! {
                    PlacementTable { page, query, navigate }
                },
            }
        }
    }
}

#[component]
fn PlacementTable(
    page: ReadSignal<ReportPage<PlacementRow>>,
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
                    th { "Product" }
                    th { "Kind" }
                    th { "Photo" }
                }
            }
            tbody {
                for row in page.records.iter() {
                    tr {
                        key: "{row.placement_id}",
                        td { "{row.reported_at}" }
                        td { "{row.customer_name}" }
                        td { "{row.product_name}" }
                        td { "{row.kind}" }
                        td {
                            if row.has_photo() {
                                img {
                                    class: "x-report-photo-thumbnail",
                                    src: "{row.photo_src()}",
                                    alt: "placement photo",
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
