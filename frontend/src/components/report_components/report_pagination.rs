//! Pagination controls for the report views.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};
use dioxus_free_icons::Icon;

#[component]
pub fn ReportPagination(
    page: u64,
    total_pages: u64,
    total_count: u64,
    has_prev: bool,
    has_next: bool,
    on_page: Callback<u64>,
) -> Element {
    rsx! {
        div {
            class: "x-report-pagination",
            span {
                class: "x-report-pagination-count",
                if total_pages == 0 {
                    "No records"
                } else {
                    "{total_count} records - page {page} of {total_pages}"
                }
            }
            button {
                class: "x-report-pagination-button",
                disabled: !has_prev,
                onclick: move |_| {
                    if has_prev {
                        on_page(page.saturating_sub(1).max(1));
                    }
                },
                Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            }
            button {
                class: "x-report-pagination-button",
                disabled: !has_next,
                onclick: move |_| {
                    if has_next {
                        on_page(page + 1);
                    }
                },
                Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
