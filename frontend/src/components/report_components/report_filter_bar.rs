//! Facet controls shared by the report pages.
//!
//! Every control edits the URL-carried query through the `navigate`
//! callback; the page reloads from the new snapshot, so the controls hold
//! no result state of their own.

use common::facet::{Facet, FacetValue};
use common::report_query::ReportQuery;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};
use dioxus_free_icons::Icon;

use crate::api::lookup_api::{list_customers, list_products};
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::report_components::customer_search_box::CustomerSearchBox;

/// Layout wrapper for a page's facet controls.
#[component]
pub fn ReportFilterBar(children: Element) -> Element {
    rsx! {
        div {
            class: "x-report-filter-bar",
            {children}
        }
    }
}

/// Two date inputs driving a range facet. An inverted range is reported
/// inline and never leaves the browser.
#[component]
pub fn DateRangeFacetControl(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let bounds = use_memo(move || match query.read().facets.get(&field.read()) {
        Some(Facet::Range { start, end, .. }) => (start.clone(), end.clone()),
        _ => (None, None),
    });
    let mut validation_error = use_signal(|| None::<String>);

    let commit = move |start: Option<String>, end: Option<String>| {
        if let (Some(s), Some(e)) = (&start, &end) {
            if s > e {
                validation_error.set(Some("Start date is after end date".to_string()));
                return;
            }
        }
        validation_error.set(None);
        navigate(query.read().with_facet(Facet::Range {
            field: field.read().clone(),
            start,
            end,
        }));
    };

    let start_value = use_memo(move || bounds().0.unwrap_or_default());
    let end_value = use_memo(move || bounds().1.unwrap_or_default());

    rsx! {
        div {
            class: "x-facet-date-range",
            label { class: "x-facet-label", "From" }
            input {
                r#type: "date",
                class: "x-facet-date-input",
                value: "{start_value}",
                onchange: move |event| {
                    let v = event.value();
                    let start = if v.is_empty() { None } else { Some(v) };
                    commit(start, bounds().1);
                },
            }
            label { class: "x-facet-label", "To" }
            input {
                r#type: "date",
                class: "x-facet-date-input",
                value: "{end_value}",
                onchange: move |event| {
                    let v = event.value();
                    let end = if v.is_empty() { None } else { Some(v) };
                    commit(bounds().0, end);
                },
            }
            if let Some(message) = validation_error() {
                span { class: "x-facet-validation-error", "{message}" }
            }
        }
    }
}

/// Checkbox row for a membership facet over a fixed option list. Clearing
/// the last box drops the facet entirely.
#[component]
pub fn MembershipFacetControl(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    options: ReadSignal<Vec<(FacetValue, String)>>,
    navigate: Callback<ReportQuery>,
) -> Element {
    rsx! {
        div {
            class: "x-facet-membership",
            for (value, label) in options.read().iter().cloned() {
                MembershipCheckbox {
                    key: "{label}",
                    query,
                    field,
                    value,
                    label,
                    navigate,
                }
            }
        }
    }
}

#[component]
fn MembershipCheckbox(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    value: ReadSignal<FacetValue>,
    label: ReadSignal<String>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let is_checked = use_memo(move || {
        query
            .read()
            .facets
            .membership_contains(&field.read(), &value.read())
    });
    rsx! {
        div {
            class: "x-facet-checkbox-item",
            onclick: move |_| {
                navigate(
                    query
                        .read()
                        .with_toggled_membership(&field.read(), value.read().clone()),
                );
            },
            if is_checked() {
                Icon {
                    icon: MdCheckBox,
                    style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;",
                }
            } else {
                Icon {
                    icon: MdCheckBoxOutlineBlank,
                    style: "width: 22px; height: 22px; color: black; flex-shrink: 0;",
                }
            }
            span { class: "x-facet-checkbox-label", "{label}" }
        }
    }
}

/// Dropdown over the full customer directory driving an equality facet.
/// The blank option clears it.
#[component]
pub fn CustomerFacetControl(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let customers = use_resource(move || list_customers()).suspend()?.cloned();
    let customers = match customers {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(c) => c,
    };

    let selected = use_memo(move || {
        query
            .read()
            .facets
            .equality_value(&field.read())
            .map(|v| v.display_string())
            .unwrap_or_default()
    });

    rsx! {
        select {
            class: "x-facet-select",
            value: "{selected}",
            onchange: move |event| {
                let v = event.value();
                let next = if v.is_empty() {
                    query.read().with_cleared_facet(&field.read())
                } else {
                    match v.parse::<u64>() {
                        Ok(id) => query.read().with_facet(Facet::Equality {
                            field: field.read().clone(),
                            value: FacetValue::Int(id),
                        }),
                        Err(_) => return,
                    }
                };
                navigate(next);
            },
            option { value: "", "All customers" }
            for customer in customers.iter() {
                option {
                    key: "{customer.customer_id}",
                    value: "{customer.customer_id}",
                    "{customer.name} ({customer.short_code})"
                }
            }
        }
    }
}

/// Dropdown over the product catalog driving an equality facet. The blank
/// option clears it.
#[component]
pub fn ProductFacetControl(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    navigate: Callback<ReportQuery>,
) -> Element {
    let products = use_resource(move || list_products()).suspend()?.cloned();
    let products = match products {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(p) => p,
    };

    let selected = use_memo(move || {
        query
            .read()
            .facets
            .equality_value(&field.read())
            .map(|v| v.display_string())
            .unwrap_or_default()
    });

    rsx! {
        select {
            class: "x-facet-select",
            value: "{selected}",
            onchange: move |event| {
                let v = event.value();
                let next = if v.is_empty() {
                    query.read().with_cleared_facet(&field.read())
                } else {
                    match v.parse::<u64>() {
                        Ok(id) => query.read().with_facet(Facet::Equality {
                            field: field.read().clone(),
                            value: FacetValue::Int(id),
                        }),
                        Err(_) => return,
                    }
                };
                navigate(next);
            },
            option { value: "", "All products" }
            for product in products.iter() {
                option {
                    key: "{product.product_id}",
                    value: "{product.product_id}",
                    "{product.name}"
                }
            }
        }
    }
}

/// Debounced customer lookup wired to an equality facet: committing a
/// candidate constrains the report, clearing the box lifts it.
#[component]
pub fn CustomerSearchFacetControl(
    query: ReadSignal<ReportQuery>,
    field: ReadSignal<String>,
    navigate: Callback<ReportQuery>,
) -> Element {
    rsx! {
        CustomerSearchBox {
            on_select: Callback::new(move |selection: Option<(u64, String)>| {
                let next = match selection {
                    Some((customer_id, _label)) => query.read().with_facet(Facet::Equality {
                        field: field.read().clone(),
                        value: FacetValue::Int(customer_id),
                    }),
                    None => query.read().with_cleared_facet(&field.read()),
                };
                navigate(next);
            }),
        }
    }
}
