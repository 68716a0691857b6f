use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdInfo};
use dioxus_free_icons::icons::md_communication_icons::MdBusiness;
use dioxus_free_icons::icons::md_navigation_icons::MdApps;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "FieldTrack - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                ReportCard {
                    to: Route::visit_report_default(),
                    icon: MdPerson,
                    title: "Customer Visits",
                    description: "Every store visit the field team logged, filterable by customer, date and purpose.",
                }
                ReportCard {
                    to: Route::placement_report_default(),
                    icon: MdApps,
                    title: "Placements",
                    description: "Where our products sit on the shelf, with photos straight from the store floor.",
                }
                ReportCard {
                    to: Route::price_analysis_report_default(),
                    icon: MdBusiness,
                    title: "Competitor Prices",
                    description: "Competitor price checks collected per visit, searchable by the product they mention.",
                }
                ReportCard {
                    to: Route::problem_report_default(),
                    icon: MdInfo,
                    title: "Problem Reports",
                    description: "Stockouts, damage and equipment issues reported from the field, by status and category.",
                }
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 14px;
                color: #111827;
                font-size: 44px;
                font-weight: 700;
            ",
            Icon { icon: MdHome, style: "width: 44px; height: 44px; color:#4F46E5;" }
            span { "Welcome to " }
            span { style: "color:#4F46E5;", "FieldTrack!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 30px;
                line-height: 1.6;
                max-width: 620px;
                font-weight: 500;
            ",
            "See what the field team saw: visits, shelf placements, competitor prices and store problems, all in one place."
        }
    }
}

#[component]
fn ReportCard<T: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    icon: T,
    title: String,
    description: String,
) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 380px;
                    min-height: 180px;
                    border-radius: 22px;
                    padding: 22px;
                    background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "
                        display:flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 10px;
                        font-size: 26px;
                        font-weight: 500;
                    ",
                    Icon { icon: icon, style: "width: 28px; height: 28px;" }
                    "{title}"
                }
                div {
                    style: "
                        font-size: 17px;
                        font-weight: 500;
                        line-height: 1.5;
                        color: rgba(255,255,255,0.92);
                    ",
                    "{description}"
                }
            }
        }
    }
}
