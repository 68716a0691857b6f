//! Sidebar navigation.

use dioxus::prelude::*;
use dioxus_primitives::ContentAlign;
use dioxus_primitives::ContentSide;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::hover_card::HoverCard;
use crate::components::hover_card::HoverCardContent;
use crate::components::hover_card::HoverCardTrigger;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdInfo;
use dioxus_free_icons::icons::md_communication_icons::MdBusiness;
use dioxus_free_icons::icons::md_navigation_icons::MdApps;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id: "x-nav-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarLogo {},
                NavbarIconLinks {},
            },

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            div {
                style: "
                    width: 38px;
                    height: 38px;
                    border-radius: 8px;
                    background-color: #4F46E5;
                    color: white;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 17px;
                    font-weight: 700;
                ",
                "FT"
            }
        }
    }
}

#[component]
fn NavbarIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::visit_report_default(), icon: MdPerson, label: "Customer Visits" }
            IconLink { to: Route::placement_report_default(), icon: MdApps, label: "Placements" }
            IconLink { to: Route::price_analysis_report_default(), icon: MdBusiness, label: "Competitor Prices" }
            IconLink { to: Route::problem_report_default(), icon: MdInfo, label: "Problem Reports" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        HoverCard {
            HoverCardTrigger {

                Link {
                    to: to,
                    span {
                        style: "color:white;",
                        Icon { icon: icon, style: "width: 26px; height: 26px;" }
                    }
                }
            },
            HoverCardContent {
                side: ContentSide::Right,
                align: ContentAlign::Start,
                div {
                    style: "
                        color:black;
                        background-color:white;
                        padding:10px;
                        border-radius:5px;
                        border: 1px solid black;
                        width: fit-content;
                    ",
                    "{label}",
                }
            }

        }
    }
}
