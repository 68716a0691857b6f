//! Thin wrappers over the primitive hover card.

use dioxus::prelude::*;
use dioxus_primitives::{ContentAlign, ContentSide};

#[component]
pub fn HoverCard(children: Element) -> Element {
    rsx! {
        dioxus_primitives::hover_card::HoverCard {
            {children}
        }
    }
}

#[component]
pub fn HoverCardTrigger(children: Element) -> Element {
    rsx! {
        dioxus_primitives::hover_card::HoverCardTrigger {
            {children}
        }
    }
}

#[component]
pub fn HoverCardContent(side: ContentSide, align: ContentAlign, children: Element) -> Element {
    rsx! {
        dioxus_primitives::hover_card::HoverCardContent {
            side,
            align,
            {children}
        }
    }
}
