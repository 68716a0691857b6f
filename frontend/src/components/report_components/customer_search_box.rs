//! Incremental customer lookup with debounce and staleness discard.

use common::records::CustomerHit;
use common::report_const::SEARCH_QUIET_PERIOD_MS;
use common::search_session::SearchSession;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use crate::api::lookup_api::search_customers;

/// The committed selection: `Some((customer_id, display label))`, or `None`
/// when the input was cleared.
pub type CustomerSelection = Option<(u64, String)>;

/// Search-as-you-type box over the customer directory.
///
/// Each keystroke takes a ticket from the session and waits out the quiet
/// period; a newer keystroke invalidates the ticket, so at most one remote
/// lookup per pause reaches the server. Responses are re-checked against
/// the session before they land, which keeps late completions from
/// overwriting newer results or repopulating a cleared box.
#[component]
pub fn CustomerSearchBox(on_select: Callback<CustomerSelection>) -> Element {
    let mut session = use_signal(SearchSession::<CustomerHit>::new);
    let mut open = use_signal(|| false);
    let mut pending = use_signal(|| false);

    let input_value = use_memo(move || session.read().input().to_string());
    let candidates = use_memo(move || session.read().results().to_vec());

    let on_input = move |event: Event<FormData>| {
        let text = event.value();
        let ticket = session.write().input_changed(&text);
        let Some(ticket) = ticket else {
            // cleared within the quiet period: nothing is issued
            open.set(false);
            pending.set(false);
            on_select(None);
            return;
        };
        pending.set(true);
        spawn(async move {
            TimeoutFuture::new(SEARCH_QUIET_PERIOD_MS).await;
            if !session.peek().is_current(&ticket) {
                return;
            }
            let response = search_customers(ticket.query.clone()).await;
            if !session.peek().is_current(&ticket) {
                return;
            }
            pending.set(false);
            match response {
                Ok(hits) => {
                    session.write().apply(&ticket, hits);
                    open.set(true);
                }
                Err(e) => {
                    // fail soft: keep whatever the box showed before
                    dioxus::logger::tracing::warn!("customer search failed: {e}");
                }
            }
        });
    };

    rsx! {
        div {
            class: "x-customer-search",
            div {
                class: "x-customer-search-input-row",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; flex-shrink: 0;" }
                input {
                    r#type: "text",
                    class: "x-customer-search-input",
                    placeholder: "Search customers...",
                    value: "{input_value}",
                    oninput: on_input,
                }
                if pending() {
                    span { class: "x-customer-search-pending", "..." }
                }
            }
            if open() {
                ul {
                    class: "x-customer-search-candidates",
                    if candidates.read().is_empty() {
                        li { class: "x-customer-search-no-match", "No matching customers" }
                    }
                    for hit in candidates.read().iter().cloned() {
                        li {
                            key: "{hit.customer_id}",
                            class: "x-customer-search-candidate",
                            onclick: {
                                let hit = hit.clone();
                                move |_| {
                                    let label = hit.display_label();
                                    session.write().commit(&label);
                                    open.set(false);
                                    pending.set(false);
                                    on_select(Some((hit.customer_id, label)));
                                }
                            },
                            "{hit.display_label()}"
                        }
                    }
                }
            }
        }
    }
}
