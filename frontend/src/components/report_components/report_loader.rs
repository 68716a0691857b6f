//! Shared loading state for the paginated report views.

use std::future::Future;

use common::page::ReportPage;
use common::report_const::LoadErrorPolicy;
use common::report_query::ReportQuery;
use dioxus::prelude::*;

/// What the table area shows for the current load.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportView<T> {
    Loading,
    Ready(ReportPage<T>),
    /// Load failed; the policy dropped the stale page.
    Failed(String),
    /// Load failed; the policy kept the last good page visible.
    FailedWithStale(String, ReportPage<T>),
}

/// Drives one report view from its URL query snapshot.
///
/// A facet or page change restarts the resource, superseding any in-flight
/// load; the superseded future is dropped, so a slow earlier response can
/// never overwrite a newer page.
pub fn use_report_loader<T, F, Fut>(
    query: ReadSignal<ReportQuery>,
    policy: LoadErrorPolicy,
    fetch: F,
) -> Memo<ReportView<T>>
where
    T: Clone + PartialEq + 'static,
    F: Fn(ReportQuery) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<ReportPage<T>, ServerFnError>> + 'static,
{
    let mut page_resource = use_resource(move || {
        let q = query.read().clone();
        fetch(q)
    });
    // when the URL-carried query changes, restart the resource; the signal
    // is not reset by navigation alone
    use_effect(move || {
        let _ = query.read();
        page_resource.clear();
        page_resource.restart();
    });

    let mut last_good = use_signal(|| None::<ReportPage<T>>);
    use_effect(move || {
        if let Some(Ok(page)) = page_resource.read().as_ref() {
            last_good.set(Some(page.clone()));
        }
    });

    use_memo(move || match page_resource.read().as_ref() {
        None => ReportView::Loading,
        Some(Ok(page)) => ReportView::Ready(page.clone()),
        Some(Err(e)) => match (policy, last_good.read().clone()) {
            (LoadErrorPolicy::KeepLastPage, Some(page)) => {
                ReportView::FailedWithStale(e.to_string(), page)
            }
            _ => ReportView::Failed(e.to_string()),
        },
    })
}
