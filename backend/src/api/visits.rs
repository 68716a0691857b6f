//! Visit report: one facet-filtered page plus its total count.

use clickhouse::Row;
use common::page::{total_pages, ReportPage};
use common::records::VisitRow;
use common::report_query::ReportQuery;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;
use crate::query::fetch_total_count;
use crate::query::sql::{build_order_clause, build_page_clause, build_where_clause};

const VISITS_FROM_CLAUSE: &str = "
    FROM visits
    LEFT JOIN customers
    ON visits.customer_id = customers.customer_id
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct VisitResponse {
    visit_id: u64,
    customer_id: u64,
    customer_name: String,
    visited_at: String,
    purpose: String,
    notes: String,
}

pub async fn load_visit_report(query: ReportQuery) -> anyhow::Result<ReportPage<VisitRow>> {
    let where_clause = build_where_clause(&query.facets);

    // count and page run against the same facet snapshot; a facet change
    // in between supersedes the whole load client-side
    let total_count = fetch_total_count(VISITS_FROM_CLAUSE, &where_clause).await?;
    let cursor = query.cursor().clamped_to(total_count);

    let sql = format!(
        "
    SELECT visit_id,
        visits.customer_id AS customer_id,
        customers.name AS customer_name,
        toString(visited_at) AS visited_at,
        purpose,
        notes
    {VISITS_FROM_CLAUSE}
    {where_clause}
    {order_clause}
    {page_clause}
    ",
        order_clause = build_order_clause("visited_at", "visit_id"),
        page_clause = build_page_clause(&cursor),
    );
    let client = get_clickhouse_client();
    let rows = client.query(&sql).fetch_all::<VisitResponse>().await?;

    let records = rows
        .into_iter()
        .map(|row| VisitRow {
            visit_id: row.visit_id,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            visited_at: row.visited_at,
            purpose: row.purpose,
            notes: row.notes,
        })
        .collect();

    Ok(ReportPage {
        records,
        total_count,
        page: cursor.page,
        total_pages: total_pages(total_count, cursor.page_size),
    })
}
