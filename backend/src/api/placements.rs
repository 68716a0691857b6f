//! Placement report: where products sit in store, with photos.

use clickhouse::Row;
use common::page::{total_pages, ReportPage};
use common::records::PlacementRow;
use common::report_query::ReportQuery;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;
use crate::query::fetch_total_count;
use crate::query::sql::{build_order_clause, build_page_clause, build_where_clause};

const PLACEMENTS_FROM_CLAUSE: &str = "
    FROM placements
    LEFT JOIN customers
    ON placements.customer_id = customers.customer_id
    LEFT JOIN products
    ON placements.product_id = products.product_id
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct PlacementResponse {
    placement_id: u64,
    customer_id: u64,
    customer_name: String,
    product_id: u64,
    product_name: String,
    kind: String,
    photo_path: String,
    reported_at: String,
}

pub async fn load_placement_report(query: ReportQuery) -> anyhow::Result<ReportPage<PlacementRow>> {
    let where_clause = build_where_clause(&query.facets);

    let total_count = fetch_total_count(PLACEMENTS_FROM_CLAUSE, &where_clause).await?;
    let cursor = query.cursor().clamped_to(total_count);

    let sql = format!(
        "
    SELECT placement_id,
        placements.customer_id AS customer_id,
        customers.name AS customer_name,
        placements.product_id AS product_id,
        products.name AS product_name,
        kind,
        photo_path,
        toString(reported_at) AS reported_at
    {PLACEMENTS_FROM_CLAUSE}
    {where_clause}
    {order_clause}
    {page_clause}
    ",
        order_clause = build_order_clause("reported_at", "placement_id"),
        page_clause = build_page_clause(&cursor),
    );
    let client = get_clickhouse_client();
    let rows = client.query(&sql).fetch_all::<PlacementResponse>().await?;

    let records = rows
        .into_iter()
        .map(|row| PlacementRow {
            placement_id: row.placement_id,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            product_id: row.product_id,
            product_name: row.product_name,
            kind: row.kind,
            photo_path: row.photo_path,
            reported_at: row.reported_at,
        })
        .collect();

    Ok(ReportPage {
        records,
        total_count,
        page: cursor.page,
        total_pages: total_pages(total_count, cursor.page_size),
    })
}
