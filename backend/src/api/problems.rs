//! Problem report listing.

use clickhouse::Row;
use common::page::{total_pages, ReportPage};
use common::records::ProblemReportRow;
use common::report_query::ReportQuery;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;
use crate::query::fetch_total_count;
use crate::query::sql::{build_order_clause, build_page_clause, build_where_clause};

const PROBLEMS_FROM_CLAUSE: &str = "
    FROM problem_reports
    LEFT JOIN customers
    ON problem_reports.customer_id = customers.customer_id
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct ProblemResponse {
    report_id: u64,
    customer_id: u64,
    customer_name: String,
    category: String,
    status: String,
    description: String,
    photo_path: String,
    reported_at: String,
}

pub async fn load_problem_report(query: ReportQuery) -> anyhow::Result<ReportPage<ProblemReportRow>> {
    let where_clause = build_where_clause(&query.facets);

    let total_count = fetch_total_count(PROBLEMS_FROM_CLAUSE, &where_clause).await?;
    let cursor = query.cursor().clamped_to(total_count);

    let sql = format!(
        "
    SELECT report_id,
        problem_reports.customer_id AS customer_id,
        customers.name AS customer_name,
        category,
        status,
        description,
        photo_path,
        toString(reported_at) AS reported_at
    {PROBLEMS_FROM_CLAUSE}
    {where_clause}
    {order_clause}
    {page_clause}
    ",
        order_clause = build_order_clause("reported_at", "report_id"),
        page_clause = build_page_clause(&cursor),
    );
    let client = get_clickhouse_client();
    let rows = client.query(&sql).fetch_all::<ProblemResponse>().await?;

    let records = rows
        .into_iter()
        .map(|row| ProblemReportRow {
            report_id: row.report_id,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            category: row.category,
            status: row.status,
            description: row.description,
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
