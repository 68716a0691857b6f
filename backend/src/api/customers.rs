//! Customer lookup endpoints feeding the search box and the filter
//! dropdown.

use clickhouse::Row;
use common::records::{CustomerHit, CustomerRecord};
use common::report_const::SEARCH_RESULT_LIMIT;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct CustomerHitResponse {
    customer_id: u64,
    name: String,
    short_code: String,
}

/// Case-insensitive substring match over name OR short code against the
/// authoritative customer table, capped at `SEARCH_RESULT_LIMIT`.
pub async fn search_customers(text: String) -> anyhow::Result<Vec<CustomerHit>> {
    let needle = text.trim().to_string();
    if needle.is_empty() {
        return Ok(Vec::new());
    }

    let client = get_clickhouse_client();
    let sql = "
    SELECT customer_id, name, short_code
    FROM customers
    WHERE positionCaseInsensitive(name, ?) > 0
       OR positionCaseInsensitive(short_code, ?) > 0
    ORDER BY name ASC, customer_id ASC
    LIMIT ?
    ";
    let rows = client
        .query(sql)
        .bind(&needle)
        .bind(&needle)
        .bind(SEARCH_RESULT_LIMIT)
        .fetch_all::<CustomerHitResponse>()
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| CustomerHit {
            customer_id: row.customer_id,
            name: row.name,
            short_code: row.short_code,
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct CustomerResponse {
    customer_id: u64,
    name: String,
    short_code: String,
    city: String,
}

/// Full customer listing for the report filter dropdowns.
pub async fn list_customers() -> anyhow::Result<Vec<CustomerRecord>> {
    let client = get_clickhouse_client();
    let sql = "
    SELECT customer_id, name, short_code, city
    FROM customers
    ORDER BY name ASC, customer_id ASC
    ";
    let rows = client.query(sql).fetch_all::<CustomerResponse>().await?;
    Ok(rows
        .into_iter()
        .map(|row| CustomerRecord {
            customer_id: row.customer_id,
            name: row.name,
            short_code: row.short_code,
            city: row.city,
        })
        .collect())
}
