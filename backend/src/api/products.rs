use clickhouse::Row;
use common::records::ProductRecord;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct ProductResponse {
    product_id: u64,
    name: String,
    short_code: String,
    category: String,
}

/// Full product listing for the analysis product filter.
pub async fn list_products() -> anyhow::Result<Vec<ProductRecord>> {
    let client = get_clickhouse_client();
    let sql = "
    SELECT product_id, name, short_code, category
    FROM products
    ORDER BY name ASC, product_id ASC
    ";
    let rows = client.query(sql).fetch_all::<ProductResponse>().await?;
    Ok(rows
        .into_iter()
        .map(|row| ProductRecord {
            product_id: row.product_id,
            name: row.name,
            short_code: row.short_code,
            category: row.category,
        })
        .collect())
}
