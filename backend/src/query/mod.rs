//! Query composition and shared fetch helpers.

pub mod sql;

use crate::db::get_clickhouse_client;

/// Total count of records matching the same facet snapshot as the page
/// query it accompanies.
pub async fn fetch_total_count(from_clause: &str, where_clause: &str) -> anyhow::Result<u64> {
    let client = get_clickhouse_client();
    let sql = format!(
        "
    SELECT count()
    {from_clause}
    {where_clause}
    "
    );
    let total_count = client.query(&sql).fetch_one::<u64>().await?;
    Ok(total_count)
}
