//! Competitor price analysis report.
//!
//! The product filter constrains the related item collection, not the
//! analysis table itself, so it resolves in two stages: first the
//! qualifying analysis ids from `price_analysis_items`, then the paginated
//! detail query constrained to `analysis_id IN (...)`. Zero qualifying ids
//! short-circuit to an empty page, never to an unfiltered query.

use std::collections::BTreeMap;

use clickhouse::Row;
use common::facet::FacetValue;
use common::page::{total_pages, ReportPage};
use common::records::{PriceAnalysisItem, PriceAnalysisRow};
use common::report_query::ReportQuery;
use serde::{Deserialize, Serialize};

use crate::db::get_clickhouse_client;
use crate::query::fetch_total_count;
use crate::query::sql::{
    build_id_in_clause, build_order_clause, build_page_clause, build_where_clause_with,
};

/// Facet field the frontend uses for the product filter.
pub const PRODUCT_FACET_FIELD: &str = "product_id";

const ANALYSES_FROM_CLAUSE: &str = "
    FROM price_analyses
    LEFT JOIN customers
    ON price_analyses.customer_id = customers.customer_id
";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct AnalysisResponse {
    analysis_id: u64,
    customer_id: u64,
    customer_name: String,
    analyzed_at: String,
    notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Row)]
struct AnalysisItemResponse {
    item_id: u64,
    analysis_id: u64,
    product_id: u64,
    product_name: String,
    competitor_name: String,
    price: f64,
}

pub async fn load_price_analysis_report(
    query: ReportQuery,
) -> anyhow::Result<ReportPage<PriceAnalysisRow>> {
    let mut facets = query.facets.clone();
    let product_filter = facets.equality_value(PRODUCT_FACET_FIELD).cloned();
    facets.clear(PRODUCT_FACET_FIELD);

    let mut extra_terms = Vec::new();
    if let Some(value) = product_filter {
        let ids = qualifying_analysis_ids(&value).await?;
        match qualifying_ids_term(&ids) {
            Some(term) => extra_terms.push(term),
            None => return Ok(ReportPage::empty()),
        }
    }

    let where_clause = build_where_clause_with(&facets, extra_terms);
    let total_count = fetch_total_count(ANALYSES_FROM_CLAUSE, &where_clause).await?;
    let cursor = query.cursor().clamped_to(total_count);

    let sql = format!(
        "
    SELECT analysis_id,
        price_analyses.customer_id AS customer_id,
        customers.name AS customer_name,
        toString(analyzed_at) AS analyzed_at,
        notes
    {ANALYSES_FROM_CLAUSE}
    {where_clause}
    {order_clause}
    {page_clause}
    ",
        order_clause = build_order_clause("analyzed_at", "analysis_id"),
        page_clause = build_page_clause(&cursor),
    );
    let client = get_clickhouse_client();
    let rows = client.query(&sql).fetch_all::<AnalysisResponse>().await?;

    let page_ids = rows.iter().map(|row| row.analysis_id).collect::<Vec<u64>>();
    let mut items_by_analysis = fetch_items_for_analyses(&page_ids).await?;

    let records = rows
        .into_iter()
        .map(|row| PriceAnalysisRow {
            items: items_by_analysis.remove(&row.analysis_id).unwrap_or_default(),
            analysis_id: row.analysis_id,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            analyzed_at: row.analyzed_at,
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

/// Stage one: analyses containing at least one item for the product.
async fn qualifying_analysis_ids(product: &FacetValue) -> anyhow::Result<Vec<u64>> {
    let product_id = match product {
        FacetValue::Int(i) => *i,
        FacetValue::Str(s) => s.parse::<u64>().unwrap_or(0),
    };
    let client = get_clickhouse_client();
    let sql = "
    SELECT DISTINCT analysis_id
    FROM price_analysis_items
    WHERE product_id = ?
    ";
    let ids = client.query(sql).bind(product_id).fetch_all::<u64>().await?;
    Ok(ids)
}

/// `None` when stage one matched nothing: the caller must short-circuit
/// instead of issuing an ambiguous unconstrained detail query.
fn qualifying_ids_term(ids: &[u64]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(build_id_in_clause("analysis_id", ids))
}

async fn fetch_items_for_analyses(
    analysis_ids: &[u64],
) -> anyhow::Result<BTreeMap<u64, Vec<PriceAnalysisItem>>> {
    let mut grouped = BTreeMap::<u64, Vec<PriceAnalysisItem>>::new();
    if analysis_ids.is_empty() {
        return Ok(grouped);
    }

    let client = get_clickhouse_client();
    let sql = format!(
        "
    SELECT item_id,
        analysis_id,
        price_analysis_items.product_id AS product_id,
        products.name AS product_name,
        competitor_name,
        price
    FROM price_analysis_items
    LEFT JOIN products
    ON price_analysis_items.product_id = products.product_id
    WHERE {}
    ORDER BY analysis_id DESC, item_id ASC
    ",
        build_id_in_clause("analysis_id", analysis_ids)
    );
    let rows = client.query(&sql).fetch_all::<AnalysisItemResponse>().await?;

    for row in rows {
        grouped
            .entry(row.analysis_id)
            .or_default()
            .push(PriceAnalysisItem {
                item_id: row.item_id,
                analysis_id: row.analysis_id,
                product_id: row.product_id,
                product_name: row.product_name,
                competitor_name: row.competitor_name,
                price: row.price,
            });
    }
    Ok(grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_qualifying_ids_short_circuits() {
        assert_eq!(qualifying_ids_term(&[]), None);
    }

    #[test]
    fn qualifying_ids_become_an_inclusion_term() {
        assert_eq!(
            qualifying_ids_term(&[3, 5, 8]),
            Some("analysis_id IN (3, 5, 8)".to_string())
        );
    }

    #[test]
    fn short_circuit_page_is_empty_with_zero_count() {
        let page = ReportPage::<PriceAnalysisRow>::empty();
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.records.is_empty());
    }
}
