//! SQL builder helpers for report queries.

use common::facet::{Facet, FacetSet, FacetValue};
use common::page::PageCursor;

fn quoted_value(value: &FacetValue) -> String {
    match value {
        FacetValue::Str(s) => format_sql_query::QuotedData(s).to_string(),
        FacetValue::Int(i) => i.to_string(),
    }
}

/// Conjunctive WHERE clause over every active facet. Returns an empty
/// string when nothing constrains the query.
pub fn build_where_clause(facets: &FacetSet) -> String {
    build_where_clause_with(facets, Vec::new())
}

/// Same, with pre-built terms appended (relational inclusion from a
/// two-stage lookup).
pub fn build_where_clause_with(facets: &FacetSet, extra_terms: Vec<String>) -> String {
    let mut terms = Vec::new();
    for facet in facets.iter() {
        match facet {
            Facet::Range { field, start, end } => {
                // date bounds widen to whole-day datetime bounds
                if let Some(start) = start {
                    terms.push(format!(
                        "{field} >= {}",
                        format_sql_query::QuotedData(&format!("{start} 00:00:00"))
                    ));
                }
                if let Some(end) = end {
                    terms.push(format!(
                        "{field} <= {}",
                        format_sql_query::QuotedData(&format!("{end} 23:59:59"))
                    ));
                }
            }
            Facet::Membership { field, values } => {
                let values_str = values
                    .iter()
                    .map(quoted_value)
                    .collect::<Vec<String>>()
                    .join(", ");
                terms.push(format!("{field} IN ({values_str})"));
            }
            Facet::Equality { field, value } => {
                terms.push(format!("{field} = {}", quoted_value(value)));
            }
        }
    }
    terms.extend(extra_terms);

    if terms.is_empty() {
        return String::new();
    }
    format!(
        "WHERE {}",
        terms.join(
            "
        AND "
        )
    )
}

/// `field IN (ids)` for an externally resolved identifier list.
pub fn build_id_in_clause(field: &str, ids: &[u64]) -> String {
    let ids_str = ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    format!("{field} IN ({ids_str})")
}

/// Deterministic report order: event timestamp descending, id as tiebreak.
pub fn build_order_clause(timestamp_field: &str, id_field: &str) -> String {
    format!("ORDER BY {timestamp_field} DESC, {id_field} DESC")
}

/// Exactly one page: `page_size` records starting at `(page-1)*page_size`.
pub fn build_page_clause(cursor: &PageCursor) -> String {
    format!("LIMIT {} OFFSET {}", cursor.limit(), cursor.offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn empty_facet_set_builds_no_where_clause() {
        assert_eq!(build_where_clause(&FacetSet::new()), "");
    }

    #[test]
    fn start_only_range_has_no_upper_bound() {
        let mut facets = FacetSet::new();
        facets.set(Facet::Range {
            field: "visited_at".to_string(),
            start: Some("2024-01-01".to_string()),
            end: None,
        });
        let clause = build_where_clause(&facets);
        assert_eq!(clause, "WHERE visited_at >= '2024-01-01 00:00:00'");
    }

    #[test]
    fn end_bound_covers_the_whole_day() {
        let mut facets = FacetSet::new();
        facets.set(Facet::Range {
            field: "reported_at".to_string(),
            start: None,
            end: Some("2024-02-29".to_string()),
        });
        let clause = build_where_clause(&facets);
        assert_eq!(clause, "WHERE reported_at <= '2024-02-29 23:59:59'");
    }

    #[test]
    fn active_facets_compose_conjunctively() {
        let mut facets = FacetSet::new();
        facets.set(Facet::Equality {
            field: "visits.customer_id".to_string(),
            value: FacetValue::Int(42),
        });
        facets.set(Facet::Membership {
            field: "purpose".to_string(),
            values: BTreeSet::from([
                FacetValue::Str("order".to_string()),
                FacetValue::Str("audit".to_string()),
            ]),
        });
        let clause = build_where_clause(&facets);
        assert!(clause.starts_with("WHERE "));
        assert!(clause.contains("purpose IN ('audit', 'order')"));
        assert!(clause.contains("visits.customer_id = 42"));
        assert_eq!(clause.matches("AND").count(), 1);
    }

    #[test]
    fn string_values_are_sql_quoted() {
        let mut facets = FacetSet::new();
        facets.set(Facet::Equality {
            field: "category".to_string(),
            value: FacetValue::Str("O'Hara".to_string()),
        });
        assert_eq!(build_where_clause(&facets), "WHERE category = 'O''Hara'");
    }

    #[test]
    fn extra_terms_are_appended_conjunctively() {
        let mut facets = FacetSet::new();
        facets.set(Facet::Range {
            field: "analyzed_at".to_string(),
            start: Some("2024-01-01".to_string()),
            end: None,
        });
        let clause = build_where_clause_with(
            &facets,
            vec![build_id_in_clause("analysis_id", &[3, 5, 8])],
        );
        assert!(clause.contains("analyzed_at >= '2024-01-01 00:00:00'"));
        assert!(clause.contains("analysis_id IN (3, 5, 8)"));
        assert_eq!(clause.matches("AND").count(), 1);
    }

    #[test]
    fn page_clause_addresses_the_requested_slice() {
        let cursor = PageCursor { page: 3, page_size: 5 };
        assert_eq!(build_page_clause(&cursor), "LIMIT 5 OFFSET 10");
        assert_eq!(
            build_page_clause(&PageCursor::first(20)),
            "LIMIT 20 OFFSET 0"
        );
    }

    #[test]
    fn order_clause_is_deterministic() {
        assert_eq!(
            build_order_clause("visited_at", "visit_id"),
            "ORDER BY visited_at DESC, visit_id DESC"
        );
    }
}
