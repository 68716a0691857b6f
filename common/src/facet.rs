//! Facet model shared between the report pages and the query builder.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq)]
pub enum FacetValue {
    Str(String),
    Int(u64),
}

impl FacetValue {
    pub fn display_string(&self) -> String {
        match self {
            FacetValue::Str(s) => s.clone(),
            FacetValue::Int(i) => i.to_string(),
        }
    }
}

/// One independently toggleable filter dimension. Facets compose
/// conjunctively; a facet whose constraint is empty imposes nothing and is
/// dropped from the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet {
    /// Optional bounds over an orderable date field, ISO `YYYY-MM-DD`.
    Range {
        field: String,
        start: Option<String>,
        end: Option<String>,
    },
    /// `field IN (values)`.
    Membership {
        field: String,
        values: BTreeSet<FacetValue>,
    },
    /// At most one selected identifier.
    Equality { field: String, value: FacetValue },
}

impl Facet {
    pub fn field(&self) -> &str {
        match self {
            Facet::Range { field, .. } => field,
            Facet::Membership { field, .. } => field,
            Facet::Equality { field, .. } => field,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        match self {
            Facet::Range { start, end, .. } => start.is_none() && end.is_none(),
            Facet::Membership { values, .. } => values.is_empty(),
            Facet::Equality { .. } => false,
        }
    }
}

/// Conjunctive facet set, keyed by facet field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetSet {
    facets: BTreeMap<String, Facet>,
}

impl FacetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the facet on its field; an unconstrained facet clears it.
    pub fn set(&mut self, facet: Facet) {
        if facet.is_unconstrained() {
            self.facets.remove(facet.field());
        } else {
            self.facets.insert(facet.field().to_string(), facet);
        }
    }

    pub fn clear(&mut self, field: &str) {
        self.facets.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&Facet> {
        self.facets.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.values()
    }

    /// Toggles one membership value, dropping the whole facet when the last
    /// value is removed.
    pub fn toggle_membership(&mut self, field: &str, value: FacetValue) {
        let entry = self
            .facets
            .entry(field.to_string())
            .or_insert_with(|| Facet::Membership {
                field: field.to_string(),
                values: BTreeSet::new(),
            });
        if let Facet::Membership { values, .. } = entry {
            if !values.remove(&value) {
                values.insert(value);
            }
            if values.is_empty() {
                self.facets.remove(field);
            }
        }
    }

    pub fn membership_contains(&self, field: &str, value: &FacetValue) -> bool {
        match self.facets.get(field) {
            Some(Facet::Membership { values, .. }) => values.contains(value),
            _ => false,
        }
    }

    pub fn equality_value(&self, field: &str) -> Option<&FacetValue> {
        match self.facets.get(field) {
            Some(Facet::Equality { value, .. }) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unconstrained_facets_are_dropped() {
        let mut set = FacetSet::new();
        set.set(Facet::Range {
            field: "visited_at".to_string(),
            start: None,
            end: None,
        });
        assert!(set.is_empty());

        set.set(Facet::Membership {
            field: "purpose".to_string(),
            values: BTreeSet::new(),
        });
        assert!(set.is_empty());

        set.set(Facet::Range {
            field: "visited_at".to_string(),
            start: Some("2024-01-01".to_string()),
            end: None,
        });
        assert_eq!(set.iter().count(), 1);

        // narrowing back to no bounds clears the field again
        set.set(Facet::Range {
            field: "visited_at".to_string(),
            start: None,
            end: None,
        });
        assert!(set.is_empty());
    }

    #[test]
    fn toggle_membership_inserts_and_removes() {
        let mut set = FacetSet::new();
        let display = FacetValue::Str("display".to_string());
        let insert = FacetValue::Str("insert".to_string());

        set.toggle_membership("kind", display.clone());
        set.toggle_membership("kind", insert.clone());
        assert!(set.membership_contains("kind", &display));
        assert!(set.membership_contains("kind", &insert));

        set.toggle_membership("kind", display.clone());
        assert!(!set.membership_contains("kind", &display));

        set.toggle_membership("kind", insert.clone());
        assert!(set.get("kind").is_none());
    }

    #[test]
    fn one_facet_per_field() {
        let mut set = FacetSet::new();
        set.set(Facet::Equality {
            field: "customer_id".to_string(),
            value: FacetValue::Int(7),
        });
        set.set(Facet::Equality {
            field: "customer_id".to_string(),
            value: FacetValue::Int(9),
        });
        assert_eq!(
            set.equality_value("customer_id"),
            Some(&FacetValue::Int(9))
        );
        assert_eq!(set.iter().count(), 1);
    }
}
