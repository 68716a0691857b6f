//! Route parameter codec for structured view state.
//!
//! Report queries travel inside the URL so a view is reconstructible from
//! its route alone and browser history drives facet/page navigation. The
//! value is CBOR-encoded and URL-safe base64 wrapped.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};

// Route segment types only need Display, FromStr and Default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Decode(base64::DecodeError),
    Deserialize(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Deserialize(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Decode)?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(UrlParamParseError::Deserialize)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::facet::{Facet, FacetValue};
    use common::report_query::ReportQuery;
    use pretty_assertions::assert_eq;

    #[test]
    fn report_query_survives_the_route_segment() {
        let query = ReportQuery::default()
            .with_facet(Facet::Range {
                field: "visited_at".to_string(),
                start: Some("2024-01-01".to_string()),
                end: None,
            })
            .with_facet(Facet::Equality {
                field: "visits.customer_id".to_string(),
                value: FacetValue::Int(17),
            })
            .with_page(3);

        let segment = UrlParam::from(query.clone()).to_string();
        let parsed: UrlParam<ReportQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }
}
