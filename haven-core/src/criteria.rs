//! Filter criteria value object
//!
//! Owned by the calling UI and handed to the engine by reference on every
//! recomputation; the engine keeps no state between calls.

use crate::{ListingStatus, PropertyType};
use serde::{Deserialize, Serialize};

/// The composed set of active filter constraints.
///
/// `None` selectors mean "all" (the upstream wire form's literal `"all"`
/// deserializes to `None`). An empty `query` disables text search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against address, city,
    /// description, and feature tags.
    pub query: String,
    /// Exact, case-sensitive city match when set.
    #[serde(with = "all_as_none")]
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<ListingStatus>,
    /// Inclusive price bounds.
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Minimum bedroom count; 0 means unconstrained. Upstream quirk kept
    /// as-is: an at-least-zero-beds filter cannot be expressed.
    pub min_beds: u32,
}

impl FilterCriteria {
    /// Criteria that match every listing.
    pub fn matches_all() -> Self {
        Self::default()
    }

    /// Whether any constraint is active.
    pub fn is_constrained(&self) -> bool {
        !self.query.is_empty()
            || self.city.is_some()
            || self.property_type.is_some()
            || self.status.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.min_beds > 0
    }
}

/// Permissive parse of a price bound from raw form input.
///
/// Malformed, non-finite, or negative input means "filter not set", never an
/// error, mirroring how the form layer treats bad numeric entry.
pub fn price_bound(input: &str) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Serde helper mapping the upstream sentinel string `"all"` to `None`.
mod all_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(city) => ser.serialize_str(city),
            None => ser.serialize_str("all"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(de)?;
        Ok(raw.filter(|s| !s.is_empty() && s != "all"))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_all() {
        let criteria = FilterCriteria::matches_all();
        assert!(!criteria.is_constrained());
    }

    #[test]
    fn min_beds_counts_as_constraint() {
        let criteria = FilterCriteria {
            min_beds: 2,
            ..FilterCriteria::default()
        };
        assert!(criteria.is_constrained());
    }

    #[test]
    fn price_bound_parses_plain_numbers() {
        assert_eq!(price_bound("250000"), Some(250_000.0));
        assert_eq!(price_bound(" 99.5 "), Some(99.5));
        assert_eq!(price_bound("0"), Some(0.0));
    }

    #[test]
    fn price_bound_treats_malformed_input_as_unset() {
        assert_eq!(price_bound(""), None);
        assert_eq!(price_bound("abc"), None);
        assert_eq!(price_bound("250,000"), None);
        assert_eq!(price_bound("-5"), None);
        assert_eq!(price_bound("NaN"), None);
        assert_eq!(price_bound("inf"), None);
    }

    #[test]
    fn city_all_sentinel_deserializes_to_none() {
        let criteria: FilterCriteria = serde_json::from_str(r#"{"city": "all"}"#).unwrap();
        assert_eq!(criteria.city, None);

        let criteria: FilterCriteria = serde_json::from_str(r#"{"city": "Richland"}"#).unwrap();
        assert_eq!(criteria.city.as_deref(), Some("Richland"));
    }

    #[test]
    fn city_none_serializes_as_all() {
        let json = serde_json::to_value(FilterCriteria::default()).unwrap();
        assert_eq!(json["city"], "all");
    }
}
