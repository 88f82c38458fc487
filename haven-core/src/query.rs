//! Property query engine
//!
//! Filters and sorts a listing snapshot against a [`FilterCriteria`] and a
//! [`SortKey`]. The whole pipeline is a pure function: identical inputs
//! produce identical, order-preserving output, and no step can fail.
//!
//! Filter order is fixed (text search, city, type, status, min price, max
//! price, min beds, sort); later steps assume the narrower input of the
//! earlier ones. A linear scan over the in-memory snapshot is the intended
//! shape; the collection is at most a few hundred entries, not a datastore.

use crate::{FilterCriteria, Property, SortKey};
use std::cmp::Reverse;

/// Run the full filter + sort pipeline over a listing snapshot.
pub fn query(all: &[Property], criteria: &FilterCriteria, sort: SortKey) -> Vec<Property> {
    let mut results: Vec<Property> = all
        .iter()
        .filter(|p| matches_text(p, &criteria.query))
        .filter(|p| criteria.city.as_deref().map_or(true, |c| c == p.city))
        .filter(|p| criteria.property_type.map_or(true, |t| p.property_type == t))
        .filter(|p| criteria.status.map_or(true, |s| p.status == s))
        .filter(|p| criteria.min_price.map_or(true, |min| p.price >= min))
        .filter(|p| criteria.max_price.map_or(true, |max| p.price <= max))
        .filter(|p| criteria.min_beds == 0 || p.beds >= criteria.min_beds)
        .cloned()
        .collect();

    sort_results(&mut results, sort);
    results
}

/// Case-insensitive substring containment across the searchable fields.
/// No tokenization, no stemming; an empty needle matches everything.
fn matches_text(property: &Property, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
    hit(&property.address)
        || hit(&property.city)
        || hit(&property.description)
        || property.features.iter().any(|f| hit(f))
}

/// Stable sort by the selected key. `sort_by` preserves the relative input
/// order of equal keys, which callers rely on.
fn sort_results(results: &mut [Property], sort: SortKey) {
    match sort {
        SortKey::PriceAsc => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Newest => results.sort_by_key(|p| p.days_on_market),
        SortKey::Beds => results.sort_by_key(|p| Reverse(p.beds)),
        SortKey::Sqft => results.sort_by_key(|p| Reverse(p.sqft)),
    }
}

/// Aggregates derived from a query result for the summary line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuerySummary {
    pub count: usize,
    /// Mean asking price; defined as 0.0 over an empty set (never NaN).
    pub average_price: f64,
}

impl QuerySummary {
    pub fn of(results: &[Property]) -> Self {
        if results.is_empty() {
            return Self {
                count: 0,
                average_price: 0.0,
            };
        }
        let total: f64 = results.iter().map(|p| p.price).sum();
        Self {
            count: results.len(),
            average_price: total / results.len() as f64,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ListingStatus, PropertyType};

    fn listing(id: &str, price: f64, beds: u32) -> Property {
        Property {
            id: id.to_string(),
            address: format!("{} Juniper Ct", id),
            city: "Richland".to_string(),
            property_type: PropertyType::SingleFamily,
            status: ListingStatus::Active,
            price,
            beds,
            sqft: 1_500,
            days_on_market: 10,
            description: "quiet street".to_string(),
            features: vec!["garage".to_string()],
        }
    }

    fn snapshot() -> Vec<Property> {
        vec![
            listing("a", 300_000.0, 2),
            listing("b", 450_000.0, 3),
            listing("c", 300_000.0, 4),
        ]
    }

    #[test]
    fn unconstrained_criteria_returns_everything() {
        let all = snapshot();
        let out = query(&all, &FilterCriteria::matches_all(), SortKey::Newest);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn price_asc_ties_keep_input_order() {
        // a and c tie at 300k; a entered first and must stay first.
        let all = snapshot();
        let out = query(&all, &FilterCriteria::matches_all(), SortKey::PriceAsc);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn price_desc_orders_high_to_low() {
        let all = snapshot();
        let out = query(&all, &FilterCriteria::matches_all(), SortKey::PriceDesc);
        assert_eq!(out[0].id, "b");
    }

    #[test]
    fn beds_sorts_descending() {
        let all = snapshot();
        let out = query(&all, &FilterCriteria::matches_all(), SortKey::Beds);
        let beds: Vec<u32> = out.iter().map(|p| p.beds).collect();
        assert_eq!(beds, vec![4, 3, 2]);
    }

    #[test]
    fn text_search_is_case_insensitive_substring() {
        let all = snapshot();
        let criteria = FilterCriteria {
            query: "RICHLAND".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(query(&all, &criteria, SortKey::Newest).len(), 3);

        let criteria = FilterCriteria {
            query: "gara".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(query(&all, &criteria, SortKey::Newest).len(), 3);

        let criteria = FilterCriteria {
            query: "waterfront".to_string(),
            ..FilterCriteria::default()
        };
        assert!(query(&all, &criteria, SortKey::Newest).is_empty());
    }

    #[test]
    fn city_filter_is_case_sensitive() {
        let all = snapshot();
        let criteria = FilterCriteria {
            city: Some("richland".to_string()),
            ..FilterCriteria::default()
        };
        assert!(query(&all, &criteria, SortKey::Newest).is_empty());

        let criteria = FilterCriteria {
            city: Some("Richland".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(query(&all, &criteria, SortKey::Newest).len(), 3);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let all = snapshot();
        let criteria = FilterCriteria {
            min_price: Some(300_000.0),
            max_price: Some(300_000.0),
            ..FilterCriteria::default()
        };
        let out = query(&all, &criteria, SortKey::PriceAsc);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn min_beds_zero_matches_bedless_land() {
        // 0 means unconstrained, so a zero-bed land parcel still shows up.
        let mut all = snapshot();
        let mut parcel = listing("d", 90_000.0, 0);
        parcel.property_type = PropertyType::Land;
        all.push(parcel);

        let out = query(&all, &FilterCriteria::matches_all(), SortKey::PriceAsc);
        assert_eq!(out.len(), 4);

        let criteria = FilterCriteria {
            min_beds: 1,
            ..FilterCriteria::default()
        };
        let out = query(&all, &criteria, SortKey::PriceAsc);
        assert!(out.iter().all(|p| p.beds >= 1));
    }

    #[test]
    fn summary_of_empty_set_is_zero_not_nan() {
        let summary = QuerySummary::of(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_price, 0.0);
    }

    #[test]
    fn summary_averages_prices() {
        let all = snapshot();
        let summary = QuerySummary::of(&all);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_price, 350_000.0);
    }

    #[test]
    fn engine_is_deterministic() {
        let all = snapshot();
        let criteria = FilterCriteria {
            query: "juniper".to_string(),
            min_price: Some(100_000.0),
            ..FilterCriteria::default()
        };
        let first = query(&all, &criteria, SortKey::Sqft);
        let second = query(&all, &criteria, SortKey::Sqft);
        assert_eq!(first, second);
    }
}
