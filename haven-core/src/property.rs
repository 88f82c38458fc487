//! Property listing record

use crate::{ListingStatus, PropertyType, ValidationError};
use serde::{Deserialize, Serialize};

/// A real-estate listing. Created once from the snapshot source at startup
/// and immutable for the lifetime of the view; the engine only ever derives
/// read-only views from a slice of these.
///
/// Field names are camelCase on the wire to match the upstream fixture JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique stable identifier.
    pub id: String,
    pub address: String,
    pub city: String,
    pub property_type: PropertyType,
    pub status: ListingStatus,
    /// Asking price. Finite and non-negative (enforced by [`Property::validate`]).
    pub price: f64,
    pub beds: u32,
    pub sqft: u32,
    /// Days since the listing went on market; lower = newer.
    pub days_on_market: u32,
    pub description: String,
    /// Free-text tags in display order. Searchable.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Property {
    /// Enforce the numeric invariant at the load boundary. The unsigned
    /// count fields cannot go negative by construction, so only `price`
    /// needs checking.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::RequiredFieldMissing { field: "id" });
        }
        if !self.price.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: "price",
                id: self.id.clone(),
                reason: "must be finite".to_string(),
            });
        }
        if self.price < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "price",
                id: self.id.clone(),
                reason: "must be non-negative".to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
