//! Error types for HAVEN operations

use thiserror::Error;

/// Validation errors raised at the load boundary.
///
/// The query engine and progress derivation are total functions; validation
/// happens once when records enter the system, never during recomputation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: &'static str },

    #[error("Invalid value for {field} on listing {id}: {reason}")]
    InvalidValue {
        field: &'static str,
        id: String,
        reason: String,
    },
}

/// Master error type for all HAVEN errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HavenError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for HAVEN operations.
pub type HavenResult<T> = Result<T, HavenError>;

// =============================================================================
// TESTS
// =============================================================================
