//! Error types for troop logistics.
//!
//! Calculations never fail; they return sentinel numbers (0, NaN, infinity)
//! instead. Errors only come from parsing identifiers and catalog data.

use thiserror::Error;

/// Result type alias using [`TroopError`].
pub type Result<T> = std::result::Result<T, TroopError>;

/// Top-level error type for troop logistics.
#[derive(Debug, Error, PartialEq)]
pub enum TroopError {
    /// Identifier does not name a known unit type.
    #[error("Unknown unit type: {0}")]
    UnknownUnitType(String),

    /// Identifier does not name a travel role.
    #[error("Unknown travel role: {0} (expected \"attack\" or \"support\")")]
    UnknownRole(String),

    /// Catalog text could not be parsed.
    #[error("Failed to parse unit catalog: {message}")]
    CatalogParse {
        /// Parser error message.
        message: String,
    },

    /// Catalog parsed but failed validation.
    #[error("Invalid unit catalog: {}", .0.join("; "))]
    InvalidCatalog(Vec<String>),

    /// Numeric sequence has the wrong number of entries.
    #[error("Expected {expected} troop counts, got {actual}")]
    ArrayLength {
        /// Number of known unit types.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
}
