//! Catalog error types.
//!
//! The cart never fails, so the only errors in this crate come from reading
//! the catalog.

use thiserror::Error;

/// Errors surfaced by a [`CatalogReader`](crate::catalog::CatalogReader).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The backing store could not be reached or answered with an error.
    #[error("Catalog unavailable during {operation}: {reason}")]
    Unavailable {
        /// The read that failed (e.g., "list_all").
        operation: String,
        /// What went wrong.
        reason: String,
    },

    /// A record came back but does not describe a valid product.
    #[error("Invalid product record: {0}")]
    InvalidRecord(String),
}

impl CatalogError {
    /// Build an [`CatalogError::Unavailable`] for the given read.
    pub fn unavailable(operation: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::Unavailable {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidRecord(e.to_string())
    }
}
