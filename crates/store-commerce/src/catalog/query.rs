//! Typed catalog queries.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A read against the catalog.
///
/// Readers translate these into whatever their backing store speaks; nothing
/// in this crate builds query text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "op", content = "arg", rename_all = "snake_case")]
pub enum CatalogQuery {
    /// Every product, in store order.
    All,
    /// Products whose category equals the given string exactly.
    ByCategory(String),
    /// At most one product with the given id.
    ById(ProductId),
}

impl CatalogQuery {
    /// Create a category query.
    pub fn category(category: impl Into<String>) -> Self {
        CatalogQuery::ByCategory(category.into())
    }

    /// Create a by-id query.
    pub fn id(id: impl Into<ProductId>) -> Self {
        CatalogQuery::ById(id.into())
    }

    /// Name of the reader operation, used in logs and errors.
    pub fn operation(&self) -> &'static str {
        match self {
            CatalogQuery::All => "list_all",
            CatalogQuery::ByCategory(_) => "list_by_category",
            CatalogQuery::ById(_) => "get_by_id",
        }
    }
}

impl fmt::Display for CatalogQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogQuery::All => f.write_str("all products"),
            CatalogQuery::ByCategory(category) => write!(f, "category '{}'", category),
            CatalogQuery::ById(id) => write!(f, "product {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(CatalogQuery::All.operation(), "list_all");
        assert_eq!(CatalogQuery::category("hats").operation(), "list_by_category");
        assert_eq!(CatalogQuery::id("7").operation(), "get_by_id");
    }

    #[test]
    fn test_display() {
        assert_eq!(CatalogQuery::category("shoes").to_string(), "category 'shoes'");
        assert_eq!(CatalogQuery::id("9").to_string(), "product 9");
    }
}
