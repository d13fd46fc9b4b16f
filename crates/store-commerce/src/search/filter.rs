//! Client-side product search.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Case-insensitive substring search over product name and description.
///
/// No tokenization and no ranking: a product either contains the text or it
/// does not. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    query: String,
    needle: String,
}

impl SearchFilter {
    /// Create a filter for the given search text.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let needle = query.to_lowercase();
        Self { query, needle }
    }

    /// The search text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check a single product.
    pub fn matches(&self, product: &Product) -> bool {
        product.name.to_lowercase().contains(&self.needle)
            || product.description.to_lowercase().contains(&self.needle)
    }

    /// Products that match, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Filter `products` by `query`. Shorthand for [`SearchFilter::apply`].
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    SearchFilter::new(query).apply(products)
}
