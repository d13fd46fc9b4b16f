//! Catalog reads that never fail outwardly.
//!
//! Views call these instead of the reader directly: a failed read turns into
//! an empty result carrying the error, and the failure is logged once here.

use std::time::Instant;

use crate::catalog::{CatalogQuery, CatalogReader, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Outcome of a list read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogListing {
    /// Products returned; empty when the read failed.
    pub products: Vec<Product>,
    /// Set when the catalog could not be read.
    pub error: Option<CatalogError>,
}

impl CatalogListing {
    /// A successful listing.
    pub fn loaded(products: Vec<Product>) -> Self {
        Self {
            products,
            error: None,
        }
    }

    /// A failed listing: no products, error attached.
    pub fn failed(error: CatalogError) -> Self {
        Self {
            products: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether the read failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the read succeeded with no matches.
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.products.is_empty()
    }
}

/// Outcome of a single-product read.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    /// The product exists.
    Found(Product),
    /// No product has that id.
    NotFound,
    /// The catalog could not be read.
    Unavailable(CatalogError),
}

impl ProductLookup {
    /// The product, if found.
    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductLookup::Found(product) => Some(product),
            _ => None,
        }
    }
}

/// Run a list query, converting failures into an empty listing.
pub async fn load_listing<R>(reader: &R, query: &CatalogQuery) -> CatalogListing
where
    R: CatalogReader + ?Sized,
{
    let started = Instant::now();
    match reader.fetch(query).await {
        Ok(products) => {
            tracing::info!(
                operation = query.operation(),
                count = products.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "catalog read"
            );
            CatalogListing::loaded(products)
        }
        Err(e) => {
            tracing::error!(operation = query.operation(), error = %e, "error fetching products");
            CatalogListing::failed(e)
        }
    }
}

/// Look up one product, converting failures into [`ProductLookup::Unavailable`].
pub async fn load_product<R>(reader: &R, id: &ProductId) -> ProductLookup
where
    R: CatalogReader + ?Sized,
{
    match reader.get_by_id(id).await {
        Ok(Some(product)) => ProductLookup::Found(product),
        Ok(None) => {
            tracing::info!(product_id = %id, "product not found");
            ProductLookup::NotFound
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "error fetching product");
            ProductLookup::Unavailable(e)
        }
    }
}

/// Unique categories in first-seen order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::money::{Currency, Money};
    use async_trait::async_trait;

    struct DownCatalog;

    #[async_trait]
    impl CatalogReader for DownCatalog {
        async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::unavailable("list_all", "connection refused"))
        }

        async fn list_by_category(&self, _category: &str) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::unavailable("list_by_category", "connection refused"))
        }

        async fn get_by_id(&self, _id: &ProductId) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::unavailable("get_by_id", "connection refused"))
        }
    }

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, id, Money::new(100, Currency::USD)).with_category(category)
    }

    #[tokio::test]
    async fn test_failure_becomes_empty_listing() {
        let listing = load_listing(&DownCatalog, &CatalogQuery::All).await;
        assert!(listing.products.is_empty());
        assert!(listing.is_error());
        assert!(!listing.is_empty());
    }

    #[tokio::test]
    async fn test_no_matches_is_not_an_error() {
        let catalog = InMemoryCatalog::new(vec![product("1", "hats")]);
        let listing = load_listing(&catalog, &CatalogQuery::category("shoes")).await;
        assert!(listing.is_empty());
        assert!(listing.error.is_none());
    }

    #[tokio::test]
    async fn test_load_product_states() {
        let catalog = InMemoryCatalog::new(vec![product("1", "hats")]);
        let found = load_product(&catalog, &ProductId::new("1")).await;
        assert_eq!(found.product().map(|p| p.id.as_str()), Some("1"));
        assert_eq!(
            load_product(&catalog, &ProductId::new("2")).await,
            ProductLookup::NotFound
        );
        assert!(matches!(
            load_product(&DownCatalog, &ProductId::new("1")).await,
            ProductLookup::Unavailable(_)
        ));
    }

    #[test]
    fn test_distinct_categories_keeps_first_seen_order() {
        let products = vec![
            product("1", "shoes"),
            product("2", "hats"),
            product("3", "shoes"),
            product("4", "bags"),
        ];
        assert_eq!(distinct_categories(&products), vec!["shoes", "hats", "bags"]);
    }
}
