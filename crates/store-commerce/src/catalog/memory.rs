//! In-memory catalog, used for fixtures and offline browsing.

use std::path::Path;

use async_trait::async_trait;

use crate::catalog::{decode_products, CatalogReader, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// A catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Build a catalog from products, dropping records that fail validation.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .filter(|product| match product.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(product_id = %product.id, error = %e, "skipping invalid product");
                    false
                }
            })
            .collect();
        Self { products }
    }

    /// Parse a JSON array of product records. Records that fail to decode
    /// or validate are skipped; malformed JSON or a non-array is an error.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let documents: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self {
            products: decode_products(documents),
        })
    }

    /// Load a JSON fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::unavailable("load_fixture", format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogQuery;
    use crate::money::{Currency, Money};

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, format!("Item {}", id), Money::new(1000, Currency::USD))
            .with_category(category)
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            product("1", "shoes"),
            product("2", "Shoes"),
            product("3", "hats"),
            product("4", "shoes"),
        ])
    }

    #[tokio::test]
    async fn test_list_by_category_is_exact_match() {
        let found = catalog().list_by_category("shoes").await.unwrap();
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let catalog = catalog();
        let hit = catalog.get_by_id(&ProductId::new("3")).await.unwrap();
        assert_eq!(hit.map(|p| p.category), Some("hats".to_string()));
        assert!(catalog.get_by_id(&ProductId::new("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_dispatches_typed_queries() {
        let catalog = catalog();
        assert_eq!(catalog.fetch(&CatalogQuery::All).await.unwrap().len(), 4);
        assert_eq!(catalog.fetch(&CatalogQuery::id("2")).await.unwrap().len(), 1);
        assert!(catalog.fetch(&CatalogQuery::id("x")).await.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_records_are_dropped() {
        let bad = Product::new("9", "Bad", Money::new(-5, Currency::USD));
        let catalog = InMemoryCatalog::new(vec![product("1", "shoes"), bad]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_json_str() {
        let catalog = InMemoryCatalog::from_json_str(
            r#"[{"id": "1", "name": "Cap", "price": 12.5, "category": "hats"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(InMemoryCatalog::from_json_str("not json").is_err());
        assert!(InMemoryCatalog::from_json_str(r#"{"id": "1"}"#).is_err());
    }

    #[tokio::test]
    async fn test_from_json_str_skips_bad_records() {
        let catalog = InMemoryCatalog::from_json_str(
            r#"[
                {"id": "1", "name": "Cap", "price": 12.5, "discountPercentage": 12.5},
                {"id": "2", "name": "Scarf", "price": "twelve"},
                {"id": "3", "name": "Boot", "price": 90, "category": "shoes"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let cap = catalog.get_by_id(&ProductId::new("1")).await.unwrap().unwrap();
        assert_eq!(cap.discounted_price().amount_cents, 1094);
        assert!(catalog.get_by_id(&ProductId::new("2")).await.unwrap().is_none());
    }
}
