//! The catalog reader seam.

use async_trait::async_trait;

use crate::catalog::{CatalogQuery, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Read-only access to the product catalog.
///
/// Every call is a best-effort remote read: it may fail, and nothing is
/// promised about freshness or caching.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All products, in store-defined order.
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Products whose category equals `category` exactly (case-sensitive).
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError>;

    /// The product with the given id, if any.
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Run a typed query, flattening single lookups into a list.
    async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        match query {
            CatalogQuery::All => self.list_all().await,
            CatalogQuery::ByCategory(category) => self.list_by_category(category).await,
            CatalogQuery::ById(id) => Ok(self.get_by_id(id).await?.into_iter().collect()),
        }
    }
}

#[async_trait]
impl<T: CatalogReader + ?Sized> CatalogReader for Box<T> {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).list_all().await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        (**self).list_by_category(category).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).get_by_id(id).await
    }
}

#[async_trait]
impl<T: CatalogReader + ?Sized> CatalogReader for std::sync::Arc<T> {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).list_all().await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        (**self).list_by_category(category).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        (**self).get_by_id(id).await
    }
}
