//! Catalog reader backed by the hosted content store.

use std::sync::Arc;

use async_trait::async_trait;
use store_commerce::catalog::{decode_products, CatalogQuery, CatalogReader, Product};
use store_commerce::{CatalogError, ProductId};

use crate::groq::{GroqQuery, QueryEnvelope};
use crate::{ContentStoreConfig, FetchClient, FetchError, Transport};

/// Reads products from the content store's query endpoint.
#[derive(Debug, Clone)]
pub struct ContentStoreCatalog {
    client: FetchClient,
    config: ContentStoreConfig,
}

impl ContentStoreCatalog {
    /// Connect over HTTP using `config`.
    pub fn connect(config: ContentStoreConfig) -> Result<Self, FetchError> {
        config.validate()?;
        let client = FetchClient::new()?;
        Ok(Self::build(client, config))
    }

    /// Use an explicit transport instead of HTTP.
    pub fn with_transport(
        config: ContentStoreConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, FetchError> {
        config.validate()?;
        Ok(Self::build(FetchClient::with_transport(transport), config))
    }

    fn build(client: FetchClient, config: ContentStoreConfig) -> Self {
        let client = client
            .with_base_url(config.base_url())
            .with_default_header("Accept", "application/json");
        Self { client, config }
    }

    /// The settings this catalog was built with.
    pub fn config(&self) -> &ContentStoreConfig {
        &self.config
    }

    async fn run(&self, query: &CatalogQuery) -> Result<Vec<Product>, CatalogError> {
        let operation = query.operation();
        let groq = GroqQuery::from_catalog(query, &self.config.document_type);

        let envelope = self
            .execute(&groq)
            .await
            .map_err(|e| CatalogError::unavailable(operation, e))?;

        tracing::debug!(
            operation,
            server_ms = envelope.ms.unwrap_or_default(),
            query = envelope.query.as_deref().unwrap_or(groq.text()),
            "content store query"
        );

        Ok(decode_products(envelope.into_documents()))
    }

    async fn execute(&self, groq: &GroqQuery) -> Result<QueryEnvelope, FetchError> {
        let mut request = self.client.get(self.config.query_path());
        for (key, value) in groq.to_query_pairs() {
            request = request.query(key, value);
        }
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        request.send().await?.error_for_status()?.json()
    }
}

#[async_trait]
impl CatalogReader for ContentStoreCatalog {
    async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.run(&CatalogQuery::All).await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        self.run(&CatalogQuery::category(category)).await
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.run(&CatalogQuery::ById(id.clone())).await?;
        Ok(products.into_iter().next())
    }
}
