//! Content-store access for the storefront.
//!
//! A small HTTP client with a pluggable [`Transport`], plus
//! [`ContentStoreCatalog`], which implements the storefront's
//! [`CatalogReader`](store_commerce::catalog::CatalogReader) over the hosted
//! content store's query endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use store_commerce::catalog::CatalogReader;
//! use store_data::{ContentStoreCatalog, ContentStoreConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ContentStoreConfig::new("abc123", "production");
//! config.apply_env();
//!
//! let catalog = ContentStoreCatalog::connect(config)?;
//! let chairs = catalog.list_by_category("Chair").await?;
//! println!("{} chairs", chairs.len());
//! # Ok(())
//! # }
//! ```

mod catalog;
mod client;
mod config;
mod error;
pub mod groq;
mod request;
mod response;
mod transport;

pub use catalog::ContentStoreCatalog;
pub use client::{ClientRequestBuilder, FetchClient};
pub use config::{ContentStoreConfig, DEFAULT_API_VERSION, DEFAULT_DOCUMENT_TYPE, DEFAULT_TOKEN_ENV};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ContentStoreCatalog, ContentStoreConfig, FetchClient, FetchError, Method, Response,
        Transport,
    };
}
