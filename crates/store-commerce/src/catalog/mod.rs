//! Product catalog module.
//!
//! Contains the product record, typed queries, the reader seam and the
//! failure-tolerant loading helpers used by views.

mod decode;
mod loading;
mod memory;
mod product;
mod query;
mod reader;

pub use decode::decode_products;
pub use loading::{distinct_categories, load_listing, load_product, CatalogListing, ProductLookup};
pub use memory::InMemoryCatalog;
pub use product::Product;
pub use query::CatalogQuery;
pub use reader::CatalogReader;
