//! Catalog, cart and view-model types for the storefront.
//!
//! - **Catalog**: product records, typed queries, the reader seam
//! - **Cart**: the session cart state machine and its shared store handle
//! - **Search**: case-insensitive substring search
//! - **Views**: listing, category, product detail and checkout view models
//!
//! # Example
//!
//! ```rust
//! use store_commerce::prelude::*;
//!
//! let store = CartStore::new();
//! let hat = Product::new("hat-1", "Red Hat", Money::new(1999, Currency::USD));
//!
//! store.add_to_cart(&hat);
//! store.add_to_cart(&hat);
//! store.update_quantity(&hat.id, -5);
//!
//! assert_eq!(store.cart().quantity_of(&hat.id), 1);
//! store.remove_from_cart(&hat.id);
//! assert!(store.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;
pub mod views;

pub use error::CatalogError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        load_listing, load_product, CatalogListing, CatalogQuery, CatalogReader,
        InMemoryCatalog, Product, ProductLookup,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartStore, CartSummary};

    // Search
    pub use crate::search::{filter_products, SearchFilter};

    // Views
    pub use crate::views::{CategoryView, CheckoutView, ListingView, ProductDetailView};
}
