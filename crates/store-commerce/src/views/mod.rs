//! Framework-free view models for the storefront pages.
//!
//! Views read the catalog through a [`CatalogReader`](crate::catalog::CatalogReader)
//! and mutate the session cart through an injected
//! [`CartStore`](crate::cart::CartStore). Rendering is left to the caller.

mod category;
mod checkout;
mod detail;
mod lifecycle;
mod listing;

pub use category::{CategoryState, CategoryView};
pub use checkout::CheckoutView;
pub use detail::ProductDetailView;
pub use lifecycle::{FetchTicket, TeardownHandle, ViewLifecycle};
pub use listing::{ListingStatus, ListingView};

/// Shown when the search leaves nothing to display.
pub const NO_SEARCH_RESULTS: &str = "No products found matching your search.";
/// Shown when the catalog could not be read.
pub const FETCH_FAILED: &str = "Error fetching products. Please try again later.";
/// Shown for a category without products.
pub const CATEGORY_EMPTY: &str = "No products found in this category.";
/// Shown for an unknown product id.
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";
/// Shown for an empty cart.
pub const CART_EMPTY: &str = "Your cart is empty.";
