//! Search module.

mod filter;

pub use filter::{filter_products, SearchFilter};
