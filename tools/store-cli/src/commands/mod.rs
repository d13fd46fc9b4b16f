//! CLI command implementations.

pub mod browse;
pub mod shop;

use clap::Args;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show featured products.
    #[arg(long)]
    pub featured: bool,

    /// Only show products in stock.
    #[arg(long)]
    pub in_stock: bool,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category name, matched exactly.
    pub name: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product identifier.
    pub id: String,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in product names and descriptions.
    pub text: String,
}
