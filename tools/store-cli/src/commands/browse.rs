//! Read-only catalog commands.

use anyhow::{bail, Result};
use store_commerce::cart::CartStore;
use store_commerce::catalog::{CatalogReader, Product, ProductLookup};
use store_commerce::views::{
    CategoryState, CategoryView, ListingStatus, ListingView, ProductDetailView, CATEGORY_EMPTY,
    FETCH_FAILED, NO_SEARCH_RESULTS, PRODUCT_NOT_FOUND,
};

use super::{CategoryArgs, ProductArgs, ProductsArgs, SearchArgs};
use crate::context::Context;
use crate::output::{price_label, stock_label};

/// List every product.
pub async fn products(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let view = load_listing(catalog.as_ref(), ctx).await?;

    let products: Vec<&Product> = view
        .products()
        .iter()
        .filter(|p| !args.featured || p.is_featured_product)
        .filter(|p| !args.in_stock || p.is_in_stock())
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    ctx.output.product_table(&products);
    Ok(())
}

/// List the distinct categories present in the catalog.
pub async fn categories(ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let view = load_listing(catalog.as_ref(), ctx).await?;
    let categories = view.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(category);
    }
    Ok(())
}

/// List the products in one category.
pub async fn category(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut view = CategoryView::new(args.name);

    let spinner = ctx.output.spinner(&format!("Loading {}", view.title()));
    view.refresh(catalog.as_ref()).await;
    spinner.finish_and_clear();

    match view.state() {
        CategoryState::Loaded(products) => {
            if ctx.output.is_json() {
                ctx.output.json(products);
                return Ok(());
            }
            ctx.output.header(&view.title());
            let rows: Vec<&Product> = products.iter().collect();
            ctx.output.product_table(&rows);
            Ok(())
        }
        CategoryState::Empty => {
            if ctx.output.is_json() {
                ctx.output.json(&Vec::<Product>::new());
            } else {
                ctx.output.header(&view.title());
                ctx.output.info(CATEGORY_EMPTY);
            }
            Ok(())
        }
        CategoryState::Failed(e) => {
            ctx.output.debug(&e.to_string());
            bail!(FETCH_FAILED)
        }
        CategoryState::Loading => bail!(FETCH_FAILED),
    }
}

/// Show one product.
pub async fn product(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut view = ProductDetailView::new(args.id, CartStore::new());

    let spinner = ctx.output.spinner("Loading product");
    view.refresh(catalog.as_ref()).await;
    spinner.finish_and_clear();

    match view.lookup() {
        Some(ProductLookup::Found(product)) => {
            if ctx.output.is_json() {
                ctx.output.json(product);
            } else {
                print_product(product, ctx);
            }
            Ok(())
        }
        Some(ProductLookup::NotFound) => bail!(PRODUCT_NOT_FOUND),
        Some(ProductLookup::Unavailable(e)) => {
            ctx.output.debug(&e.to_string());
            bail!(FETCH_FAILED)
        }
        None => bail!(FETCH_FAILED),
    }
}

/// Search product names and descriptions.
pub async fn search(args: SearchArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut view = load_listing(catalog.as_ref(), ctx).await?;
    view.set_search(args.text);

    let matches = view.visible_products();
    if ctx.output.is_json() {
        ctx.output.json(&matches);
        return Ok(());
    }

    ctx.output
        .header(&format!("Results for \"{}\"", view.search_text()));
    if view.status() == ListingStatus::NoMatches {
        ctx.output.info(NO_SEARCH_RESULTS);
    } else {
        ctx.output.product_table(&matches);
    }
    Ok(())
}

/// Fetch the full listing behind a spinner. A failed read is an error here.
async fn load_listing(catalog: &dyn CatalogReader, ctx: &Context) -> Result<ListingView> {
    let mut view = ListingView::new(CartStore::new());

    let spinner = ctx.output.spinner("Loading products");
    view.refresh(catalog).await;
    spinner.finish_and_clear();

    if let Some(e) = view.error() {
        ctx.output.debug(&e.to_string());
        bail!(FETCH_FAILED);
    }
    Ok(view)
}

/// Print a product's detail page.
pub fn print_product(product: &Product, ctx: &Context) {
    ctx.output.header(&product.name);
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &price_label(product));
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Stock", &stock_label(product.stock_level));
    ctx.output.kv("Status", product.featured_label());
    if !product.image_path.is_empty() {
        ctx.output.kv("Image", &product.image_path);
    }
}
