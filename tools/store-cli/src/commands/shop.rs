//! Interactive shopping session.
//!
//! One cart store lives for the whole session and is handed to every view,
//! so products added from the listing, a category page or a detail page all
//! land in the same cart that checkout edits.

use anyhow::{bail, Result};
use console::Term;
use dialoguer::{Confirm, Input, Select};
use store_commerce::cart::CartStore;
use store_commerce::catalog::{CatalogReader, Product, ProductLookup};
use store_commerce::views::{
    CategoryState, CategoryView, CheckoutView, ListingStatus, ListingView, ProductDetailView,
    CART_EMPTY, CATEGORY_EMPTY, FETCH_FAILED, NO_SEARCH_RESULTS, PRODUCT_NOT_FOUND,
};
use store_commerce::ProductId;

use super::browse::print_product;
use crate::context::Context;
use crate::output::{money_label, price_label};

const MAIN_MENU: [&str; 5] = [
    "Browse all products",
    "Browse a category",
    "Search",
    "Cart & checkout",
    "Quit",
];

/// Run the interactive session.
pub async fn run(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() || !Term::stdout().is_term() {
        bail!("The shop command needs an interactive terminal");
    }

    let catalog = ctx.open_catalog()?;
    let cart = CartStore::new();
    tracing::info!(session_id = %cart.session_id(), "shopping session started");

    let mut listing = ListingView::new(cart.clone());
    let spinner = ctx.output.spinner("Loading products");
    listing.refresh(catalog.as_ref()).await;
    spinner.finish_and_clear();

    if listing.status() == ListingStatus::Failed {
        ctx.output.warn(FETCH_FAILED);
    }

    loop {
        let prompt = format!(
            "Storefront ({} in cart, {})",
            cart.total_quantity(),
            cart.summary().discounted_total.display()
        );
        let choice = Select::new()
            .with_prompt(prompt)
            .items(&MAIN_MENU)
            .default(0)
            .interact_opt()?;

        match choice {
            Some(0) => {
                retry_listing(&mut listing, catalog.as_ref(), ctx).await;
                listing.set_search("");
                browse_listing(&listing, catalog.as_ref(), ctx).await?;
            }
            Some(1) => {
                retry_listing(&mut listing, catalog.as_ref(), ctx).await;
                browse_category(&listing, catalog.as_ref(), &cart, ctx).await?;
            }
            Some(2) => {
                retry_listing(&mut listing, catalog.as_ref(), ctx).await;
                let text: String = Input::new()
                    .with_prompt("Search")
                    .allow_empty(true)
                    .interact_text()?;
                listing.set_search(text);
                browse_listing(&listing, catalog.as_ref(), ctx).await?;
            }
            Some(3) => checkout(&CheckoutView::new(cart.clone()), ctx)?,
            _ => break,
        }
    }

    listing.teardown();
    let summary = cart.summary();
    if summary.line_count > 0 {
        ctx.output.info(&format!(
            "Leaving with {} item(s) worth {}",
            summary.total_quantity,
            money_label(&summary.discounted_total)
        ));
    }
    Ok(())
}

/// Read the catalog again when the last listing read failed.
async fn retry_listing(listing: &mut ListingView, catalog: &dyn CatalogReader, ctx: &Context) {
    if listing.status() != ListingStatus::Failed {
        return;
    }
    let spinner = ctx.output.spinner("Loading products");
    listing.reload_if_failed(catalog).await;
    spinner.finish_and_clear();
}

/// Pick from the listing's visible products.
async fn browse_listing(
    listing: &ListingView,
    catalog: &dyn CatalogReader,
    ctx: &Context,
) -> Result<()> {
    match listing.status() {
        ListingStatus::Failed | ListingStatus::Loading => {
            ctx.output.warn(FETCH_FAILED);
            return Ok(());
        }
        ListingStatus::NoMatches => {
            ctx.output.info(NO_SEARCH_RESULTS);
            return Ok(());
        }
        ListingStatus::Ready => {}
    }

    let products = listing.visible_products();
    if let Some(id) = pick_product(&products, "Choose a product")? {
        show_product(id, catalog, listing.cart(), ctx).await?;
    }
    Ok(())
}

/// Pick a category, then a product inside it.
async fn browse_category(
    listing: &ListingView,
    catalog: &dyn CatalogReader,
    cart: &CartStore,
    ctx: &Context,
) -> Result<()> {
    let categories = listing.categories();
    if categories.is_empty() {
        ctx.output.info(CATEGORY_EMPTY);
        return Ok(());
    }

    let Some(index) = Select::new()
        .with_prompt("Choose a category")
        .items(&categories)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    let mut view = CategoryView::new(categories[index].clone());
    let spinner = ctx.output.spinner(&format!("Loading {}", view.title()));
    view.refresh(catalog).await;
    spinner.finish_and_clear();

    let picked = match view.state() {
        CategoryState::Loaded(products) => {
            let rows: Vec<&Product> = products.iter().collect();
            pick_product(&rows, &view.title())?
        }
        CategoryState::Empty => {
            ctx.output.info(CATEGORY_EMPTY);
            None
        }
        CategoryState::Failed(_) | CategoryState::Loading => {
            ctx.output.warn(FETCH_FAILED);
            None
        }
    };
    view.teardown_handle().teardown();

    if let Some(id) = picked {
        show_product(id, catalog, cart, ctx).await?;
    }
    Ok(())
}

/// Open a product's detail page and offer to add it to the cart.
async fn show_product(
    id: ProductId,
    catalog: &dyn CatalogReader,
    cart: &CartStore,
    ctx: &Context,
) -> Result<()> {
    let mut view = ProductDetailView::new(id, cart.clone());
    let spinner = ctx.output.spinner("Loading product");
    view.refresh(catalog).await;
    spinner.finish_and_clear();

    match view.lookup() {
        Some(ProductLookup::Found(product)) => {
            print_product(product, ctx);
            let add = Confirm::new()
                .with_prompt("Add to cart?")
                .default(true)
                .interact()?;
            if add && view.add_to_cart() {
                ctx.output.success(&format!(
                    "Added {} ({} in cart)",
                    product.name,
                    cart.cart().quantity_of(&product.id)
                ));
            }
        }
        Some(ProductLookup::NotFound) => ctx.output.warn(PRODUCT_NOT_FOUND),
        Some(ProductLookup::Unavailable(_)) | None => ctx.output.warn(FETCH_FAILED),
    }
    view.teardown_handle().teardown();
    Ok(())
}

/// Show the cart and edit quantities until the user backs out.
fn checkout(view: &CheckoutView, ctx: &Context) -> Result<()> {
    loop {
        if view.is_empty() {
            ctx.output.info(CART_EMPTY);
            return Ok(());
        }

        let summary = view.summary();
        ctx.output.header("Your cart");
        for line in &summary.lines {
            ctx.output.kv(
                &line.name,
                &format!(
                    "{} x {} = {}",
                    line.quantity,
                    line.unit_price.display(),
                    line.discounted_subtotal.display()
                ),
            );
        }
        ctx.output.kv("Subtotal", &summary.subtotal.display());
        if summary.has_discounts() {
            ctx.output.kv("Savings", &summary.savings().display());
        }
        ctx.output.kv("Total", &money_label(&summary.discounted_total));

        let lines = view.lines();
        let mut items: Vec<String> = lines
            .iter()
            .map(|line| format!("{} (x{})", line.product.name, line.quantity))
            .collect();
        items.push("Back".to_string());

        let Some(index) = Select::new()
            .with_prompt("Edit a line")
            .items(&items)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };
        let Some(line) = lines.get(index) else {
            return Ok(());
        };

        let action = Select::new()
            .with_prompt(line.product.name.as_str())
            .items(&["Increase", "Decrease", "Remove", "Back"])
            .default(0)
            .interact_opt()?;

        match action {
            Some(0) => view.increment(line.product_id()),
            Some(1) => view.decrement(line.product_id()),
            Some(2) => view.remove(line.product_id()),
            _ => {}
        }
    }
}

/// Select a product from `products`; `None` when the user backs out.
fn pick_product(products: &[&Product], prompt: &str) -> Result<Option<ProductId>> {
    let items: Vec<String> = products
        .iter()
        .map(|p| format!("{}  {}", p.name, price_label(p)))
        .collect();

    let choice = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.and_then(|i| products.get(i)).map(|p| p.id.clone()))
}
