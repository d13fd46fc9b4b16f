//! Browsing the bundled fixture catalog end to end.

use std::path::PathBuf;

use store_commerce::prelude::*;
use store_commerce::views::{CategoryState, ListingStatus};

fn fixture() -> InMemoryCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/products.json");
    InMemoryCatalog::load(path).unwrap()
}

#[tokio::test]
async fn listing_categories_and_search() {
    let catalog = fixture();
    assert_eq!(catalog.len(), 6);

    let mut listing = ListingView::new(CartStore::new());
    assert!(listing.refresh(&catalog).await);
    assert_eq!(listing.status(), ListingStatus::Ready);
    assert_eq!(listing.categories(), vec!["Sofa", "Table", "Console", "Chair"]);

    listing.set_search("RED");
    let ids: Vec<&str> = listing
        .visible_products()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ids, vec!["3", "5"]);

    listing.set_search("zzz");
    assert_eq!(listing.status(), ListingStatus::NoMatches);
}

#[tokio::test]
async fn category_and_detail_share_the_cart() {
    let catalog = fixture();
    let cart = CartStore::new();

    let mut tables = CategoryView::new("Table");
    tables.refresh(&catalog).await;
    match tables.state() {
        CategoryState::Loaded(products) => assert_eq!(products.len(), 2),
        other => panic!("unexpected state {:?}", other),
    }

    let mut lower = CategoryView::new("table");
    lower.refresh(&catalog).await;
    assert_eq!(lower.state(), &CategoryState::Empty);

    let mut detail = ProductDetailView::new("2", cart.clone());
    detail.refresh(&catalog).await;
    assert!(detail.add_to_cart());
    assert!(detail.add_to_cart());

    let checkout = CheckoutView::new(cart.clone());
    let summary = checkout.summary();
    assert_eq!(summary.total_quantity, 2);
    assert_eq!(summary.subtotal.amount_cents, 240_100);
}
