//! Single product page.

use crate::cart::CartStore;
use crate::catalog::{load_product, CatalogReader, Product, ProductLookup};
use crate::ids::ProductId;
use crate::views::{FetchTicket, TeardownHandle, ViewLifecycle};

/// View model for `/product/{id}`.
#[derive(Debug)]
pub struct ProductDetailView {
    product_id: ProductId,
    cart: CartStore,
    lifecycle: ViewLifecycle,
    lookup: Option<ProductLookup>,
}

impl ProductDetailView {
    /// Create the view for one product id.
    pub fn new(product_id: impl Into<ProductId>, cart: CartStore) -> Self {
        Self {
            product_id: product_id.into(),
            cart,
            lifecycle: ViewLifecycle::new("product_detail"),
            lookup: None,
        }
    }

    /// Id being shown.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Start a catalog read.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.lifecycle.begin_fetch()
    }

    /// Store a finished lookup. Returns false when the result was stale.
    pub fn apply(&mut self, ticket: FetchTicket, lookup: ProductLookup) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        self.lookup = Some(lookup);
        true
    }

    /// Look the product up and store it if the view is still current.
    pub async fn refresh<R>(&mut self, reader: &R) -> bool
    where
        R: CatalogReader + ?Sized,
    {
        let ticket = self.begin_fetch();
        let lookup = load_product(reader, &self.product_id).await;
        self.apply(ticket, lookup)
    }

    /// Lookup result; None while loading.
    pub fn lookup(&self) -> Option<&ProductLookup> {
        self.lookup.as_ref()
    }

    /// The product, once found.
    pub fn product(&self) -> Option<&Product> {
        self.lookup.as_ref().and_then(ProductLookup::product)
    }

    /// Add the shown product to the cart. Returns false if nothing is shown.
    pub fn add_to_cart(&self) -> bool {
        match self.product() {
            Some(product) => {
                self.cart.add_to_cart(product);
                true
            }
            None => false,
        }
    }

    /// Handle for unmounting the view from navigation code.
    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.teardown_handle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::money::{Currency, Money};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![Product::new(
            "7",
            "Lamp",
            Money::new(4200, Currency::USD),
        )
        .with_discount(10.0)])
    }

    #[tokio::test]
    async fn test_found_product_can_be_added() {
        let cart = CartStore::new();
        let mut view = ProductDetailView::new("7", cart.clone());
        assert!(view.lookup().is_none());

        view.refresh(&catalog()).await;
        assert_eq!(view.product().map(|p| p.discounted_price().amount_cents), Some(3780));
        assert!(view.add_to_cart());
        assert_eq!(cart.total_quantity(), 1);
    }

    #[tokio::test]
    async fn test_missing_product() {
        let cart = CartStore::new();
        let mut view = ProductDetailView::new("8", cart.clone());
        view.refresh(&catalog()).await;

        assert_eq!(view.lookup(), Some(&ProductLookup::NotFound));
        assert!(!view.add_to_cart());
        assert!(cart.cart().is_empty());
    }
}
