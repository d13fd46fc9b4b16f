//! The product listing: search box, category list and add-to-cart.

use crate::cart::CartStore;
use crate::catalog::{
    distinct_categories, load_listing, CatalogListing, CatalogQuery, CatalogReader, Product,
};
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::search::SearchFilter;
use crate::views::{FetchTicket, TeardownHandle, ViewLifecycle};

/// What the listing should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// The first read has not completed.
    Loading,
    /// The catalog read failed.
    Failed,
    /// Nothing matches the current search.
    NoMatches,
    /// At least one product to show.
    Ready,
}

/// View model for the all-products page.
#[derive(Debug)]
pub struct ListingView {
    cart: CartStore,
    lifecycle: ViewLifecycle,
    products: Vec<Product>,
    error: Option<CatalogError>,
    loaded: bool,
    search: SearchFilter,
}

impl ListingView {
    /// Create the view, wired to the session's cart.
    pub fn new(cart: CartStore) -> Self {
        Self {
            cart,
            lifecycle: ViewLifecycle::new("listing"),
            products: Vec::new(),
            error: None,
            loaded: false,
            search: SearchFilter::default(),
        }
    }

    /// Start a catalog read.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.lifecycle.begin_fetch()
    }

    /// Store a finished read. Returns false when the result was stale.
    pub fn apply(&mut self, ticket: FetchTicket, listing: CatalogListing) -> bool {
        if !self.lifecycle.accepts(ticket) {
            return false;
        }
        self.products = listing.products;
        self.error = listing.error;
        self.loaded = true;
        true
    }

    /// Read all products and store them if the view is still current.
    pub async fn refresh<R>(&mut self, reader: &R) -> bool
    where
        R: CatalogReader + ?Sized,
    {
        let ticket = self.begin_fetch();
        let listing = load_listing(reader, &CatalogQuery::All).await;
        self.apply(ticket, listing)
    }

    /// Read again if the last read failed. Returns true when a new result
    /// was stored; a ready listing is left alone.
    pub async fn reload_if_failed<R>(&mut self, reader: &R) -> bool
    where
        R: CatalogReader + ?Sized,
    {
        if self.status() != ListingStatus::Failed {
            return false;
        }
        self.refresh(reader).await
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = SearchFilter::new(text);
    }

    /// Current search text.
    pub fn search_text(&self) -> &str {
        self.search.query()
    }

    /// All loaded products, unfiltered.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the current search.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.search.apply(&self.products)
    }

    /// Categories present in the loaded products.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.products)
    }

    /// The last read error, if the last read failed.
    pub fn error(&self) -> Option<&CatalogError> {
        self.error.as_ref()
    }

    /// What to render right now.
    pub fn status(&self) -> ListingStatus {
        if !self.loaded {
            ListingStatus::Loading
        } else if self.error.is_some() {
            ListingStatus::Failed
        } else if self.visible_products().is_empty() {
            ListingStatus::NoMatches
        } else {
            ListingStatus::Ready
        }
    }

    /// Add a listed product to the cart. Returns false for unknown ids.
    pub fn add_to_cart(&self, product_id: &ProductId) -> bool {
        match self.products.iter().find(|p| &p.id == product_id) {
            Some(product) => {
                self.cart.add_to_cart(product);
                true
            }
            None => false,
        }
    }

    /// The cart this view writes to.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Handle for unmounting the view from navigation code.
    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.teardown_handle()
    }

    /// Unmount the view; later results are discarded.
    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::money::{Currency, Money};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Product::new("1", "Red Hat", Money::new(1500, Currency::USD)).with_category("hats"),
            Product::new("2", "Blue Hat", Money::new(1500, Currency::USD))
                .with_category("hats")
                .with_description("warm jacket"),
            Product::new("3", "Boot", Money::new(9000, Currency::USD)).with_category("shoes"),
        ])
    }

    #[tokio::test]
    async fn test_refresh_and_search() {
        let mut view = ListingView::new(CartStore::new());
        assert_eq!(view.status(), ListingStatus::Loading);

        assert!(view.refresh(&catalog()).await);
        assert_eq!(view.status(), ListingStatus::Ready);
        assert_eq!(view.categories(), vec!["hats", "shoes"]);

        view.set_search("red");
        assert_eq!(view.visible_products().len(), 1);

        view.set_search("sandal");
        assert_eq!(view.status(), ListingStatus::NoMatches);
    }

    struct Down;

    #[async_trait::async_trait]
    impl CatalogReader for Down {
        async fn list_all(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::unavailable("list_all", "connection refused"))
        }

        async fn list_by_category(&self, _: &str) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::unavailable("list_by_category", "connection refused"))
        }

        async fn get_by_id(&self, _: &ProductId) -> Result<Option<Product>, CatalogError> {
            Err(CatalogError::unavailable("get_by_id", "connection refused"))
        }
    }

    #[tokio::test]
    async fn test_failed_listing_recovers_on_reload() {
        let mut view = ListingView::new(CartStore::new());
        assert!(!view.reload_if_failed(&catalog()).await);
        assert_eq!(view.status(), ListingStatus::Loading);

        view.refresh(&Down).await;
        assert_eq!(view.status(), ListingStatus::Failed);
        assert!(view.products().is_empty());

        assert!(view.reload_if_failed(&catalog()).await);
        assert_eq!(view.status(), ListingStatus::Ready);
        assert_eq!(view.products().len(), 3);
        assert!(view.error().is_none());

        assert!(!view.reload_if_failed(&Down).await);
        assert_eq!(view.status(), ListingStatus::Ready);
    }

    #[tokio::test]
    async fn test_add_to_cart_writes_shared_store() {
        let cart = CartStore::new();
        let mut view = ListingView::new(cart.clone());
        view.refresh(&catalog()).await;

        assert!(view.add_to_cart(&ProductId::new("3")));
        assert!(view.add_to_cart(&ProductId::new("3")));
        assert!(!view.add_to_cart(&ProductId::new("missing")));

        assert_eq!(cart.cart().quantity_of(&ProductId::new("3")), 2);
    }

    #[tokio::test]
    async fn test_result_after_teardown_is_discarded() {
        let mut view = ListingView::new(CartStore::new());
        let ticket = view.begin_fetch();
        let listing = load_listing(&catalog(), &CatalogQuery::All).await;

        view.teardown_handle().teardown();

        assert!(!view.apply(ticket, listing));
        assert!(view.products().is_empty());
        assert_eq!(view.status(), ListingStatus::Loading);
    }

    #[test]
    fn test_superseded_fetch_is_discarded() {
        let mut view = ListingView::new(CartStore::new());
        let old = view.begin_fetch();
        let new = view.begin_fetch();

        let fresh = CatalogListing::loaded(vec![Product::new(
            "9",
            "Fresh",
            Money::new(1, Currency::USD),
        )]);
        assert!(view.apply(new, fresh));
        assert!(!view.apply(old, CatalogListing::default()));
        assert_eq!(view.products().len(), 1);
    }
}
