//! Products of one category.

use crate::catalog::{load_listing, CatalogListing, CatalogQuery, CatalogReader, Product};
use crate::error::CatalogError;
use crate::views::{FetchTicket, TeardownHandle, ViewLifecycle};

/// Render state of a category page.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryState {
    /// Read in flight.
    Loading,
    /// Products to list.
    Loaded(Vec<Product>),
    /// The category has no products.
    Empty,
    /// The catalog could not be read.
    Failed(CatalogError),
}

/// View model for `/category/{name}`.
#[derive(Debug)]
pub struct CategoryView {
    category: String,
    lifecycle: ViewLifecycle,
    state: CategoryState,
}

impl CategoryView {
    /// Create the view for a category name, matched exactly.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            lifecycle: ViewLifecycle::new("category"),
            state: CategoryState::Loading,
        }
    }

    /// The category being shown.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Page heading, e.g. "shoes Products".
    pub fn title(&self) -> String {
        format!("{} Products", self.category)
    }

    /// Query this view issues.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery::category(self.category.clone())
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
        self.state = match listing.error {
            Some(e) => CategoryState::Failed(e),
            None if listing.products.is_empty() => CategoryState::Empty,
            None => CategoryState::Loaded(listing.products),
        };
        true
    }

    /// Read the category and store it if the view is still current.
    pub async fn refresh<R>(&mut self, reader: &R) -> bool
    where
        R: CatalogReader + ?Sized,
    {
        let ticket = self.begin_fetch();
        let listing = load_listing(reader, &self.query()).await;
        self.apply(ticket, listing)
    }

    /// Current render state.
    pub fn state(&self) -> &CategoryState {
        &self.state
    }

    /// Handle for unmounting the view from navigation code.
    pub fn teardown_handle(&self) -> TeardownHandle {
        self.lifecycle.teardown_handle()
    }
}
