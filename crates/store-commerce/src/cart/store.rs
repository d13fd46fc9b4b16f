//! Session cart handle shared between views.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::cart::{Cart, CartSummary};
use crate::catalog::Product;
use crate::ids::{ProductId, SessionId};

/// Owner of one session's cart.
///
/// Views receive a clone of the store when they are built; every clone
/// points at the same cart. The handle is deliberately `!Send`: the cart
/// belongs to a single event loop and mutations run one at a time, in the
/// order they are dispatched.
#[derive(Debug, Clone)]
pub struct CartStore {
    session_id: SessionId,
    cart: Rc<RefCell<Cart>>,
}

impl CartStore {
    /// Start a session with an empty cart.
    pub fn new() -> Self {
        Self::for_session(SessionId::generate())
    }

    /// Start a named session with an empty cart.
    pub fn for_session(session_id: SessionId) -> Self {
        tracing::debug!(session_id = %session_id, "cart session started");
        Self {
            session_id,
            cart: Rc::new(RefCell::new(Cart::new())),
        }
    }

    /// Session this store belongs to.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Add one unit of a product.
    pub fn add_to_cart(&self, product: &Product) {
        let quantity = {
            let mut cart = self.cart.borrow_mut();
            cart.add_to_cart(product);
            cart.quantity_of(&product.id)
        };
        tracing::debug!(
            session_id = %self.session_id,
            product_id = %product.id,
            quantity,
            "added to cart"
        );
    }

    /// Change a line's quantity by `delta`, flooring at 1.
    pub fn update_quantity(&self, product_id: &ProductId, delta: i64) {
        let quantity = {
            let mut cart = self.cart.borrow_mut();
            cart.update_quantity(product_id, delta);
            cart.quantity_of(product_id)
        };
        tracing::debug!(
            session_id = %self.session_id,
            product_id = %product_id,
            delta,
            quantity,
            "cart quantity updated"
        );
    }

    /// Remove a product's line.
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        self.cart.borrow_mut().remove_from_cart(product_id);
        tracing::debug!(session_id = %self.session_id, product_id = %product_id, "removed from cart");
    }

    /// Borrow the current cart.
    ///
    /// Drop the guard before calling a mutator.
    pub fn cart(&self) -> Ref<'_, Cart> {
        self.cart.borrow()
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.borrow().clone()
    }

    /// Pricing breakdown of the current cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.cart.borrow())
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.cart.borrow().line_count()
    }

    /// Sum of quantities in the cart.
    pub fn total_quantity(&self) -> u64 {
        self.cart.borrow().total_quantity()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    #[test]
    fn test_clones_share_one_cart() {
        let store = CartStore::new();
        let listing_handle = store.clone();
        let checkout_handle = store.clone();
        let shirt = Product::new("s", "Shirt", Money::new(1500, Currency::USD));

        listing_handle.add_to_cart(&shirt);
        checkout_handle.update_quantity(&shirt.id, 2);

        assert_eq!(store.total_quantity(), 3);
        assert_eq!(store.session_id(), checkout_handle.session_id());

        checkout_handle.remove_from_cart(&shirt.id);
        assert!(listing_handle.cart().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = CartStore::for_session(SessionId::new("s-1"));
        let hat = Product::new("h", "Hat", Money::new(900, Currency::USD));
        store.add_to_cart(&hat);

        let before = store.snapshot();
        store.add_to_cart(&hat);

        assert_eq!(before.quantity_of(&hat.id), 1);
        assert_eq!(store.cart().quantity_of(&hat.id), 2);
        assert_eq!(store.summary().subtotal.amount_cents, 1800);
    }
}
