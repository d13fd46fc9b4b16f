//! Checkout page: the cart with +, - and remove controls.

use crate::cart::{CartLine, CartStore, CartSummary};
use crate::ids::ProductId;

/// View model for `/checkout`.
///
/// Holds no state of its own; everything is read from the shared cart.
#[derive(Debug, Clone)]
pub struct CheckoutView {
    cart: CartStore,
}

impl CheckoutView {
    /// Create the view over the session's cart.
    pub fn new(cart: CartStore) -> Self {
        Self { cart }
    }

    /// The "+" button.
    pub fn increment(&self, product_id: &ProductId) {
        self.cart.update_quantity(product_id, 1);
    }

    /// The "-" button. Stops at 1; use [`CheckoutView::remove`] to drop a line.
    pub fn decrement(&self, product_id: &ProductId) {
        self.cart.update_quantity(product_id, -1);
    }

    /// The "Remove" button.
    pub fn remove(&self, product_id: &ProductId) {
        self.cart.remove_from_cart(product_id);
    }

    /// Lines to render, in cart order.
    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.cart().lines().to_vec()
    }

    /// Totals for the footer.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Whether to show the empty-cart message.
    pub fn is_empty(&self) -> bool {
        self.cart.cart().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    #[test]
    fn test_buttons_follow_cart_rules() {
        let cart = CartStore::new();
        let mug = Product::new("m", "Mug", Money::new(800, Currency::USD));
        cart.add_to_cart(&mug);
        let view = CheckoutView::new(cart.clone());

        view.increment(&mug.id);
        view.increment(&mug.id);
        assert_eq!(view.lines()[0].quantity, 3);

        for _ in 0..5 {
            view.decrement(&mug.id);
        }
        assert_eq!(view.lines()[0].quantity, 1);
        assert!(!view.is_empty());

        view.remove(&mug.id);
        assert!(view.is_empty());
        assert!(view.summary().subtotal.is_zero());
    }
}
