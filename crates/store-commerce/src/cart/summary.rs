//! Cart totals as shown on the checkout view.

use crate::cart::Cart;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart.
///
/// A snapshot: built from the cart on demand and never stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Number of distinct products.
    pub line_count: usize,
    /// Sum of quantities.
    pub total_quantity: u64,
    /// Sum of line subtotals at list price.
    pub subtotal: Money,
    /// Sum of line subtotals after each product's advertised discount.
    pub discounted_total: Money,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
}

impl CartSummary {
    /// Build the summary for `cart`.
    pub fn of(cart: &Cart) -> Self {
        let lines: Vec<LinePricing> = cart
            .lines()
            .iter()
            .map(|line| LinePricing {
                product_id: line.product.id.clone(),
                name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
                subtotal: line.subtotal(),
                discounted_subtotal: line.product.discounted_price().saturating_mul(line.quantity),
            })
            .collect();

        let zero = Money::zero(cart.currency());
        let discounted_total = lines
            .iter()
            .fold(zero, |acc, l| acc.saturating_add(&l.discounted_subtotal));

        Self {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            discounted_total,
            lines,
        }
    }

    /// Amount saved through product discounts.
    pub fn savings(&self) -> Money {
        Money::new(
            self.subtotal
                .amount_cents
                .saturating_sub(self.discounted_total.amount_cents),
            self.subtotal.currency,
        )
    }

    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        self.savings().amount_cents > 0
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit list price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
    /// Subtotal after the product discount.
    pub discounted_subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Currency;

    #[test]
    fn test_summary_matches_cart_projections() {
        let mut cart = Cart::new();
        let a = Product::new("a", "A", Money::new(1000, Currency::USD)).with_discount(10.0);
        let b = Product::new("b", "B", Money::new(2000, Currency::USD));
        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);

        let summary = CartSummary::of(&cart);
        assert_eq!(summary.line_count, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.subtotal.amount_cents, 4000);
        assert_eq!(summary.discounted_total.amount_cents, 3800);
        assert_eq!(summary.savings().amount_cents, 200);
        assert!(summary.has_discounts());
        assert_eq!(summary.lines[0].subtotal.amount_cents, 2000);
        assert_eq!(summary.lines[1].product_id.as_str(), "b");
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::of(&Cart::new());
        assert_eq!(summary.line_count, 0);
        assert!(summary.subtotal.is_zero());
        assert!(!summary.has_discounts());
        assert!(summary.lines.is_empty());
    }
}
