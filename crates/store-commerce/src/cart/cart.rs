//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one line per product id, in the order products were first
/// added. Every operation is total: unknown ids are ignored and quantities
/// never drop below one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Bumps the existing line for the product or appends a new line with
    /// quantity 1. Stock levels are not checked.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(&product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine::new(product.clone()));
    }

    /// Change the quantity of a line by `delta`, flooring at 1.
    ///
    /// Does nothing when the product is not in the cart. A large negative
    /// delta leaves the line at quantity 1; removal only happens through
    /// [`Cart::remove_from_cart`].
    pub fn update_quantity(&mut self, product_id: &ProductId, delta: i64) {
        if let Some(line) = self.line_mut(product_id) {
            let target = i64::from(line.quantity).saturating_add(delta);
            line.quantity = target.clamp(1, i64::from(u32::MAX)) as u32;
        }
    }

    /// Drop the line for `product_id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.id == product_id)
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.line(product_id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price x quantity` over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, line| {
                acc.saturating_add(&line.subtotal())
            })
    }

    /// Currency the cart totals are expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product.id == product_id)
    }
}

/// One product and how many units of it the shopper wants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product, as it was when first added.
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Product id of this line.
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.product.price.saturating_mul(self.quantity)
    }
}
