//! Shopping cart module.
//!
//! Contains the cart state machine, its session-wide store handle and the
//! pricing summary.

mod cart;
mod store;
mod summary;

pub use cart::{Cart, CartLine};
pub use store::CartStore;
pub use summary::{CartSummary, LinePricing};
