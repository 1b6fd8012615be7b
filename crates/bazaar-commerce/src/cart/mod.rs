//! Shopping cart module.
//!
//! Contains the cart state and reducer, line items, summary calculation and
//! promo codes.

mod cart;
mod pricing;
mod promo;

pub use cart::{CartAction, CartState, LineItem, INVALID_PROMO_MESSAGE, MAX_QUANTITY_PER_ITEM};
pub use pricing::CartSummary;
pub use promo::{PromoKind, PromoRule};
