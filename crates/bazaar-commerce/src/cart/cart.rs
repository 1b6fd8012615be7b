//! Cart state, line items and the cart reducer.

use std::collections::BTreeMap;

use crate::cart::{CartSummary, PromoRule};
use crate::catalog::Product;
use crate::config::{PricingConfig, StoreConfig};
use crate::error::CommerceError;
use crate::ids::{ArtisanId, LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 99;

/// Message shown when a promo code is not recognised.
pub const INVALID_PROMO_MESSAGE: &str = "Invalid promo code";

/// One product, quantity and option selection in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Line identifier, derived from product and options.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Maker of the product.
    pub artisan_id: ArtisanId,
    /// Maker name (denormalized for display).
    pub artisan_name: String,
    /// Image path.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Price charged per unit.
    pub unit_price: Money,
    /// Price before markdown, shown struck through.
    pub original_unit_price: Option<Money>,
    /// Chosen options, e.g. `Size -> Large`.
    pub selected_options: BTreeMap<String, String>,
    /// Ships without the flat fee.
    pub free_shipping: bool,
    /// Delivery estimate text.
    pub estimated_delivery: String,
}

impl LineItem {
    /// Build a line item for a catalog product.
    pub fn from_product(
        product: &Product,
        artisan_name: impl Into<String>,
        quantity: u32,
        selected_options: BTreeMap<String, String>,
    ) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        Ok(Self {
            id: LineItemId::for_selection(&product.id, &selected_options),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            artisan_id: product.artisan_id.clone(),
            artisan_name: artisan_name.into(),
            image: product.images.first().cloned().unwrap_or_default(),
            quantity: quantity.min(MAX_QUANTITY_PER_ITEM),
            unit_price: product.price,
            original_unit_price: product.original_price,
            selected_options,
            free_shipping: product.free_shipping,
            estimated_delivery: product.estimated_delivery.clone(),
        })
    }

    /// unit_price * quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_multiply(i64::from(self.quantity))
    }

    /// Amount saved against the original price, if marked down.
    pub fn savings(&self) -> Option<Money> {
        let original = self.original_unit_price?;
        if original.currency != self.unit_price.currency || original.amount <= self.unit_price.amount {
            return None;
        }
        let per_unit = original.amount - self.unit_price.amount;
        per_unit
            .checked_mul(i64::from(self.quantity))
            .map(|amount| Money::new(amount, original.currency))
    }

    /// Options formatted for display ("Color: Indigo, Size: Large").
    pub fn options_label(&self) -> String {
        self.selected_options
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// User actions on the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add an item, merging with an identical selection.
    Add(LineItem),
    /// Raise quantity by one.
    Increment(LineItemId),
    /// Lower quantity by one, never below 1.
    Decrement(LineItemId),
    /// Set an explicit quantity (clamped).
    SetQuantity(LineItemId, i64),
    /// Drop the line.
    Remove(LineItemId),
    /// Move the line to the saved list.
    SaveForLater(LineItemId),
    /// Move a saved line back into the cart.
    MoveToCart(LineItemId),
    /// Apply a promo code, replacing any active one.
    ApplyPromo(String),
    /// Remove the active promo.
    RemovePromo,
    /// Empty the cart.
    Clear,
}

/// The cart held by the cart view.
///
/// All mutations go through methods that recompute [`CartSummary`] from the
/// full item list, and leave the state untouched when they fail.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    items: Vec<LineItem>,
    saved_for_later: Vec<LineItem>,
    promo: Option<PromoRule>,
    promo_error: Option<String>,
    summary: CartSummary,
    pricing: PricingConfig,
    promos: Vec<PromoRule>,
}

impl CartState {
    /// Create an empty cart using the store's pricing rules and promo table.
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            saved_for_later: Vec::new(),
            promo: None,
            promo_error: None,
            summary: CartSummary::empty(config.pricing.currency),
            pricing: config.pricing.clone(),
            promos: config.promos.clone(),
        }
    }

    /// Create a cart pre-filled with items.
    pub fn with_items(config: &StoreConfig, items: Vec<LineItem>) -> Result<Self, CommerceError> {
        let mut cart = Self::new(config);
        for item in items {
            cart.add_item(item)?;
        }
        Ok(cart)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn saved_for_later(&self) -> &[LineItem] {
        &self.saved_for_later
    }

    pub fn summary(&self) -> &CartSummary {
        &self.summary
    }

    /// The active promo rule.
    pub fn promo(&self) -> Option<&PromoRule> {
        self.promo.as_ref()
    }

    /// Error from the last rejected promo code.
    pub fn promo_error(&self) -> Option<&str> {
        self.promo_error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.summary.item_count
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Add an item; an identical product/option selection increases quantity.
    pub fn add_item(&mut self, item: LineItem) -> Result<LineItemId, CommerceError> {
        if item.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        let id = item.id.clone();
        self.update(|items, _| {
            if let Some(existing) = items.iter_mut().find(|i| i.id == item.id) {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            } else {
                let mut item = item;
                item.quantity = item.quantity.min(MAX_QUANTITY_PER_ITEM);
                items.push(item);
            }
            Ok(())
        })?;
        debug!(line = %id, "added to cart");
        Ok(id)
    }

    /// Raise quantity by one (capped at [`MAX_QUANTITY_PER_ITEM`]).
    pub fn increment(&mut self, id: &LineItemId) -> Result<u32, CommerceError> {
        self.change_quantity(id, |q| i64::from(q) + 1)
    }

    /// Lower quantity by one. Clamped at 1: the line is never removed this way.
    pub fn decrement(&mut self, id: &LineItemId) -> Result<u32, CommerceError> {
        self.change_quantity(id, |q| i64::from(q) - 1)
    }

    /// Set quantity, clamped into `1..=MAX_QUANTITY_PER_ITEM`.
    pub fn set_quantity(&mut self, id: &LineItemId, quantity: i64) -> Result<u32, CommerceError> {
        self.change_quantity(id, |_| quantity)
    }

    /// Remove an item from the cart.
    pub fn remove_item(&mut self, id: &LineItemId) -> Result<LineItem, CommerceError> {
        let mut removed = None;
        self.update(|items, _| {
            let pos = items
                .iter()
                .position(|i| &i.id == id)
                .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
            removed = Some(items.remove(pos));
            Ok(())
        })?;
        debug!(line = %id, "removed from cart");
        removed.ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))
    }

    /// Take a line out of the priced cart and keep it on the saved list.
    /// A line that is already saved merges quantities, as in [`add_item`].
    ///
    /// [`add_item`]: CartState::add_item
    pub fn save_for_later(&mut self, id: &LineItemId) -> Result<(), CommerceError> {
        let item = self.remove_item(id)?;
        match self.saved_for_later.iter_mut().find(|i| i.id == item.id) {
            Some(saved) => {
                saved.quantity = saved
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            }
            None => self.saved_for_later.push(item),
        }
        debug!(line = %id, "saved for later");
        Ok(())
    }

    /// Move a saved line back into the cart.
    pub fn move_to_cart(&mut self, id: &LineItemId) -> Result<(), CommerceError> {
        let pos = self
            .saved_for_later
            .iter()
            .position(|i| &i.id == id)
            .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
        let item = self.saved_for_later[pos].clone();
        self.add_item(item)?;
        self.saved_for_later.remove(pos);
        Ok(())
    }

    /// Apply a promo code. A valid code replaces any active promo; an
    /// invalid one leaves the summary unchanged and records an error.
    pub fn apply_promo(&mut self, code: &str) -> Result<Money, CommerceError> {
        let code = code.trim();
        let rule = self
            .promos
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .cloned();

        let Some(rule) = rule else {
            warn!(code, "rejected promo code");
            self.promo_error = Some(INVALID_PROMO_MESSAGE.to_string());
            return Err(CommerceError::InvalidPromoCode(code.to_string()));
        };
        if self.items.is_empty() {
            self.promo_error = Some("Add items before applying a promo code".to_string());
            return Err(CommerceError::InvalidPromoCode(code.to_string()));
        }

        let summary = CartSummary::calculate(&self.items, Some(&rule), &self.pricing)?;
        info!(code = %rule.code, discount = summary.discount.amount, "applied promo code");
        self.promo = Some(rule);
        self.promo_error = None;
        self.summary = summary;
        Ok(self.summary.discount)
    }

    /// Remove the active promo.
    pub fn remove_promo(&mut self) -> Result<(), CommerceError> {
        self.promo_error = None;
        self.update(|_, promo| {
            *promo = None;
            Ok(())
        })
    }

    /// Clear all items and the active promo.
    pub fn clear(&mut self) {
        self.items.clear();
        self.promo = None;
        self.promo_error = None;
        self.summary = CartSummary::empty(self.pricing.currency);
    }

    /// Pure reducer: the state after `action`. Failed actions return the
    /// state unchanged except for a promo error message.
    pub fn reduce(&self, action: CartAction) -> CartState {
        let mut next = self.clone();
        let result = match action {
            CartAction::Add(item) => next.add_item(item).map(|_| ()),
            CartAction::Increment(id) => next.increment(&id).map(|_| ()),
            CartAction::Decrement(id) => next.decrement(&id).map(|_| ()),
            CartAction::SetQuantity(id, q) => next.set_quantity(&id, q).map(|_| ()),
            CartAction::Remove(id) => next.remove_item(&id).map(|_| ()),
            CartAction::SaveForLater(id) => next.save_for_later(&id),
            CartAction::MoveToCart(id) => next.move_to_cart(&id),
            CartAction::ApplyPromo(code) => next.apply_promo(&code).map(|_| ()),
            CartAction::RemovePromo => next.remove_promo(),
            CartAction::Clear => {
                next.clear();
                Ok(())
            }
        };
        if let Err(e) = result {
            debug!(error = %e, "cart action rejected");
        }
        next
    }

    fn change_quantity(
        &mut self,
        id: &LineItemId,
        f: impl FnOnce(u32) -> i64,
    ) -> Result<u32, CommerceError> {
        let mut new_quantity = 0;
        self.update(|items, _| {
            let item = items
                .iter_mut()
                .find(|i| &i.id == id)
                .ok_or_else(|| CommerceError::ItemNotInCart(id.to_string()))?;
            let clamped = f(item.quantity).clamp(1, i64::from(MAX_QUANTITY_PER_ITEM));
            item.quantity = clamped as u32;
            new_quantity = item.quantity;
            Ok(())
        })?;
        debug!(line = %id, quantity = new_quantity, "cart quantity updated");
        Ok(new_quantity)
    }

    /// Apply a mutation to copies of the items and promo, recompute the
    /// summary, and commit only if both succeed.
    fn update(
        &mut self,
        f: impl FnOnce(&mut Vec<LineItem>, &mut Option<PromoRule>) -> Result<(), CommerceError>,
    ) -> Result<(), CommerceError> {
        let mut items = self.items.clone();
        let mut promo = self.promo.clone();
        f(&mut items, &mut promo)?;
        if items.is_empty() {
            promo = None;
        }
        let summary = CartSummary::calculate(&items, promo.as_ref(), &self.pricing)?;
        self.items = items;
        self.promo = promo;
        self.summary = summary;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn line(id: &str, price: i64, qty: u32, free_shipping: bool) -> LineItem {
        LineItem {
            id: LineItemId::new(id),
            product_id: ProductId::new(id),
            product_name: format!("Product {}", id),
            artisan_id: ArtisanId::new("a-meera"),
            artisan_name: "Meera".to_string(),
            image: "/images/products/x.jpg".to_string(),
            quantity: qty,
            unit_price: Money::inr(price),
            original_unit_price: None,
            selected_options: BTreeMap::new(),
            free_shipping,
            estimated_delivery: "5-7 business days".to_string(),
        }
    }

    fn cart() -> CartState {
        CartState::new(&StoreConfig::default())
    }

    #[test]
    fn test_cart_creation() {
        let cart = cart();
        assert!(cart.is_empty());
        assert_eq!(cart.summary(), &CartSummary::empty(Currency::INR));
    }

    #[test]
    fn test_add_item_recomputes_summary() {
        let mut cart = cart();
        cart.add_item(line("a", 2499, 2, true)).unwrap();
        assert_eq!(cart.summary().subtotal, Money::inr(4998));
        assert_eq!(cart.summary().total, Money::inr(5898));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = cart();
        cart.add_item(line("a", 100, 1, true)).unwrap();
        cart.add_item(line("a", 100, 2, true)).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = cart();
        let err = cart.add_item(line("a", 100, 0, true)).unwrap_err();
        assert_eq!(err, CommerceError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_clamps_at_one() {
        let mut cart = cart();
        let id = cart.add_item(line("a", 100, 2, true)).unwrap();
        assert_eq!(cart.decrement(&id).unwrap(), 1);
        assert_eq!(cart.decrement(&id).unwrap(), 1);
        assert_eq!(cart.decrement(&id).unwrap(), 1);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.summary().subtotal, Money::inr(100));
    }

    #[test]
    fn test_quantity_upper_bound() {
        let mut cart = cart();
        let id = cart.add_item(line("a", 100, 98, true)).unwrap();
        assert_eq!(cart.increment(&id).unwrap(), 99);
        assert_eq!(cart.increment(&id).unwrap(), 99);
        assert_eq!(cart.set_quantity(&id, 5000).unwrap(), 99);
        assert_eq!(cart.set_quantity(&id, -3).unwrap(), 1);
    }

    #[test]
    fn test_unknown_line_is_an_error() {
        let mut cart = cart();
        let missing = LineItemId::new("nope");
        assert!(matches!(
            cart.increment(&missing),
            Err(CommerceError::ItemNotInCart(_))
        ));
    }

    #[test]
    fn test_removing_last_item_resets_summary() {
        let mut cart = cart();
        let id = cart.add_item(line("a", 2499, 2, false)).unwrap();
        cart.apply_promo("SAVE10").unwrap();
        cart.remove_item(&id).unwrap();

        assert_eq!(cart.summary(), &CartSummary::empty(Currency::INR));
        assert!(cart.promo().is_none());
    }

    #[test]
    fn test_apply_promo() {
        let mut cart = cart();
        cart.add_item(line("a", 2499, 2, true)).unwrap();
        let discount = cart.apply_promo("save10").unwrap();
        assert_eq!(discount, Money::inr(500));
        assert_eq!(cart.summary().total, Money::inr(5398));

        // Reapplying with the same subtotal is idempotent.
        let before = cart.summary().clone();
        cart.apply_promo("SAVE10").unwrap();
        assert_eq!(cart.summary(), &before);
    }

    #[test]
    fn test_invalid_promo_leaves_summary() {
        let mut cart = cart();
        cart.add_item(line("a", 1000, 1, true)).unwrap();
        cart.apply_promo("SAVE10").unwrap();
        let before = cart.summary().clone();

        let err = cart.apply_promo("BOGUS").unwrap_err();
        assert_eq!(err, CommerceError::InvalidPromoCode("BOGUS".to_string()));
        assert_eq!(cart.summary(), &before);
        assert_eq!(cart.promo_error(), Some(INVALID_PROMO_MESSAGE));
        assert_eq!(cart.promo().map(|p| p.code.as_str()), Some("SAVE10"));
    }

    #[test]
    fn test_second_promo_replaces_first() {
        let mut config = StoreConfig::default();
        config.promos.push(PromoRule::fixed("FLAT200", "200 off", 200));
        let mut cart = CartState::new(&config);
        cart.add_item(line("a", 4000, 1, true)).unwrap();

        cart.apply_promo("SAVE10").unwrap();
        assert_eq!(cart.summary().discount, Money::inr(400));
        cart.apply_promo("FLAT200").unwrap();
        assert_eq!(cart.summary().discount, Money::inr(200));
        assert_eq!(cart.summary().applied_promo.as_deref(), Some("FLAT200"));
    }

    #[test]
    fn test_discount_follows_subtotal() {
        let mut cart = cart();
        let id = cart.add_item(line("a", 1000, 1, true)).unwrap();
        cart.apply_promo("SAVE10").unwrap();
        cart.set_quantity(&id, 3).unwrap();
        assert_eq!(cart.summary().discount, Money::inr(300));
    }

    #[test]
    fn test_save_for_later_and_back() {
        let mut cart = cart();
        let a = cart.add_item(line("a", 100, 1, true)).unwrap();
        cart.add_item(line("b", 200, 1, true)).unwrap();

        cart.save_for_later(&a).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.saved_for_later().len(), 1);
        assert_eq!(cart.summary().subtotal, Money::inr(200));

        cart.move_to_cart(&a).unwrap();
        assert!(cart.saved_for_later().is_empty());
        assert_eq!(cart.summary().subtotal, Money::inr(300));
    }

    #[test]
    fn test_saving_a_line_twice_merges_quantities() {
        let mut cart = cart();
        let a = cart.add_item(line("a", 100, 3, true)).unwrap();
        cart.save_for_later(&a).unwrap();
        cart.add_item(line("a", 100, 1, true)).unwrap();
        cart.save_for_later(&a).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.saved_for_later().len(), 1);
        assert_eq!(cart.saved_for_later()[0].quantity, 4);

        cart.add_item(line("a", 100, MAX_QUANTITY_PER_ITEM, true)).unwrap();
        cart.save_for_later(&a).unwrap();
        assert_eq!(cart.saved_for_later()[0].quantity, MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_oversized_percentage_promo_is_rejected() {
        let mut config = StoreConfig::default();
        config.promos.push(PromoRule::percentage("HUGE", "", i64::MAX / 10));
        let start = CartState::new(&config).reduce(CartAction::Add(line("a", 1000, 1, true)));

        let next = start.reduce(CartAction::ApplyPromo("HUGE".to_string()));
        assert!(next.promo().is_none());
        assert_eq!(next.summary(), start.summary());
    }

    #[test]
    fn test_reducer_is_pure() {
        let start = cart().reduce(CartAction::Add(line("a", 500, 1, false)));
        let next = start.reduce(CartAction::Increment(LineItemId::new("a")));

        assert_eq!(start.item_count(), 1);
        assert_eq!(next.item_count(), 2);
        assert_eq!(next.summary().shipping, Money::inr(99));
    }

    #[test]
    fn test_reducer_records_promo_error() {
        let state = cart()
            .reduce(CartAction::Add(line("a", 500, 1, true)))
            .reduce(CartAction::ApplyPromo("NOPE".to_string()));
        assert_eq!(state.promo_error(), Some(INVALID_PROMO_MESSAGE));
        assert_eq!(state.summary().discount, Money::inr(0));
    }

    #[test]
    fn test_remove_all_via_reducer() {
        let state = cart()
            .reduce(CartAction::Add(line("a", 500, 2, false)))
            .reduce(CartAction::Add(line("b", 700, 1, true)))
            .reduce(CartAction::ApplyPromo("SAVE10".to_string()))
            .reduce(CartAction::Remove(LineItemId::new("a")))
            .reduce(CartAction::Remove(LineItemId::new("b")));
        assert_eq!(state.summary(), &CartSummary::empty(Currency::INR));
    }

    #[test]
    fn test_line_savings() {
        let mut item = line("a", 800, 2, true);
        assert_eq!(item.savings(), None);
        item.original_unit_price = Some(Money::inr(1000));
        assert_eq!(item.savings(), Some(Money::inr(400)));
    }
}
