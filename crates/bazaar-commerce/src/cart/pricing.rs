//! Cart summary calculation.

use crate::cart::{LineItem, PromoRule};
use crate::config::PricingConfig;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Derived money totals for the current cart contents.
///
/// Always produced by [`CartSummary::calculate`] from the full item list;
/// never patched field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Flat fee, or zero when every item ships free.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub taxes: Money,
    /// Promo discount.
    pub discount: Money,
    /// subtotal + shipping + taxes - discount.
    pub total: Money,
    /// Sum of quantities.
    pub item_count: i64,
    /// Code of the active promo.
    pub applied_promo: Option<String>,
}

impl CartSummary {
    /// All-zero summary.
    pub fn empty(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            shipping: Money::zero(currency),
            taxes: Money::zero(currency),
            discount: Money::zero(currency),
            total: Money::zero(currency),
            item_count: 0,
            applied_promo: None,
        }
    }

    /// Recompute the summary for a list of items.
    ///
    /// Shipping is one flat fee for the whole order as soon as any item
    /// lacks free shipping; it is not charged per item.
    pub fn calculate(
        items: &[LineItem],
        promo: Option<&PromoRule>,
        pricing: &PricingConfig,
    ) -> Result<Self, CommerceError> {
        let currency = pricing.currency;
        if items.is_empty() {
            return Ok(Self::empty(currency));
        }

        let line_totals = items
            .iter()
            .map(LineItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        let subtotal = Money::try_sum(line_totals.iter(), currency)?;

        let shipping = if items.iter().all(|i| i.free_shipping) {
            Money::zero(currency)
        } else {
            pricing.shipping_fee()
        };

        let taxes = subtotal.basis_points(pricing.tax_rate_bps)?;

        let discount = match promo {
            Some(rule) => rule.discount_for(&subtotal)?,
            None => Money::zero(currency),
        };

        let total = subtotal
            .try_add(&shipping)?
            .try_add(&taxes)?
            .try_subtract(&discount)?;

        let item_count = items.iter().map(|i| i64::from(i.quantity)).sum();

        Ok(Self {
            subtotal,
            shipping,
            taxes,
            discount,
            total,
            item_count,
            applied_promo: promo.map(|p| p.code.clone()),
        })
    }

    /// Check if a promo discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }

    /// Check if shipping is free.
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
