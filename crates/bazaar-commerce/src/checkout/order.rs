//! Order types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::{CartState, CartSummary, LineItem};
use crate::checkout::{PaymentMethod, PaymentSummary, SavedAddress, Timeline};
use crate::error::CommerceError;
use crate::ids::{ArtisanId, CustomerId, OrderId, ProductId};
use crate::money::Money;

/// Order status, in fulfilment order. `Cancelled` can follow any
/// non-terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, payment not yet confirmed.
    #[default]
    Pending,
    /// Payment confirmed.
    Confirmed,
    /// The artisan is making the piece.
    Crafting,
    /// Handed to the courier.
    Shipped,
    /// With the local delivery agent.
    OutForDelivery,
    /// Delivered to the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Crafting,
        OrderStatus::Shipped,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Crafting => "crafting",
            OrderStatus::Shipped => "shipped",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Crafting => "Crafting",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parse the `as_str` form.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Still moving towards delivery.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Waiting on the artisan to start work.
    pub fn is_pending_fulfilment(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Index of the tracking milestone this status has reached.
    /// `None` for cancelled orders, whose progress comes from their
    /// recorded milestone times instead.
    pub fn milestone_index(&self) -> Option<usize> {
        match self {
            OrderStatus::Pending => Some(0),
            OrderStatus::Confirmed => Some(1),
            OrderStatus::Crafting => Some(2),
            OrderStatus::Shipped => Some(3),
            OrderStatus::OutForDelivery => Some(4),
            OrderStatus::Delivered => Some(5),
            OrderStatus::Cancelled => None,
        }
    }
}

/// A purchased line, frozen at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub artisan_id: ArtisanId,
    pub product_name: String,
    pub artisan_name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: Money,
    #[serde(default)]
    pub selected_options: BTreeMap<String, String>,
}

impl OrderItem {
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price.try_multiply(i64::from(self.quantity))
    }
}

impl From<&LineItem> for OrderItem {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            artisan_id: item.artisan_id.clone(),
            product_name: item.product_name.clone(),
            artisan_name: item.artisan_name.clone(),
            image: item.image.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            selected_options: item.selected_options.clone(),
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub shipping_address: SavedAddress,
    pub payment: PaymentSummary,
    /// Pricing as shown at checkout.
    pub summary: CartSummary,
    /// Delivery estimate text.
    pub estimated_delivery: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub courier: Option<String>,
    /// When each reached milestone happened, oldest first.
    #[serde(default)]
    pub milestone_times: Vec<DateTime<Utc>>,
}

impl Order {
    /// Freeze the cart into an order after checkout.
    ///
    /// Prepaid orders start `Confirmed`; cash on delivery starts `Pending`.
    pub fn from_checkout(
        id: OrderId,
        customer_id: CustomerId,
        customer_name: impl Into<String>,
        cart: &CartState,
        address: &SavedAddress,
        payment: &PaymentMethod,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::CheckoutIncomplete(
                "at least one item".to_string(),
            ));
        }
        let (status, milestone_times) = if payment.kind.is_prepaid() {
            (OrderStatus::Confirmed, vec![placed_at, placed_at])
        } else {
            (OrderStatus::Pending, vec![placed_at])
        };
        let estimated_delivery = cart
            .items()
            .first()
            .map(|i| i.estimated_delivery.clone())
            .unwrap_or_default();

        Ok(Self {
            id,
            customer_id,
            customer_name: customer_name.into(),
            placed_at,
            status,
            items: cart.items().iter().map(OrderItem::from).collect(),
            shipping_address: address.clone(),
            payment: PaymentSummary::from(payment),
            summary: cart.summary().clone(),
            estimated_delivery,
            tracking_number: None,
            courier: None,
            milestone_times,
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.summary.total
    }

    /// Whether any line was made by this artisan.
    pub fn involves_artisan(&self, artisan_id: &ArtisanId) -> bool {
        self.items.iter().any(|i| &i.artisan_id == artisan_id)
    }

    /// Sum of this artisan's lines.
    pub fn artisan_subtotal(&self, artisan_id: &ArtisanId) -> Result<Money, CommerceError> {
        let lines = self
            .items
            .iter()
            .filter(|i| &i.artisan_id == artisan_id)
            .map(OrderItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(lines.iter(), self.summary.total.currency)
    }

    /// Case-insensitive match on order id or customer name.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.id.as_str().to_lowercase().contains(&needle)
            || self.customer_name.to_lowercase().contains(&needle)
    }

    /// Milestone timeline for the tracking page.
    pub fn timeline(&self) -> Timeline {
        Timeline::for_order(self)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::product::tests::sample_product;
    use crate::checkout::address::tests::home;
    use crate::checkout::payment::tests::upi;
    use crate::checkout::PaymentKind;
    use crate::config::StoreConfig;
    use chrono::TimeZone;

    pub(crate) fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 10, 30, 0).unwrap()
    }

    pub(crate) fn cart() -> CartState {
        let product = sample_product();
        let item = LineItem::from_product(&product, "Meera Devi", 2, product.default_selection()).unwrap();
        CartState::with_items(&StoreConfig::default(), vec![item]).unwrap()
    }

    pub(crate) fn sample_order() -> Order {
        Order::from_checkout(
            OrderId::new("ORD-1001"),
            CustomerId::new("c-ananya"),
            "Ananya Iyer",
            &cart(),
            &home(),
            &upi(),
            placed_at(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_checkout_copies_cart() {
        let order = sample_order();
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.total(), Money::inr(5898));
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.milestone_times.len(), 2);
        assert_eq!(order.payment.kind, PaymentKind::Upi);
    }

    #[test]
    fn test_cash_on_delivery_starts_pending() {
        let mut cod = upi();
        cod.kind = PaymentKind::CashOnDelivery;
        let order = Order::from_checkout(
            OrderId::new("ORD-1002"),
            CustomerId::new("c-ananya"),
            "Ananya Iyer",
            &cart(),
            &home(),
            &cod,
            placed_at(),
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let empty = CartState::new(&StoreConfig::default());
        let result = Order::from_checkout(
            OrderId::new("ORD-1"),
            CustomerId::new("c"),
            "C",
            &empty,
            &home(),
            &upi(),
            placed_at(),
        );
        assert!(matches!(result, Err(CommerceError::CheckoutIncomplete(_))));
    }

    #[test]
    fn test_artisan_subtotal() {
        let order = sample_order();
        assert!(order.involves_artisan(&ArtisanId::new("a-meera")));
        assert_eq!(
            order.artisan_subtotal(&ArtisanId::new("a-meera")).unwrap(),
            Money::inr(4998)
        );
        assert_eq!(
            order.artisan_subtotal(&ArtisanId::new("a-other")).unwrap(),
            Money::inr(0)
        );
    }

    #[test]
    fn test_status_helpers() {
        assert!(OrderStatus::Crafting.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
        assert_eq!(OrderStatus::from_str_opt("out_for_delivery"), Some(OrderStatus::OutForDelivery));
        assert_eq!(OrderStatus::from_str_opt("lost"), None);
        let json = serde_json::to_string(&OrderStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"out_for_delivery\"");
    }

    #[test]
    fn test_matches_text() {
        let order = sample_order();
        assert!(order.matches_text("ord-10"));
        assert!(order.matches_text("ananya"));
        assert!(!order.matches_text("ravi"));
    }
}
