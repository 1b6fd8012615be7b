//! Dashboard aggregates for customers and artisans.

use serde::{Deserialize, Serialize};

use crate::catalog::{InventoryBoard, InventoryRow, Product};
use crate::checkout::{Order, OrderStatus};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Stat cards and recent orders on the customer dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerDashboard {
    pub total_orders: usize,
    /// Orders not yet delivered or cancelled.
    pub active_orders: usize,
    /// Sum of non-cancelled order totals.
    pub total_spent: Money,
    pub wishlist_count: usize,
    /// Newest first.
    pub recent_orders: Vec<Order>,
}

impl CustomerDashboard {
    pub fn build<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
        wishlist_count: usize,
        recent_limit: usize,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let mut orders: Vec<&Order> = orders.into_iter().collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at));

        let total_spent = Money::try_sum(
            orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(|o| &o.summary.total),
            currency,
        )?;

        Ok(Self {
            total_orders: orders.len(),
            active_orders: orders.iter().filter(|o| o.status.is_active()).count(),
            total_spent,
            wishlist_count,
            recent_orders: orders.into_iter().take(recent_limit).cloned().collect(),
        })
    }
}

/// A best seller row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopProduct {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub sold: u64,
    /// Price times units sold.
    pub revenue: Money,
}

/// Stat cards and tables on the artisan dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtisanDashboard {
    /// Sum of non-cancelled order totals.
    pub revenue: Money,
    pub total_orders: usize,
    /// Orders awaiting the artisan (pending or confirmed).
    pub pending_orders: usize,
    /// Count per status, in status order, zero counts included.
    pub orders_by_status: Vec<(OrderStatus, usize)>,
    /// Products at or below their low-stock threshold.
    pub low_stock: Vec<InventoryRow>,
    /// Best sellers, most units first.
    pub top_products: Vec<TopProduct>,
    /// Newest first.
    pub recent_orders: Vec<Order>,
}

impl ArtisanDashboard {
    /// `orders` should already be limited to orders involving the artisan.
    pub fn build<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
        products: impl IntoIterator<Item = &'a Product>,
        inventory: &InventoryBoard,
        limit: usize,
        currency: Currency,
    ) -> Result<Self, CommerceError> {
        let mut orders: Vec<&Order> = orders.into_iter().collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at));

        let revenue = Money::try_sum(
            orders
                .iter()
                .filter(|o| o.status != OrderStatus::Cancelled)
                .map(|o| &o.summary.total),
            currency,
        )?;

        let orders_by_status = OrderStatus::ALL
            .into_iter()
            .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
            .collect();

        let mut best: Vec<&Product> = products.into_iter().collect();
        best.sort_by_key(|p| std::cmp::Reverse(p.sales_count));
        let top_products = best
            .into_iter()
            .take(limit)
            .map(|p| {
                let sold = i64::try_from(p.sales_count).map_err(|_| CommerceError::Overflow)?;
                Ok(TopProduct {
                    product_id: p.id.clone(),
                    name: p.name.clone(),
                    image: p.primary_image().unwrap_or_default().to_string(),
                    sold: p.sales_count,
                    revenue: p.price.try_multiply(sold)?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(Self {
            revenue,
            total_orders: orders.len(),
            pending_orders: orders
                .iter()
                .filter(|o| o.status.is_pending_fulfilment())
                .count(),
            orders_by_status,
            low_stock: inventory.low_stock().into_iter().cloned().collect(),
            top_products,
            recent_orders: orders.into_iter().take(limit).cloned().collect(),
        })
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        self.orders_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{ArtisanId, CustomerId};
    use crate::repository::{AccountRepository, CatalogRepository, FixtureStore, OrderRepository};

    #[test]
    fn test_customer_dashboard() {
        let store = FixtureStore::bundled().unwrap();
        let orders = store.orders_for_customer(&CustomerId::new("c-ananya"));
        let dash = CustomerDashboard::build(
            orders,
            store.customer().wishlist.len(),
            2,
            Currency::INR,
        )
        .unwrap();
        assert_eq!(dash.total_orders, 3);
        assert_eq!(dash.active_orders, 2);
        assert_eq!(dash.total_spent, Money::inr(2949 + 3767 + 3893));
        assert_eq!(dash.wishlist_count, 3);
        assert_eq!(dash.recent_orders.len(), 2);
        assert_eq!(dash.recent_orders[0].id.as_str(), "ORD-1003");
    }

    #[test]
    fn test_artisan_dashboard() {
        let store = FixtureStore::bundled().unwrap();
        let artisan = ArtisanId::new("a-meera");
        let products = store.products_by_artisan(&artisan);
        let board = InventoryBoard::from_products(products.iter().copied(), 5);
        let dash = ArtisanDashboard::build(
            store.orders_for_artisan(&artisan),
            products,
            &board,
            3,
            Currency::INR,
        )
        .unwrap();

        assert_eq!(dash.total_orders, 5);
        assert_eq!(dash.revenue, Money::inr(2949 + 3767 + 3165 + 5308));
        assert_eq!(dash.pending_orders, 2);
        assert_eq!(dash.count(OrderStatus::Cancelled), 1);
        assert_eq!(dash.count(OrderStatus::OutForDelivery), 0);
        assert_eq!(dash.orders_by_status.len(), 7);
        assert_eq!(dash.low_stock.len(), 1);
        assert_eq!(dash.low_stock[0].product_id.as_str(), "p-ikat-cushion");
        assert_eq!(dash.top_products[0].product_id.as_str(), "p-ikat-saree");
        assert_eq!(dash.top_products[0].revenue, Money::inr(2499 * 310));
    }

    #[test]
    fn test_empty_dashboards() {
        let dash = CustomerDashboard::build(Vec::new(), 0, 5, Currency::INR).unwrap();
        assert_eq!(dash.total_spent, Money::zero(Currency::INR));
        assert!(dash.recent_orders.is_empty());
    }
}
