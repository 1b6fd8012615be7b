//! Bundled mock data.

use serde::de::DeserializeOwned;

use crate::account::Account;
use crate::catalog::{Artisan, Category, Product};
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::repository::{AccountRepository, CatalogRepository, OrderRepository};

const CATEGORIES: &str = include_str!("../../fixtures/categories.json");
const ARTISANS: &str = include_str!("../../fixtures/artisans.json");
const PRODUCTS: &str = include_str!("../../fixtures/products.json");
const ORDERS: &str = include_str!("../../fixtures/orders.json");
const ACCOUNT: &str = include_str!("../../fixtures/account.json");

/// In-memory store serving every repository trait.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureStore {
    categories: Vec<Category>,
    artisans: Vec<Artisan>,
    products: Vec<Product>,
    orders: Vec<Order>,
    account: Account,
}

impl FixtureStore {
    /// Load the fixtures compiled into the crate.
    pub fn bundled() -> Result<Self, CommerceError> {
        Self::from_json(CATEGORIES, ARTISANS, PRODUCTS, ORDERS, ACCOUNT)
    }

    /// Parse fixture documents and check their cross references.
    pub fn from_json(
        categories: &str,
        artisans: &str,
        products: &str,
        orders: &str,
        account: &str,
    ) -> Result<Self, CommerceError> {
        let store = Self::new(
            parse("categories", categories)?,
            parse("artisans", artisans)?,
            parse("products", products)?,
            parse("orders", orders)?,
            parse("account", account)?,
        )?;
        tracing::debug!(
            artisans = store.artisans.len(),
            products = store.products.len(),
            orders = store.orders.len(),
            "fixtures loaded"
        );
        Ok(store)
    }

    pub fn new(
        categories: Vec<Category>,
        artisans: Vec<Artisan>,
        products: Vec<Product>,
        orders: Vec<Order>,
        account: Account,
    ) -> Result<Self, CommerceError> {
        let store = Self {
            categories,
            artisans,
            products,
            orders,
            account,
        };
        store.check_references()?;
        Ok(store)
    }

    fn check_references(&self) -> Result<(), CommerceError> {
        for product in &self.products {
            self.artisan(&product.artisan_id)?;
        }
        for order in &self.orders {
            for item in &order.items {
                self.product(&item.product_id)?;
            }
        }
        for product_id in &self.account.customer.wishlist {
            self.product(product_id)?;
        }
        self.artisan(&self.account.artisan_id)?;
        Ok(())
    }
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> Result<T, CommerceError> {
    serde_json::from_str(json)
        .map_err(|e| CommerceError::SerializationError(format!("{} fixture: {}", name, e)))
}

impl CatalogRepository for FixtureStore {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn artisans(&self) -> &[Artisan] {
        &self.artisans
    }

    fn products(&self) -> &[Product] {
        &self.products
    }
}

impl OrderRepository for FixtureStore {
    fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl AccountRepository for FixtureStore {
    fn account(&self) -> &Account {
        &self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::OrderStatus;
    use crate::ids::{AddressId, ArtisanId, CustomerId, OrderId, PaymentMethodId, ProductId};
    use crate::money::Money;

    fn store() -> FixtureStore {
        FixtureStore::bundled().unwrap()
    }

    #[test]
    fn test_bundled_fixtures_load() {
        let store = store();
        assert_eq!(store.categories().len(), 6);
        assert_eq!(store.artisans().len(), 6);
        assert_eq!(store.products().len(), 13);
        assert_eq!(store.orders().len(), 6);
    }

    #[test]
    fn test_catalog_lookups() {
        let store = store();
        let saree = store.product(&ProductId::new("p-ikat-saree")).unwrap();
        assert_eq!(saree.price, Money::inr(2499));
        assert_eq!(store.products_by_artisan(&ArtisanId::new("a-meera")).len(), 3);
        assert!(matches!(
            store.product(&ProductId::new("p-nope")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(store
            .related_products(saree, 10)
            .iter()
            .all(|p| p.category == "textiles" && p.id != saree.id));
        assert_eq!(store.regions()[0], "Odisha");
        assert!(store.featured_products(3).iter().all(|p| p.featured));
    }

    #[test]
    fn test_order_lookups() {
        let store = store();
        let order = store.order(&OrderId::new("ORD-1002")).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.total(), Money::inr(3767));
        assert!(order.timeline().validate().is_ok());

        let mine = store.orders_for_customer(&CustomerId::new("c-ananya"));
        assert_eq!(mine.len(), 3);
        assert_eq!(mine[0].id.as_str(), "ORD-1003");

        let meera = store.orders_for_artisan(&ArtisanId::new("a-meera"));
        assert_eq!(meera.len(), 5);
    }

    #[test]
    fn test_every_fixture_order_is_consistent() {
        for order in store().orders() {
            let s = &order.summary;
            assert_eq!(
                s.total.amount,
                s.subtotal.amount + s.shipping.amount + s.taxes.amount - s.discount.amount,
                "{}",
                order.id
            );
            assert!(order.timeline().validate().is_ok(), "{}", order.id);
        }
    }

    #[test]
    fn test_account_lookups() {
        let store = store();
        assert_eq!(store.customer().name, "Ananya Iyer");
        assert!(store.address(&AddressId::new("addr-home")).unwrap().is_default);
        assert!(store.payment_method(&PaymentMethodId::new("pm-upi")).is_ok());
        assert!(matches!(
            store.address(&AddressId::new("addr-x")),
            Err(CommerceError::AddressNotFound(_))
        ));
        assert_eq!(store.current_artisan_id().as_str(), "a-meera");
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let result = FixtureStore::from_json(CATEGORIES, "[]", PRODUCTS, ORDERS, ACCOUNT);
        assert!(matches!(result, Err(CommerceError::ArtisanNotFound(_))));
    }
}
