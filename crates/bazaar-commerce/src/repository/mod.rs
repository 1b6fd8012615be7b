//! Read access to the marketplace data.
//!
//! Views depend on these traits rather than on where the data lives. The
//! only implementation is [`FixtureStore`], which serves the bundled mock
//! data.

mod fixtures;

pub use fixtures::FixtureStore;

use crate::account::{Account, CustomerProfile};
use crate::catalog::{Artisan, Category, Product};
use crate::checkout::{Order, PaymentMethod, SavedAddress};
use crate::error::CommerceError;
use crate::ids::{AddressId, ArtisanId, CustomerId, OrderId, PaymentMethodId, ProductId};

/// Artisans, products and categories.
pub trait CatalogRepository {
    fn categories(&self) -> &[Category];

    fn artisans(&self) -> &[Artisan];

    fn products(&self) -> &[Product];

    fn artisan(&self, id: &ArtisanId) -> Result<&Artisan, CommerceError> {
        self.artisans()
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| CommerceError::ArtisanNotFound(id.to_string()))
    }

    fn product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products()
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// An artisan's products, in catalog order.
    fn products_by_artisan(&self, id: &ArtisanId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| &p.artisan_id == id)
            .collect()
    }

    fn featured_products(&self, limit: usize) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.featured)
            .take(limit)
            .collect()
    }

    /// Same-category products other than `product`.
    fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Distinct artisan regions, in first-seen order.
    fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for artisan in self.artisans() {
            if !regions.contains(&artisan.region.as_str()) {
                regions.push(&artisan.region);
            }
        }
        regions
    }
}

/// Placed orders.
pub trait OrderRepository {
    fn orders(&self) -> &[Order];

    fn order(&self, id: &OrderId) -> Result<&Order, CommerceError> {
        self.orders()
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))
    }

    /// A customer's orders, newest first.
    fn orders_for_customer(&self, id: &CustomerId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders()
            .iter()
            .filter(|o| &o.customer_id == id)
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at));
        orders
    }

    /// Orders containing an artisan's products, newest first.
    fn orders_for_artisan(&self, id: &ArtisanId) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders()
            .iter()
            .filter(|o| o.involves_artisan(id))
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.placed_at));
        orders
    }
}

/// The signed-in user's profile, addresses and payment methods.
pub trait AccountRepository {
    fn account(&self) -> &Account;

    fn customer(&self) -> &CustomerProfile {
        &self.account().customer
    }

    fn addresses(&self) -> &[SavedAddress] {
        &self.account().addresses
    }

    fn payment_methods(&self) -> &[PaymentMethod] {
        &self.account().payment_methods
    }

    fn address(&self, id: &AddressId) -> Result<&SavedAddress, CommerceError> {
        self.addresses()
            .iter()
            .find(|a| &a.id == id)
            .ok_or_else(|| CommerceError::AddressNotFound(id.to_string()))
    }

    fn payment_method(&self, id: &PaymentMethodId) -> Result<&PaymentMethod, CommerceError> {
        self.payment_methods()
            .iter()
            .find(|m| &m.id == id)
            .ok_or_else(|| CommerceError::PaymentMethodNotFound(id.to_string()))
    }

    /// Artisan whose seller pages are shown.
    fn current_artisan_id(&self) -> &ArtisanId {
        &self.account().artisan_id
    }
}
