//! Static route table.
//!
//! The router in [`crate::App`] mounts the same paths; this module gives the
//! views typed links and lets the header work out which section is active.

use bazaar_commerce::{ArtisanId, OrderId, ProductId};

/// Every page the storefront can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Marketplace,
    Product(ProductId),
    Artisans,
    ArtisanProfile(ArtisanId),
    Cart,
    Checkout,
    OrderConfirmation(OrderId),
    TrackOrder(OrderId),
    CustomerDashboard,
    ArtisanDashboard,
    ArtisanOrders,
    ArtisanInventory,
    NotFound,
}

/// Route patterns in mount order. Static paths come before the
/// parameterized path that shares their prefix.
pub const ROUTES: &[&str] = &[
    "/",
    "/marketplace",
    "/product/:id",
    "/artisans",
    "/artisan/dashboard",
    "/artisan/orders",
    "/artisan/inventory",
    "/artisan/:id",
    "/cart",
    "/checkout",
    "/order-confirmation/:orderId",
    "/track-order/:orderId",
    "/customer/dashboard",
];

/// Header navigation groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Shop,
    Artisans,
    Cart,
    Account,
    Seller,
}

/// Map a location to its page. Query strings and fragments are ignored.
pub fn resolve(path: &str) -> Page {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Page::Home,
        ["marketplace"] => Page::Marketplace,
        ["product", id] => Page::Product(ProductId::new(*id)),
        ["artisans"] => Page::Artisans,
        ["artisan", "dashboard"] => Page::ArtisanDashboard,
        ["artisan", "orders"] => Page::ArtisanOrders,
        ["artisan", "inventory"] => Page::ArtisanInventory,
        ["artisan", id] => Page::ArtisanProfile(ArtisanId::new(*id)),
        ["cart"] => Page::Cart,
        ["checkout"] => Page::Checkout,
        ["order-confirmation", id] => Page::OrderConfirmation(OrderId::new(*id)),
        ["track-order", id] => Page::TrackOrder(OrderId::new(*id)),
        ["customer", "dashboard"] => Page::CustomerDashboard,
        _ => Page::NotFound,
    }
}

impl Page {
    pub fn href(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Marketplace => "/marketplace".to_string(),
            Page::Product(id) => format!("/product/{}", id),
            Page::Artisans => "/artisans".to_string(),
            Page::ArtisanProfile(id) => format!("/artisan/{}", id),
            Page::Cart => "/cart".to_string(),
            Page::Checkout => "/checkout".to_string(),
            Page::OrderConfirmation(id) => format!("/order-confirmation/{}", id),
            Page::TrackOrder(id) => format!("/track-order/{}", id),
            Page::CustomerDashboard => "/customer/dashboard".to_string(),
            Page::ArtisanDashboard => "/artisan/dashboard".to_string(),
            Page::ArtisanOrders => "/artisan/orders".to_string(),
            Page::ArtisanInventory => "/artisan/inventory".to_string(),
            Page::NotFound => "/404".to_string(),
        }
    }

    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Artisan Bazaar",
            Page::Marketplace => "Marketplace",
            Page::Product(_) => "Product",
            Page::Artisans => "Our Artisans",
            Page::ArtisanProfile(_) => "Artisan",
            Page::Cart => "Shopping Cart",
            Page::Checkout => "Checkout",
            Page::OrderConfirmation(_) => "Order Confirmed",
            Page::TrackOrder(_) => "Track Order",
            Page::CustomerDashboard => "My Account",
            Page::ArtisanDashboard => "Artisan Dashboard",
            Page::ArtisanOrders => "Orders",
            Page::ArtisanInventory => "Inventory",
            Page::NotFound => "Page Not Found",
        }
    }

    pub fn section(&self) -> Option<Section> {
        match self {
            Page::Home => Some(Section::Home),
            Page::Marketplace | Page::Product(_) => Some(Section::Shop),
            Page::Artisans | Page::ArtisanProfile(_) => Some(Section::Artisans),
            Page::Cart | Page::Checkout => Some(Section::Cart),
            Page::OrderConfirmation(_) | Page::TrackOrder(_) | Page::CustomerDashboard => {
                Some(Section::Account)
            }
            Page::ArtisanDashboard | Page::ArtisanOrders | Page::ArtisanInventory => {
                Some(Section::Seller)
            }
            Page::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(resolve("/"), Page::Home);
        assert_eq!(resolve(""), Page::Home);
        assert_eq!(resolve("/marketplace"), Page::Marketplace);
        assert_eq!(resolve("/marketplace/"), Page::Marketplace);
        assert_eq!(resolve("/cart"), Page::Cart);
        assert_eq!(resolve("/customer/dashboard"), Page::CustomerDashboard);
    }

    #[test]
    fn test_parameter_routes() {
        assert_eq!(
            resolve("/product/p-ikat-saree"),
            Page::Product(ProductId::new("p-ikat-saree"))
        );
        assert_eq!(
            resolve("/order-confirmation/ORD-1001?ref=email"),
            Page::OrderConfirmation(OrderId::new("ORD-1001"))
        );
        assert_eq!(
            resolve("/track-order/ORD-1002#timeline"),
            Page::TrackOrder(OrderId::new("ORD-1002"))
        );
    }

    #[test]
    fn test_static_wins_over_parameter() {
        assert_eq!(resolve("/artisan/dashboard"), Page::ArtisanDashboard);
        assert_eq!(resolve("/artisan/orders"), Page::ArtisanOrders);
        assert_eq!(resolve("/artisan/inventory"), Page::ArtisanInventory);
        assert_eq!(
            resolve("/artisan/a-meera"),
            Page::ArtisanProfile(ArtisanId::new("a-meera"))
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(resolve("/products"), Page::NotFound);
        assert_eq!(resolve("/product"), Page::NotFound);
        assert_eq!(resolve("/product/a/b"), Page::NotFound);
        assert_eq!(resolve("/artisan"), Page::NotFound);
        assert_eq!(Page::NotFound.section(), None);
    }

    #[test]
    fn test_href_resolves_back() {
        let pages = [
            Page::Home,
            Page::Marketplace,
            Page::Product(ProductId::new("p-blue-vase")),
            Page::Artisans,
            Page::ArtisanProfile(ArtisanId::new("a-ravi")),
            Page::Cart,
            Page::Checkout,
            Page::OrderConfirmation(OrderId::new("ORD-1")),
            Page::TrackOrder(OrderId::new("ORD-1")),
            Page::CustomerDashboard,
            Page::ArtisanDashboard,
            Page::ArtisanOrders,
            Page::ArtisanInventory,
        ];
        assert_eq!(pages.len(), ROUTES.len());
        for page in pages {
            assert_eq!(resolve(&page.href()), page);
        }
    }
}
