//! Marketplace domain types and logic for Artisan Bazaar.
//!
//! Everything the storefront renders comes from here, as plain data and
//! pure reducers that can be tested without a renderer:
//!
//! - **Catalog**: artisans, products, categories, the artisan inventory board
//! - **Cart**: line items, promo codes, summary recomputation
//! - **Checkout**: the three-step wizard, orders, tracking timelines
//! - **Search**: marketplace filters and sorts, artisan directory, order table
//! - **Repository**: read access to the bundled mock data
//!
//! # Example
//!
//! ```rust
//! use bazaar_commerce::prelude::*;
//!
//! let store = FixtureStore::bundled()?;
//! let config = StoreConfig::default();
//! let product = store.product(&ProductId::new("p-ikat-saree"))?;
//!
//! let cart = CartState::new(&config).reduce(CartAction::Add(LineItem::from_product(
//!     product,
//!     "Meera Devi",
//!     2,
//!     product.default_selection(),
//! )?));
//! assert_eq!(cart.summary().total.display(), "\u{20b9}5,898");
//!
//! let cart = cart.reduce(CartAction::ApplyPromo("save10".into()));
//! assert_eq!(cart.summary().total, Money::inr(5398));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod ids;
pub mod image;
pub mod money;
pub mod repository;
pub mod search;
#[cfg(feature = "runtime")]
pub mod task;

pub use config::StoreConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::StoreConfig;
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Account
    pub use crate::account::{Account, CustomerProfile};

    // Catalog
    pub use crate::catalog::{
        Artisan, Category, InventoryAction, InventoryBoard, InventoryRow, Product, ProductOption,
        StockStatus,
    };

    // Cart
    pub use crate::cart::{CartAction, CartState, CartSummary, LineItem, PromoKind, PromoRule};

    // Checkout
    pub use crate::checkout::{
        CheckoutAction, CheckoutState, CheckoutStep, Order, OrderItem, OrderStatus, PaymentKind,
        PaymentMethod, PaymentSummary, SavedAddress, StepState, Timeline, TrackingEvent,
    };

    // Dashboards
    pub use crate::dashboard::{ArtisanDashboard, CustomerDashboard, TopProduct};

    // Images
    pub use crate::image::{asset_path, ImageFallback, ImageKind};

    // Repositories
    pub use crate::repository::{
        AccountRepository, CatalogRepository, FixtureStore, OrderRepository,
    };

    // Search
    pub use crate::search::{
        ArtisanQuery, ArtisanSort, Choice, Filter, OrderQuery, Pagination, ProductSort,
        SearchQuery, SearchResults,
    };
}
