//! One component per route.

mod account;
mod artisans;
mod cart;
mod checkout;
mod home;
mod marketplace;
mod not_found;
mod orders;
mod product;
mod seller;

pub use account::CustomerDashboardPage;
pub use artisans::{ArtisanProfilePage, ArtisansPage};
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use home::HomePage;
pub use marketplace::MarketplacePage;
pub use not_found::NotFound;
pub use orders::{OrderConfirmationPage, TrackOrderPage};
pub use product::ProductPage;
pub use seller::{ArtisanDashboardPage, ArtisanInventoryPage, ArtisanOrdersPage};
