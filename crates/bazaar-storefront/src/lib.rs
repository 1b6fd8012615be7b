//! Artisan Bazaar storefront.
//!
//! Leptos views over the `bazaar-commerce` reducers:
//! - Marketplace, product detail, artisan directory and profiles
//! - Cart with promo codes and the three-step checkout wizard
//! - Order confirmation and tracking
//! - Customer and artisan dashboards
//!
//! All data is the bundled mock data; nothing survives a reload.

mod app;
mod components;
mod pages;
pub mod routes;
pub mod state;

pub use app::App;

/// Browser entry point (`trunk serve --features csr`).
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
