//! Application root and route mounting.

use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Header};
use crate::pages::{
    ArtisanDashboardPage, ArtisanInventoryPage, ArtisanOrdersPage, ArtisanProfilePage,
    ArtisansPage, CartPage, CheckoutPage, CustomerDashboardPage, HomePage, MarketplacePage,
    NotFound, OrderConfirmationPage, ProductPage, TrackOrderPage,
};
use crate::state::{load_config, Shop};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = match FixtureStore::bundled() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "failed to load marketplace data");
            return view! { <StartupError message=e.to_string()/> }.into_any();
        }
    };
    provide_context(Shop::new(store, load_config()));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Artisan Bazaar - handcrafted goods direct from Indian artisans"/>
        <Title formatter=|text| format!("{text} | Artisan Bazaar")/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/marketplace") view=MarketplacePage/>
                    <Route path=path!("/product/:id") view=ProductPage/>
                    <Route path=path!("/artisans") view=ArtisansPage/>
                    <Route path=path!("/artisan/dashboard") view=ArtisanDashboardPage/>
                    <Route path=path!("/artisan/orders") view=ArtisanOrdersPage/>
                    <Route path=path!("/artisan/inventory") view=ArtisanInventoryPage/>
                    <Route path=path!("/artisan/:id") view=ArtisanProfilePage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/checkout") view=CheckoutPage/>
                    <Route path=path!("/order-confirmation/:orderId") view=OrderConfirmationPage/>
                    <Route path=path!("/track-order/:orderId") view=TrackOrderPage/>
                    <Route path=path!("/customer/dashboard") view=CustomerDashboardPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
    .into_any()
}

/// Shown when the bundled data cannot be read.
#[component]
fn StartupError(message: String) -> impl IntoView {
    view! {
        <div style="text-align: center; padding: 4rem;">
            <h1>"Something went wrong"</h1>
            <p>"The marketplace could not be loaded."</p>
            <p style="font-size: 0.8rem; color: #888;">{message}</p>
        </div>
    }
}
