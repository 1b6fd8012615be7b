use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{resolve, Page, Section};
use crate::state::use_shop;

#[component]
pub fn Header() -> impl IntoView {
    let cart = use_shop().cart;
    let location = use_location();
    let section = Memo::new(move |_| resolve(&location.pathname.get()).section());

    let link = move |page: Page, label: &'static str, target: Section| {
        view! {
            <a href=page.href() class:active=move || section.get() == Some(target)>
                {label}
            </a>
        }
    };

    view! {
        <header>
            <a href="/" class="logo">"Artisan Bazaar"</a>
            <nav>
                {link(Page::Marketplace, "Marketplace", Section::Shop)}
                {link(Page::Artisans, "Artisans", Section::Artisans)}
                {link(Page::CustomerDashboard, "My Account", Section::Account)}
                {link(Page::ArtisanDashboard, "Sell", Section::Seller)}
                <a href=Page::Cart.href() class="cart-link" class:active=move || section.get() == Some(Section::Cart)>
                    "Cart"
                    <span class="badge">
                        {move || cart.with(|c| c.summary().item_count).to_string()}
                    </span>
                </a>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Artisan Bazaar - handcrafted goods direct from the people who make them"</p>
            <p style="font-size: 0.8rem; color: #888;">
                <a href=Page::Marketplace.href()>"Shop"</a>
                " · "
                <a href=Page::Artisans.href()>"Meet the artisans"</a>
                " · "
                <a href=Page::ArtisanDashboard.href()>"Sell with us"</a>
            </p>
        </footer>
    }
}
