use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::Page;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text=Page::NotFound.title()/>
        <div style="text-align: center; padding: 4rem;">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=Page::Marketplace.href() class="btn">"Back to Marketplace"</a>
        </div>
    }
}
