use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ArtisanCard, OptimizedImage, ProductGrid};
use crate::routes::Page;
use crate::state::use_shop;

const FEATURED_LIMIT: usize = 8;
const SPOTLIGHT_LIMIT: usize = 3;

/// Home page with hero, categories, featured products and artisans.
#[component]
pub fn HomePage() -> impl IntoView {
    let shop = use_shop();
    let store = &shop.store;
    let hero = asset_path(&shop.config.images, ImageKind::Banners, "hero.jpg");

    let featured: Vec<Product> = store
        .featured_products(FEATURED_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    let spotlight: Vec<Artisan> = ArtisanQuery::default()
        .run(store.artisans())
        .into_iter()
        .take(SPOTLIGHT_LIMIT)
        .cloned()
        .collect();

    let categories = store
        .categories()
        .iter()
        .map(|c| {
            let href = format!("{}?category={}", Page::Marketplace.href(), c.slug);
            let image = c.image.clone().unwrap_or_default();
            view! {
                <a href=href class="category-tile">
                    <OptimizedImage src=image alt=c.name.clone()/>
                    <span>{c.name.clone()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=Page::Home.title()/>
        <div class="hero">
            <OptimizedImage src=hero alt="Artisan at work" class="hero-image"/>
            <h2>"Handcrafted in India, delivered to your door"</h2>
            <p>"Buy directly from weavers, potters, painters and metalsmiths."</p>
            <a href=Page::Marketplace.href() class="btn" style="margin-top: 1rem; display: inline-block;">
                "Explore the Marketplace"
            </a>
        </div>

        <h2>"Shop by Craft"</h2>
        <div class="categories">{categories}</div>

        <h2>"Featured Products"</h2>
        <ProductGrid products=featured/>

        <h2>"Meet the Artisans"</h2>
        <div class="artisans">
            {spotlight.into_iter().map(|a| view! { <ArtisanCard artisan=a/> }).collect::<Vec<_>>()}
        </div>
        <a href=Page::Artisans.href()>"See all artisans"</a>
    }
}
