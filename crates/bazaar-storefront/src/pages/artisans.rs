use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{ArtisanCard, EmptyState, OptimizedImage, ProductGrid, Rating, StatCard};
use crate::routes::Page;
use crate::state::use_shop;

/// Artisan directory with text, category and region filters.
#[component]
pub fn ArtisansPage() -> impl IntoView {
    let shop = use_shop();
    let query = RwSignal::new(ArtisanQuery::default());

    let categories = shop.store.categories().to_vec();
    let regions: Vec<String> = shop.store.regions().into_iter().map(str::to_string).collect();
    let store = shop.store.clone();

    let results = move || {
        let artisans: Vec<Artisan> = query.with(|q| q.run(store.artisans()).into_iter().cloned().collect());
        if artisans.is_empty() {
            return view! {
                <EmptyState
                    title="No artisans match"
                    message="Try another craft or region."
                    href=Page::Artisans.href()
                    cta="Show all artisans"
                />
            }
            .into_any();
        }
        view! {
            <p style="color: #666;">{artisans.len().to_string()} " artisans"</p>
            <div class="artisans">
                {artisans.into_iter().map(|a| view! { <ArtisanCard artisan=a/> }).collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    };

    view! {
        <Title text=Page::Artisans.title()/>
        <h2>"Our Artisans"</h2>
        <div class="toolbar" style="display: flex; gap: 1rem; margin-bottom: 1.5rem;">
            <input
                type="search"
                placeholder="Search by name or craft"
                prop:value=move || query.with(|q| q.text.clone())
                on:input=move |ev| query.update(|q| q.text = event_target_value(&ev))
            />
            <select
                prop:value=move || query.with(|q| q.category.as_select().to_string())
                on:change=move |ev| query.update(|q| q.category = Choice::from_select(&event_target_value(&ev)))
            >
                <option value="all">"All crafts"</option>
                {categories.into_iter().map(|c| view! {
                    <option value=c.slug.clone()>{c.name}</option>
                }).collect::<Vec<_>>()}
            </select>
            <select
                prop:value=move || query.with(|q| q.region.as_select().to_string())
                on:change=move |ev| query.update(|q| q.region = Choice::from_select(&event_target_value(&ev)))
            >
                <option value="all">"All regions"</option>
                {regions.into_iter().map(|r| view! {
                    <option value=r.clone()>{r.clone()}</option>
                }).collect::<Vec<_>>()}
            </select>
            <select
                prop:value=move || query.with(|q| q.sort.as_str())
                on:change=move |ev| query.update(|q| q.sort = ArtisanSort::from_select(&event_target_value(&ev)))
            >
                {ArtisanSort::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str()>{s.display_name()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
        {results}
    }
}

/// A single artisan's story and products.
#[component]
pub fn ArtisanProfilePage() -> impl IntoView {
    let shop = use_shop();
    let params = use_params_map();
    let id = move || ArtisanId::new(params.get().get("id").unwrap_or_default());

    move || match shop.store.artisan(&id()) {
        Ok(artisan) => {
            let products: Vec<Product> = shop
                .store
                .products_by_artisan(&artisan.id)
                .into_iter()
                .cloned()
                .collect();
            let craft = Category::name_for(shop.store.categories(), &artisan.category).to_string();
            view! { <ArtisanProfile artisan=artisan.clone() craft=craft products=products/> }.into_any()
        }
        Err(e) => {
            tracing::debug!(error = %e, "artisan page miss");
            view! {
                <Title text=Page::NotFound.title()/>
                <EmptyState
                    title="Artisan not found"
                    message="We couldn't find this maker."
                    href=Page::Artisans.href()
                    cta="Browse all artisans"
                />
            }
            .into_any()
        }
    }
}

#[component]
fn ArtisanProfile(artisan: Artisan, craft: String, products: Vec<Product>) -> impl IntoView {
    let cover = artisan.cover_image.clone().unwrap_or_default();
    let listed = products.len();

    view! {
        <Title text=artisan.name.clone()/>
        <div class="cover">
            <OptimizedImage src=cover alt="" class="cover-image"/>
        </div>
        <div style="display: flex; gap: 1.5rem; align-items: center; margin: 1rem 0;">
            <OptimizedImage src=artisan.image.clone() alt=artisan.name.clone() class="avatar-large"/>
            <div>
                <h1>
                    {artisan.name.clone()}
                    {artisan.verified.then(|| view! { <span class="verified">" ✓ Verified"</span> })}
                </h1>
                <p>{artisan.specialty.clone()} " · " {craft}</p>
                <p style="color: #666;">{format!("{}, {}", artisan.location, artisan.region)} " · Member since " {artisan.joined_year.to_string()}</p>
                <Rating rating=artisan.rating reviews=artisan.review_count/>
            </div>
        </div>
        <p style="max-width: 720px;">{artisan.bio.clone()}</p>

        <div class="stats">
            <StatCard label="Experience" value=format!("{} years", artisan.years_experience)/>
            <StatCard label="Products" value=listed.to_string()/>
            <StatCard label="Sales" value=artisan.total_sales.to_string()/>
        </div>

        <h2>"Products by " {artisan.name.clone()}</h2>
        {if products.is_empty() {
            view! { <p>"No products listed yet."</p> }.into_any()
        } else {
            view! { <ProductGrid products=products/> }.into_any()
        }}
    }
}
