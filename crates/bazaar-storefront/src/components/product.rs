use bazaar_commerce::prelude::*;
use leptos::prelude::*;

use super::{OptimizedImage, Rating};
use crate::routes::Page;
use crate::state::use_shop;

// ============================================================================
// Product Components
// ============================================================================

#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="products">
            {products.into_iter().map(|p| {
                view! {
                    <ProductCard product=p/>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let shop = use_shop();
    let href = Page::Product(product.id.clone()).href();
    let artisan = shop
        .store
        .artisan(&product.artisan_id)
        .map(|a| a.name.clone())
        .unwrap_or_default();
    let image = product.primary_image().unwrap_or_default().to_string();
    let in_stock = product.is_in_stock();
    let discount = product.discount_percentage();
    let original = product.original_price.filter(|_| product.is_on_sale());
    let added = RwSignal::new(false);

    let add = {
        let product = product.clone();
        move |_| match shop.add_to_cart(&product, 1, product.default_selection()) {
            Ok(()) => added.set(true),
            Err(e) => tracing::warn!(error = %e, product_id = %product.id, "add to cart failed"),
        }
    };

    view! {
        <div class="product-card">
            <a href=href.clone()>
                <OptimizedImage src=image alt=product.name.clone() class="product-image"/>
            </a>
            {discount.map(|d| view! { <span class="sale-badge">{d.to_string()} "% OFF"</span> })}
            <div class="product-info">
                <a href=href><h3>{product.name.clone()}</h3></a>
                <p style="font-size: 0.8rem; color: #666;">"by " {artisan}</p>
                <Rating rating=product.rating reviews=product.review_count/>
                <p class="price">
                    {product.price.display()}
                    {original.map(|o| view! { <s style="color: #999; margin-left: 0.5rem;">{o.display()}</s> })}
                </p>
                {if in_stock {
                    view! {
                        <button class="btn" on:click=add>
                            {move || if added.get() { "Added" } else { "Add to Cart" }}
                        </button>
                    }.into_any()
                } else {
                    view! { <p style="color: #c62828;">"Out of stock"</p> }.into_any()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn ArtisanCard(artisan: Artisan) -> impl IntoView {
    let href = Page::ArtisanProfile(artisan.id.clone()).href();
    view! {
        <div class="artisan-card">
            <a href=href.clone()>
                <OptimizedImage src=artisan.image.clone() alt=artisan.name.clone() class="avatar"/>
            </a>
            <div>
                <a href=href>
                    <h3>
                        {artisan.name.clone()}
                        {artisan.verified.then(|| view! { <span class="verified" title="Verified artisan">" ✓"</span> })}
                    </h3>
                </a>
                <p>{artisan.specialty.clone()}</p>
                <p style="font-size: 0.8rem; color: #666;">{format!("{}, {}", artisan.location, artisan.region)}</p>
                <Rating rating=artisan.rating reviews=artisan.review_count/>
                <p style="font-size: 0.8rem; color: #666;">
                    {artisan.years_experience.to_string()} " yrs experience · "
                    {artisan.product_count.to_string()} " products · "
                    {artisan.total_sales.to_string()} " sales"
                </p>
            </div>
        </div>
    }
}

// ============================================================================
// Skeleton Components (Loading States)
// ============================================================================

#[component]
pub fn ProductGridSkeleton() -> impl IntoView {
    view! {
        <div class="products">
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
            <ProductCardSkeleton/>
        </div>
    }
}

#[component]
fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="skeleton" style="width: 100%; height: 200px;"></div>
            <div class="product-info">
                <div class="skeleton" style="width: 80%; height: 1.5rem; margin-bottom: 0.5rem;"></div>
                <div class="skeleton" style="width: 40%; height: 1.25rem;"></div>
            </div>
        </div>
    }
}
