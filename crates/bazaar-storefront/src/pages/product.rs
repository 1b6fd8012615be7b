use std::collections::BTreeMap;

use bazaar_commerce::cart::MAX_QUANTITY_PER_ITEM;
use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{EmptyState, OptimizedImage, ProductGrid, Rating};
use crate::routes::Page;
use crate::state::use_shop;

const RELATED_LIMIT: usize = 4;

/// Single product page
#[component]
pub fn ProductPage() -> impl IntoView {
    let shop = use_shop();
    let params = use_params_map();
    let id = move || ProductId::new(params.get().get("id").unwrap_or_default());

    move || match shop.store.product(&id()) {
        Ok(product) => view! { <ProductDetail product=product.clone()/> }.into_any(),
        Err(e) => {
            tracing::debug!(error = %e, "product page miss");
            view! {
                <Title text=Page::NotFound.title()/>
                <EmptyState
                    title="Product not found"
                    message="This piece may have sold out or been removed by its maker."
                    href=Page::Marketplace.href()
                    cta="Back to Marketplace"
                />
            }
            .into_any()
        }
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let shop = use_shop();
    let artisan = shop.store.artisan(&product.artisan_id).ok().cloned();
    let related: Vec<Product> = shop
        .store
        .related_products(&product, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    let wishlisted = shop.store.customer().is_wishlisted(&product.id);

    let max_quantity = u32::try_from(product.stock)
        .unwrap_or(0)
        .min(MAX_QUANTITY_PER_ITEM)
        .max(1);
    let quantity = RwSignal::new(1u32);
    let selection = RwSignal::new(product.default_selection());
    let active_image = RwSignal::new(0usize);
    let message = RwSignal::new(None::<Result<String, String>>);

    let images = product.images.clone();
    let main_image = {
        let images = images.clone();
        move || {
            let src = images
                .get(active_image.get())
                .cloned()
                .unwrap_or_default();
            view! { <OptimizedImage src=src alt="Product photo" class="main-image"/> }
        }
    };
    let thumbnails = images
        .into_iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <button class="thumb" class:active=move || active_image.get() == i on:click=move |_| active_image.set(i)>
                    <OptimizedImage src=src alt="Thumbnail"/>
                </button>
            }
        })
        .collect::<Vec<_>>();

    let options = product
        .options
        .iter()
        .map(|option| {
            let name = option.name.clone();
            let buttons = option
                .values
                .iter()
                .map(|value| {
                    let (name, value) = (name.clone(), value.clone());
                    let selected = {
                        let (name, value) = (name.clone(), value.clone());
                        move || selection.with(|s| s.get(&name) == Some(&value))
                    };
                    let label = value.clone();
                    view! {
                        <button
                            class="option"
                            class:selected=selected
                            on:click=move |_| selection.update(|s: &mut BTreeMap<String, String>| {
                                s.insert(name.clone(), value.clone());
                            })
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <div class="option-group">
                    <p>{option.name.clone()}</p>
                    {buttons}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let in_stock = product.is_in_stock();
    let stock_note = match product.stock {
        0 => "Out of stock".to_string(),
        n if n <= shop.config.inventory.low_stock_threshold => format!("Only {n} left"),
        n => format!("{n} in stock"),
    };

    let add = {
        let product = product.clone();
        move |_| {
            let result = shop.add_to_cart(&product, quantity.get_untracked(), selection.get_untracked());
            message.set(Some(match result {
                Ok(()) => Ok("Added to cart!".to_string()),
                Err(e) => {
                    tracing::warn!(error = %e, product_id = %product.id, "add to cart failed");
                    Err(e.to_string())
                }
            }));
        }
    };

    let artisan_block = artisan.map(|a| {
        view! {
            <a href=Page::ArtisanProfile(a.id.clone()).href() class="artisan-link">
                <OptimizedImage src=a.image.clone() alt=a.name.clone() class="avatar-small"/>
                <span>"by " {a.name.clone()} " · " {a.location.clone()}</span>
            </a>
        }
    });

    view! {
        <Title text=product.name.clone()/>
        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;">
            <div>
                {main_image}
                <div class="thumbnails">{thumbnails}</div>
            </div>
            <div>
                <h1>{product.name.clone()}</h1>
                {artisan_block}
                <Rating rating=product.rating reviews=product.review_count/>
                <p class="price" style="font-size: 2rem; margin: 1rem 0;">
                    {product.price.display()}
                    {product.original_price.filter(|_| product.is_on_sale()).map(|o| view! {
                        <s style="font-size: 1rem; color: #999; margin-left: 0.5rem;">{o.display()}</s>
                    })}
                    {product.discount_percentage().map(|d| view! {
                        <span class="sale-badge">{d.to_string()} "% OFF"</span>
                    })}
                </p>
                <p style="color: #666; margin-bottom: 1rem;">{product.description.clone()}</p>
                {options}
                <p style="color: #888;">{stock_note}</p>
                <p style="color: #888;">
                    {if product.free_shipping { "Free shipping" } else { "Flat shipping fee applies" }}
                    " · Delivery in " {product.estimated_delivery.clone()}
                </p>
                {wishlisted.then(|| view! { <p style="color: #ad1457;">"♥ In your wishlist"</p> })}

                <div class="quantity" style="margin: 1rem 0;">
                    <button
                        disabled=move || quantity.get() <= 1
                        on:click=move |_| quantity.update(|q| *q = q.saturating_sub(1).max(1))
                    >
                        "-"
                    </button>
                    <span>{move || quantity.get().to_string()}</span>
                    <button
                        disabled=move || quantity.get() >= max_quantity
                        on:click=move |_| quantity.update(|q| *q = (*q + 1).min(max_quantity))
                    >
                        "+"
                    </button>
                </div>

                <button class="btn" disabled=!in_stock on:click=add>
                    {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                </button>
                {move || message.get().map(|result| match result {
                    Ok(text) => view! {
                        <p style="color: green; margin-top: 0.5rem;">{text} " " <a href=Page::Cart.href()>"View cart"</a></p>
                    }.into_any(),
                    Err(text) => view! {
                        <p style="color: red; margin-top: 0.5rem;">"Error: " {text}</p>
                    }.into_any(),
                })}
            </div>
        </div>

        {(!related.is_empty()).then(|| view! {
            <h2>"You may also like"</h2>
            <ProductGrid products=related/>
        })}
    }
}
