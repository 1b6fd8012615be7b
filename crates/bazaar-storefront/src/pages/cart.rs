use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EmptyState, OptimizedImage, SummaryRows};
use crate::routes::Page;
use crate::state::use_shop;

/// Shopping cart page
#[component]
pub fn CartPage() -> impl IntoView {
    let shop = use_shop();
    let cart = shop.cart;

    let content = move || {
        let state = cart.get();
        if state.is_empty() && state.saved_for_later().is_empty() {
            return view! {
                <EmptyState
                    title="Your cart is empty"
                    message="Discover handcrafted pieces from artisans across India."
                    href=Page::Marketplace.href()
                    cta="Continue shopping"
                />
            }
            .into_any();
        }
        view! { <CartView cart=state/> }.into_any()
    };

    view! {
        <Title text=Page::Cart.title()/>
        <h2>"Shopping Cart"</h2>
        {content}
    }
}

#[component]
fn CartView(cart: CartState) -> impl IntoView {
    let shop = use_shop();
    let summary = cart.summary().clone();
    let empty = cart.is_empty();

    let items = cart
        .items()
        .iter()
        .map(|item| view! { <CartLine item=item.clone()/> })
        .collect::<Vec<_>>();
    let saved = cart
        .saved_for_later()
        .iter()
        .map(|item| view! { <SavedLine item=item.clone()/> })
        .collect::<Vec<_>>();
    let has_saved = !saved.is_empty();

    view! {
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 2rem;">
            <div>
                {if empty {
                    view! { <p>"No items in your cart."</p> }.into_any()
                } else {
                    view! {
                        <p style="margin-bottom: 1rem;">{summary.item_count.to_string()} " item(s) in your cart"</p>
                        {items}
                    }
                    .into_any()
                }}
                {has_saved.then(|| view! {
                    <h3 style="margin-top: 2rem;">"Saved for later"</h3>
                    {saved}
                })}
                <div style="margin-top: 1rem; display: flex; gap: 1rem;">
                    <a href=Page::Marketplace.href() style="color: #666;">"Continue Shopping"</a>
                    {(!empty).then(|| view! {
                        <button
                            style="background: #dc3545; color: white; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer;"
                            on:click=move |_| shop.dispatch(CartAction::Clear)
                        >
                            "Clear Cart"
                        </button>
                    })}
                </div>
            </div>
            <aside>
                <h3>"Order Summary"</h3>
                <SummaryRows summary=summary/>
                <PromoForm/>
                {if empty {
                    view! { <button class="btn" disabled=true>"Proceed to Checkout"</button> }.into_any()
                } else {
                    view! { <a href=Page::Checkout.href() class="btn">"Proceed to Checkout"</a> }.into_any()
                }}
            </aside>
        </div>
    }
}

#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let shop = use_shop();
    let id = item.id.clone();
    let total = item.line_total().map(|m| m.display()).unwrap_or_default();
    let options = item.options_label();
    let at_min = item.quantity <= 1;

    let act = move |action: fn(LineItemId) -> CartAction| {
        let shop = shop.clone();
        let id = id.clone();
        move |_| shop.dispatch(action(id.clone()))
    };

    view! {
        <div style="display: flex; gap: 1rem; padding: 1rem; border-bottom: 1px solid #eee;">
            <OptimizedImage src=item.image.clone() alt=item.product_name.clone() class="thumb"/>
            <div style="flex: 1;">
                <a href=Page::Product(item.product_id.clone()).href()><strong>{item.product_name.clone()}</strong></a>
                <p style="font-size: 0.8rem; color: #666;">"by " {item.artisan_name.clone()}</p>
                {(!options.is_empty()).then(|| view! { <p style="font-size: 0.8rem; color: #666;">{options}</p> })}
                <p style="color: #666;">
                    {item.unit_price.display()}
                    {item.original_unit_price.map(|o| view! { <s style="margin-left: 0.5rem; color: #999;">{o.display()}</s> })}
                </p>
                {item.savings().map(|s| view! { <p style="color: #2e7d32; font-size: 0.8rem;">"You save " {s.display()}</p> })}
                <p style="font-size: 0.8rem; color: #888;">
                    {if item.free_shipping { "Free shipping" } else { "Flat shipping fee" }}
                    " · " {item.estimated_delivery.clone()}
                </p>
                <div class="quantity">
                    <button disabled=at_min on:click=act(CartAction::Decrement)>"-"</button>
                    <span>{item.quantity.to_string()}</span>
                    <button on:click=act(CartAction::Increment)>"+"</button>
                </div>
                <button class="link" on:click=act(CartAction::SaveForLater)>"Save for later"</button>
                <button class="link" on:click=act(CartAction::Remove)>"Remove"</button>
            </div>
            <div style="text-align: right;">
                <strong>{total}</strong>
            </div>
        </div>
    }
}

#[component]
fn SavedLine(item: LineItem) -> impl IntoView {
    let shop = use_shop();
    let id = item.id.clone();

    view! {
        <div style="display: flex; gap: 1rem; padding: 0.75rem; border-bottom: 1px solid #eee;">
            <OptimizedImage src=item.image.clone() alt=item.product_name.clone() class="thumb"/>
            <div style="flex: 1;">
                <strong>{item.product_name.clone()}</strong>
                <p style="color: #666;">{item.unit_price.display()}</p>
            </div>
            <button class="link" on:click=move |_| shop.dispatch(CartAction::MoveToCart(id.clone()))>
                "Move to cart"
            </button>
        </div>
    }
}

#[component]
fn PromoForm() -> impl IntoView {
    let shop = use_shop();
    let cart = shop.cart;
    let code = RwSignal::new(String::new());
    let apply_shop = shop.clone();

    let status = move || {
        cart.with(|c| {
            if let Some(error) = c.promo_error() {
                return Some(view! { <p style="color: red;">{error.to_string()}</p> }.into_any());
            }
            c.promo().map(|rule| {
                let shop = shop.clone();
                view! {
                    <p style="color: #2e7d32;">
                        {rule.code.clone()} " applied: " {rule.description.clone()} " "
                        <button class="link" on:click=move |_| shop.dispatch(CartAction::RemovePromo)>"Remove"</button>
                    </p>
                }
                .into_any()
            })
        })
    };

    view! {
        <form
            class="promo"
            on:submit=move |ev| {
                ev.prevent_default();
                apply_shop.dispatch(CartAction::ApplyPromo(code.get_untracked()));
                code.set(String::new());
            }
        >
            <input
                type="text"
                placeholder="Promo code"
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            />
            <button type="submit">"Apply"</button>
        </form>
        {status}
    }
}
