use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::{EmptyState, OrderItemsList, StatusBadge, SummaryRows, TimelineView};
use crate::routes::Page;
use crate::state::use_shop;

fn order_not_found() -> AnyView {
    view! {
        <Title text=Page::NotFound.title()/>
        <EmptyState
            title="Order not found"
            message="Check the order number and try again."
            href=Page::Marketplace.href()
            cta="Back to Marketplace"
        />
    }
    .into_any()
}

/// Shown right after checkout.
#[component]
pub fn OrderConfirmationPage() -> impl IntoView {
    let shop = use_shop();
    let params = use_params_map();
    let id = move || OrderId::new(params.get().get("orderId").unwrap_or_default());

    move || match shop.find_order(&id()) {
        Some(order) => view! { <OrderConfirmation order=order/> }.into_any(),
        None => order_not_found(),
    }
}

#[component]
fn OrderConfirmation(order: Order) -> impl IntoView {
    let track = Page::TrackOrder(order.id.clone()).href();
    let payment = format!(
        "{} · {} {}",
        order.payment.kind.display_name(),
        order.payment.label,
        order.payment.detail
    );

    view! {
        <Title text=Page::OrderConfirmation(order.id.clone()).title()/>
        <div style="text-align: center; padding: 2rem 0;">
            <h1 style="color: #2e7d32;">"✓ Thank you for your order!"</h1>
            <p>"Order " <strong>{order.id.to_string()}</strong> " has been placed."</p>
            <p style="color: #666;">"Estimated delivery: " {order.estimated_delivery.clone()}</p>
            <StatusBadge status=order.status/>
        </div>
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 2rem;">
            <section>
                <h3>"Items"</h3>
                <OrderItemsList items=order.items.clone()/>
                <h3>"Shipping to"</h3>
                <p>{order.shipping_address.name.clone()}</p>
                <p style="white-space: pre-line; color: #666;">{order.shipping_address.multi_line()}</p>
                <h3>"Payment"</h3>
                <p>{payment}</p>
            </section>
            <aside>
                <h3>"Order Summary"</h3>
                <SummaryRows summary=order.summary.clone()/>
                <a href=track class="btn">"Track Order"</a>
                <a href=Page::Marketplace.href() style="display: block; margin-top: 1rem;">"Continue Shopping"</a>
            </aside>
        </div>
    }
}

/// Milestone timeline for one order.
#[component]
pub fn TrackOrderPage() -> impl IntoView {
    let shop = use_shop();
    let params = use_params_map();
    let id = move || OrderId::new(params.get().get("orderId").unwrap_or_default());

    view! {
        <Title text=Page::TrackOrder(OrderId::new("")).title()/>
        <OrderLookup/>
        {move || match shop.find_order(&id()) {
            Some(order) => view! { <OrderTracking order=order/> }.into_any(),
            None => order_not_found(),
        }}
    }
}

/// Jump to another order's tracking page.
#[component]
fn OrderLookup() -> impl IntoView {
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());

    view! {
        <form
            class="order-lookup"
            on:submit=move |ev| {
                ev.prevent_default();
                let id = input.get_untracked().trim().to_string();
                if !id.is_empty() {
                    navigate(&Page::TrackOrder(OrderId::new(id)).href(), Default::default());
                }
            }
        >
            <input
                type="text"
                placeholder="Order number, e.g. ORD-1002"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            />
            <button type="submit">"Track"</button>
        </form>
    }
}

#[component]
fn OrderTracking(order: Order) -> impl IntoView {
    let timeline = order.timeline();
    if let Err(e) = timeline.validate() {
        tracing::warn!(order_id = %order.id, error = %e, "inconsistent tracking timeline");
    }
    let current = timeline
        .current()
        .map(|e| e.title.clone())
        .unwrap_or_default();
    let carrier = match (&order.courier, &order.tracking_number) {
        (Some(courier), Some(number)) => Some(format!("{courier} · {number}")),
        (Some(courier), None) => Some(courier.clone()),
        (None, Some(number)) => Some(number.clone()),
        (None, None) => None,
    };

    view! {
        <div style="display: flex; justify-content: space-between; align-items: center; margin: 1.5rem 0;">
            <div>
                <h2>"Order " {order.id.to_string()}</h2>
                <p style="color: #666;">"Placed on " {order.placed_at.format("%d %b %Y").to_string()}</p>
            </div>
            <StatusBadge status=order.status/>
        </div>
        {(order.status == OrderStatus::Cancelled).then(|| view! {
            <div class="alert">"This order was cancelled after " {current.clone()} "."</div>
        })}
        {carrier.map(|c| view! { <p>"Shipped with " {c}</p> })}
        <p style="color: #666;">"Estimated delivery: " {order.estimated_delivery.clone()}</p>
        <TimelineView timeline=timeline/>
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 2rem; margin-top: 2rem;">
            <section>
                <h3>"Items"</h3>
                <OrderItemsList items=order.items.clone()/>
            </section>
            <aside>
                <h3>"Delivering to"</h3>
                <p>{order.shipping_address.name.clone()}</p>
                <p style="white-space: pre-line; color: #666;">{order.shipping_address.multi_line()}</p>
                <SummaryRows summary=order.summary.clone()/>
            </aside>
        </div>
    }
}
