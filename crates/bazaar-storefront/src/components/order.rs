use bazaar_commerce::prelude::*;
use leptos::prelude::*;

use super::OptimizedImage;
use crate::routes::Page;

fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "#f9a825",
        OrderStatus::Confirmed | OrderStatus::Crafting => "#1565c0",
        OrderStatus::Shipped | OrderStatus::OutForDelivery => "#6a1b9a",
        OrderStatus::Delivered => "#2e7d32",
        OrderStatus::Cancelled => "#c62828",
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span
            class=format!("status-badge status-{}", status.as_str())
            style=format!("color: {};", status_color(status))
        >
            {status.display_name()}
        </span>
    }
}

#[component]
pub fn OrderItemsList(items: Vec<OrderItem>) -> impl IntoView {
    view! {
        <ul class="order-items">
            {items.into_iter().map(|item| {
                let total = item.line_total().map(|m| m.display()).unwrap_or_default();
                let options = item
                    .selected_options
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                view! {
                    <li style="display: flex; gap: 1rem; padding: 0.75rem 0; border-bottom: 1px solid #eee;">
                        <OptimizedImage src=item.image alt=item.product_name.clone() class="thumb"/>
                        <div style="flex: 1;">
                            <a href=Page::Product(item.product_id).href()><strong>{item.product_name}</strong></a>
                            <p style="font-size: 0.8rem; color: #666;">"by " {item.artisan_name}</p>
                            {(!options.is_empty()).then(|| view! { <p style="font-size: 0.8rem; color: #666;">{options}</p> })}
                            <p style="color: #666;">{item.unit_price.display()} " x " {item.quantity.to_string()}</p>
                        </div>
                        <strong>{total}</strong>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

/// Order rows with status and total. `artisan` limits the shown amount to
/// that artisan's share of each order.
#[component]
pub fn OrdersTable(
    orders: Vec<Order>,
    #[prop(optional)] artisan: Option<ArtisanId>,
) -> impl IntoView {
    let show_customer = artisan.is_some();
    view! {
        <table class="orders-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Date"</th>
                    {show_customer.then(|| view! { <th>"Customer"</th> })}
                    <th>"Items"</th>
                    <th>"Status"</th>
                    <th>"Amount"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {orders.into_iter().map(|order| {
                    let amount = match &artisan {
                        Some(id) => order.artisan_subtotal(id).unwrap_or_else(|_| order.total()),
                        None => order.total(),
                    };
                    view! {
                        <tr>
                            <td>{order.id.to_string()}</td>
                            <td>{order.placed_at.format("%d %b %Y").to_string()}</td>
                            {show_customer.then(|| view! { <td>{order.customer_name.clone()}</td> })}
                            <td>{order.item_count().to_string()}</td>
                            <td><StatusBadge status=order.status/></td>
                            <td>{amount.display()}</td>
                            <td><a href=Page::TrackOrder(order.id.clone()).href()>"Track"</a></td>
                        </tr>
                    }
                }).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

#[component]
pub fn TimelineView(timeline: Timeline) -> impl IntoView {
    let progress = timeline.progress_percent();
    view! {
        <div class="timeline">
            <div class="progress" style="background: #eee; height: 6px; border-radius: 3px;">
                <div style=format!("width: {progress}%; background: #2e7d32; height: 6px; border-radius: 3px;")></div>
            </div>
            <ol>
                {timeline.events().iter().map(|event| {
                    let marker = if event.completed { "●" } else { "○" };
                    let when = event
                        .timestamp
                        .map(|t| t.format("%d %b %Y, %H:%M").to_string())
                        .unwrap_or_else(|| "Pending".to_string());
                    view! {
                        <li class:completed=event.completed class:current=event.current>
                            <span class="marker">{marker}</span>
                            <div>
                                <strong>{event.title.clone()}</strong>
                                <p style="font-size: 0.9rem; color: #666;">{event.description.clone()}</p>
                                <p style="font-size: 0.8rem; color: #888;">{when}</p>
                            </div>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ol>
        </div>
    }
}
