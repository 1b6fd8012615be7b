use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EmptyState, OrdersTable, ProductGrid, StatCard};
use crate::routes::Page;
use crate::state::use_shop;

const RECENT_ORDERS: usize = 5;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let shop = use_shop();
    let customer = shop.store.customer().clone();
    let wishlist: Vec<Product> = customer
        .wishlist
        .iter()
        .filter_map(|id| shop.store.product(id).ok().cloned())
        .collect();
    let addresses = shop.store.addresses().to_vec();

    let stats = {
        let shop = shop.clone();
        let customer_id = customer.id.clone();
        let wishlist_count = customer.wishlist.len();
        move || {
            let orders = shop.all_orders();
            let mine = orders.iter().filter(|o| o.customer_id == customer_id);
            match CustomerDashboard::build(mine, wishlist_count, RECENT_ORDERS, shop.currency()) {
                Ok(dash) => view! { <CustomerOverview dash=dash/> }.into_any(),
                Err(e) => {
                    tracing::error!(error = %e, "customer dashboard failed");
                    view! { <p style="color: red;">"Error loading your orders: " {e.to_string()}</p> }.into_any()
                }
            }
        }
    };

    view! {
        <Title text=Page::CustomerDashboard.title()/>
        <h2>"Welcome back, " {customer.first_name().to_string()}</h2>
        <p style="color: #666;">{customer.email.clone()} " · Member since " {customer.member_since.clone()}</p>

        {stats}

        <h3>"Wishlist"</h3>
        {if wishlist.is_empty() {
            view! { <p>"Nothing saved yet."</p> }.into_any()
        } else {
            view! { <ProductGrid products=wishlist/> }.into_any()
        }}

        <h3>"Saved Addresses"</h3>
        <div class="choices">
            {addresses.into_iter().map(|a| view! {
                <div class="choice">
                    <strong>{a.label.clone()}</strong>
                    {a.is_default.then(|| view! { <span class="tag">"Default"</span> })}
                    <p>{a.name.clone()}</p>
                    <p style="white-space: pre-line; color: #666;">{a.multi_line()}</p>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn CustomerOverview(dash: CustomerDashboard) -> impl IntoView {
    view! {
        <div class="stats">
            <StatCard label="Total Orders" value=dash.total_orders.to_string()/>
            <StatCard label="Active Orders" value=dash.active_orders.to_string()/>
            <StatCard label="Total Spent" value=dash.total_spent.display()/>
            <StatCard label="Wishlist" value=dash.wishlist_count.to_string()/>
        </div>
        <h3>"Recent Orders"</h3>
        {if dash.recent_orders.is_empty() {
            view! {
                <EmptyState
                    title="No orders yet"
                    message="Your orders will show up here."
                    href=Page::Marketplace.href()
                    cta="Start shopping"
                />
            }
            .into_any()
        } else {
            view! { <OrdersTable orders=dash.recent_orders/> }.into_any()
        }}
    }
}
