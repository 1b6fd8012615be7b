//! Seller pages for the signed-in artisan.

use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EmptyState, OptimizedImage, OrdersTable, StatCard, StatusBadge};
use crate::routes::Page;
use crate::state::{use_shop, Shop};

const DASHBOARD_LIMIT: usize = 5;

fn inventory_board(shop: &Shop, artisan_id: &ArtisanId) -> InventoryBoard {
    InventoryBoard::from_products(
        shop.store.products_by_artisan(artisan_id),
        shop.config.inventory.low_stock_threshold,
    )
}

fn seller_nav(active: Page) -> impl IntoView {
    let links = [
        (Page::ArtisanDashboard, "Overview"),
        (Page::ArtisanOrders, "Orders"),
        (Page::ArtisanInventory, "Inventory"),
    ];
    view! {
        <nav class="seller-nav">
            {links.into_iter().map(|(page, label)| {
                let current = page == active;
                view! { <a href=page.href() class:active=current>{label}</a> }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[component]
pub fn ArtisanDashboardPage() -> impl IntoView {
    let shop = use_shop();
    let artisan_id = shop.store.current_artisan_id().clone();
    let name = shop
        .store
        .artisan(&artisan_id)
        .map(|a| a.name.clone())
        .unwrap_or_default();

    let content = move || {
        let orders = shop.all_orders();
        let mine = orders.iter().filter(|o| o.involves_artisan(&artisan_id));
        let board = inventory_board(&shop, &artisan_id);
        let products = shop.store.products_by_artisan(&artisan_id);
        match ArtisanDashboard::build(mine, products, &board, DASHBOARD_LIMIT, shop.currency()) {
            Ok(dash) => view! { <ArtisanOverview dash=dash artisan=artisan_id.clone()/> }.into_any(),
            Err(e) => {
                tracing::error!(error = %e, "artisan dashboard failed");
                view! { <p style="color: red;">"Error loading dashboard: " {e.to_string()}</p> }.into_any()
            }
        }
    };

    view! {
        <Title text=Page::ArtisanDashboard.title()/>
        <h2>"Namaste, " {name}</h2>
        {seller_nav(Page::ArtisanDashboard)}
        {content}
    }
}

#[component]
fn ArtisanOverview(dash: ArtisanDashboard, artisan: ArtisanId) -> impl IntoView {
    let by_status = dash
        .orders_by_status
        .iter()
        .map(|(status, count)| {
            view! {
                <li>
                    <StatusBadge status=*status/>
                    " " {count.to_string()}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let low_stock = dash
        .low_stock
        .iter()
        .map(|row| {
            let status = row.status();
            view! {
                <li>
                    {row.name.clone()} " - "
                    <span class=format!("stock-{}", status.as_str())>
                        {status.display_name()} " (" {row.stock.to_string()} ")"
                    </span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let top = dash
        .top_products
        .iter()
        .map(|p| {
            view! {
                <tr>
                    <td>
                        <OptimizedImage src=p.image.clone() alt=p.name.clone() class="thumb"/>
                        <a href=Page::Product(p.product_id.clone()).href()>{p.name.clone()}</a>
                    </td>
                    <td>{p.sold.to_string()}</td>
                    <td>{p.revenue.display()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="stats">
            <StatCard label="Revenue" value=dash.revenue.display() hint="Excludes cancelled orders"/>
            <StatCard label="Total Orders" value=dash.total_orders.to_string()/>
            <StatCard label="Pending" value=dash.pending_orders.to_string() hint="Awaiting crafting"/>
            <StatCard label="Low Stock" value=dash.low_stock.len().to_string()/>
        </div>

        <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 2rem;">
            <section>
                <h3>"Orders by Status"</h3>
                <ul class="status-counts">{by_status}</ul>
            </section>
            <section>
                <h3>"Needs Restocking"</h3>
                {if low_stock.is_empty() {
                    view! { <p>"All products are well stocked."</p> }.into_any()
                } else {
                    view! {
                        <ul>{low_stock}</ul>
                        <a href=Page::ArtisanInventory.href()>"Manage inventory"</a>
                    }
                    .into_any()
                }}
            </section>
        </div>

        <h3>"Top Products"</h3>
        <table class="orders-table">
            <thead>
                <tr><th>"Product"</th><th>"Sold"</th><th>"Revenue"</th></tr>
            </thead>
            <tbody>{top}</tbody>
        </table>

        <h3>"Recent Orders"</h3>
        <OrdersTable orders=dash.recent_orders artisan=artisan/>
        <a href=Page::ArtisanOrders.href()>"View all orders"</a>
    }
}

// ============================================================================
// Orders
// ============================================================================

#[component]
pub fn ArtisanOrdersPage() -> impl IntoView {
    let shop = use_shop();
    let artisan_id = shop.store.current_artisan_id().clone();
    let query = RwSignal::new(OrderQuery::default());

    let table = move || {
        let orders = shop.all_orders();
        let hits: Vec<Order> = query.with(|q| q.run(&orders, &artisan_id).into_iter().cloned().collect());
        if hits.is_empty() {
            return view! {
                <EmptyState
                    title="No orders match"
                    message="Try another status or search term."
                    href=Page::ArtisanOrders.href()
                    cta="Show all orders"
                />
            }
            .into_any();
        }
        view! {
            <p style="color: #666;">{hits.len().to_string()} " orders"</p>
            <OrdersTable orders=hits artisan=artisan_id.clone()/>
        }
        .into_any()
    };

    view! {
        <Title text=Page::ArtisanOrders.title()/>
        <h2>"Orders"</h2>
        {seller_nav(Page::ArtisanOrders)}
        <div class="toolbar" style="display: flex; gap: 1rem; margin: 1rem 0;">
            <input
                type="search"
                placeholder="Search by order number or customer"
                prop:value=move || query.with(|q| q.text.clone())
                on:input=move |ev| query.update(|q| q.text = event_target_value(&ev))
            />
            <select
                prop:value=move || query.with(|q| match q.status {
                    Choice::All => "all",
                    Choice::Only(status) => status.as_str(),
                })
                on:change=move |ev| query.update(|q| {
                    q.status = OrderStatus::from_str_opt(&event_target_value(&ev))
                        .map_or(Choice::All, Choice::Only);
                })
            >
                <option value="all">"All statuses"</option>
                {OrderStatus::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str()>{s.display_name()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
        {table}
    }
}

// ============================================================================
// Inventory
// ============================================================================

#[component]
pub fn ArtisanInventoryPage() -> impl IntoView {
    let shop = use_shop();
    let artisan_id = shop.store.current_artisan_id().clone();
    let board = RwSignal::new(inventory_board(&shop, &artisan_id));
    let text = RwSignal::new(String::new());
    let status = RwSignal::new(Choice::<StockStatus>::All);

    let edit = move |action: InventoryAction| board.update(|b| *b = b.reduce(action));

    let counts = move || {
        board.with(|b| {
            StockStatus::ALL
                .into_iter()
                .map(|s| view! { <StatCard label=s.display_name() value=b.count_by_status(s).to_string()/> })
                .collect::<Vec<_>>()
        })
    };

    let rows = move || {
        let visible: Vec<InventoryRow> = board.with(|b| {
            status.with(|s| b.filter(&text.get(), s).into_iter().cloned().collect())
        });
        if visible.is_empty() {
            return view! { <tr><td colspan="6">"No products match."</td></tr> }.into_any();
        }
        visible
            .into_iter()
            .map(|row| view! { <InventoryLine row=row edit=edit/> })
            .collect::<Vec<_>>()
            .into_any()
    };

    let error = move || {
        board.with(|b| b.last_error().map(str::to_string)).map(|message| {
            view! { <div class="alert" role="alert">{message}</div> }
        })
    };

    view! {
        <Title text=Page::ArtisanInventory.title()/>
        <h2>"Inventory"</h2>
        {seller_nav(Page::ArtisanInventory)}
        <div class="stats">{counts}</div>
        <div class="toolbar" style="display: flex; gap: 1rem; margin: 1rem 0;">
            <input
                type="search"
                placeholder="Search products"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <select
                prop:value=move || status.with(|s| match s {
                    Choice::All => "all",
                    Choice::Only(s) => s.as_str(),
                })
                on:change=move |ev| status.set(
                    StockStatus::from_str_opt(&event_target_value(&ev)).map_or(Choice::All, Choice::Only),
                )
            >
                <option value="all">"All stock levels"</option>
                {StockStatus::ALL.into_iter().map(|s| view! {
                    <option value=s.as_str()>{s.display_name()}</option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
        {error}
        <table class="inventory-table">
            <thead>
                <tr>
                    <th>"Product"</th>
                    <th>"Price"</th>
                    <th>"Stock"</th>
                    <th>"Status"</th>
                    <th>"Sold"</th>
                    <th>"Stock Value"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

#[component]
fn InventoryLine(
    row: InventoryRow,
    edit: impl Fn(InventoryAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let status = row.status();
    let value = row.stock_value().map(|m| m.display()).unwrap_or_default();
    let (price_id, stock_id, minus_id, plus_id) = (
        row.product_id.clone(),
        row.product_id.clone(),
        row.product_id.clone(),
        row.product_id.clone(),
    );

    view! {
        <tr>
            <td>
                <OptimizedImage src=row.image.clone() alt=row.name.clone() class="thumb"/>
                {row.name.clone()}
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    prop:value=row.price.amount.to_string()
                    on:change=move |ev| {
                        let amount = event_target_value(&ev).trim().parse().unwrap_or(0);
                        edit(InventoryAction::SetPrice { product_id: price_id.clone(), amount });
                    }
                />
            </td>
            <td>
                <button on:click=move |_| edit(InventoryAction::AdjustStock { product_id: minus_id.clone(), delta: -1 })>"-"</button>
                <input
                    type="number"
                    min="0"
                    prop:value=row.stock.to_string()
                    on:change=move |ev| {
                        let stock = event_target_value(&ev).trim().parse().unwrap_or(-1);
                        edit(InventoryAction::SetStock { product_id: stock_id.clone(), stock });
                    }
                />
                <button on:click=move |_| edit(InventoryAction::AdjustStock { product_id: plus_id.clone(), delta: 1 })>"+"</button>
            </td>
            <td class=format!("stock-{}", status.as_str())>{status.display_name()}</td>
            <td>{row.sold.to_string()}</td>
            <td>{value}</td>
        </tr>
    }
}
