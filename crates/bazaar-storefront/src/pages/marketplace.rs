use std::time::Duration;

use bazaar_commerce::prelude::*;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use crate::components::{EmptyState, ProductGrid, ProductGridSkeleton};
use crate::routes::Page;
use crate::state::use_shop;

/// Price bands offered in the filter sidebar, as (value, label, min, max).
const PRICE_BANDS: &[(&str, &str, Option<i64>, Option<i64>)] = &[
    ("under-1000", "Under ₹1,000", None, Some(999)),
    ("1000-3000", "₹1,000 - ₹3,000", Some(1000), Some(3000)),
    ("over-3000", "Over ₹3,000", Some(3001), None),
];

const RATINGS: &[(&str, &str, f32)] = &[("4", "4★ & up", 4.0), ("4.5", "4.5★ & up", 4.5)];

/// Filter state of the marketplace sidebar.
#[derive(Debug, Clone, PartialEq, Default)]
struct Filters {
    text: String,
    category: Choice<String>,
    price_band: Choice<String>,
    min_rating: Choice<String>,
    in_stock: bool,
    free_shipping: bool,
    sort: ProductSort,
    page: usize,
}

impl Filters {
    fn to_query(&self, currency: Currency, per_page: usize) -> SearchQuery {
        let mut query = SearchQuery::new()
            .with_query(self.text.clone())
            .with_category(&self.category)
            .with_sort(self.sort)
            .with_pagination(self.page, per_page);

        if let Choice::Only(band) = &self.price_band {
            if let Some((_, _, min, max)) = PRICE_BANDS.iter().find(|(v, ..)| v == band) {
                query = query.with_filter(Filter::price_range(
                    min.map(|m| Money::new(m, currency)),
                    max.map(|m| Money::new(m, currency)),
                ));
            }
        }
        if let Choice::Only(rating) = &self.min_rating {
            if let Some((_, _, min)) = RATINGS.iter().find(|(v, ..)| v == rating) {
                query = query.with_filter(Filter::Rating { min: *min });
            }
        }
        if self.in_stock {
            query = query.with_filter(Filter::InStock);
        }
        if self.free_shipping {
            query = query.with_filter(Filter::FreeShipping);
        }
        query
    }
}

/// Product listing with search, filters, sort and pagination.
#[component]
pub fn MarketplacePage() -> impl IntoView {
    let shop = use_shop();
    let url_query = use_query_map();
    let initial_category = url_query
        .with_untracked(|q| q.get("category"))
        .map(|c| Choice::from_select(&c))
        .unwrap_or_default();

    let filters = RwSignal::new(Filters {
        category: initial_category,
        page: 1,
        ..Filters::default()
    });
    // Every filter change starts again from the first page.
    let update = move |f: fn(&mut Filters, String), value: String| {
        filters.update(|state| {
            f(state, value);
            state.page = 1;
        });
    };

    let currency = shop.currency();
    let per_page = shop.config.search.per_page;
    let query = Memo::new(move |_| filters.with(|f| f.to_query(currency, per_page)));

    // Simulated search latency behind the skeleton grid. A newer search
    // replaces the pending timer; leaving the page clears it.
    let loading = RwSignal::new(false);
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let delay = Duration::from_millis(shop.config.search.loading_delay_ms);
    Effect::new(move |_| {
        query.track();
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        loading.set(true);
        match set_timeout_with_handle(move || loading.set(false), delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => loading.set(false),
        }
    });
    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    let categories = shop.store.categories().to_vec();
    let store = shop.store.clone();
    let results = move || {
        if loading.get() {
            return view! { <ProductGridSkeleton/> }.into_any();
        }
        let results = query.with(|q| q.run(store.products()).map(Product::clone));
        if results.is_empty() {
            return view! {
                <EmptyState
                    title="No products found"
                    message="Try a different search or clear some filters."
                    href=Page::Marketplace.href()
                    cta="Clear filters"
                />
            }
            .into_any();
        }
        let pagination = results.pagination;
        let pages = pagination
            .page_numbers(5)
            .into_iter()
            .map(|n| {
                view! {
                    <button
                        class:active=n == pagination.page
                        on:click=move |_| filters.update(|f| f.page = n)
                    >
                        {n.to_string()}
                    </button>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <p style="color: #666; margin-bottom: 1rem;">
                "Showing " {pagination.start_item().to_string()} "-" {pagination.end_item().to_string()}
                " of " {pagination.total.to_string()} " products"
            </p>
            <ProductGrid products=results.items/>
            <div class="pagination">
                <button
                    disabled=!pagination.has_prev
                    on:click=move |_| filters.update(|f| f.page = pagination.page - 1)
                >
                    "Previous"
                </button>
                {pages}
                <button
                    disabled=!pagination.has_next
                    on:click=move |_| filters.update(|f| f.page = pagination.page + 1)
                >
                    "Next"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <Title text=Page::Marketplace.title()/>
        <h2>"Marketplace"</h2>
        <div style="display: grid; grid-template-columns: 240px 1fr; gap: 2rem;">
            <aside class="filters">
                <input
                    type="search"
                    placeholder="Search products, crafts, materials"
                    prop:value=move || filters.with(|f| f.text.clone())
                    on:input=move |ev| update(|f, v| f.text = v, event_target_value(&ev))
                />

                <h4>"Category"</h4>
                <select
                    prop:value=move || filters.with(|f| f.category.as_select().to_string())
                    on:change=move |ev| update(|f, v| f.category = Choice::from_select(&v), event_target_value(&ev))
                >
                    <option value="all">"All categories"</option>
                    {categories.into_iter().map(|c| view! {
                        <option value=c.slug.clone()>{c.name}</option>
                    }).collect::<Vec<_>>()}
                </select>

                <h4>"Price"</h4>
                <select
                    prop:value=move || filters.with(|f| f.price_band.as_select().to_string())
                    on:change=move |ev| update(|f, v| f.price_band = Choice::from_select(&v), event_target_value(&ev))
                >
                    <option value="all">"Any price"</option>
                    {PRICE_BANDS.iter().map(|(value, label, ..)| view! {
                        <option value=*value>{*label}</option>
                    }).collect::<Vec<_>>()}
                </select>

                <h4>"Rating"</h4>
                <select
                    prop:value=move || filters.with(|f| f.min_rating.as_select().to_string())
                    on:change=move |ev| update(|f, v| f.min_rating = Choice::from_select(&v), event_target_value(&ev))
                >
                    <option value="all">"Any rating"</option>
                    {RATINGS.iter().map(|(value, label, _)| view! {
                        <option value=*value>{*label}</option>
                    }).collect::<Vec<_>>()}
                </select>

                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.in_stock)
                        on:change=move |ev| update(|f, v| f.in_stock = v == "true", event_target_checked(&ev).to_string())
                    />
                    " In stock only"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || filters.with(|f| f.free_shipping)
                        on:change=move |ev| update(|f, v| f.free_shipping = v == "true", event_target_checked(&ev).to_string())
                    />
                    " Free shipping"
                </label>
            </aside>

            <section>
                <div style="display: flex; justify-content: flex-end; margin-bottom: 1rem;">
                    <select
                        prop:value=move || filters.with(|f| f.sort.as_str())
                        on:change=move |ev| update(|f, v| f.sort = ProductSort::from_select(&v), event_target_value(&ev))
                    >
                        {ProductSort::ALL.into_iter().map(|s| view! {
                            <option value=s.as_str()>{s.display_name()}</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                {results}
            </section>
        </div>
    }
}
