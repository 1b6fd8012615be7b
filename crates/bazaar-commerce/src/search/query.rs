//! Query builders for the marketplace, the artisan directory and the
//! artisan order table.
//!
//! All filtering is conjunctive and every sort is a stable single-key sort,
//! so ties keep their catalog order.

use std::cmp::Reverse;

use crate::catalog::{Artisan, Product};
use crate::checkout::{Order, OrderStatus};
use crate::ids::ArtisanId;
use crate::search::{Choice, FacetValue, Filter, Pagination, SearchResults};
use serde::{Deserialize, Serialize};

/// Sort options for the marketplace grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by best selling.
    BestSelling,
}

impl ProductSort {
    pub const ALL: [ProductSort; 5] = [
        ProductSort::Featured,
        ProductSort::PriceAsc,
        ProductSort::PriceDesc,
        ProductSort::Rating,
        ProductSort::BestSelling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSort::Featured => "featured",
            ProductSort::PriceAsc => "price_asc",
            ProductSort::PriceDesc => "price_desc",
            ProductSort::Rating => "rating",
            ProductSort::BestSelling => "best_selling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductSort::Featured => "Featured",
            ProductSort::PriceAsc => "Price: Low to High",
            ProductSort::PriceDesc => "Price: High to Low",
            ProductSort::Rating => "Highest Rated",
            ProductSort::BestSelling => "Best Selling",
        }
    }

    /// Parse a select value, defaulting to `Featured`.
    pub fn from_select(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }

    fn sort(&self, products: &mut [&Product]) {
        match self {
            ProductSort::Featured => {}
            ProductSort::PriceAsc => products.sort_by_key(|p| p.price.amount),
            ProductSort::PriceDesc => products.sort_by_key(|p| Reverse(p.price.amount)),
            ProductSort::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            ProductSort::BestSelling => products.sort_by_key(|p| Reverse(p.sales_count)),
        }
    }
}

/// A marketplace search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// Text query.
    pub query: Option<String>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: ProductSort,
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: ProductSort::Featured,
            page: 1,
            per_page: 12,
        }
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Restrict to a category unless the choice is "all".
    pub fn with_category(self, category: &Choice<String>) -> Self {
        match category {
            Choice::All => self,
            Choice::Only(slug) => self.with_filter(Filter::category(slug.clone())),
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: usize, per_page: usize) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Filter, sort and paginate. Facets count categories over the full
    /// filtered set, before pagination.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<&'a Product> {
        let mut hits: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        self.sort.sort(&mut hits);

        let facets = category_facets(&hits, &self.filters);
        let pagination = Pagination::new(self.page, self.per_page, hits.len());
        let items = hits
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page)
            .collect();
        SearchResults::new(items, pagination).with_facets(facets)
    }
}

fn category_facets(hits: &[&Product], filters: &[Filter]) -> Vec<FacetValue> {
    let mut facets: Vec<FacetValue> = Vec::new();
    for product in hits {
        match facets.iter_mut().find(|f| f.value == product.category) {
            Some(facet) => facet.count += 1,
            None => facets.push(FacetValue {
                value: product.category.clone(),
                count: 1,
                selected: filters
                    .iter()
                    .any(|f| matches!(f, Filter::Category(c) if c == &product.category)),
            }),
        }
    }
    facets
}

/// Sort keys for the artisan directory, all descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArtisanSort {
    /// Total sales.
    #[default]
    Popularity,
    /// Years of experience.
    Experience,
    /// Average rating.
    Rating,
    /// Listed products.
    ProductCount,
}

impl ArtisanSort {
    pub const ALL: [ArtisanSort; 4] = [
        ArtisanSort::Popularity,
        ArtisanSort::Experience,
        ArtisanSort::Rating,
        ArtisanSort::ProductCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtisanSort::Popularity => "popularity",
            ArtisanSort::Experience => "experience",
            ArtisanSort::Rating => "rating",
            ArtisanSort::ProductCount => "products",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArtisanSort::Popularity => "Most Popular",
            ArtisanSort::Experience => "Most Experienced",
            ArtisanSort::Rating => "Highest Rated",
            ArtisanSort::ProductCount => "Most Products",
        }
    }

    pub fn from_select(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or_default()
    }
}

/// Artisan directory filters and sort.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtisanQuery {
    /// Matched against name or specialty.
    pub text: String,
    pub category: Choice<String>,
    pub region: Choice<String>,
    pub sort: ArtisanSort,
}

impl ArtisanQuery {
    pub fn matches(&self, artisan: &Artisan) -> bool {
        artisan.matches_text(&self.text)
            && self.category.accepts(&artisan.category)
            && self.region.accepts(&artisan.region)
    }

    pub fn run<'a>(&self, artisans: &'a [Artisan]) -> Vec<&'a Artisan> {
        let mut hits: Vec<&Artisan> = artisans.iter().filter(|a| self.matches(a)).collect();
        match self.sort {
            ArtisanSort::Popularity => hits.sort_by_key(|a| Reverse(a.total_sales)),
            ArtisanSort::Experience => hits.sort_by_key(|a| Reverse(a.years_experience)),
            ArtisanSort::Rating => hits.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            ArtisanSort::ProductCount => hits.sort_by_key(|a| Reverse(a.product_count)),
        }
        hits
    }
}

/// Filters for an artisan's order table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderQuery {
    /// Matched against order id or customer name.
    pub text: String,
    pub status: Choice<OrderStatus>,
}

impl OrderQuery {
    pub fn matches(&self, order: &Order) -> bool {
        order.matches_text(&self.text) && self.status.accepts(&order.status)
    }

    /// The artisan's matching orders, newest first.
    pub fn run<'a>(&self, orders: &'a [Order], artisan_id: &ArtisanId) -> Vec<&'a Order> {
        let mut hits: Vec<&Order> = orders
            .iter()
            .filter(|o| o.involves_artisan(artisan_id) && self.matches(o))
            .collect();
        hits.sort_by_key(|o| Reverse(o.placed_at));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::sample_product;
    use crate::catalog::test_artisan;
    use crate::checkout::order::tests::sample_order;
    use crate::ids::{OrderId, ProductId};
    use crate::money::Money;
    use chrono::Duration;

    fn products() -> Vec<Product> {
        let specs = [
            ("p1", "textiles", 2499, 4.8, 310, 7),
            ("p2", "pottery", 899, 4.5, 120, 0),
            ("p3", "pottery", 1599, 4.9, 80, 12),
            ("p4", "metalwork", 899, 4.2, 450, 3),
        ];
        specs
            .iter()
            .map(|(id, cat, price, rating, sales, stock)| {
                let mut p = sample_product();
                p.id = ProductId::new(*id);
                p.name = format!("Product {}", id);
                p.category = cat.to_string();
                p.price = Money::inr(*price);
                p.rating = *rating;
                p.sales_count = *sales;
                p.stock = *stock;
                p
            })
            .collect()
    }

    fn ids(results: &[&Product]) -> Vec<String> {
        results.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_featured_keeps_catalog_order() {
        let products = products();
        let results = SearchQuery::new().run(&products);
        assert_eq!(ids(&results.items), vec!["p1", "p2", "p3", "p4"]);
        assert_eq!(results.pagination.total, 4);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = products();
        let asc = SearchQuery::new().with_sort(ProductSort::PriceAsc).run(&products);
        assert_eq!(ids(&asc.items), vec!["p2", "p4", "p3", "p1"]);
        let desc = SearchQuery::new().with_sort(ProductSort::PriceDesc).run(&products);
        assert_eq!(ids(&desc.items), vec!["p1", "p3", "p2", "p4"]);
    }

    #[test]
    fn test_rating_and_best_selling() {
        let products = products();
        let rated = SearchQuery::new().with_sort(ProductSort::Rating).run(&products);
        assert_eq!(ids(&rated.items)[0], "p3");
        let best = SearchQuery::new().with_sort(ProductSort::BestSelling).run(&products);
        assert_eq!(ids(&best.items)[0], "p4");
    }

    #[test]
    fn test_conjunctive_filters_and_facets() {
        let products = products();
        let results = SearchQuery::new()
            .with_category(&Choice::from_select("pottery"))
            .with_filter(Filter::InStock)
            .run(&products);
        assert_eq!(ids(&results.items), vec!["p3"]);
        assert_eq!(results.facets.len(), 1);
        assert!(results.facets[0].selected);

        let all = SearchQuery::new().with_category(&Choice::All).run(&products);
        let pottery = all.facets.iter().find(|f| f.value == "pottery").unwrap();
        assert_eq!(pottery.count, 2);
    }

    #[test]
    fn test_pagination() {
        let products = products();
        let page = SearchQuery::new().with_pagination(2, 3).run(&products);
        assert_eq!(ids(&page.items), vec!["p4"]);
        assert!(page.pagination.has_prev);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[test]
    fn test_artisan_directory() {
        let mut a = test_artisan("a1", "Meera Devi", "Block Printing");
        a.total_sales = 50;
        a.years_experience = 20;
        let mut b = test_artisan("a2", "Ravi Kumar", "Blue Pottery");
        b.category = "pottery".to_string();
        b.total_sales = 90;
        b.years_experience = 20;
        let mut c = test_artisan("a3", "Lakshmi", "Kalamkari");
        c.total_sales = 90;
        c.region = "Andhra Pradesh".to_string();
        let artisans = vec![a, b, c];

        let popular: Vec<&str> = ArtisanQuery::default()
            .run(&artisans)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(popular, vec!["a2", "a3", "a1"]);

        let experienced = ArtisanQuery {
            sort: ArtisanSort::Experience,
            ..Default::default()
        };
        let ids: Vec<&str> = experienced.run(&artisans).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "a3"]);

        let filtered = ArtisanQuery {
            text: "blue".to_string(),
            category: Choice::from_select("pottery"),
            region: Choice::from_select("Rajasthan"),
            sort: ArtisanSort::Rating,
        };
        assert_eq!(filtered.run(&artisans).len(), 1);
    }

    #[test]
    fn test_artisan_rating_and_product_count_sorts() {
        let specs = [("a1", 4.8, 3), ("a2", 4.9, 8), ("a3", 4.8, 3), ("a4", 4.6, 8)];
        let artisans: Vec<Artisan> = specs
            .iter()
            .map(|(id, rating, count)| {
                let mut a = test_artisan(id, &format!("Artisan {}", id), "Weaving");
                a.rating = *rating;
                a.product_count = *count;
                a
            })
            .collect();

        fn sorted(artisans: &[Artisan], sort: ArtisanSort) -> Vec<&str> {
            ArtisanQuery {
                sort,
                ..Default::default()
            }
            .run(artisans)
            .into_iter()
            .map(|a| a.id.as_str())
            .collect()
        }

        // Ties keep directory order.
        assert_eq!(sorted(&artisans, ArtisanSort::Rating), vec!["a2", "a1", "a3", "a4"]);
        assert_eq!(
            sorted(&artisans, ArtisanSort::ProductCount),
            vec!["a2", "a4", "a1", "a3"]
        );
    }

    #[test]
    fn test_order_query_newest_first() {
        let older = sample_order();
        let mut newer = sample_order();
        newer.id = OrderId::new("ORD-1002");
        newer.placed_at = older.placed_at + Duration::days(1);
        newer.status = OrderStatus::Shipped;
        let orders = vec![older, newer];
        let artisan = ArtisanId::new("a-meera");

        let all = OrderQuery::default().run(&orders, &artisan);
        assert_eq!(all[0].id.as_str(), "ORD-1002");

        let shipped = OrderQuery {
            status: Choice::Only(OrderStatus::Shipped),
            ..Default::default()
        };
        assert_eq!(shipped.run(&orders, &artisan).len(), 1);
        assert!(OrderQuery::default().run(&orders, &ArtisanId::new("a-x")).is_empty());
    }
}
