//! Search filter types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A dropdown value that is either "all" or one specific choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// Whether a value passes this choice.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl Choice<String> {
    /// Parse a select value; `"all"` and the empty string mean no restriction.
    pub fn from_select(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Choice::All
        } else {
            Choice::Only(value.to_string())
        }
    }

    /// The select value this choice renders as.
    pub fn as_select(&self) -> &str {
        match self {
            Choice::All => "all",
            Choice::Only(v) => v,
        }
    }
}

/// A marketplace product filter. Filters in a query are conjunctive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category slug.
    Category(String),
    /// Filter by price range (inclusive).
    PriceRange {
        min: Option<Money>,
        max: Option<Money>,
    },
    /// Only show in-stock items.
    InStock,
    /// Only show items that ship free.
    FreeShipping,
    /// Filter by tag.
    Tag(String),
    /// Filter by minimum rating.
    Rating { min: f32 },
    /// Substring search in name, description and tags.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(slug: impl Into<String>) -> Self {
        Filter::Category(slug.into())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<Money>, max: Option<Money>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a tag filter.
    pub fn tag(tag: impl Into<String>) -> Self {
        Filter::Tag(tag.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(slug) => &product.category == slug,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |m| product.price.amount >= m.amount)
                    && max.map_or(true, |m| product.price.amount <= m.amount)
            }
            Filter::InStock => product.is_in_stock(),
            Filter::FreeShipping => product.free_shipping,
            Filter::Tag(tag) => product.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)),
            Filter::Rating { min } => product.rating >= *min,
            Filter::Text(query) => product.matches_text(query),
        }
    }
}
