//! Search module.
//!
//! Contains filters, sorts and pagination for the catalog views and the
//! artisan order table.

mod filter;
mod query;
mod results;

pub use filter::{Choice, Filter};
pub use query::{ArtisanQuery, ArtisanSort, OrderQuery, ProductSort, SearchQuery};
pub use results::{FacetValue, Pagination, SearchResults};
