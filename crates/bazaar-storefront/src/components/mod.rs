//! Shared view components.

mod common;
mod image;
mod layout;
mod order;
mod product;

pub use common::{EmptyState, Rating, StatCard, SummaryRows};
pub use image::OptimizedImage;
pub use layout::{Footer, Header};
pub use order::{OrderItemsList, OrdersTable, StatusBadge, TimelineView};
pub use product::{ArtisanCard, ProductCard, ProductGrid, ProductGridSkeleton};
