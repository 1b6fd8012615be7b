//! Product catalog module.
//!
//! Contains types for artisans, products, categories, and the artisan
//! inventory board.

mod artisan;
mod category;
mod inventory;
pub(crate) mod product;

pub use artisan::Artisan;
pub use category::Category;
pub use inventory::{InventoryAction, InventoryBoard, InventoryRow, StockStatus};
pub use product::{Product, ProductOption};

#[cfg(test)]
pub(crate) use artisan::tests::artisan as test_artisan;
