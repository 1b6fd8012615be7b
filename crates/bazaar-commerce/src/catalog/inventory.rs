//! Artisan inventory board.
//!
//! Rows are projections of the artisan's products. Edits only touch the
//! local board and are applied through [`InventoryBoard::reduce`].

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::Choice;
use serde::{Deserialize, Serialize};

/// Stock status shown as a badge in the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    /// Parse the `as_str` form.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// One product line on the inventory board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryRow {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: Money,
    /// Units on hand, never negative.
    pub stock: i64,
    /// Stock at or below this level is low.
    pub low_stock_threshold: i64,
    /// Units sold to date.
    pub sold: u64,
}

impl InventoryRow {
    /// Project a product onto a board row.
    pub fn from_product(product: &Product, low_stock_threshold: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.primary_image().unwrap_or_default().to_string(),
            price: product.price,
            stock: product.stock.max(0),
            low_stock_threshold,
            sold: product.sales_count,
        }
    }

    pub fn status(&self) -> StockStatus {
        if self.stock <= 0 {
            StockStatus::OutOfStock
        } else if self.stock <= self.low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Low or out of stock; both need the artisan's attention.
    pub fn needs_restock(&self) -> bool {
        self.status() != StockStatus::InStock
    }

    /// Value of the units on hand.
    pub fn stock_value(&self) -> Result<Money, CommerceError> {
        self.price.try_multiply(self.stock)
    }
}

/// An edit on the inventory board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryAction {
    /// Replace the stock count.
    SetStock { product_id: ProductId, stock: i64 },
    /// Add or remove units; the result is floored at zero.
    AdjustStock { product_id: ProductId, delta: i64 },
    /// Replace the unit price (same currency).
    SetPrice { product_id: ProductId, amount: i64 },
}

/// The artisan's inventory table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryBoard {
    rows: Vec<InventoryRow>,
    last_error: Option<String>,
}

impl InventoryBoard {
    pub fn new(rows: Vec<InventoryRow>) -> Self {
        Self {
            rows,
            last_error: None,
        }
    }

    /// Build a board from an artisan's products.
    pub fn from_products<'a>(
        products: impl IntoIterator<Item = &'a Product>,
        low_stock_threshold: i64,
    ) -> Self {
        Self::new(
            products
                .into_iter()
                .map(|p| InventoryRow::from_product(p, low_stock_threshold))
                .collect(),
        )
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn row(&self, product_id: &ProductId) -> Option<&InventoryRow> {
        self.rows.iter().find(|r| &r.product_id == product_id)
    }

    /// Message from the last rejected edit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_stock(&mut self, product_id: &ProductId, stock: i64) -> Result<(), CommerceError> {
        if stock < 0 {
            return Err(invalid_edit(product_id, "stock cannot be negative"));
        }
        self.row_mut(product_id)?.stock = stock;
        tracing::info!(product_id = %product_id, stock, "Stock updated");
        Ok(())
    }

    pub fn adjust_stock(&mut self, product_id: &ProductId, delta: i64) -> Result<i64, CommerceError> {
        let row = self.row_mut(product_id)?;
        row.stock = row.stock.saturating_add(delta).max(0);
        let stock = row.stock;
        tracing::info!(product_id = %product_id, delta, stock, "Stock adjusted");
        Ok(stock)
    }

    pub fn set_price(&mut self, product_id: &ProductId, amount: i64) -> Result<(), CommerceError> {
        if amount <= 0 {
            return Err(invalid_edit(product_id, "price must be positive"));
        }
        let row = self.row_mut(product_id)?;
        row.price = Money::new(amount, row.price.currency);
        tracing::info!(product_id = %product_id, amount, "Price updated");
        Ok(())
    }

    /// Apply an edit, returning the next board. Rejected edits leave the
    /// rows untouched and record the error message.
    pub fn reduce(&self, action: InventoryAction) -> InventoryBoard {
        let mut next = self.clone();
        let result = match &action {
            InventoryAction::SetStock { product_id, stock } => next.set_stock(product_id, *stock),
            InventoryAction::AdjustStock { product_id, delta } => {
                next.adjust_stock(product_id, *delta).map(|_| ())
            }
            InventoryAction::SetPrice { product_id, amount } => next.set_price(product_id, *amount),
        };
        match result {
            Ok(()) => {
                next.last_error = None;
                next
            }
            Err(e) => {
                tracing::warn!(action = ?action, error = %e, "Inventory edit rejected");
                let mut unchanged = self.clone();
                unchanged.last_error = Some(e.to_string());
                unchanged
            }
        }
    }

    /// Rows matching a name search and a status choice, in board order.
    pub fn filter(&self, text: &str, status: &Choice<StockStatus>) -> Vec<&InventoryRow> {
        let needle = text.trim().to_lowercase();
        self.rows
            .iter()
            .filter(|r| needle.is_empty() || r.name.to_lowercase().contains(&needle))
            .filter(|r| status.accepts(&r.status()))
            .collect()
    }

    /// Rows that are low or out of stock.
    pub fn low_stock(&self) -> Vec<&InventoryRow> {
        self.rows.iter().filter(|r| r.needs_restock()).collect()
    }

    pub fn count_by_status(&self, status: StockStatus) -> usize {
        self.rows.iter().filter(|r| r.status() == status).count()
    }

    fn row_mut(&mut self, product_id: &ProductId) -> Result<&mut InventoryRow, CommerceError> {
        self.rows
            .iter_mut()
            .find(|r| &r.product_id == product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))
    }
}

fn invalid_edit(product_id: &ProductId, reason: &str) -> CommerceError {
    CommerceError::InvalidInventoryEdit {
        product_id: product_id.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product::tests::sample_product;

    fn board() -> InventoryBoard {
        let mut vase = sample_product();
        vase.id = ProductId::new("p-vase");
        vase.name = "Blue Pottery Vase".to_string();
        vase.stock = 0;
        let mut lamp = sample_product();
        lamp.id = ProductId::new("p-lamp");
        lamp.name = "Brass Diya Lamp".to_string();
        lamp.stock = 40;
        InventoryBoard::from_products([&sample_product(), &vase, &lamp], 7)
    }

    #[test]
    fn test_stock_status_select_values() {
        for status in StockStatus::ALL {
            assert_eq!(StockStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(StockStatus::from_str_opt("all"), None);
    }

    #[test]
    fn test_status_thresholds() {
        let board = board();
        assert_eq!(board.rows()[0].status(), StockStatus::LowStock);
        assert_eq!(board.rows()[1].status(), StockStatus::OutOfStock);
        assert_eq!(board.rows()[2].status(), StockStatus::InStock);
        assert_eq!(board.low_stock().len(), 2);
    }

    #[test]
    fn test_adjust_stock_floors_at_zero() {
        let mut board = board();
        let id = ProductId::new("p-saree");
        assert_eq!(board.adjust_stock(&id, 3).unwrap(), 10);
        assert_eq!(board.adjust_stock(&id, -25).unwrap(), 0);
        assert_eq!(board.row(&id).unwrap().status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_reduce_rejects_invalid_edits() {
        let board = board();
        let id = ProductId::new("p-saree");

        let next = board.reduce(InventoryAction::SetStock {
            product_id: id.clone(),
            stock: -1,
        });
        assert_eq!(next.rows(), board.rows());
        assert!(next.last_error().is_some());

        let next = next.reduce(InventoryAction::SetPrice {
            product_id: id.clone(),
            amount: 0,
        });
        assert_eq!(next.row(&id).unwrap().price, Money::inr(2499));

        let next = next.reduce(InventoryAction::SetPrice {
            product_id: id.clone(),
            amount: 2799,
        });
        assert_eq!(next.row(&id).unwrap().price, Money::inr(2799));
        assert!(next.last_error().is_none());
    }

    #[test]
    fn test_unknown_product() {
        let next = board().reduce(InventoryAction::AdjustStock {
            product_id: ProductId::new("missing"),
            delta: 1,
        });
        assert!(next.last_error().unwrap().contains("missing"));
    }

    #[test]
    fn test_filter() {
        let board = board();
        assert_eq!(board.filter("", &Choice::All).len(), 3);
        assert_eq!(board.filter("brass", &Choice::All).len(), 1);
        let out = board.filter("", &Choice::Only(StockStatus::OutOfStock));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Blue Pottery Vase");
        assert_eq!(board.count_by_status(StockStatus::InStock), 1);
    }
}
