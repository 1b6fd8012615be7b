//! Product types.

use std::collections::BTreeMap;

use crate::error::CommerceError;
use crate::ids::{ArtisanId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A handmade product listed by an artisan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Maker of the product.
    pub artisan_id: ArtisanId,
    /// Product name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Category slug.
    pub category: String,
    /// Current selling price.
    pub price: Money,
    /// Price before markdown.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Average review rating (0-5).
    pub rating: f32,
    /// Number of reviews.
    pub review_count: u32,
    /// Units in stock.
    pub stock: i64,
    /// Image paths, first is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Selectable options such as size or color.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Ships without the flat fee.
    #[serde(default)]
    pub free_shipping: bool,
    /// Delivery estimate text.
    pub estimated_delivery: String,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Units sold to date.
    #[serde(default)]
    pub sales_count: u64,
    /// Shown on the home page.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Check if the product can be added to the cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if the product is marked down.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount > self.price.amount)
            .unwrap_or(false)
    }

    /// Whole-number discount percentage when on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.amount <= self.price.amount || original.amount <= 0 {
            return None;
        }
        let savings = original.amount - self.price.amount;
        Some(((savings as f64 / original.amount as f64) * 100.0).round() as u32)
    }

    /// Primary image path.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// First value of every option; the preselected choices on the detail page.
    pub fn default_selection(&self) -> BTreeMap<String, String> {
        self.options
            .iter()
            .filter_map(|o| o.values.first().map(|v| (o.name.clone(), v.clone())))
            .collect()
    }

    /// Check that a selection names every option with one of its values.
    pub fn validate_selection(
        &self,
        selection: &BTreeMap<String, String>,
    ) -> Result<(), CommerceError> {
        for option in &self.options {
            match selection.get(&option.name) {
                Some(value) if option.values.contains(value) => {}
                Some(value) => {
                    return Err(CommerceError::InvalidSelection(format!(
                        "{} is not a valid {} for {}",
                        value, option.name, self.name
                    )))
                }
                None => {
                    return Err(CommerceError::InvalidSelection(format!(
                        "choose a {} for {}",
                        option.name.to_lowercase(),
                        self.name
                    )))
                }
            }
        }
        if let Some(extra) = selection
            .keys()
            .find(|k| !self.options.iter().any(|o| &o.name == *k))
        {
            return Err(CommerceError::InvalidSelection(format!(
                "{} has no option {}",
                self.name, extra
            )));
        }
        Ok(())
    }

    /// Case-insensitive substring match against name, description and tags.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}

/// A selectable option (e.g., Size: S/M/L).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProductOption {
    /// Option name (e.g., "Size", "Color").
    pub name: String,
    /// Allowed values.
    pub values: Vec<String>,
}

impl ProductOption {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_product() -> Product {
        Product {
            id: ProductId::new("p-saree"),
            artisan_id: ArtisanId::new("a-meera"),
            name: "Handwoven Ikat Saree".to_string(),
            description: "Double ikat silk woven on a pit loom".to_string(),
            category: "textiles".to_string(),
            price: Money::inr(2499),
            original_price: Some(Money::inr(3299)),
            rating: 4.8,
            review_count: 124,
            stock: 7,
            images: vec!["/images/products/ikat-saree.jpg".to_string()],
            options: vec![
                ProductOption::new("Color", vec!["Indigo".to_string(), "Madder".to_string()]),
                ProductOption::new("Blouse", vec!["Stitched".to_string(), "Unstitched".to_string()]),
            ],
            free_shipping: true,
            estimated_delivery: "5-7 business days".to_string(),
            tags: vec!["silk".to_string(), "handloom".to_string()],
            sales_count: 310,
            featured: true,
        }
    }

    #[test]
    fn test_sale_and_discount() {
        let product = sample_product();
        assert!(product.is_on_sale());
        assert_eq!(product.discount_percentage(), Some(24));
    }

    #[test]
    fn test_default_selection_is_valid() {
        let product = sample_product();
        let selection = product.default_selection();
        assert_eq!(selection.get("Color").map(String::as_str), Some("Indigo"));
        assert!(product.validate_selection(&selection).is_ok());
    }

    #[test]
    fn test_invalid_selection() {
        let product = sample_product();
        let mut selection = product.default_selection();
        selection.insert("Color".to_string(), "Neon".to_string());
        assert!(product.validate_selection(&selection).is_err());

        let mut missing = product.default_selection();
        missing.remove("Blouse");
        assert!(product.validate_selection(&missing).is_err());

        let mut extra = product.default_selection();
        extra.insert("Size".to_string(), "L".to_string());
        assert!(product.validate_selection(&extra).is_err());
    }

    #[test]
    fn test_text_match() {
        let product = sample_product();
        assert!(product.matches_text("IKAT"));
        assert!(product.matches_text("pit loom"));
        assert!(product.matches_text("handloom"));
        assert!(product.matches_text("   "));
        assert!(!product.matches_text("brass"));
    }
}
