//! The signed-in customer's account.

use crate::checkout::{PaymentMethod, SavedAddress};
use crate::ids::{ArtisanId, CustomerId, ProductId};
use serde::{Deserialize, Serialize};

/// Customer profile shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Date the customer joined, e.g. "2023-06-12".
    pub member_since: String,
    #[serde(default)]
    pub wishlist: Vec<ProductId>,
}

/// Everything the mock session knows about the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub customer: CustomerProfile,
    #[serde(default)]
    pub addresses: Vec<SavedAddress>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    /// Artisan whose dashboard the seller pages show.
    pub artisan_id: ArtisanId,
}

impl CustomerProfile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.wishlist.contains(product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_and_wishlist() {
        let profile = CustomerProfile {
            id: CustomerId::new("c-1"),
            name: "Ananya Iyer".to_string(),
            email: "ananya@example.com".to_string(),
            phone: String::new(),
            member_since: "2023-06-12".to_string(),
            wishlist: vec![ProductId::new("p-1")],
        };
        assert_eq!(profile.first_name(), "Ananya");
        assert!(profile.is_wishlisted(&ProductId::new("p-1")));
        assert!(!profile.is_wishlisted(&ProductId::new("p-2")));
    }
}
